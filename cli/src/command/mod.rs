// Host Registry
// Copyright (C) 2019 Monadic GmbH <radicle@monadic.xyz>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Define the commands supported by the CLI.

use crate::{CommandError, CommandT, LedgerOptions, TxOptions};
use host_registry_client::*;

use structopt::StructOpt;

pub mod account;
pub mod host;
pub mod key_pair;
pub mod other;

/// Sign and submit `message` with the options of the command and wait until it is applied.
async fn submit<Message_: Message>(
    ledger_options: &LedgerOptions,
    tx_options: &TxOptions,
    message: Message_,
) -> Result<Message_::Output, CommandError> {
    let client = ledger_options.client()?;
    let tx_included = client
        .sign_and_submit_message(&tx_options.author, message, tx_options.value)
        .await?
        .await?;
    transaction_applied_ok(tx_included)
}

/// Check that a transaction has been applied succesfully.
///
/// If the transaction failed, that is if `tx_included.result` is `Err`, then we return a
/// [CommandError]. Otherwise we return the `Ok` value of the transaction result.
fn transaction_applied_ok<Message_: Message>(
    tx_included: TransactionIncluded<Message_>,
) -> Result<Message_::Output, CommandError> {
    let tx_hash = tx_included.tx_hash;
    tx_included
        .result
        .map_err(|error| CommandError::FailedTransaction {
            tx_hash,
            error,
        })
}
