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

//! Provides [Transaction] and [TransactionExtra].
use core::marker::PhantomData;

use crate::{message::Message, TxHash};
use host_registry_core::{Address, Balance, Hash, KeyPair, Nonce};
use host_registry_runtime::{SignedPayload, UncheckedExtrinsic};

#[derive(Clone, Debug)]
/// Transaction the can be submitted to the ledger.
///
/// A transaction includes
/// * the author
/// * the runtime message
/// * extra data like the genesis hash, the author nonce and the attached value
/// * a valid signature
///
/// The transaction type is generic over the runtime message parameter which must implement [Message].
///
/// A transaction can be created with [Transaction::new_signed]. The necessary transaction data
/// must be obtained from the client with [crate::ClientT::account_nonce] and [crate::ClientT::genesis_hash].
pub struct Transaction<Message_: Message> {
    _phantom_data: PhantomData<Message_>,
    pub(crate) extrinsic: UncheckedExtrinsic,
}

impl<Message_: Message> Transaction<Message_> {
    /// Create and sign a transaction for the given message.
    pub fn new_signed(
        signer: &KeyPair,
        message: Message_,
        transaction_extra: TransactionExtra,
    ) -> Self {
        let payload = SignedPayload {
            call: message.into_runtime_call(),
            nonce: transaction_extra.nonce,
            value: transaction_extra.value,
            genesis_hash: transaction_extra.genesis_hash,
        };
        Transaction {
            _phantom_data: PhantomData,
            extrinsic: UncheckedExtrinsic::new_signed(signer, payload),
        }
    }

    pub fn hash(&self) -> TxHash {
        self.extrinsic.hash()
    }

    pub fn author(&self) -> Address {
        self.extrinsic.author
    }
}

#[derive(Copy, Clone, Debug)]
/// The data that is required from the ledger state to create a valid transaction.
pub struct TransactionExtra {
    /// The nonce of the account that is the transaction author.
    pub nonce: Nonce,
    pub genesis_hash: Hash,
    /// Payment attached to the message. Must be zero unless the message is payable.
    pub value: Balance,
}
