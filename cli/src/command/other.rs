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

//! Define the commands supported by the CLI that
//! are not related to any specific domain.

use super::*;

/// Other commands, not related to any specific domain.
#[derive(StructOpt, Clone)]
pub enum Command {
    /// Show the address of a development key pair derived from `seed`, for example `Alice`.
    Address(ShowAddress),
    /// Show the free balance of an address.
    Balance(ShowBalance),
    /// Transfer funds from the author to a recipient.
    Transfer(Transfer),
    /// Show the genesis hash of the ledger.
    GenesisHash(ShowGenesisHash),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Address(cmd) => cmd.run().await,
            Command::Balance(cmd) => cmd.run().await,
            Command::Transfer(cmd) => cmd.run().await,
            Command::GenesisHash(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
pub struct ShowAddress {
    seed: String,
}

#[async_trait::async_trait]
impl CommandT for ShowAddress {
    async fn run(self) -> Result<(), CommandError> {
        let key_pair = KeyPair::from_string(&format!("//{}", self.seed));
        println!("address: {}", key_pair.public());
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
pub struct ShowBalance {
    /// Hex encoded address.
    address: Address,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for ShowBalance {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let balance = client.free_balance(&self.address).await?;
        println!("{}", balance);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
pub struct Transfer {
    /// Recipient address, hex encoded.
    recipient: Address,

    /// The amount to transfer.
    funds: Balance,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for Transfer {
    async fn run(self) -> Result<(), CommandError> {
        println!("Transferring funds...");
        submit(
            &self.ledger_options,
            &self.tx_options,
            message::Transfer {
                recipient: self.recipient,
                balance: self.funds,
            },
        )
        .await?;
        println!("✓ Transferred {} to {}", self.funds, self.recipient);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
pub struct ShowGenesisHash {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for ShowGenesisHash {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        println!("Genesis hash: 0x{}", hex::encode(client.genesis_hash()));
        Ok(())
    }
}
