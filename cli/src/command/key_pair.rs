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

//! Define the commands supported by the CLI related to key-pairs.

use super::*;
use crate::key_pair_storage;

/// Key-pair related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    /// Generate a random key-pair identified by `name` and
    /// store it on disk. Fail if there is already a key-pair
    /// with the given `name`.
    Generate(Generate),
    /// List all the local key pairs.
    List(List),
    /// Show the address and the balance of a local key pair.
    Show(Show),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Generate(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
pub struct Generate {
    /// The name that uniquely identifies the key-pair locally.
    name: String,
}

#[async_trait::async_trait]
impl CommandT for Generate {
    async fn run(self) -> Result<(), CommandError> {
        let (key_pair, seed) = KeyPair::generate();
        key_pair_storage::add(self.name.clone(), key_pair_storage::KeyPairData { seed })?;
        println!("✓ Key-pair '{}' generated", self.name);
        println!("ⓘ address: {}", key_pair.public());
        println!("ⓘ use it with --author {}", self.name);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
pub struct List {}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(self) -> Result<(), CommandError> {
        let key_pairs = key_pair_storage::list()?;
        println!("KEY PAIRS ({})", key_pairs.len());
        for (name, data) in key_pairs {
            println!("{}  {}", KeyPair::from_seed(&data.seed).public(), name);
        }
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
pub struct Show {
    /// The name of the key-pair.
    name: String,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(self) -> Result<(), CommandError> {
        let data = key_pair_storage::get(&self.name)?;
        let address = KeyPair::from_seed(&data.seed).public();
        let client = self.ledger_options.client()?;
        println!("address: {}", address);
        println!("balance: {}", client.free_balance(&address).await?);
        println!("nonce: {}", client.account_nonce(&address).await?);
        Ok(())
    }
}
