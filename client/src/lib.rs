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

//! Clients for the Host Registry ledger.
//!
//! The [Client] implements [ClientT] on top of a [backend::Backend]. Create an in-memory client
//! with [Client::new_emulator] or open a file backed ledger with [Client::open_local_ledger].
//!
//! ```no_run
//! # use host_registry_client::*;
//! # async fn example() -> Result<(), Error> {
//! let (client, _control) = Client::new_emulator();
//! let alice = KeyPair::from_string("//Alice");
//!
//! let account_id = client
//!     .sign_and_submit_message(&alice, message::CreateAccount { owner: alice.public() }, 0)
//!     .await?
//!     .await?
//!     .result
//!     .unwrap();
//! let account = client.get_account(account_id).await?;
//! # Ok(())
//! # }
//! ```
use parity_scale_codec::Decode;
use std::path::Path;
use std::sync::Arc;

use host_registry_runtime::store::{self, StorageMap};

mod backend;
mod error;
mod interface;
pub mod message;
mod transaction;

pub use crate::interface::*;

pub use backend::{EmulatorControl, SnapshotId};

/// Client to interact with the registry ledger.
///
/// Implements [ClientT] for interacting with the ledger.
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn backend::Backend + Sync + Send>,
}

impl Client {
    /// Create a new client that emulates the registry ledger in memory. See
    /// [backend::Emulator] for details.
    ///
    /// The genesis state endows `//Alice` with funds. Returns a control handle to snapshot and
    /// revert the ledger state.
    pub fn new_emulator() -> (Self, EmulatorControl) {
        Self::new_emulator_with_genesis(&GenesisConfig::dev())
    }

    /// Same as [Client::new_emulator] but starts from `genesis_config`.
    pub fn new_emulator_with_genesis(genesis_config: &GenesisConfig) -> (Self, EmulatorControl) {
        let emulator = backend::Emulator::with_genesis(genesis_config);
        let control = emulator.control();
        (Self::new(emulator), control)
    }

    /// Open the ledger stored in the file at `path`, creating it from `genesis_config` if it does
    /// not exist.
    pub fn open_local_ledger(
        path: impl AsRef<Path>,
        genesis_config: &GenesisConfig,
    ) -> Result<Self, Error> {
        let ledger = backend::LocalLedger::open(path, genesis_config)?;
        Ok(Self::new(ledger))
    }

    /// Create a new client from a [backend::Backend] implementation.
    fn new(backend: impl backend::Backend + Sync + Send + 'static) -> Self {
        Client {
            backend: Arc::new(backend),
        }
    }

    /// Fetch a value from a storage map in the ledger state.
    async fn fetch_map_value<Map: StorageMap>(
        &self,
        key: &Map::Key,
    ) -> Result<Option<Map::Value>, Error> {
        let final_key = Map::final_key(key);
        let maybe_data = self.backend.fetch(&final_key).await?;
        let value = match maybe_data {
            Some(data) => Some(Map::Value::decode(&mut &data[..])?),
            None => None,
        };
        Ok(value)
    }

    /// Fetch all keys of a storage map in the ledger state.
    async fn fetch_map_keys<Map: StorageMap>(&self) -> Result<Vec<Map::Key>, Error> {
        let keys = self.backend.fetch_keys(Map::PREFIX).await?;
        keys.iter()
            .map(|final_key| {
                Map::decode_key(final_key).ok_or_else(|| {
                    Error::from(format!("invalid storage key {}", hex::encode(final_key)))
                })
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl ClientT for Client {
    async fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error> {
        let tx_hash = transaction.hash();
        log::debug!("submitting transaction {}", hex::encode(tx_hash));
        let tx_included_future = self.backend.submit(transaction.extrinsic).await?;
        Ok(Box::pin(async move {
            let tx_included = tx_included_future.await?;
            let events = tx_included.events;
            let tx_hash = tx_included.tx_hash;
            let result = Message_::result_from_events(events.clone())
                .map_err(|error| Error::EventExtraction { error, tx_hash })?;
            Ok(TransactionIncluded {
                tx_hash,
                events,
                result,
            })
        }))
    }

    async fn sign_and_submit_message<Message_: Message>(
        &self,
        author: &KeyPair,
        message: Message_,
        value: Balance,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error> {
        let genesis_hash = self.genesis_hash();
        let nonce = self.account_nonce(&author.public()).await?;
        let transaction = Transaction::new_signed(
            author,
            message,
            TransactionExtra {
                nonce,
                genesis_hash,
                value,
            },
        );
        self.submit_transaction(transaction).await
    }

    async fn account_nonce(&self, address: &Address) -> Result<Nonce, Error> {
        let nonce = self.fetch_map_value::<store::Nonces>(address).await?;
        Ok(nonce.unwrap_or(0))
    }

    fn genesis_hash(&self) -> Hash {
        self.backend.get_genesis_hash()
    }

    async fn free_balance(&self, address: &Address) -> Result<Balance, Error> {
        let balance = self.fetch_map_value::<store::Balances>(address).await?;
        Ok(balance.unwrap_or(0))
    }

    async fn get_account(&self, account_id: Address) -> Result<Option<Account>, Error> {
        let account = self.fetch_map_value::<store::Accounts1>(&account_id).await?;
        Ok(account.map(|account| Account::new(account_id, account)))
    }

    async fn list_accounts(&self) -> Result<Vec<Address>, Error> {
        self.fetch_map_keys::<store::Accounts1>().await
    }

    async fn get_host(&self, host_id: Address) -> Result<Option<Host>, Error> {
        let host = self.fetch_map_value::<store::Hosts1>(&host_id).await?;
        Ok(host.map(|host| Host::new(host_id, host)))
    }

    async fn list_hosts(&self) -> Result<Vec<Address>, Error> {
        self.fetch_map_keys::<store::Hosts1>().await
    }

    async fn get_account_data(
        &self,
        account_id: Address,
        key: &str,
    ) -> Result<Option<String>, Error> {
        let account = self.fetch_map_value::<store::Accounts1>(&account_id).await?;
        Ok(account.and_then(|account| account.data().get(key).map(String::from)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[async_std::test]
    async fn emulator_genesis() {
        let (client, _) = Client::new_emulator();
        let alice = KeyPair::from_string("//Alice");
        let balance = client.free_balance(&alice.public()).await.unwrap();
        assert_eq!(balance, host_registry_runtime::genesis::DEV_ENDOWMENT);
        assert_eq!(client.account_nonce(&alice.public()).await.unwrap(), 0);
        assert_eq!(client.genesis_hash(), GenesisConfig::dev().genesis_hash());
        assert!(client.list_accounts().await.unwrap().is_empty());
    }

    #[async_std::test]
    async fn invalid_transaction() {
        let (client, _) = Client::new_emulator();
        let alice = KeyPair::from_string("//Alice");
        let transaction = Transaction::new_signed(
            &alice,
            message::Transfer {
                recipient: alice.public(),
                balance: 1,
            },
            TransactionExtra {
                nonce: 0,
                genesis_hash: [0u8; 32],
                value: 0,
            },
        );

        let result = client.submit_transaction(transaction).await;
        assert!(matches!(
            result,
            Err(Error::InvalidTransaction(InvalidTransaction::BadGenesis))
        ));
        assert_eq!(client.account_nonce(&alice.public()).await.unwrap(), 0);
    }

    #[async_std::test]
    async fn local_ledger_persists_state() {
        let dir = std::env::temp_dir().join(format!("host-registry-{}", rand::random::<u64>()));
        let path = dir.join("ledger.scale");
        let alice = KeyPair::from_string("//Alice");
        let bob = KeyPair::from_string("//Bob").public();

        let client = Client::open_local_ledger(&path, &GenesisConfig::dev()).unwrap();
        let tx_included = client
            .sign_and_submit_message(
                &alice,
                message::Transfer {
                    recipient: bob,
                    balance: 1000,
                },
                0,
            )
            .await
            .unwrap()
            .await
            .unwrap();
        assert_eq!(tx_included.result, Ok(()));
        drop(client);

        let reopened = Client::open_local_ledger(&path, &GenesisConfig::default()).unwrap();
        assert_eq!(reopened.free_balance(&bob).await.unwrap(), 1000);
        assert_eq!(reopened.account_nonce(&alice.public()).await.unwrap(), 1);
        assert_eq!(reopened.genesis_hash(), GenesisConfig::dev().genesis_hash());

        std::fs::remove_dir_all(dir).unwrap();
    }
}
