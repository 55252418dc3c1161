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

//! Provide an abstract trait for the registry client and the necessary types.
//!
//! The [ClientT] trait defines methods to submit transactions to the registry ledger as well as
//! methods to get the ledger state.
use futures::future::BoxFuture;

pub use host_registry_core::*;

pub use host_registry_runtime::{
    Event, GenesisConfig, InvalidTransaction, RegistryEvent, SystemEvent,
};

pub use crate::error::Error;
pub use crate::message::Message;
pub use crate::transaction::{Transaction, TransactionExtra};

use state::Owned as _;

/// The hash of a transaction. Uniquely identifies a transaction.
#[doc(inline)]
pub type TxHash = Hash;

/// Result of a transaction being applied to the ledger.
///
/// Returned after submitting a transaction.
#[derive(Clone, Debug)]
pub struct TransactionIncluded<Message_: Message> {
    pub tx_hash: TxHash,
    /// Events emitted by this transaction
    pub events: Vec<Event>,
    /// The result of the runtime message.
    ///
    /// See [Message::result_from_events].
    pub result: Result<Message_::Output, RegistryError>,
}

/// Return type for all [ClientT] methods.
pub type Response<T, Error> = BoxFuture<'static, Result<T, Error>>;

/// An Account as stored in the ledger.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Account {
    pub id: Address,
    pub owner: Address,
    pub data: state::StringMap,
    /// Hosts the account is linked to.
    pub registered: Vec<Address>,
    /// Hosts the account unlinked itself from.
    pub removed: Vec<Address>,
}

impl Account {
    pub fn new(id: Address, account: state::Accounts1Data) -> Self {
        Account {
            id,
            owner: account.owner(),
            registered: account.registered().registered().copied().collect(),
            removed: account.removed().registered().copied().collect(),
            data: account.data().clone(),
        }
    }
}

/// A Host as stored in the ledger.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Host {
    pub id: Address,
    pub owner: Address,
    pub fee: Balance,
    /// Accounts linked to the host.
    pub registered: Vec<Address>,
    /// Accounts the host unlinked.
    pub removed: Vec<Address>,
}

impl Host {
    pub fn new(id: Address, host: state::Hosts1Data) -> Self {
        Host {
            id,
            owner: host.owner(),
            fee: host.fee(),
            registered: host.registered().registered().copied().collect(),
            removed: host.removed().registered().copied().collect(),
        }
    }
}

/// Trait for ledger clients sending transactions and looking up state.
#[async_trait::async_trait]
pub trait ClientT {
    /// Submit a signed transaction.
    ///
    /// ```no_run
    /// # use host_registry_client::*;
    /// # async fn example<M: Message>(client: Client, tx: Transaction<M>) -> Result<(), Error> {
    ///
    /// // Submit the transaction to the ledger.
    /// //
    /// // This call fails if the transaction is invalid, for example because it was signed with
    /// // an outdated nonce.
    /// let tx_included_fut = client.submit_transaction(tx).await?;
    ///
    /// // We can now wait for the transaction to be applied.
    /// //
    /// // This will not error if the message failed while applying. See
    /// // TransactionIncluded::result for that.
    /// let tx_included = tx_included_fut.await?;
    ///
    /// Ok(())
    /// # }
    /// ```
    ///
    /// See the `getting_started` example for more details.
    async fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error>;

    /// Sign and submit a ledger message as a transaction.
    ///
    /// Same as [ClientT::submit_transaction] but takes care of signing the message. `value` is
    /// the payment attached to the message.
    async fn sign_and_submit_message<Message_: Message>(
        &self,
        author: &KeyPair,
        message: Message_,
        value: Balance,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error>;

    /// Fetch the nonce for the given address from the ledger state
    async fn account_nonce(&self, address: &Address) -> Result<Nonce, Error>;

    /// Return the genesis hash of the ledger we are communicating with.
    fn genesis_hash(&self) -> Hash;

    async fn free_balance(&self, address: &Address) -> Result<Balance, Error>;

    async fn get_account(&self, account_id: Address) -> Result<Option<Account>, Error>;

    async fn list_accounts(&self) -> Result<Vec<Address>, Error>;

    async fn get_host(&self, host_id: Address) -> Result<Option<Host>, Error>;

    async fn list_hosts(&self) -> Result<Vec<Address>, Error>;

    /// Read the value stored under `key` in the data of an account.
    ///
    /// Returns `None` if the account or the key does not exist.
    async fn get_account_data(
        &self,
        account_id: Address,
        key: &str,
    ) -> Result<Option<String>, Error>;
}
