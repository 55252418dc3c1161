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

//! Define trait for client backends and provide the in-memory and file backed implementations
use futures::future::BoxFuture;

pub use host_registry_runtime::{Hash, UncheckedExtrinsic};

use crate::interface::*;

mod emulator;
mod local_ledger;

pub use emulator::{Emulator, EmulatorControl, SnapshotId};
pub use local_ledger::LocalLedger;

/// Indicator that a transaction has been applied to the ledger.
///
/// Obtained after a transaction has been submitted and processed.
pub struct TransactionIncluded {
    pub tx_hash: TxHash,
    /// Events emitted by this transaction
    pub events: Vec<Event>,
}

/// Backend for talking to the ledger.
///
/// The interface is low-level and mostly agnostic of the runtime code. Event information from the
/// runtime marks an exception.
#[async_trait::async_trait]
pub trait Backend {
    /// Submit a signed transaction to the ledger.
    ///
    /// Fails if the transaction is invalid. The returned future resolves when the transaction has
    /// been applied.
    async fn submit(
        &self,
        xt: UncheckedExtrinsic,
    ) -> Result<BoxFuture<'static, Result<TransactionIncluded, Error>>, Error>;

    /// Fetch a value from the ledger state storage.
    async fn fetch(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Error>;

    /// Fetch all storage keys starting with `prefix`.
    async fn fetch_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, Error>;

    /// Get the genesis hash of the ledger. This must be obtained on backend creation.
    fn get_genesis_hash(&self) -> Hash;
}
