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

//! Provides [Emulator] backend to run the registry ledger in memory.

use futures::future::BoxFuture;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use host_registry_runtime::{executive, MemoryStorage, Storage as _};

use crate::backend;
use crate::interface::*;

/// [backend::Backend] implementation using native runtime code and in memory state through
/// [MemoryStorage] to emulate the ledger.
///
/// # Differences with a persistent ledger
///
/// * The state is lost when the emulator is dropped.
///
/// * The state can be snapshotted and reverted with [EmulatorControl].
#[derive(Clone)]
pub struct Emulator {
    genesis_hash: Hash,
    state: Arc<Mutex<EmulatorState>>,
}

/// Mutable state of the emulator.
struct EmulatorState {
    storage: MemoryStorage,
    /// Snapshots ordered by id.
    snapshots: Vec<(u64, MemoryStorage)>,
    /// Id of the next snapshot. Ids are never reused.
    next_snapshot_id: u64,
}

impl Emulator {
    /// Create an emulator with the [GenesisConfig::dev] genesis state.
    pub fn new() -> Self {
        Self::with_genesis(&GenesisConfig::dev())
    }

    pub fn with_genesis(genesis_config: &GenesisConfig) -> Self {
        Emulator {
            genesis_hash: genesis_config.genesis_hash(),
            state: Arc::new(Mutex::new(EmulatorState {
                storage: genesis_config.build_storage(),
                snapshots: Vec::new(),
                next_snapshot_id: 0,
            })),
        }
    }

    /// Returns a handle to snapshot and revert the state of this emulator.
    pub fn control(&self) -> EmulatorControl {
        EmulatorControl {
            state: self.state.clone(),
        }
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(state: &Mutex<EmulatorState>) -> MutexGuard<EmulatorState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait::async_trait]
impl backend::Backend for Emulator {
    async fn submit(
        &self,
        extrinsic: backend::UncheckedExtrinsic,
    ) -> Result<BoxFuture<'static, Result<backend::TransactionIncluded, Error>>, Error> {
        let tx_hash = extrinsic.hash();
        let events = {
            let mut state = lock(&self.state);
            executive::apply_extrinsic(&mut state.storage, extrinsic)?
        };
        log::debug!("emulator applied transaction {}", hex::encode(tx_hash));

        Ok(Box::pin(futures::future::ready(Ok(
            backend::TransactionIncluded { tx_hash, events },
        ))))
    }

    async fn fetch(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Error> {
        Ok(lock(&self.state).storage.get(key))
    }

    async fn fetch_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, Error> {
        Ok(lock(&self.state).storage.keys_with_prefix(prefix))
    }

    fn get_genesis_hash(&self) -> Hash {
        self.genesis_hash
    }
}

/// Identifies a snapshot taken with [EmulatorControl::snapshot].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct SnapshotId(u64);

/// Snapshot and restore the ledger state of an [Emulator].
///
/// Tests use this to isolate scenarios that share one emulator.
#[derive(Clone)]
pub struct EmulatorControl {
    state: Arc<Mutex<EmulatorState>>,
}

impl EmulatorControl {
    /// Record the current ledger state.
    pub fn snapshot(&self) -> SnapshotId {
        let mut state = lock(&self.state);
        let id = state.next_snapshot_id;
        state.next_snapshot_id += 1;
        let snapshot = state.storage.clone();
        state.snapshots.push((id, snapshot));
        SnapshotId(id)
    }

    /// Restore the ledger state recorded by `snapshot_id`.
    ///
    /// The snapshot and all snapshots taken after it are discarded. Returns `false` if the
    /// snapshot does not exist anymore. A discarded id stays invalid for good.
    pub fn revert(&self, snapshot_id: SnapshotId) -> bool {
        let mut state = lock(&self.state);
        let position = match state
            .snapshots
            .iter()
            .position(|(id, _)| *id == snapshot_id.0)
        {
            Some(position) => position,
            None => return false,
        };
        let mut discarded = state.snapshots.split_off(position);
        let (_, storage) = discarded.swap_remove(0);
        state.storage = storage;
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn snapshot_ids_are_not_reused() {
        let emulator = Emulator::new();
        let control = emulator.control();

        let first = control.snapshot();
        assert!(control.revert(first));
        let second = control.snapshot();
        assert_ne!(first, second);
        assert!(!control.revert(first));
        assert!(control.revert(second));
    }
}
