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

//! Provides the file backed [LocalLedger] backend.

use futures::future::BoxFuture;
use parity_scale_codec::{Decode, Encode};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use host_registry_runtime::store::{self, StorageValue as _};
use host_registry_runtime::{executive, MemoryStorage, Storage as _};

use crate::backend;
use crate::interface::*;

/// [backend::Backend] that keeps the ledger state in a file.
///
/// The complete state is SCALE encoded and written to the file after every applied transaction.
/// The ledger is meant for a single process at a time.
pub struct LocalLedger {
    path: PathBuf,
    genesis_hash: Hash,
    storage: Mutex<MemoryStorage>,
}

impl LocalLedger {
    /// Open the ledger stored at `path`.
    ///
    /// If the file does not exist a new ledger is created from `genesis_config`. Otherwise the
    /// genesis state stored in the file is used and `genesis_config` is ignored.
    pub fn open(path: impl AsRef<Path>, genesis_config: &GenesisConfig) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let storage = if path.exists() {
            let bytes = fs::read(&path)?;
            let storage = MemoryStorage::decode(&mut &bytes[..])?;
            log::debug!("opened ledger at {}", path.display());
            storage
        } else {
            let storage = genesis_config.build_storage();
            write_storage(&path, &storage)?;
            log::info!("created new ledger at {}", path.display());
            storage
        };
        let genesis_hash = store::GenesisHash::get(&storage)
            .ok_or_else(|| Error::from(format!("no genesis hash in {}", path.display())))?;

        Ok(LocalLedger {
            path,
            genesis_hash,
            storage: Mutex::new(storage),
        })
    }

    fn lock(&self) -> MutexGuard<MemoryStorage> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Write `storage` to a temporary file next to `path` and move it into place.
fn write_storage(path: &Path, storage: &MemoryStorage) -> Result<(), Error> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, storage.encode())?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[async_trait::async_trait]
impl backend::Backend for LocalLedger {
    async fn submit(
        &self,
        extrinsic: backend::UncheckedExtrinsic,
    ) -> Result<BoxFuture<'static, Result<backend::TransactionIncluded, Error>>, Error> {
        let tx_hash = extrinsic.hash();
        let events = {
            let mut storage = self.lock();
            let mut next = storage.clone();
            let events = executive::apply_extrinsic(&mut next, extrinsic)?;
            write_storage(&self.path, &next)?;
            *storage = next;
            events
        };
        log::debug!("ledger applied transaction {}", hex::encode(tx_hash));

        Ok(Box::pin(futures::future::ready(Ok(
            backend::TransactionIncluded { tx_hash, events },
        ))))
    }

    async fn fetch(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.lock().get(key))
    }

    async fn fetch_keys(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, Error> {
        Ok(self.lock().keys_with_prefix(prefix))
    }

    fn get_genesis_hash(&self) -> Hash {
        self.genesis_hash
    }
}
