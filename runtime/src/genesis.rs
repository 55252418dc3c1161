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

//! Initial ledger state.

use parity_scale_codec::{Decode, Encode};

use host_registry_core::state::Readmission;

use crate::storage::{MemoryStorage, Storage};
use crate::store::{self, StorageMap as _, StorageValue as _};
use crate::{Address, Balance, Hash, Hashing, KeyPair};

/// Balance of `//Alice` in the [GenesisConfig::dev] configuration.
pub const DEV_ENDOWMENT: Balance = 1 << 60;

#[derive(Decode, Encode, Clone, Debug, Default, Eq, PartialEq)]
pub struct GenesisConfig {
    /// Initial balances.
    pub balances: Vec<(Address, Balance)>,
    /// Policy for linking an account and a host that were unlinked before.
    pub readmission: Readmission,
}

impl GenesisConfig {
    /// Development configuration that endows `//Alice` with [DEV_ENDOWMENT].
    pub fn dev() -> Self {
        GenesisConfig {
            balances: vec![(KeyPair::from_string("//Alice").public(), DEV_ENDOWMENT)],
            readmission: Readmission::default(),
        }
    }

    /// Identifies the ledger. Transactions must be signed for this hash.
    pub fn genesis_hash(&self) -> Hash {
        Hashing::hash_of(self)
    }

    pub fn build_storage(&self) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        self.assimilate_storage(&mut storage);
        storage
    }

    /// Write the genesis state into `storage`.
    pub fn assimilate_storage<S: Storage + ?Sized>(&self, storage: &mut S) {
        for (address, balance) in &self.balances {
            store::Balances::insert(storage, address, balance);
        }
        store::ReadmissionPolicy::put(storage, &self.readmission);
        store::GenesisHash::put(storage, &self.genesis_hash());
        log::debug!(
            "built genesis state with {} endowed addresses",
            self.balances.len()
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fees;

    #[test]
    fn dev_genesis() {
        let config = GenesisConfig::dev();
        let storage = config.build_storage();
        let alice = KeyPair::from_string("//Alice").public();

        assert_eq!(fees::free_balance(&storage, &alice), DEV_ENDOWMENT);
        assert_eq!(
            store::GenesisHash::get(&storage),
            Some(config.genesis_hash())
        );
        assert_eq!(
            store::ReadmissionPolicy::get(&storage),
            Some(Readmission::ClearRemoved)
        );
    }

    #[test]
    fn readmission_changes_genesis_hash() {
        let clear = GenesisConfig::dev();
        let keep = GenesisConfig {
            readmission: Readmission::KeepRemoved,
            ..GenesisConfig::dev()
        };
        assert_ne!(clear.genesis_hash(), keep.genesis_hash());
    }
}
