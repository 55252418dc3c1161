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

//! Typed storage items of the ledger state.
//!
//! Keys and values are SCALE encoded. Map keys are stored below a fixed per-map prefix so that
//! all entries of a map can be listed.

use parity_scale_codec::{Decode, Encode};

use host_registry_core::state::{Accounts1Data, Hosts1Data, Readmission};
use host_registry_core::{Address, Balance, Hash, Nonce};

use crate::storage::Storage;

/// A typed map stored below [StorageMap::PREFIX].
pub trait StorageMap {
    type Key: Encode + Decode;
    type Value: Encode + Decode;

    const PREFIX: &'static [u8];

    /// The raw storage key of `key`.
    fn final_key(key: &Self::Key) -> Vec<u8> {
        let mut final_key = Self::PREFIX.to_vec();
        key.encode_to(&mut final_key);
        final_key
    }

    /// Read the value for `key`.
    ///
    /// A value that cannot be decoded is logged and treated as absent.
    fn get<S: Storage + ?Sized>(storage: &S, key: &Self::Key) -> Option<Self::Value> {
        let raw = storage.get(&Self::final_key(key))?;
        match Self::Value::decode(&mut &raw[..]) {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!(
                    "Failed to decode value in {}: {}",
                    String::from_utf8_lossy(Self::PREFIX),
                    err
                );
                None
            }
        }
    }

    fn insert<S: Storage + ?Sized>(storage: &mut S, key: &Self::Key, value: &Self::Value) {
        storage.put(Self::final_key(key), value.encode())
    }

    fn remove<S: Storage + ?Sized>(storage: &mut S, key: &Self::Key) {
        storage.kill(&Self::final_key(key))
    }

    fn contains_key<S: Storage + ?Sized>(storage: &S, key: &Self::Key) -> bool {
        storage.get(&Self::final_key(key)).is_some()
    }

    /// All keys of the map in ascending order of their encoding.
    fn keys<S: Storage + ?Sized>(storage: &S) -> Vec<Self::Key> {
        storage
            .keys_with_prefix(Self::PREFIX)
            .into_iter()
            .filter_map(|final_key| Self::decode_key(&final_key))
            .collect()
    }

    /// Inverse of [StorageMap::final_key]. Returns `None` if `final_key` does not belong to the
    /// map.
    fn decode_key(final_key: &[u8]) -> Option<Self::Key> {
        let mut encoded_key = final_key.strip_prefix(Self::PREFIX)?;
        Self::Key::decode(&mut encoded_key).ok()
    }
}

/// A single typed value stored at [StorageValue::KEY].
pub trait StorageValue {
    type Value: Encode + Decode;

    const KEY: &'static [u8];

    fn get<S: Storage + ?Sized>(storage: &S) -> Option<Self::Value> {
        let raw = storage.get(Self::KEY)?;
        Self::Value::decode(&mut &raw[..]).ok()
    }

    fn put<S: Storage + ?Sized>(storage: &mut S, value: &Self::Value) {
        storage.put(Self::KEY.to_vec(), value.encode())
    }
}

pub struct Accounts1;

impl StorageMap for Accounts1 {
    type Key = Address;
    type Value = Accounts1Data;
    const PREFIX: &'static [u8] = b"registry:accounts1:";
}

pub struct Hosts1;

impl StorageMap for Hosts1 {
    type Key = Address;
    type Value = Hosts1Data;
    const PREFIX: &'static [u8] = b"registry:hosts1:";
}

/// Free balance of every address holding funds.
pub struct Balances;

impl StorageMap for Balances {
    type Key = Address;
    type Value = Balance;
    const PREFIX: &'static [u8] = b"system:balances:";
}

/// Nonce of the next transaction of an author. Absent means zero.
pub struct Nonces;

impl StorageMap for Nonces {
    type Key = Address;
    type Value = Nonce;
    const PREFIX: &'static [u8] = b"system:nonces:";
}

pub struct GenesisHash;

impl StorageValue for GenesisHash {
    type Value = Hash;
    const KEY: &'static [u8] = b"system:genesis_hash";
}

/// [Readmission] policy used whenever an account and a host are linked.
pub struct ReadmissionPolicy;

impl StorageValue for ReadmissionPolicy {
    type Value = Readmission;
    const KEY: &'static [u8] = b"registry:readmission";
}
