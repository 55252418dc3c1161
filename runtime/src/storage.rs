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

//! Raw key-value storage the ledger state is kept in.
//!
//! Every operation of the runtime receives the storage explicitly. There is no ambient state.

use std::collections::{BTreeMap, BTreeSet};

use parity_scale_codec::{Decode, Encode};

/// Raw key-value storage with ordered prefix iteration.
pub trait Storage {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn put(&mut self, key: Vec<u8>, value: Vec<u8>);

    /// Delete `key`. Deleting an absent key is a no-op.
    fn kill(&mut self, key: &[u8]);

    /// All keys starting with `prefix` in ascending order.
    fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>>;
}

/// In-memory [Storage].
///
/// Cloning the storage takes a snapshot of the complete ledger state.
#[derive(Decode, Encode, Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryStorage {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.entries.insert(key, value);
    }

    fn kill(&mut self, key: &[u8]) {
        self.entries.remove(key);
    }

    fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>> {
        self.entries
            .range(prefix.to_vec()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(prefix))
            .cloned()
            .collect()
    }
}

/// Buffers changes on top of another [Storage].
///
/// Reads see the buffered changes. Nothing reaches the underlying storage until
/// [Overlay::commit] is called. Dropping the overlay discards all changes.
pub struct Overlay<'a, S: Storage + ?Sized> {
    backend: &'a mut S,
    /// `None` marks a deleted key.
    changes: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a, S: Storage + ?Sized> Overlay<'a, S> {
    pub fn new(backend: &'a mut S) -> Self {
        Overlay {
            backend,
            changes: BTreeMap::new(),
        }
    }

    /// Write all buffered changes to the underlying storage.
    pub fn commit(self) {
        for (key, change) in self.changes {
            match change {
                Some(value) => self.backend.put(key, value),
                None => self.backend.kill(&key),
            }
        }
    }
}

impl<'a, S: Storage + ?Sized> Storage for Overlay<'a, S> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.changes.get(key) {
            Some(change) => change.clone(),
            None => self.backend.get(key),
        }
    }

    fn put(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.changes.insert(key, Some(value));
    }

    fn kill(&mut self, key: &[u8]) {
        self.changes.insert(key.to_vec(), None);
    }

    fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>> {
        let mut keys: BTreeSet<Vec<u8>> = self.backend.keys_with_prefix(prefix).into_iter().collect();
        for (key, change) in self.changes.range(prefix.to_vec()..) {
            if !key.starts_with(prefix) {
                break;
            }
            match change {
                Some(_) => keys.insert(key.clone()),
                None => keys.remove(key),
            };
        }
        keys.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_with_prefix() {
        let mut storage = MemoryStorage::new();
        storage.put(b"a:1".to_vec(), vec![1]);
        storage.put(b"a:2".to_vec(), vec![2]);
        storage.put(b"b:1".to_vec(), vec![3]);

        assert_eq!(
            storage.keys_with_prefix(b"a:"),
            vec![b"a:1".to_vec(), b"a:2".to_vec()]
        );
        assert!(storage.keys_with_prefix(b"c:").is_empty());
    }

    #[test]
    fn overlay_commit() {
        let mut storage = MemoryStorage::new();
        storage.put(b"a:1".to_vec(), vec![1]);
        storage.put(b"a:2".to_vec(), vec![2]);

        let mut overlay = Overlay::new(&mut storage);
        overlay.put(b"a:3".to_vec(), vec![3]);
        overlay.kill(b"a:1");
        assert_eq!(overlay.get(b"a:1"), None);
        assert_eq!(overlay.get(b"a:2"), Some(vec![2]));
        assert_eq!(
            overlay.keys_with_prefix(b"a:"),
            vec![b"a:2".to_vec(), b"a:3".to_vec()]
        );
        overlay.commit();

        assert_eq!(storage.get(b"a:1"), None);
        assert_eq!(storage.get(b"a:3"), Some(vec![3]));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn overlay_drop_discards_changes() {
        let mut storage = MemoryStorage::new();
        storage.put(b"a".to_vec(), vec![1]);
        let before = storage.clone();

        {
            let mut overlay = Overlay::new(&mut storage);
            overlay.put(b"a".to_vec(), vec![2]);
            overlay.put(b"b".to_vec(), vec![3]);
        }

        assert_eq!(storage, before);
    }
}
