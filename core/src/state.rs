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

//! Type definitions for all entities stored in the ledger state.

use std::collections::{BTreeMap, BTreeSet};

use parity_scale_codec::{Decode, Encode};

use crate::{Address, Balance};

/// What [AddressSet::add] does with the removal mark of an address that is added again.
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Readmission {
    /// Adding an address clears its removal mark. `registered` and `removed` stay disjoint.
    ClearRemoved,
    /// The removal mark is kept as history. An address may be both registered and removed.
    KeepRemoved,
}

impl Default for Readmission {
    fn default() -> Self {
        Readmission::ClearRemoved
    }
}

/// Returned by [AddressSet::remove] when the address is not in the registered set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotRegistered(pub Address);

/// Membership of addresses for one owning entity.
///
/// Tracks the addresses currently `registered` and the addresses that were registered once and
/// explicitly `removed`. The set has no notion of authorization. Only the owning entity mutates
/// it, after it has checked the author of the transaction.
///
/// # Invariants
///
/// * `removed` only contains addresses that have been registered before.
/// * With [Readmission::ClearRemoved] an address is never in both sets.
#[derive(Decode, Encode, Clone, Debug, Default, Eq, PartialEq)]
pub struct AddressSet {
    registered: BTreeSet<Address>,
    removed: BTreeSet<Address>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `address` into the registered set.
    ///
    /// Adding an address that is already registered is a no-op. Returns `true` if the registered
    /// set grew.
    pub fn add(&mut self, address: Address, readmission: Readmission) -> bool {
        if readmission == Readmission::ClearRemoved {
            self.removed.remove(&address);
        }
        self.registered.insert(address)
    }

    /// Move `address` from the registered set to the removed set.
    pub fn remove(&mut self, address: &Address) -> Result<(), NotRegistered> {
        if !self.registered.remove(address) {
            return Err(NotRegistered(*address));
        }
        self.removed.insert(*address);
        Ok(())
    }

    /// Returns `true` if `address` is registered. Removed addresses are not present.
    pub fn has(&self, address: &Address) -> bool {
        self.registered.contains(address)
    }

    /// Returns `true` if `address` carries a removal mark.
    pub fn was_removed(&self, address: &Address) -> bool {
        self.removed.contains(address)
    }

    /// Drop `address` from both sets.
    pub fn forget(&mut self, address: &Address) {
        self.registered.remove(address);
        self.removed.remove(address);
    }

    pub fn registered(&self) -> impl Iterator<Item = &Address> {
        self.registered.iter()
    }

    pub fn removed(&self) -> impl Iterator<Item = &Address> {
        self.removed.iter()
    }

    /// Number of registered addresses.
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

/// Key-value store of strings owned by one entity.
#[derive(Decode, Encode, Clone, Debug, Default, Eq, PartialEq)]
pub struct StringMap {
    entries: BTreeMap<String, String>,
}

impl StringMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, overwriting any previous value.
    pub fn set(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Delete `key` and return the value stored right before the deletion.
    ///
    /// Removing an absent key is a no-op that returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entities with a single owner that is allowed to change the entity.
///
/// Ownership can only be transferred by the current owner. The registry runtime enforces that.
pub trait Owned: Sized {
    fn owner(&self) -> Address;

    /// Return the entity with `owner` as its new owner.
    fn with_owner(self, owner: Address) -> Self;
}

/// Accounts are stored as a map with the key derived from the account [Address].
///
/// # Relevant messages
///
/// * [crate::message::CreateAccount]
/// * [crate::message::ChangeAccountOwner]
/// * [crate::message::RegisterHost]
/// * [crate::message::RemoveHost]
/// * [crate::message::RegisterAccount]
/// * [crate::message::SetAccountData]
/// * [crate::message::RemoveAccountData]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Accounts1Data {
    V1(AccountV1),
}

impl Accounts1Data {
    /// Creates new instance in the most up to date version
    pub fn new(owner: Address) -> Self {
        Self::V1(AccountV1 {
            owner,
            data: StringMap::new(),
            registered: AddressSet::new(),
            removed: AddressSet::new(),
        })
    }

    /// Arbitrary metadata controlled by the owner.
    pub fn data(&self) -> &StringMap {
        match self {
            Self::V1(account) => &account.data,
        }
    }

    pub fn data_mut(&mut self) -> &mut StringMap {
        match self {
            Self::V1(account) => &mut account.data,
        }
    }

    /// Hosts this account is linked to.
    pub fn registered(&self) -> &AddressSet {
        match self {
            Self::V1(account) => &account.registered,
        }
    }

    /// Hosts this account unlinked itself from.
    pub fn removed(&self) -> &AddressSet {
        match self {
            Self::V1(account) => &account.removed,
        }
    }

    /// See [AccountV1::link_host].
    pub fn link_host(&mut self, host_id: Address, readmission: Readmission) -> bool {
        match self {
            Self::V1(account) => account.link_host(host_id, readmission),
        }
    }

    /// See [AccountV1::unlink_host].
    pub fn unlink_host(&mut self, host_id: &Address) -> Result<(), NotRegistered> {
        match self {
            Self::V1(account) => account.unlink_host(host_id),
        }
    }
}

impl Owned for Accounts1Data {
    fn owner(&self) -> Address {
        match self {
            Self::V1(account) => account.owner,
        }
    }

    fn with_owner(self, owner: Address) -> Self {
        match self {
            Self::V1(account) => Self::V1(AccountV1 { owner, ..account }),
        }
    }
}

/// # Invariants
///
/// * A host in `registered` is linked from the account side. The host keeps its own view in
///   [HostV1::registered] and both are only changed together by registration.
/// * A host in `removed` was unlinked by the account owner.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AccountV1 {
    pub owner: Address,
    pub data: StringMap,
    pub registered: AddressSet,
    pub removed: AddressSet,
}

impl AccountV1 {
    /// Add `host_id` to [AccountV1::registered].
    ///
    /// With [Readmission::ClearRemoved] a previous removal of the host is forgotten.
    /// Returns `true` if the account was not linked to the host before.
    pub fn link_host(&mut self, host_id: Address, readmission: Readmission) -> bool {
        if readmission == Readmission::ClearRemoved {
            self.removed.forget(&host_id);
        }
        self.registered.add(host_id, readmission)
    }

    /// Move `host_id` from [AccountV1::registered] to [AccountV1::removed].
    pub fn unlink_host(&mut self, host_id: &Address) -> Result<(), NotRegistered> {
        self.registered.remove(host_id)?;
        self.removed.add(*host_id, Readmission::ClearRemoved);
        Ok(())
    }
}

/// Hosts are stored as a map with the key derived from the host [Address].
///
/// # Relevant messages
///
/// * [crate::message::CreateHost]
/// * [crate::message::ChangeHostOwner]
/// * [crate::message::RegisterAccount]
/// * [crate::message::RemoveAccount]
/// * [crate::message::RegisterHost]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Hosts1Data {
    V1(HostV1),
}

impl Hosts1Data {
    /// Creates new instance in the most up to date version
    pub fn new(owner: Address, fee: Balance) -> Self {
        Self::V1(HostV1 {
            owner,
            fee,
            registered: AddressSet::new(),
            removed: AddressSet::new(),
        })
    }

    /// Minimum payment required to link an account to this host.
    pub fn fee(&self) -> Balance {
        match self {
            Self::V1(host) => host.fee,
        }
    }

    /// Accounts linked to this host.
    pub fn registered(&self) -> &AddressSet {
        match self {
            Self::V1(host) => &host.registered,
        }
    }

    /// Accounts the host owner unlinked.
    pub fn removed(&self) -> &AddressSet {
        match self {
            Self::V1(host) => &host.removed,
        }
    }

    /// See [HostV1::link_account].
    pub fn link_account(&mut self, account_id: Address, readmission: Readmission) -> bool {
        match self {
            Self::V1(host) => host.link_account(account_id, readmission),
        }
    }

    /// See [HostV1::unlink_account].
    pub fn unlink_account(&mut self, account_id: &Address) -> Result<(), NotRegistered> {
        match self {
            Self::V1(host) => host.unlink_account(account_id),
        }
    }
}

impl Owned for Hosts1Data {
    fn owner(&self) -> Address {
        match self {
            Self::V1(host) => host.owner,
        }
    }

    fn with_owner(self, owner: Address) -> Self {
        match self {
            Self::V1(host) => Self::V1(HostV1 { owner, ..host }),
        }
    }
}

/// # Invariants
///
/// * `fee` is immutable
/// * An account in `removed` was unlinked by the host owner.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct HostV1 {
    pub owner: Address,
    pub fee: Balance,
    pub registered: AddressSet,
    pub removed: AddressSet,
}

impl HostV1 {
    /// Add `account_id` to [HostV1::registered].
    ///
    /// Returns `true` if the host was not linked to the account before.
    pub fn link_account(&mut self, account_id: Address, readmission: Readmission) -> bool {
        if readmission == Readmission::ClearRemoved {
            self.removed.forget(&account_id);
        }
        self.registered.add(account_id, readmission)
    }

    /// Move `account_id` from [HostV1::registered] to [HostV1::removed].
    pub fn unlink_account(&mut self, account_id: &Address) -> Result<(), NotRegistered> {
        self.registered.remove(account_id)?;
        self.removed.add(*account_id, Readmission::ClearRemoved);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn address(byte: u8) -> Address {
        Address::from_raw([byte; 32])
    }

    #[test]
    fn address_set_add_is_idempotent() {
        let mut set = AddressSet::new();
        assert!(set.add(address(1), Readmission::ClearRemoved));
        assert!(!set.add(address(1), Readmission::ClearRemoved));
        assert_eq!(set.len(), 1);
        assert!(set.has(&address(1)));
        assert!(!set.has(&address(2)));
    }

    #[test]
    fn address_set_remove_moves_to_removed() {
        let mut set = AddressSet::new();
        set.add(address(1), Readmission::ClearRemoved);
        set.remove(&address(1)).unwrap();

        assert!(!set.has(&address(1)));
        assert!(set.was_removed(&address(1)));
        assert!(set.is_empty());
        assert_eq!(set.removed().collect::<Vec<_>>(), vec![&address(1)]);
    }

    #[test]
    fn address_set_remove_unregistered() {
        let mut set = AddressSet::new();
        assert_eq!(set.remove(&address(3)), Err(NotRegistered(address(3))));

        set.add(address(3), Readmission::ClearRemoved);
        set.remove(&address(3)).unwrap();
        // A removed address is not registered anymore.
        assert_eq!(set.remove(&address(3)), Err(NotRegistered(address(3))));
    }

    #[test]
    fn address_set_readmission_clears_removed() {
        let mut set = AddressSet::new();
        set.add(address(1), Readmission::ClearRemoved);
        set.remove(&address(1)).unwrap();
        set.add(address(1), Readmission::ClearRemoved);

        assert!(set.has(&address(1)));
        assert!(!set.was_removed(&address(1)));
    }

    #[test]
    fn address_set_readmission_keeps_removed() {
        let mut set = AddressSet::new();
        set.add(address(1), Readmission::KeepRemoved);
        set.remove(&address(1)).unwrap();
        set.add(address(1), Readmission::KeepRemoved);

        assert!(set.has(&address(1)));
        assert!(set.was_removed(&address(1)));
    }

    #[test]
    fn string_map_remove_returns_previous_value() {
        let mut map = StringMap::new();
        map.set("name".into(), "Jain".into());
        assert_eq!(map.get("name"), Some("Jain"));

        map.set("name".into(), "Jane".into());
        assert_eq!(map.len(), 1);

        assert_eq!(map.remove("name"), Some("Jane".to_string()));
        assert_eq!(map.remove("name"), None);
        assert_eq!(map.get("name"), None);
        assert!(map.is_empty());
    }

    #[test]
    fn change_owner() {
        let account = Accounts1Data::new(address(1)).with_owner(address(2));
        assert_eq!(account.owner(), address(2));

        let host = Hosts1Data::new(address(1), 100).with_owner(address(3));
        assert_eq!(host.owner(), address(3));
        assert_eq!(host.fee(), 100);
    }

    #[test]
    fn account_unlink_then_relink() {
        let host_id = address(9);
        let mut account = Accounts1Data::new(address(1));

        assert!(account.link_host(host_id, Readmission::ClearRemoved));
        account.unlink_host(&host_id).unwrap();
        assert!(!account.registered().has(&host_id));
        assert!(account.removed().has(&host_id));

        assert!(account.link_host(host_id, Readmission::ClearRemoved));
        assert!(account.registered().has(&host_id));
        assert!(!account.removed().has(&host_id));
    }

    #[test]
    fn host_unlink_then_relink_keeping_history() {
        let account_id = address(4);
        let mut host = Hosts1Data::new(address(1), 0);

        host.link_account(account_id, Readmission::KeepRemoved);
        host.unlink_account(&account_id).unwrap();
        host.link_account(account_id, Readmission::KeepRemoved);

        assert!(host.registered().has(&account_id));
        assert!(host.removed().has(&account_id));
    }
}
