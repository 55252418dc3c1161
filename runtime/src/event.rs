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

//! Events emitted when a transaction is applied.

use parity_scale_codec::{Decode, Encode};

use host_registry_core::{Address, Balance, RegistryError};

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    System(SystemEvent),
    Registry(RegistryEvent),
}

/// Outcome of a dispatched transaction. Exactly one is emitted per applied transaction.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum SystemEvent {
    ExtrinsicSuccess,
    ExtrinsicFailed(RegistryError),
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum RegistryEvent {
    AccountCreated(Address),
    HostCreated(Address),
    /// Account and its new owner.
    AccountOwnerChanged(Address, Address),
    /// Host and its new owner.
    HostOwnerChanged(Address, Address),
    /// Account and the host it registered.
    HostRegistered(Address, Address),
    /// Account and the host it removed.
    HostRemoved(Address, Address),
    /// Host and the account registered with it.
    AccountRegistered(Address, Address),
    /// Host and the account it removed.
    AccountRemoved(Address, Address),
    AccountDataSet(Address, String),
    /// Account, key and the value stored before the removal.
    AccountDataRemoved(Address, String, Option<String>),
    Transferred(Address, Address, Balance),
}

impl From<RegistryEvent> for Event {
    fn from(event: RegistryEvent) -> Self {
        Event::Registry(event)
    }
}

impl From<SystemEvent> for Event {
    fn from(event: SystemEvent) -> Self {
        Event::System(event)
    }
}
