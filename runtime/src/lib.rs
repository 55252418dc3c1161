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

//! State transition logic of the Host Registry ledger.
//!
//! The ledger state lives in a [storage::Storage]. Signed transactions ([UncheckedExtrinsic]) are
//! validated and applied by [executive::apply_extrinsic] which dispatches the contained [Call]
//! to the [registry] module.

pub use host_registry_core::*;

pub mod call;
pub mod event;
pub mod executive;
pub mod fees;
pub mod genesis;
pub mod registry;
pub mod storage;
pub mod store;

pub use call::Call;
pub use event::{Event, RegistryEvent, SystemEvent};
pub use executive::{InvalidTransaction, SignedPayload, UncheckedExtrinsic};
pub use genesis::GenesisConfig;
pub use storage::{MemoryStorage, Overlay, Storage};
