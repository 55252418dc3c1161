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

//! Basic types used in the Host Registry.

use parity_scale_codec::Encode;

pub mod message;
pub mod state;

mod address;
pub use address::{Address, InvalidAddressError};

mod crypto;
pub use crypto::{KeyPair, Seed, Signature};

mod error;
pub use error::{Operation, RegistryError};

/// Balance of an address.
pub type Balance = u128;

/// Next index (nonce) for a transaction of an address.
///
/// The nonce of an [Address] increases whenever a transaction authored by it is applied.
pub type Nonce = u32;

/// Output of [Hashing::hash_of].
pub type Hash = [u8; 32];

/// The hashing algorithm used for transactions and the genesis configuration.
pub struct Hashing;

impl Hashing {
    /// Hash the SCALE encoding of `value` with BLAKE3.
    pub fn hash_of<T: Encode>(value: &T) -> Hash {
        *blake3::hash(&value.encode()).as_bytes()
    }
}
