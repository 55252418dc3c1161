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

//! `Address` identifies transaction authors as well as the Accounts and Hosts of the registry.

use core::convert::TryFrom;
use core::fmt;
use parity_scale_codec::{Decode, Encode};

use crate::Nonce;

/// Domain separator for [Address::derive_entity].
const ENTITY_DOMAIN: &[u8] = b"host-registry/entity";

/// An opaque, globally unique 32 byte identifier.
///
/// The address of a transaction author is the public key of its [crate::KeyPair]. Accounts and
/// Hosts are identified by an address derived from their creator, see [Address::derive_entity].
#[derive(Decode, Encode, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address([u8; 32]);

impl Address {
    pub const fn from_raw(bytes: [u8; 32]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The address of the entity created by `creator` in its transaction with the given `nonce`.
    ///
    /// Nonces are never reused so every created entity gets a fresh address.
    pub fn derive_entity(creator: &Address, nonce: Nonce) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(ENTITY_DOMAIN);
        hasher.update(&creator.0);
        hasher.update(&nonce.encode());
        Address(*hasher.finalize().as_bytes())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

impl core::str::FromStr for Address {
    type Err = InvalidAddressError;

    /// Parse 64 hex characters with an optional `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|_| InvalidAddressError("must be hex encoded"))?;
        let raw = <[u8; 32]>::try_from(bytes.as_slice())
            .map_err(|_| InvalidAddressError("must be exactly 32 bytes"))?;
        Ok(Address(raw))
    }
}

/// Error type when parsing an [Address] failed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid address: {0}")]
pub struct InvalidAddressError(&'static str);
