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

//! Ed25519 key pairs used to author transactions and the signatures they produce.

use core::fmt;
use ed25519_dalek::{Signer as _, SigningKey, Verifier as _, VerifyingKey};
use parity_scale_codec::{Decode, Encode};

use crate::Address;

/// The seed from which a key pair can be deterministically generated.
pub type Seed = [u8; 32];

/// Key pair that authors transactions. Its public key is the author [Address].
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    pub fn from_seed(seed: &Seed) -> Self {
        KeyPair {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Derive a key pair from a well-known string like `//Alice`.
    ///
    /// The seed is the BLAKE3 hash of the string. Only meant for development key pairs.
    pub fn from_string(value: &str) -> Self {
        Self::from_seed(blake3::hash(value.as_bytes()).as_bytes())
    }

    /// Generate a random key pair and return it together with its seed.
    pub fn generate() -> (Self, Seed) {
        let seed: Seed = rand::random();
        (Self::from_seed(&seed), seed)
    }

    pub fn public(&self) -> Address {
        Address::from_raw(self.signing_key.verifying_key().to_bytes())
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.signing_key.sign(message).to_bytes())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "KeyPair({})", self.public())
    }
}

/// Ed25519 signature over the SCALE encoding of a signed payload.
#[derive(Decode, Encode, Clone, Copy, Eq, PartialEq)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Returns `true` if this is a valid signature of `message` by the key pair of `signer`.
    pub fn verify(&self, message: &[u8], signer: &Address) -> bool {
        let verifying_key = match VerifyingKey::from_bytes(signer.as_bytes()) {
            Ok(verifying_key) => verifying_key,
            Err(_) => return false,
        };
        let signature = ed25519_dalek::Signature::from_bytes(&self.0);
        verifying_key.verify(message, &signature).is_ok()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(&self.0[..]))
    }
}
