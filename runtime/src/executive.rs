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

//! Validation and application of signed transactions.

use parity_scale_codec::{Decode, Encode};

use crate::call::Call;
use crate::event::{Event, SystemEvent};
use crate::registry::{self, Context};
use crate::storage::{Overlay, Storage};
use crate::store::{self, StorageMap as _, StorageValue as _};
use crate::{Address, Balance, Hash, Hashing, KeyPair, Nonce, Signature};

/// The part of a transaction that is covered by the signature of the author.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SignedPayload {
    pub call: Call,
    pub nonce: Nonce,
    /// Payment attached to the call. Must be zero for calls that are not payable.
    pub value: Balance,
    /// Genesis hash of the ledger the transaction is meant for.
    pub genesis_hash: Hash,
}

/// A signed transaction as it is submitted to the ledger.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UncheckedExtrinsic {
    pub author: Address,
    pub signature: Signature,
    pub payload: SignedPayload,
}

impl UncheckedExtrinsic {
    /// Sign `payload` with `key_pair`. The public key of `key_pair` becomes the author.
    pub fn new_signed(key_pair: &KeyPair, payload: SignedPayload) -> Self {
        let signature = key_pair.sign(&payload.encode());
        UncheckedExtrinsic {
            author: key_pair.public(),
            signature,
            payload,
        }
    }

    pub fn hash(&self) -> Hash {
        Hashing::hash_of(self)
    }

    fn has_valid_signature(&self) -> bool {
        self.signature.verify(&self.payload.encode(), &self.author)
    }
}

/// Reasons to reject a transaction before it is applied.
///
/// Rejected transactions have no effect on the ledger. In particular the nonce of the author is
/// not consumed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidTransaction {
    #[error("invalid transaction signature")]
    BadProof,

    #[error("transaction nonce {provided} is outdated, expected {expected}")]
    Stale { provided: Nonce, expected: Nonce },

    #[error("transaction nonce {provided} is in the future, expected {expected}")]
    Future { provided: Nonce, expected: Nonce },

    #[error("transaction was signed for a ledger with a different genesis hash")]
    BadGenesis,

    /// The author used up all nonces and cannot author further transactions.
    #[error("no nonces left for the transaction author")]
    ExhaustedNonce,
}

/// The nonce the next transaction authored by `who` must have.
pub fn account_nonce<S: Storage + ?Sized>(storage: &S, who: &Address) -> Nonce {
    store::Nonces::get(storage, who).unwrap_or(0)
}

/// Check that `extrinsic` may be applied to the ledger in `storage`.
pub fn validate_transaction<S: Storage + ?Sized>(
    storage: &S,
    extrinsic: &UncheckedExtrinsic,
) -> Result<(), InvalidTransaction> {
    if !extrinsic.has_valid_signature() {
        return Err(InvalidTransaction::BadProof);
    }

    let genesis_hash = store::GenesisHash::get(storage).unwrap_or_default();
    if extrinsic.payload.genesis_hash != genesis_hash {
        return Err(InvalidTransaction::BadGenesis);
    }

    let expected = account_nonce(storage, &extrinsic.author);
    let provided = extrinsic.payload.nonce;
    if provided < expected {
        return Err(InvalidTransaction::Stale { provided, expected });
    }
    if provided > expected {
        return Err(InvalidTransaction::Future { provided, expected });
    }
    if provided == Nonce::MAX {
        return Err(InvalidTransaction::ExhaustedNonce);
    }
    Ok(())
}

/// Validate and apply `extrinsic` and return the events it emitted.
///
/// A valid transaction always consumes the nonce of its author. If the dispatched call fails all
/// of its other changes are discarded and a [SystemEvent::ExtrinsicFailed] event is emitted.
pub fn apply_extrinsic<S: Storage + ?Sized>(
    storage: &mut S,
    extrinsic: UncheckedExtrinsic,
) -> Result<Vec<Event>, InvalidTransaction> {
    let tx_hash = extrinsic.hash();
    if let Err(err) = validate_transaction(storage, &extrinsic) {
        log::info!("rejected transaction {}: {}", hex::encode(tx_hash), err);
        return Err(err);
    }

    let UncheckedExtrinsic { author, payload, .. } = extrinsic;
    let next_nonce = payload
        .nonce
        .checked_add(1)
        .ok_or(InvalidTransaction::ExhaustedNonce)?;
    store::Nonces::insert(storage, &author, &next_nonce);

    let context = Context {
        author,
        nonce: payload.nonce,
        value: payload.value,
    };
    let operation = payload.call.operation();

    let mut overlay = Overlay::new(storage);
    let events = match registry::dispatch(&mut overlay, &context, payload.call) {
        Ok(event) => {
            overlay.commit();
            log::debug!("applied transaction {}: {}", hex::encode(tx_hash), operation);
            vec![Event::Registry(event), Event::System(SystemEvent::ExtrinsicSuccess)]
        }
        Err(err) => {
            log::info!("transaction {} failed: {}", hex::encode(tx_hash), err);
            vec![Event::System(SystemEvent::ExtrinsicFailed(err))]
        }
    };
    Ok(events)
}
