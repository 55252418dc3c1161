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

use parity_scale_codec::Error as CodecError;

use host_registry_runtime::InvalidTransaction;

use crate::message::EventExtractionError;

/// Error that may be returned by any of the [crate::ClientT] methods
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Decoding the ledger state failed
    #[error("Decoding the ledger state failed")]
    Codec(#[from] CodecError),

    /// Reading or writing the ledger file failed
    #[error("Failed to access the ledger file")]
    Io(#[from] std::io::Error),

    /// The transaction was rejected and not applied
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(#[from] InvalidTransaction),

    /// Failed to extract required events for a transaction
    #[error("Failed to extract required events for transaction {}", hex::encode(.tx_hash))]
    EventExtraction {
        error: EventExtractionError,
        tx_hash: crate::TxHash,
    },

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Other(error)
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Error::Other(error.into())
    }
}
