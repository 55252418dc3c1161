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

//! Manages key pairs stored in the filesystem,
//! providing ways to store and retrieve them.

use directories::BaseDirs;
use host_registry_client::Seed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use thiserror::Error as ThisError;

use std::io::Error as IOError;
use std::path::{Path, PathBuf};

/// The data that is stored in the filesystem relative
/// to a key pair. The name of the key pair is used as
/// the key to this value, therefore not included here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KeyPairData {
    pub seed: Seed,
}

#[derive(Debug, ThisError)]
pub enum Error {
    /// A key pair with the given name already exists
    #[error("A key pair with the given name already exists")]
    AlreadyExists(),

    /// Failed to write to the key-pairs file
    #[error("Failed to write the key-pairs file '{1}'")]
    FailedWrite(#[source] WritingError, PathBuf),

    /// Failed to read the key-pairs file
    #[error("Failed to read the key-pairs file '{1}'")]
    FailedRead(#[source] ReadingError, PathBuf),

    /// Cannot create directory
    #[error("Cannot create directory '{1}'")]
    CannotCreateDirectory(#[source] IOError, PathBuf),

    /// The data directory of the current user is unknown
    #[error("Cannot determine the data directory of the current user")]
    NoDataDirectory(),

    /// Could not find a key pair with the given name
    #[error("Could not find a key pair with the given name")]
    NotFound(),
}

/// Possible errors when writing to the key-pairs file.
#[derive(Debug, ThisError)]
pub enum WritingError {
    #[error(transparent)]
    IO(IOError),

    #[error(transparent)]
    Serialization(serde_json::Error),
}

/// Possible errors when reading the key-pairs file.
#[derive(Debug, ThisError)]
pub enum ReadingError {
    #[error(transparent)]
    IO(IOError),

    #[error(transparent)]
    Deserialization(serde_json::Error),
}

/// Add a key pair to the storage.
///
/// Fails if a key pair with the given `name` already exists.
/// It can also fail from IO and Serde Json errors.
pub fn add(name: String, data: KeyPairData) -> Result<(), Error> {
    add_at(&file_path()?, name, data)
}

/// List all the stored key-pairs.
///
/// It can fail from IO errors or Serde Json errors.
pub fn list() -> Result<BTreeMap<String, KeyPairData>, Error> {
    list_at(&file_path()?)
}

/// Get a key pair by name.
///
/// It can fail from IO and Serde Json errors, or if no such
/// key pair is found.
pub fn get(name: &str) -> Result<KeyPairData, Error> {
    list()?.remove(name).ok_or(Error::NotFound())
}

fn add_at(path: &Path, name: String, data: KeyPairData) -> Result<(), Error> {
    let mut key_pairs = list_at(path)?;
    if key_pairs.contains_key(&name) {
        return Err(Error::AlreadyExists());
    }

    key_pairs.insert(name, data);
    update(path, key_pairs)
}

fn list_at(path: &Path) -> Result<BTreeMap<String, KeyPairData>, Error> {
    init(path)?;
    match parse_file(path)? {
        VersionedFile::V1 { key_pairs } => Ok(key_pairs),
    }
}

fn update(path: &Path, key_pairs: BTreeMap<String, KeyPairData>) -> Result<(), Error> {
    let data = VersionedFile::V1 { key_pairs };
    let write_error = |err| Error::FailedWrite(err, path.to_path_buf());
    let new_content = serde_json::to_string_pretty(&data)
        .map_err(WritingError::Serialization)
        .map_err(write_error)?;
    std::fs::write(path, new_content.as_bytes())
        .map_err(WritingError::IO)
        .map_err(write_error)?;
    Ok(())
}

/// The file where the user key-pairs are stored.
const FILE: &str = "key-pairs.json";

/// Path of [FILE] in the data directory of the current user.
fn file_path() -> Result<PathBuf, Error> {
    let dirs = BaseDirs::new().ok_or(Error::NoDataDirectory())?;
    Ok(dirs.data_dir().join("host-registry-cli").join(FILE))
}

fn parse_file(path: &Path) -> Result<VersionedFile, Error> {
    let read_error = |err| Error::FailedRead(err, path.to_path_buf());
    let file = File::open(path).map_err(ReadingError::IO).map_err(read_error)?;
    serde_json::from_reader(&file)
        .map_err(ReadingError::Deserialization)
        .map_err(read_error)
}

/// The file format of [FILE]. New versions are added as variants.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "version")]
enum VersionedFile {
    #[serde(rename = "1")]
    V1 {
        key_pairs: BTreeMap<String, KeyPairData>,
    },
}

/// Initialize the storage on disk to be used correctly.
///   * Create the directory structure
///   * Create and initialize the file where the key pairs will be stored.
fn init(path: &Path) -> Result<(), Error> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|err| Error::CannotCreateDirectory(err, dir.to_path_buf()))?;
    }
    if !path.exists() {
        update(path, BTreeMap::new())?;
    }
    Ok(())
}
