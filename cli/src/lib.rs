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

//! Define the command line parser and interface.

#![allow(clippy::large_enum_variant)]

use directories::BaseDirs;
use host_registry_client::*;
use lazy_static::lazy_static;
use std::path::PathBuf;
use structopt::StructOpt;
use thiserror::Error as ThisError;

pub mod key_pair_storage;

mod command;
use command::{account, host, key_pair, other};

/// The type that captures the command line.
#[derive(StructOpt, Clone)]
#[structopt(max_term_width = 80)]
pub struct CommandLine {
    #[structopt(subcommand)]
    pub command: Command,
}

impl CommandLine {
    pub async fn run(self) -> Result<(), CommandError> {
        self.command.run().await
    }
}

/// Ledger-related command-line options
#[derive(StructOpt, Clone, Debug)]
pub struct LedgerOptions {
    /// File that holds the ledger state. Created from the development genesis if missing.
    #[structopt(
        long,
        default_value = &LEDGER_DEFAULT,
        env = "HOST_REGISTRY_LEDGER",
        value_name = "path",
        parse(from_os_str)
    )]
    pub ledger: PathBuf,

    /// What registering a removed address again does with its removal mark: `clear-removed` or
    /// `keep-removed`. Only applies when a new ledger is created. An existing ledger keeps the
    /// policy it was created with.
    #[structopt(
        long,
        default_value = "clear-removed",
        env = "HOST_REGISTRY_READMISSION",
        value_name = "policy",
        parse(try_from_str = parse_readmission)
    )]
    pub readmission: state::Readmission,
}

impl LedgerOptions {
    pub fn client(&self) -> Result<Client, Error> {
        Client::open_local_ledger(&self.ledger, &self.genesis_config())
    }

    /// The development genesis with the readmission policy of these options.
    pub fn genesis_config(&self) -> GenesisConfig {
        GenesisConfig {
            readmission: self.readmission,
            ..GenesisConfig::dev()
        }
    }
}

fn parse_readmission(value: &str) -> Result<state::Readmission, String> {
    match value {
        "clear-removed" => Ok(state::Readmission::ClearRemoved),
        "keep-removed" => Ok(state::Readmission::KeepRemoved),
        _ => Err(format!(
            "unknown readmission policy '{}', expected 'clear-removed' or 'keep-removed'",
            value
        )),
    }
}

/// Transaction-related command-line options
#[derive(StructOpt, Clone)]
pub struct TxOptions {
    /// The name of the local key pair used to sign transactions. Names starting with `//` derive
    /// a development key pair, for example `//Alice`.
    #[structopt(
        long,
        env = "HOST_REGISTRY_AUTHOR",
        value_name = "key_pair_name",
        parse(try_from_str = lookup_key_pair)
    )]
    pub author: KeyPair,

    /// Payment attached to the transaction. Registration requires at least the fee of the host.
    #[structopt(long, default_value = "0", env = "HOST_REGISTRY_VALUE", value_name = "value")]
    pub value: Balance,
}

lazy_static! {
    static ref LEDGER_DEFAULT: String = match BaseDirs::new() {
        Some(dirs) => dirs
            .data_dir()
            .join("host-registry-cli")
            .join("ledger.scale")
            .display()
            .to_string(),
        None => String::from("ledger.scale"),
    };
}

fn lookup_key_pair(name: &str) -> Result<KeyPair, String> {
    if name.starts_with("//") {
        return Ok(KeyPair::from_string(name));
    }
    key_pair_storage::get(name)
        .map(|data| KeyPair::from_seed(&data.seed))
        .map_err(|e| format!("{}", e))
}

/// The supported [CommandLine] commands.
/// The commands are grouped by domain.
#[derive(StructOpt, Clone)]
pub enum Command {
    Account(account::Command),
    Host(host::Command),
    KeyPair(key_pair::Command),

    #[structopt(flatten)]
    Other(other::Command),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Account(cmd) => cmd.run().await,
            Command::Host(cmd) => cmd.run().await,
            Command::KeyPair(cmd) => cmd.run().await,
            Command::Other(cmd) => cmd.run().await,
        }
    }
}

/// The trait that every command must implement.
#[async_trait::async_trait]
pub trait CommandT {
    async fn run(self) -> Result<(), CommandError>;
}

/// Error returned by [CommandT::run].
///
/// Implements [From] for client errors and [key_pair_storage] errors.
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("client error")]
    ClientError(#[from] Error),

    #[error("transaction {} failed", hex::encode(.tx_hash))]
    FailedTransaction {
        tx_hash: TxHash,
        #[source]
        error: RegistryError,
    },

    #[error("cannot find account {account_id}")]
    AccountNotFound { account_id: Address },

    #[error("cannot find host {host_id}")]
    HostNotFound { host_id: Address },

    #[error(transparent)]
    KeyPairStorageError(#[from] key_pair_storage::Error),
}
