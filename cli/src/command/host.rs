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

//! Define the commands supported by the CLI related to Hosts.

use super::*;

/// Host related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    List(List),
    Show(Show),
    Create(Create),
    ChangeOwner(ChangeOwner),
    RegisterAccount(RegisterAccount),
    RemoveAccount(RemoveAccount),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::List(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
            Command::Create(cmd) => cmd.run().await,
            Command::ChangeOwner(cmd) => cmd.run().await,
            Command::RegisterAccount(cmd) => cmd.run().await,
            Command::RemoveAccount(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
/// List all hosts in the registry
pub struct List {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let host_ids = client.list_hosts().await?;
        println!("HOSTS ({})", host_ids.len());
        for host_id in host_ids {
            println!("{}", host_id)
        }
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Show information for a host.
pub struct Show {
    /// The address of the host
    host_id: Address,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let host = client
            .get_host(self.host_id)
            .await?
            .ok_or(CommandError::HostNotFound {
                host_id: self.host_id,
            })?;
        let balance = client.free_balance(&self.host_id).await?;

        println!("id: {}", host.id);
        println!("owner: {}", host.owner);
        println!("fee: {}", host.fee);
        println!("balance: {}", balance);
        println!("registered accounts: {:?}", host.registered);
        println!("removed accounts: {:?}", host.removed);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Create a host charging `fee` for every registration. The author owns it unless `--owner` is
/// given.
pub struct Create {
    fee: Balance,

    /// Initial owner of the host
    #[structopt(long)]
    owner: Option<Address>,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for Create {
    async fn run(self) -> Result<(), CommandError> {
        let owner = self.owner.unwrap_or_else(|| self.tx_options.author.public());
        println!("Creating host...");
        let host_id = submit(
            &self.ledger_options,
            &self.tx_options,
            message::CreateHost {
                owner,
                fee: self.fee,
            },
        )
        .await?;
        println!("✓ Host {} created", host_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Transfer the ownership of a host. The author must own the host.
pub struct ChangeOwner {
    host_id: Address,
    new_owner: Address,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for ChangeOwner {
    async fn run(self) -> Result<(), CommandError> {
        submit(
            &self.ledger_options,
            &self.tx_options,
            message::ChangeHostOwner {
                host: self.host_id,
                new_owner: self.new_owner,
            },
        )
        .await?;
        println!("✓ Host {} is now owned by {}", self.host_id, self.new_owner);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Link an account to a host from the host side. The author must own the account, not the host.
/// Pass at least the fee of the host with `--value`.
pub struct RegisterAccount {
    host_id: Address,
    account_id: Address,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for RegisterAccount {
    async fn run(self) -> Result<(), CommandError> {
        println!("Registering account...");
        submit(
            &self.ledger_options,
            &self.tx_options,
            message::RegisterAccount {
                host: self.host_id,
                account: self.account_id,
            },
        )
        .await?;
        println!("✓ Host {} is linked to account {}", self.host_id, self.account_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Unlink an account from the host side only.
pub struct RemoveAccount {
    host_id: Address,
    account_id: Address,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for RemoveAccount {
    async fn run(self) -> Result<(), CommandError> {
        submit(
            &self.ledger_options,
            &self.tx_options,
            message::RemoveAccount {
                host: self.host_id,
                account: self.account_id,
            },
        )
        .await?;
        println!("✓ Account {} removed from host {}", self.account_id, self.host_id);
        Ok(())
    }
}
