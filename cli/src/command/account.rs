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

//! Define the commands supported by the CLI related to Accounts.

use super::*;

/// Account related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    List(List),
    Show(Show),
    Create(Create),
    ChangeOwner(ChangeOwner),
    RegisterHost(RegisterHost),
    RemoveHost(RemoveHost),
    SetData(SetData),
    RemoveData(RemoveData),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::List(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
            Command::Create(cmd) => cmd.run().await,
            Command::ChangeOwner(cmd) => cmd.run().await,
            Command::RegisterHost(cmd) => cmd.run().await,
            Command::RemoveHost(cmd) => cmd.run().await,
            Command::SetData(cmd) => cmd.run().await,
            Command::RemoveData(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
/// List all accounts in the registry
pub struct List {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let account_ids = client.list_accounts().await?;
        println!("ACCOUNTS ({})", account_ids.len());
        for account_id in account_ids {
            println!("{}", account_id)
        }
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Show information for an account.
pub struct Show {
    /// The address of the account
    account_id: Address,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let account =
            client
                .get_account(self.account_id)
                .await?
                .ok_or(CommandError::AccountNotFound {
                    account_id: self.account_id,
                })?;

        println!("id: {}", account.id);
        println!("owner: {}", account.owner);
        println!("registered hosts: {:?}", account.registered);
        println!("removed hosts: {:?}", account.removed);
        println!("data:");
        for (key, value) in account.data.iter() {
            println!("  {}: {}", key, value);
        }
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Create an account. The author owns it unless `--owner` is given.
pub struct Create {
    /// Initial owner of the account
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
        println!("Creating account...");
        let account_id = submit(
            &self.ledger_options,
            &self.tx_options,
            message::CreateAccount { owner },
        )
        .await?;
        println!("✓ Account {} created", account_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Transfer the ownership of an account. The author must own the account.
pub struct ChangeOwner {
    account_id: Address,
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
            message::ChangeAccountOwner {
                account: self.account_id,
                new_owner: self.new_owner,
            },
        )
        .await?;
        println!("✓ Account {} is now owned by {}", self.account_id, self.new_owner);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Link an account to a host. Pass at least the fee of the host with `--value`.
pub struct RegisterHost {
    account_id: Address,
    host_id: Address,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for RegisterHost {
    async fn run(self) -> Result<(), CommandError> {
        println!("Registering host...");
        submit(
            &self.ledger_options,
            &self.tx_options,
            message::RegisterHost {
                account: self.account_id,
                host: self.host_id,
            },
        )
        .await?;
        println!("✓ Account {} is linked to host {}", self.account_id, self.host_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Unlink a host from the account side only.
pub struct RemoveHost {
    account_id: Address,
    host_id: Address,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for RemoveHost {
    async fn run(self) -> Result<(), CommandError> {
        submit(
            &self.ledger_options,
            &self.tx_options,
            message::RemoveHost {
                account: self.account_id,
                host: self.host_id,
            },
        )
        .await?;
        println!("✓ Host {} removed from account {}", self.host_id, self.account_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Store a value under a key in the data of an account.
pub struct SetData {
    account_id: Address,
    key: String,
    value: String,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for SetData {
    async fn run(self) -> Result<(), CommandError> {
        submit(
            &self.ledger_options,
            &self.tx_options,
            message::SetAccountData {
                account: self.account_id,
                key: self.key.clone(),
                value: self.value,
            },
        )
        .await?;
        println!("✓ Set '{}' of account {}", self.key, self.account_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Remove a key from the data of an account and print the removed value.
pub struct RemoveData {
    account_id: Address,
    key: String,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for RemoveData {
    async fn run(self) -> Result<(), CommandError> {
        let previous = submit(
            &self.ledger_options,
            &self.tx_options,
            message::RemoveAccountData {
                account: self.account_id,
                key: self.key.clone(),
            },
        )
        .await?;
        match previous {
            Some(value) => println!("✓ Removed '{}': {}", self.key, value),
            None => println!("ⓘ '{}' was not set", self.key),
        }
        Ok(())
    }
}
