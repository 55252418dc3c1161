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

//! Dispatch of registry calls.
//!
//! Every handler checks all of its preconditions before it mutates storage. The first failing
//! check aborts the call.

use host_registry_core::message;
use host_registry_core::state::{Accounts1Data, Hosts1Data, Owned as _};

use crate::call::Call;
use crate::event::RegistryEvent;
use crate::fees::{self, Payment};
use crate::storage::Storage;
use crate::store::{self, StorageMap as _, StorageValue as _};
use crate::{Address, Balance, Nonce, Operation, RegistryError};

/// The authenticated origin of a call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Context {
    /// Author of the transaction.
    pub author: Address,
    /// Nonce of the transaction. Used to derive the address of created entities.
    pub nonce: Nonce,
    /// Payment attached to the transaction.
    pub value: Balance,
}

/// Execute `call` on behalf of `context.author`.
pub fn dispatch<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    call: Call,
) -> Result<RegistryEvent, RegistryError> {
    if context.value > 0 && !call.is_payable() {
        return Err(RegistryError::NonPayable(call.operation()));
    }

    match call {
        Call::CreateAccount(message) => create_account(storage, context, message),
        Call::CreateHost(message) => create_host(storage, context, message),
        Call::ChangeAccountOwner(message) => change_account_owner(storage, context, message),
        Call::ChangeHostOwner(message) => change_host_owner(storage, context, message),
        Call::RegisterHost(message) => register_host(storage, context, message),
        Call::RemoveHost(message) => remove_host(storage, context, message),
        Call::RegisterAccount(message) => register_account(storage, context, message),
        Call::RemoveAccount(message) => remove_account(storage, context, message),
        Call::SetAccountData(message) => set_account_data(storage, context, message),
        Call::RemoveAccountData(message) => remove_account_data(storage, context, message),
        Call::Transfer(message) => transfer(storage, context, message),
    }
}

fn create_account<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::CreateAccount,
) -> Result<RegistryEvent, RegistryError> {
    let account_id = Address::derive_entity(&context.author, context.nonce);
    store::Accounts1::insert(storage, &account_id, &Accounts1Data::new(message.owner));
    log::debug!("account {} created for owner {}", account_id, message.owner);
    Ok(RegistryEvent::AccountCreated(account_id))
}

fn create_host<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::CreateHost,
) -> Result<RegistryEvent, RegistryError> {
    let host_id = Address::derive_entity(&context.author, context.nonce);
    store::Hosts1::insert(
        storage,
        &host_id,
        &Hosts1Data::new(message.owner, message.fee),
    );
    log::debug!(
        "host {} created for owner {} with fee {}",
        host_id,
        message.owner,
        message.fee
    );
    Ok(RegistryEvent::HostCreated(host_id))
}

fn change_account_owner<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::ChangeAccountOwner,
) -> Result<RegistryEvent, RegistryError> {
    let operation = Operation::AccountChangeOwner;
    let account = get_account(storage, &message.account, operation)?;
    if account.owner() != context.author {
        return Err(RegistryError::NotOwner(operation));
    }

    let account = account.with_owner(message.new_owner);
    store::Accounts1::insert(storage, &message.account, &account);
    Ok(RegistryEvent::AccountOwnerChanged(
        message.account,
        message.new_owner,
    ))
}

fn change_host_owner<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::ChangeHostOwner,
) -> Result<RegistryEvent, RegistryError> {
    let operation = Operation::HostChangeOwner;
    let host = get_host(storage, &message.host, operation)?;
    if host.owner() != context.author {
        return Err(RegistryError::NotOwner(operation));
    }

    let host = host.with_owner(message.new_owner);
    store::Hosts1::insert(storage, &message.host, &host);
    Ok(RegistryEvent::HostOwnerChanged(message.host, message.new_owner))
}

/// `Account.hostRegister`. Only the account owner may link its account.
fn register_host<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::RegisterHost,
) -> Result<RegistryEvent, RegistryError> {
    let operation = Operation::AccountHostRegister;
    let account = get_account(storage, &message.account, operation)?;
    if account.owner() != context.author {
        return Err(RegistryError::NotOwner(operation));
    }
    let host = get_host(storage, &message.host, operation)?;

    link(
        storage,
        context,
        operation,
        (message.account, account),
        (message.host, host),
    )?;
    Ok(RegistryEvent::HostRegistered(message.account, message.host))
}

/// `Host.accountRegister`. Registration is driven by the owner of the account, not the owner of
/// the host.
fn register_account<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::RegisterAccount,
) -> Result<RegistryEvent, RegistryError> {
    let operation = Operation::HostAccountRegister;
    let host = get_host(storage, &message.host, operation)?;
    let account = get_account(storage, &message.account, operation)?;
    if account.owner() != context.author {
        return Err(RegistryError::NotAuthorized(operation));
    }

    link(
        storage,
        context,
        operation,
        (message.account, account),
        (message.host, host),
    )?;
    Ok(RegistryEvent::AccountRegistered(message.host, message.account))
}

/// Link the account and the host on both sides after charging the host fee to the author.
///
/// A pair that is already linked on both sides is left untouched and nothing is charged.
fn link<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    operation: Operation,
    (account_id, mut account): (Address, Accounts1Data),
    (host_id, mut host): (Address, Hosts1Data),
) -> Result<(), RegistryError> {
    let payment =
        Payment::new(context.value, host.fee()).ok_or(RegistryError::InsufficientFee(operation))?;

    if account.registered().has(&host_id) && host.registered().has(&account_id) {
        log::debug!("account {} already linked to host {}", account_id, host_id);
        return Ok(());
    }

    fees::pay(storage, &context.author, &host_id, &payment, operation)?;

    let readmission = store::ReadmissionPolicy::get(storage).unwrap_or_default();
    account.link_host(host_id, readmission);
    host.link_account(account_id, readmission);
    store::Accounts1::insert(storage, &account_id, &account);
    store::Hosts1::insert(storage, &host_id, &host);

    log::debug!(
        "account {} linked to host {}, paid {}",
        account_id,
        host_id,
        payment.total()
    );
    Ok(())
}

/// `Account.hostRemove`. Only unlinks the account side.
fn remove_host<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::RemoveHost,
) -> Result<RegistryEvent, RegistryError> {
    let operation = Operation::AccountHostRemove;
    let mut account = get_account(storage, &message.account, operation)?;
    if account.owner() != context.author {
        return Err(RegistryError::NotOwner(operation));
    }

    account
        .unlink_host(&message.host)
        .map_err(|_| RegistryError::NotRegistered(operation))?;
    store::Accounts1::insert(storage, &message.account, &account);
    Ok(RegistryEvent::HostRemoved(message.account, message.host))
}

/// `Host.accountRemove`. Only unlinks the host side.
fn remove_account<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::RemoveAccount,
) -> Result<RegistryEvent, RegistryError> {
    let operation = Operation::HostAccountRemove;
    let mut host = get_host(storage, &message.host, operation)?;
    if host.owner() != context.author {
        return Err(RegistryError::NotAuthorized(operation));
    }

    host.unlink_account(&message.account)
        .map_err(|_| RegistryError::NotRegistered(operation))?;
    store::Hosts1::insert(storage, &message.host, &host);
    Ok(RegistryEvent::AccountRemoved(message.host, message.account))
}

fn set_account_data<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::SetAccountData,
) -> Result<RegistryEvent, RegistryError> {
    let operation = Operation::AccountDataSet;
    let mut account = get_account(storage, &message.account, operation)?;
    if account.owner() != context.author {
        return Err(RegistryError::NotOwner(operation));
    }

    account
        .data_mut()
        .set(message.key.clone(), message.value);
    store::Accounts1::insert(storage, &message.account, &account);
    Ok(RegistryEvent::AccountDataSet(message.account, message.key))
}

fn remove_account_data<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::RemoveAccountData,
) -> Result<RegistryEvent, RegistryError> {
    let operation = Operation::AccountDataRemove;
    let mut account = get_account(storage, &message.account, operation)?;
    if account.owner() != context.author {
        return Err(RegistryError::NotOwner(operation));
    }

    let previous = account.data_mut().remove(&message.key);
    store::Accounts1::insert(storage, &message.account, &account);
    Ok(RegistryEvent::AccountDataRemoved(
        message.account,
        message.key,
        previous,
    ))
}

fn transfer<S: Storage + ?Sized>(
    storage: &mut S,
    context: &Context,
    message: message::Transfer,
) -> Result<RegistryEvent, RegistryError> {
    fees::transfer(
        storage,
        &context.author,
        &message.recipient,
        message.balance,
        Operation::Transfer,
    )?;
    Ok(RegistryEvent::Transferred(
        context.author,
        message.recipient,
        message.balance,
    ))
}

fn get_account<S: Storage + ?Sized>(
    storage: &S,
    account_id: &Address,
    operation: Operation,
) -> Result<Accounts1Data, RegistryError> {
    store::Accounts1::get(storage, account_id).ok_or(RegistryError::InexistentAccount(operation))
}

fn get_host<S: Storage + ?Sized>(
    storage: &S,
    host_id: &Address,
    operation: Operation,
) -> Result<Hosts1Data, RegistryError> {
    store::Hosts1::get(storage, host_id).ok_or(RegistryError::InexistentHost(operation))
}
