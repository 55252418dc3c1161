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

/// Runtime tests for `Account.hostRemove` and `Host.accountRemove`.
use host_registry_client::*;
use host_registry_test_utils::*;

/// Create an account and a host owned by two new key pairs and link them.
async fn linked_pair(client: &Client) -> (KeyPair, Address, KeyPair, Address) {
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let fee = random_fee();
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, fee).await;

    let tx_included = submit_ok_with_value(
        &client,
        &account_owner,
        message::RegisterHost {
            account: account_id,
            host: host_id,
        },
        fee,
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));
    (account_owner, account_id, host_owner, host_id)
}

#[async_std::test]
async fn remove_host_is_unilateral() {
    let (client, _) = Client::new_emulator();
    let (account_owner, account_id, _, host_id) = linked_pair(&client).await;

    let tx_included = submit_ok(
        &client,
        &account_owner,
        message::RemoveHost {
            account: account_id,
            host: host_id,
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));
    assert_eq!(
        tx_included.events[0],
        Event::Registry(RegistryEvent::HostRemoved(account_id, host_id))
    );

    let account = client.get_account(account_id).await.unwrap().unwrap();
    assert!(account.registered.is_empty());
    assert_eq!(account.removed, vec![host_id]);

    // The host keeps its side of the link.
    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert_eq!(host.registered, vec![account_id]);
    assert!(host.removed.is_empty());
}

#[async_std::test]
async fn remove_account_is_unilateral() {
    let (client, _) = Client::new_emulator();
    let (_, account_id, host_owner, host_id) = linked_pair(&client).await;

    let tx_included = submit_ok(
        &client,
        &host_owner,
        message::RemoveAccount {
            host: host_id,
            account: account_id,
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));

    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert!(host.registered.is_empty());
    assert_eq!(host.removed, vec![account_id]);

    let account = client.get_account(account_id).await.unwrap().unwrap();
    assert_eq!(account.registered, vec![host_id]);
}

#[async_std::test]
async fn remove_both_sides() {
    let (client, _) = Client::new_emulator();
    let (account_owner, account_id, host_owner, host_id) = linked_pair(&client).await;

    submit_ok(
        &client,
        &account_owner,
        message::RemoveHost {
            account: account_id,
            host: host_id,
        },
    )
    .await;
    submit_ok(
        &client,
        &host_owner,
        message::RemoveAccount {
            host: host_id,
            account: account_id,
        },
    )
    .await;

    let account = client.get_account(account_id).await.unwrap().unwrap();
    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert!(account.registered.is_empty());
    assert!(host.registered.is_empty());
    assert_eq!(account.removed, vec![host_id]);
    assert_eq!(host.removed, vec![account_id]);
}

#[async_std::test]
async fn remove_host_not_registered() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, random_fee()).await;

    let tx_included = submit_ok(
        &client,
        &account_owner,
        message::RemoveHost {
            account: account_id,
            host: host_id,
        },
    )
    .await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::NotRegistered(Operation::AccountHostRemove))
    );
}

#[async_std::test]
async fn remove_host_twice() {
    let (client, _) = Client::new_emulator();
    let (account_owner, account_id, _, host_id) = linked_pair(&client).await;
    let remove_host = message::RemoveHost {
        account: account_id,
        host: host_id,
    };

    submit_ok(&client, &account_owner, remove_host.clone()).await;
    let tx_included = submit_ok(&client, &account_owner, remove_host).await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::NotRegistered(Operation::AccountHostRemove))
    );
}

#[async_std::test]
async fn remove_account_not_registered() {
    let (client, _) = Client::new_emulator();
    let host_owner = random_key_pair(&client).await;
    let host_id = create_host(&client, &host_owner, random_fee()).await;

    let tx_included = submit_ok(
        &client,
        &host_owner,
        message::RemoveAccount {
            host: host_id,
            account: random_address(),
        },
    )
    .await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::NotRegistered(Operation::HostAccountRemove))
    );
}

#[async_std::test]
async fn remove_host_not_owner() {
    let (client, _) = Client::new_emulator();
    let (_, account_id, host_owner, host_id) = linked_pair(&client).await;

    let tx_included = submit_ok(
        &client,
        &host_owner,
        message::RemoveHost {
            account: account_id,
            host: host_id,
        },
    )
    .await;
    assert_eq!(
        tx_included.result.unwrap_err().to_string(),
        "Account.hostRemove: message sender not an owner"
    );

    let account = client.get_account(account_id).await.unwrap().unwrap();
    assert_eq!(account.registered, vec![host_id]);
}

#[async_std::test]
async fn remove_account_not_authorized() {
    let (client, _) = Client::new_emulator();
    let (account_owner, account_id, _, host_id) = linked_pair(&client).await;

    let tx_included = submit_ok(
        &client,
        &account_owner,
        message::RemoveAccount {
            host: host_id,
            account: account_id,
        },
    )
    .await;
    assert_eq!(
        tx_included.result.unwrap_err().to_string(),
        "Host.accountRemove: message sender not authorized"
    );

    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert_eq!(host.registered, vec![account_id]);
}
