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

/// Runtime tests for `Account.hostRegister`.
use host_registry_client::*;
use host_registry_test_utils::*;

#[async_std::test]
async fn register_host() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let fee = random_fee();
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, fee).await;
    let initial_balance = client.free_balance(&account_owner.public()).await.unwrap();

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
    assert_eq!(
        tx_included.events[0],
        RegistryEvent::HostRegistered(account_id, host_id).into()
    );

    let account = client.get_account(account_id).await.unwrap().unwrap();
    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert_eq!(account.registered, vec![host_id]);
    assert_eq!(host.registered, vec![account_id]);

    // The fee is paid to the host.
    assert_eq!(
        client.free_balance(&account_owner.public()).await.unwrap(),
        initial_balance - fee
    );
    assert_eq!(client.free_balance(&host_id).await.unwrap(), fee);
}

#[async_std::test]
async fn register_host_paying_more_than_fee() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, 10).await;

    let tx_included = submit_ok_with_value(
        &client,
        &account_owner,
        message::RegisterHost {
            account: account_id,
            host: host_id,
        },
        25,
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));
    assert_eq!(client.free_balance(&host_id).await.unwrap(), 25);
}

#[async_std::test]
async fn register_host_insufficient_fee() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let fee = random_fee();
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, fee).await;
    let initial_balance = client.free_balance(&account_owner.public()).await.unwrap();

    let tx_included = submit_ok_with_value(
        &client,
        &account_owner,
        message::RegisterHost {
            account: account_id,
            host: host_id,
        },
        fee - 1,
    )
    .await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::InsufficientFee(
            Operation::AccountHostRegister
        ))
    );

    // Neither side is touched and no payment is taken.
    let account = client.get_account(account_id).await.unwrap().unwrap();
    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert!(account.registered.is_empty());
    assert!(host.registered.is_empty());
    assert_eq!(
        client.free_balance(&account_owner.public()).await.unwrap(),
        initial_balance
    );
    assert_eq!(client.free_balance(&host_id).await.unwrap(), 0);
}

#[async_std::test]
async fn register_host_insufficient_balance() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, 0).await;
    let balance = client.free_balance(&account_owner.public()).await.unwrap();

    let tx_included = submit_ok_with_value(
        &client,
        &account_owner,
        message::RegisterHost {
            account: account_id,
            host: host_id,
        },
        balance + 1,
    )
    .await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::InsufficientBalance(
            Operation::AccountHostRegister
        ))
    );

    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert!(host.registered.is_empty());
}

#[async_std::test]
async fn register_host_not_owner() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let fee = random_fee();
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, fee).await;

    let tx_included = submit_ok_with_value(
        &client,
        &host_owner,
        message::RegisterHost {
            account: account_id,
            host: host_id,
        },
        fee,
    )
    .await;
    let error = tx_included.result.unwrap_err();
    assert_eq!(
        error.to_string(),
        "Account.hostRegister: message sender not an owner"
    );

    let account = client.get_account(account_id).await.unwrap().unwrap();
    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert!(account.registered.is_empty());
    assert!(host.registered.is_empty());
    assert_eq!(client.free_balance(&host_id).await.unwrap(), 0);
}

#[async_std::test]
async fn register_inexistent_host() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let account_id = create_account(&client, &account_owner).await;

    let tx_included = submit_ok(
        &client,
        &account_owner,
        message::RegisterHost {
            account: account_id,
            host: random_address(),
        },
    )
    .await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::InexistentHost(Operation::AccountHostRegister))
    );
}

#[async_std::test]
async fn register_host_twice() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let fee = random_fee();
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, fee).await;
    let register_host = message::RegisterHost {
        account: account_id,
        host: host_id,
    };

    submit_ok_with_value(&client, &account_owner, register_host.clone(), fee).await;
    let tx_included = submit_ok_with_value(&client, &account_owner, register_host, fee).await;
    assert_eq!(tx_included.result, Ok(()));

    // The second registration neither duplicates state nor charges again.
    let account = client.get_account(account_id).await.unwrap().unwrap();
    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert_eq!(account.registered, vec![host_id]);
    assert_eq!(host.registered, vec![account_id]);
    assert_eq!(client.free_balance(&host_id).await.unwrap(), fee);
}

#[async_std::test]
async fn value_on_non_payable_message() {
    let (client, _) = Client::new_emulator();
    let account_owner = random_key_pair(&client).await;
    let host_owner = random_key_pair(&client).await;
    let account_id = create_account(&client, &account_owner).await;
    let host_id = create_host(&client, &host_owner, 0).await;

    let tx_included = submit_ok_with_value(
        &client,
        &account_owner,
        message::RemoveHost {
            account: account_id,
            host: host_id,
        },
        1,
    )
    .await;
    assert_eq!(
        tx_included.result.unwrap_err().to_string(),
        "Account.hostRemove: method is not payable"
    );
}
