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

/// Runtime tests for the key-value data of accounts.
use host_registry_client::*;
use host_registry_test_utils::*;

#[async_std::test]
async fn set_and_remove_data() {
    let (client, _) = Client::new_emulator();
    let owner = random_key_pair(&client).await;
    let account_id = create_account(&client, &owner).await;

    let tx_included = submit_ok(
        &client,
        &owner,
        message::SetAccountData {
            account: account_id,
            key: "name".into(),
            value: "Jain".into(),
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));
    assert_eq!(
        client.get_account_data(account_id, "name").await.unwrap(),
        Some("Jain".to_string())
    );

    let remove_name = message::RemoveAccountData {
        account: account_id,
        key: "name".into(),
    };
    let removed = submit_ok(&client, &owner, remove_name.clone())
        .await
        .result
        .unwrap();
    assert_eq!(removed, Some("Jain".to_string()));
    assert_eq!(
        client.get_account_data(account_id, "name").await.unwrap(),
        None
    );

    // Removing again is a no-op.
    let removed_again = submit_ok(&client, &owner, remove_name).await.result.unwrap();
    assert_eq!(removed_again, None);
}

#[async_std::test]
async fn set_data_overwrites() {
    let (client, _) = Client::new_emulator();
    let owner = random_key_pair(&client).await;
    let account_id = create_account(&client, &owner).await;
    let key = random_alnum_string(8);

    for value in &["first", "second"] {
        submit_ok(
            &client,
            &owner,
            message::SetAccountData {
                account: account_id,
                key: key.clone(),
                value: value.to_string(),
            },
        )
        .await;
    }

    let account = client.get_account(account_id).await.unwrap().unwrap();
    assert_eq!(account.data.len(), 1);
    assert_eq!(account.data.get(&key), Some("second"));
}

#[async_std::test]
async fn data_not_owner() {
    let (client, _) = Client::new_emulator();
    let owner = random_key_pair(&client).await;
    let intruder = random_key_pair(&client).await;
    let account_id = create_account(&client, &owner).await;
    submit_ok(
        &client,
        &owner,
        message::SetAccountData {
            account: account_id,
            key: "name".into(),
            value: "Jain".into(),
        },
    )
    .await;

    let tx_included = submit_ok(
        &client,
        &intruder,
        message::SetAccountData {
            account: account_id,
            key: "name".into(),
            value: "Mallory".into(),
        },
    )
    .await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::NotOwner(Operation::AccountDataSet))
    );

    let tx_included = submit_ok(
        &client,
        &intruder,
        message::RemoveAccountData {
            account: account_id,
            key: "name".into(),
        },
    )
    .await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::NotOwner(Operation::AccountDataRemove))
    );

    assert_eq!(
        client.get_account_data(account_id, "name").await.unwrap(),
        Some("Jain".to_string())
    );
}
