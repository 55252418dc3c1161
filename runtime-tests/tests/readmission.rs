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

/// Runtime tests for linking an account and a host again after they were unlinked.
use host_registry_client::*;
use host_registry_test_utils::*;

use state::Readmission;

/// Link, unlink on both sides and link again. Returns the account and the host.
async fn relink(client: &Client) -> (Account, Host) {
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

    let tx_included = submit_ok_with_value(&client, &account_owner, register_host, fee).await;
    assert_eq!(tx_included.result, Ok(()));
    // Linking again is charged again.
    assert_eq!(client.free_balance(&host_id).await.unwrap(), 2 * fee);

    (
        client.get_account(account_id).await.unwrap().unwrap(),
        client.get_host(host_id).await.unwrap().unwrap(),
    )
}

#[async_std::test]
async fn relink_clears_removed() {
    let (client, _) = Client::new_emulator();
    let (account, host) = relink(&client).await;

    assert_eq!(account.registered, vec![host.id]);
    assert_eq!(host.registered, vec![account.id]);
    assert!(account.removed.is_empty());
    assert!(host.removed.is_empty());
}

#[async_std::test]
async fn relink_keeps_removed() {
    let genesis_config = GenesisConfig {
        readmission: Readmission::KeepRemoved,
        ..GenesisConfig::dev()
    };
    let (client, _) = Client::new_emulator_with_genesis(&genesis_config);
    let (account, host) = relink(&client).await;

    assert_eq!(account.registered, vec![host.id]);
    assert_eq!(host.registered, vec![account.id]);
    assert_eq!(account.removed, vec![host.id]);
    assert_eq!(host.removed, vec![account.id]);
}

/// Registering after only the account side was removed restores the link on that side.
#[async_std::test]
async fn relink_half_linked_pair() {
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
    submit_ok(
        &client,
        &account_owner,
        message::RemoveHost {
            account: account_id,
            host: host_id,
        },
    )
    .await;
    let tx_included = submit_ok_with_value(&client, &account_owner, register_host, fee).await;
    assert_eq!(tx_included.result, Ok(()));

    let account = client.get_account(account_id).await.unwrap().unwrap();
    let host = client.get_host(host_id).await.unwrap().unwrap();
    assert_eq!(account.registered, vec![host_id]);
    assert_eq!(host.registered, vec![account_id]);
}
