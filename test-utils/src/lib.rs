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

//! Miscellaneous helpers used throughout Registry tests.

use rand::distributions::Alphanumeric;
use rand::Rng;

use host_registry_client::*;

/// Submit a transaction with an attached `value` and wait for it to be applied.
///
/// Panics if submission errors. The message itself may still have failed, see
/// [TransactionIncluded::result].
pub async fn submit_ok_with_value<Message_: Message>(
    client: &Client,
    author: &KeyPair,
    message: Message_,
    value: Balance,
) -> TransactionIncluded<Message_> {
    client
        .sign_and_submit_message(&author, message, value)
        .await
        .unwrap()
        .await
        .unwrap()
}

/// Submit a transaction and wait for it to be applied.
///
/// Panics if submission errors.
pub async fn submit_ok<Message_: Message>(
    client: &Client,
    author: &KeyPair,
    message: Message_,
) -> TransactionIncluded<Message_> {
    submit_ok_with_value(&client, &author, message, 0).await
}

/// Create an account owned by `author` and return its address.
pub async fn create_account(client: &Client, author: &KeyPair) -> Address {
    submit_ok(
        &client,
        &author,
        message::CreateAccount {
            owner: author.public(),
        },
    )
    .await
    .result
    .unwrap()
}

/// Create a host owned by `author` with the given registration `fee` and return its address.
pub async fn create_host(client: &Client, author: &KeyPair, fee: Balance) -> Address {
    submit_ok(
        &client,
        &author,
        message::CreateHost {
            owner: author.public(),
            fee,
        },
    )
    .await
    .result
    .unwrap()
}

pub fn key_pair_from_string(value: impl AsRef<str>) -> KeyPair {
    KeyPair::from_string(format!("//{}", value.as_ref()).as_str())
}

/// Create a random key pair. Equips the key pair address with enough funds to pay host fees.
pub async fn random_key_pair(client: &Client) -> KeyPair {
    let (key_pair, _) = KeyPair::generate();

    // Have Alice transfer 100.000 to this new address.
    let alice = key_pair_from_string("Alice");
    transfer(&client, &alice, key_pair.public(), 100_000).await;

    key_pair
}

pub fn random_alnum_string(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect::<String>()
}

/// A random host fee between 1 and 999.
pub fn random_fee() -> Balance {
    rand::thread_rng().gen_range(1..1000)
}

/// An address nobody holds the key pair for.
pub fn random_address() -> Address {
    Address::from_raw(rand::random())
}

pub async fn transfer(client: &Client, donator: &KeyPair, recipient: Address, value: Balance) {
    let tx_included = submit_ok(
        &client,
        &donator,
        message::Transfer {
            recipient,
            balance: value,
        },
    )
    .await;
    assert_eq!(
        tx_included.result,
        Ok(()),
        "Failed to grant funds to the recipient address."
    );
}
