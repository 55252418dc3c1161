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

//! Create an account and a host and link them.
//!
//! Alice owns the account and pays the fee of the host that Bob owns.

use host_registry_client::*;

#[async_std::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let alice = KeyPair::from_string("//Alice");
    let bob = KeyPair::from_string("//Bob");
    let (client, _) = Client::new_emulator();

    let account_id = client
        .sign_and_submit_message(
            &alice,
            message::CreateAccount {
                owner: alice.public(),
            },
            0,
        )
        .await?
        .await?
        .result
        .map_err(|err| Error::Other(err.to_string()))?;
    println!("Created account {}", account_id);

    let host_id = client
        .sign_and_submit_message(
            &alice,
            message::CreateHost {
                owner: bob.public(),
                fee: 100,
            },
            0,
        )
        .await?
        .await?
        .result
        .map_err(|err| Error::Other(err.to_string()))?;
    println!("Created host {} owned by //Bob", host_id);

    // The account owner registers the host and pays its fee.
    let registered = client
        .sign_and_submit_message(
            &alice,
            message::RegisterHost {
                account: account_id,
                host: host_id,
            },
            100,
        )
        .await?
        .await?;
    match registered.result {
        Ok(()) => println!("Account registered with host"),
        Err(err) => println!("Registration failed: {}", err),
    }

    let host = client.get_host(host_id).await?;
    println!("{:#?}", host);
    println!("Host balance: {}", client.free_balance(&host_id).await?);

    Ok(())
}
