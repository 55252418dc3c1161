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

//! Getting started with the client by transfering funds.
//!
//! We’re transferring some funds from Alice to Bob and will inspect the ledger state. The ledger
//! is emulated in memory and Alice is endowed with funds in its genesis state.

use host_registry_client::*;

#[async_std::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // Create a key pair to author transactions from some seed data. This address is initialized
    // with funds in the development genesis state.
    let alice = KeyPair::from_string("//Alice");
    println!("Sending funds from //Alice ({})", alice.public());

    // The receiver of the money transfer is Bob. We only need the public key
    let bob_public = KeyPair::from_string("//Bob").public();
    println!("Recipient: //Bob ({})", bob_public);

    let (client, _) = Client::new_emulator();

    // Show balances of Alice’s and Bob’s addresses
    let balance_alice = client.free_balance(&alice.public()).await?;
    println!("Balance Alice: {}", balance_alice);
    let balance_bob = client.free_balance(&bob_public).await?;
    println!("Balance Bob:   {}", balance_bob);

    // Sign and submit the message. If successful, returns a future that
    // resolves when the transaction is applied.
    print!("Submitting transfer transaction... ");
    let transfer_submitted = client
        .sign_and_submit_message(
            &alice,
            message::Transfer {
                recipient: bob_public,
                balance: 1,
            },
            0,
        )
        .await?;
    println!("done");

    let transfer_applied = transfer_submitted.await?;
    println!("Transaction {} applied", hex::encode(transfer_applied.tx_hash));

    // We can also use it to get result of applying the transaction in the ledger. This might fail
    // for example if the transaction author does not have the necessary funds.
    match transfer_applied.result {
        Ok(()) => println!("Funds successfully transferred!"),
        Err(err) => println!("Failed to transfer funds: {}", err),
    }

    // Show the new balances and the nonce Alice has to use for her next transaction
    let balance_alice = client.free_balance(&alice.public()).await?;
    println!("Balance Alice: {}", balance_alice);
    let balance_bob = client.free_balance(&bob_public).await?;
    println!("Balance Bob:   {}", balance_bob);
    println!("Nonce Alice:   {}", client.account_nonce(&alice.public()).await?);

    // A transfer that exceeds the balance of the author is applied but fails. The ledger state is
    // unchanged apart from the nonce of the author.
    let bob = KeyPair::from_string("//Bob");
    let overdrawn = client
        .sign_and_submit_message(
            &bob,
            message::Transfer {
                recipient: alice.public(),
                balance: balance_bob + 1,
            },
            0,
        )
        .await?
        .await?;
    if let Err(err) = overdrawn.result {
        println!("Bob cannot overdraw: {}", err);
    }

    Ok(())
}
