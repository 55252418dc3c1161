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

use crate::fees::Payment;
use crate::storage::Storage;
use crate::store::{self, StorageMap as _};
use crate::{Address, Balance, Operation, RegistryError};

/// The balance of `who`. Addresses that never received funds have a balance of zero.
pub fn free_balance<S: Storage + ?Sized>(storage: &S, who: &Address) -> Balance {
    store::Balances::get(storage, who).unwrap_or(0)
}

/// Move `amount` from `from` to `to`.
///
/// Fails with [RegistryError::InsufficientBalance] attributed to `operation` if `from` holds less
/// than `amount`. Nothing is changed in that case.
pub fn transfer<S: Storage + ?Sized>(
    storage: &mut S,
    from: &Address,
    to: &Address,
    amount: Balance,
    operation: Operation,
) -> Result<(), RegistryError> {
    let from_balance = free_balance(storage, from)
        .checked_sub(amount)
        .ok_or(RegistryError::InsufficientBalance(operation))?;
    if from == to {
        return Ok(());
    }
    set_balance(storage, from, from_balance);
    let to_balance = free_balance(storage, to).saturating_add(amount);
    set_balance(storage, to, to_balance);
    Ok(())
}

/// Pay the Host `host_id` by withdrawing the whole `payment` from `payer`.
pub fn pay<S: Storage + ?Sized>(
    storage: &mut S,
    payer: &Address,
    host_id: &Address,
    payment: &Payment,
    operation: Operation,
) -> Result<(), RegistryError> {
    transfer(storage, payer, host_id, payment.total(), operation)
}

fn set_balance<S: Storage + ?Sized>(storage: &mut S, who: &Address, balance: Balance) {
    if balance == 0 {
        store::Balances::remove(storage, who)
    } else {
        store::Balances::insert(storage, who, &balance)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn transfer_moves_funds() {
        let mut storage = MemoryStorage::new();
        let alice = Address::from_raw([1u8; 32]);
        let bob = Address::from_raw([2u8; 32]);
        store::Balances::insert(&mut storage, &alice, &100);

        transfer(&mut storage, &alice, &bob, 30, Operation::Transfer).unwrap();
        assert_eq!(free_balance(&storage, &alice), 70);
        assert_eq!(free_balance(&storage, &bob), 30);

        transfer(&mut storage, &alice, &bob, 70, Operation::Transfer).unwrap();
        assert_eq!(free_balance(&storage, &alice), 0);
        assert!(!store::Balances::contains_key(&storage, &alice));
    }

    #[test]
    fn transfer_insufficient_balance() {
        let mut storage = MemoryStorage::new();
        let alice = Address::from_raw([1u8; 32]);
        let bob = Address::from_raw([2u8; 32]);
        store::Balances::insert(&mut storage, &alice, &10);

        assert_eq!(
            transfer(&mut storage, &alice, &bob, 11, Operation::Transfer),
            Err(RegistryError::InsufficientBalance(Operation::Transfer))
        );
        assert_eq!(free_balance(&storage, &alice), 10);
        assert_eq!(free_balance(&storage, &bob), 0);
    }

    #[test]
    fn pay_host() {
        let mut storage = MemoryStorage::new();
        let alice = Address::from_raw([1u8; 32]);
        let host_id = Address::from_raw([3u8; 32]);
        store::Balances::insert(&mut storage, &alice, &500);

        let payment = Payment::new(150, 100).unwrap();
        pay(
            &mut storage,
            &alice,
            &host_id,
            &payment,
            Operation::AccountHostRegister,
        )
        .unwrap();
        assert_eq!(free_balance(&storage, &alice), 350);
        assert_eq!(free_balance(&storage, &host_id), 150);
    }
}
