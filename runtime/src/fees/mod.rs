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

//! Registration fees and balance transfers.

use crate::Balance;

mod payment;

pub use payment::{free_balance, pay, transfer};

/// Payment
///
/// A Payment is the value a transaction author attaches to a registration. It
/// must cover the fee of the Host. Whatever is left after deducting the fee is
/// the surplus, which is paid to the Host as well.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub fee: Balance,
    pub surplus: Balance,
}

impl Payment {
    /// Create a Payment of `value` towards `fee`.
    /// Fail when `value` is insufficient to cover the fee.
    pub fn new(value: Balance, fee: Balance) -> Option<Self> {
        value
            .checked_sub(fee)
            .map(|surplus| Self { fee, surplus })
    }

    /// The full amount moved from the author to the Host.
    pub fn total(&self) -> Balance {
        self.fee + self.surplus
    }
}
