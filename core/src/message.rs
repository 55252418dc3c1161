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

//! Transaction related types used in the Host Registry.

use crate::{Address, Balance};
use parity_scale_codec::{Decode, Encode};

/// Create an Account owned by `owner`.
///
/// The Account address is derived from the transaction author and nonce.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateAccount {
    pub owner: Address,
}

/// Create a Host owned by `owner` that charges `fee` for every account registration.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateHost {
    pub owner: Address,
    pub fee: Balance,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ChangeAccountOwner {
    pub account: Address,
    pub new_owner: Address,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ChangeHostOwner {
    pub host: Address,
    pub new_owner: Address,
}

/// `Account.hostRegister`: link `account` to `host`, authored by the account owner.
///
/// Payable. The attached value must cover the fee of the host.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RegisterHost {
    pub account: Address,
    pub host: Address,
}

/// `Account.hostRemove`: unlink `host` from `account`, authored by the account owner.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RemoveHost {
    pub account: Address,
    pub host: Address,
}

/// `Host.accountRegister`: link `account` to `host`, authored by the account owner.
///
/// Payable. The attached value must cover the fee of the host.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RegisterAccount {
    pub host: Address,
    pub account: Address,
}

/// `Host.accountRemove`: unlink `account` from `host`, authored by the host owner.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RemoveAccount {
    pub host: Address,
    pub account: Address,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetAccountData {
    pub account: Address,
    pub key: String,
    pub value: String,
}

/// Delete `key` from the data of `account`. The result is the value stored before.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RemoveAccountData {
    pub account: Address,
    pub key: String,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub recipient: Address,
    pub balance: Balance,
}
