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

//! The dispatchable calls of the registry. Every variant wraps one [message] struct.

use parity_scale_codec::{Decode, Encode};

use host_registry_core::{message, Operation};

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Call {
    CreateAccount(message::CreateAccount),
    CreateHost(message::CreateHost),
    ChangeAccountOwner(message::ChangeAccountOwner),
    ChangeHostOwner(message::ChangeHostOwner),
    RegisterHost(message::RegisterHost),
    RemoveHost(message::RemoveHost),
    RegisterAccount(message::RegisterAccount),
    RemoveAccount(message::RemoveAccount),
    SetAccountData(message::SetAccountData),
    RemoveAccountData(message::RemoveAccountData),
    Transfer(message::Transfer),
}

impl Call {
    /// The operation failures of this call are attributed to.
    pub fn operation(&self) -> Operation {
        match self {
            Call::CreateAccount(_) => Operation::CreateAccount,
            Call::CreateHost(_) => Operation::CreateHost,
            Call::ChangeAccountOwner(_) => Operation::AccountChangeOwner,
            Call::ChangeHostOwner(_) => Operation::HostChangeOwner,
            Call::RegisterHost(_) => Operation::AccountHostRegister,
            Call::RemoveHost(_) => Operation::AccountHostRemove,
            Call::RegisterAccount(_) => Operation::HostAccountRegister,
            Call::RemoveAccount(_) => Operation::HostAccountRemove,
            Call::SetAccountData(_) => Operation::AccountDataSet,
            Call::RemoveAccountData(_) => Operation::AccountDataRemove,
            Call::Transfer(_) => Operation::Transfer,
        }
    }

    /// Only payable calls accept a non-zero transaction value.
    pub fn is_payable(&self) -> bool {
        matches!(self, Call::RegisterHost(_) | Call::RegisterAccount(_))
    }
}

macro_rules! impl_from_message {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<message::$variant> for Call {
                fn from(message: message::$variant) -> Self {
                    Call::$variant(message)
                }
            }
        )*
    };
}

impl_from_message!(
    CreateAccount,
    CreateHost,
    ChangeAccountOwner,
    ChangeHostOwner,
    RegisterHost,
    RemoveHost,
    RegisterAccount,
    RemoveAccount,
    SetAccountData,
    RemoveAccountData,
    Transfer,
);
