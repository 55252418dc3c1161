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

use core::fmt;
use parity_scale_codec::{Decode, Encode};

/// The registry operation a [RegistryError] originates from.
///
/// Displayed as `Entity.method`, which prefixes every failure reason.
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    AccountChangeOwner,
    AccountHostRegister,
    AccountHostRemove,
    AccountDataSet,
    AccountDataRemove,
    HostChangeOwner,
    HostAccountRegister,
    HostAccountRemove,
    CreateAccount,
    CreateHost,
    Transfer,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::AccountChangeOwner => "Account.changeOwner",
            Operation::AccountHostRegister => "Account.hostRegister",
            Operation::AccountHostRemove => "Account.hostRemove",
            Operation::AccountDataSet => "Account.dataSet",
            Operation::AccountDataRemove => "Account.dataRemove",
            Operation::HostChangeOwner => "Host.changeOwner",
            Operation::HostAccountRegister => "Host.accountRegister",
            Operation::HostAccountRemove => "Host.accountRemove",
            Operation::CreateAccount => "Registry.createAccount",
            Operation::CreateHost => "Registry.createHost",
            Operation::Transfer => "Registry.transfer",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors describing failed Registry transactions.
///
/// The [fmt::Display] output is the failure reason reported to the transaction author. Callers
/// branch on it, so the wording must not change.
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// The author is not the current owner of the entity.
    #[error("{0}: message sender not an owner")]
    NotOwner(Operation),

    /// The author fails a role-specific check that is not plain ownership of the entity.
    #[error("{0}: message sender not authorized")]
    NotAuthorized(Operation),

    /// The attached payment is below the fee of the Host.
    #[error("{0}: insufficient fee")]
    InsufficientFee(Operation),

    /// The Account and Host are not linked on the side being modified.
    #[error("{0}: address not registered")]
    NotRegistered(Operation),

    /// A payment was attached to an operation that does not take one.
    #[error("{0}: method is not payable")]
    NonPayable(Operation),

    #[error("{0}: account does not exist")]
    InexistentAccount(Operation),

    #[error("{0}: host does not exist")]
    InexistentHost(Operation),

    /// The author cannot cover the attached payment or transfer.
    #[error("{0}: insufficient balance")]
    InsufficientBalance(Operation),
}

impl RegistryError {
    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match *self {
            RegistryError::NotOwner(op)
            | RegistryError::NotAuthorized(op)
            | RegistryError::InsufficientFee(op)
            | RegistryError::NotRegistered(op)
            | RegistryError::NonPayable(op)
            | RegistryError::InexistentAccount(op)
            | RegistryError::InexistentHost(op)
            | RegistryError::InsufficientBalance(op) => op,
        }
    }

    /// The human-readable failure reason.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reasons() {
        assert_eq!(
            RegistryError::NotOwner(Operation::AccountChangeOwner).reason(),
            "Account.changeOwner: message sender not an owner"
        );
        assert_eq!(
            RegistryError::NotOwner(Operation::AccountHostRegister).reason(),
            "Account.hostRegister: message sender not an owner"
        );
        assert_eq!(
            RegistryError::NotOwner(Operation::AccountHostRemove).reason(),
            "Account.hostRemove: message sender not an owner"
        );
        assert_eq!(
            RegistryError::NotAuthorized(Operation::HostAccountRegister).reason(),
            "Host.accountRegister: message sender not authorized"
        );
        assert_eq!(
            RegistryError::NotAuthorized(Operation::HostAccountRemove).reason(),
            "Host.accountRemove: message sender not authorized"
        );
        assert_eq!(
            RegistryError::InsufficientFee(Operation::AccountHostRegister).reason(),
            "Account.hostRegister: insufficient fee"
        );
    }

    #[test]
    fn operation_of_error() {
        let error = RegistryError::NotRegistered(Operation::HostAccountRemove);
        assert_eq!(error.operation(), Operation::HostAccountRemove);
    }

    #[test]
    fn encode_then_decode() {
        let error = RegistryError::InexistentHost(Operation::AccountHostRegister);
        let decoded = RegistryError::decode(&mut &error.encode()[..]).unwrap();
        assert_eq!(decoded, error);
    }
}
