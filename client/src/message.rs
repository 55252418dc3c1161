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

//! Defines [Message] trait and implementations for all messages in `host_registry_core::message`.

pub use host_registry_core::message::*;
use host_registry_core::{Address, RegistryError};
use host_registry_runtime::{Call as RuntimeCall, Event, RegistryEvent, SystemEvent};

#[derive(thiserror::Error, Debug)]
pub enum EventExtractionError {
    #[error("ExtrinsicSuccess or ExtrinsicFailed event not found")]
    ExstrinsicStatusMissing,
    #[error("Required event is missing")]
    EventMissing,
}

/// Trait implemented for every runtime message
///
/// For every [RuntimeCall] that is exposed to the user we implement [Message] for the parameters
/// struct of the runtime message.
pub trait Message: Send + 'static {
    /// Output of a successfully applied message.
    ///
    /// This value is extracted from the events that are dispatched when the message is applied.
    type Output: Send + 'static;

    /// Parse all runtime events emitted by the message and return the appropriate message result.
    ///
    /// Returns an error if the event list is not well formed. For example if an expected event is
    /// missing.
    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError>;

    fn into_runtime_call(self) -> RuntimeCall;
}

impl Message for CreateAccount {
    type Output = Address;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::AccountCreated(account_id) => Some(*account_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for CreateHost {
    type Output = Address;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::HostCreated(host_id) => Some(*host_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for ChangeAccountOwner {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::AccountOwnerChanged(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for ChangeHostOwner {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::HostOwnerChanged(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for RegisterHost {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::HostRegistered(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for RemoveHost {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::HostRemoved(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for RegisterAccount {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::AccountRegistered(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for RemoveAccount {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::AccountRemoved(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for SetAccountData {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::AccountDataSet(_, _) => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for RemoveAccountData {
    /// The value stored under the key right before it was removed.
    type Output = Option<String>;

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        extract_registry_result(&events, |event| match event {
            RegistryEvent::AccountDataRemoved(_, _, previous) => Some(previous.clone()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for Transfer {
    type Output = ();

    fn result_from_events(
        events: Vec<Event>,
    ) -> Result<Result<Self::Output, RegistryError>, EventExtractionError> {
        get_dispatch_result(&events)
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

/// Run `f` on all events to extract a potential output after [get_dispatch_result] is successful.
/// If `f` returns `None` for all events an [EventExtractionError::EventMissing] error is returned.
fn extract_registry_result<T>(
    events: &[Event],
    f: impl Fn(&RegistryEvent) -> Option<T>,
) -> Result<Result<T, RegistryError>, EventExtractionError> {
    let dispatch_result = get_dispatch_result(events)?;
    match dispatch_result {
        Ok(()) => {
            let output = events
                .iter()
                .find_map(|event| match event {
                    Event::Registry(registry_event) => f(registry_event),
                    _ => None,
                })
                .ok_or(EventExtractionError::EventMissing)?;
            Ok(Ok(output))
        }
        Err(dispatch_error) => Ok(Err(dispatch_error)),
    }
}

/// Looks for [SystemEvent::ExtrinsicSuccess] and [SystemEvent::ExtrinsicFailed] in the events
/// and constructs the inner result accordingly. Returns an
/// [EventExtractionError::ExstrinsicStatusMissing] error if none of these events is found.
fn get_dispatch_result(
    events: &[Event],
) -> Result<Result<(), RegistryError>, EventExtractionError> {
    events
        .iter()
        .find_map(|event| match event {
            Event::System(SystemEvent::ExtrinsicSuccess) => Some(Ok(())),
            Event::System(SystemEvent::ExtrinsicFailed(error)) => Some(Err(*error)),
            _ => None,
        })
        .ok_or(EventExtractionError::ExstrinsicStatusMissing)
}

#[cfg(test)]
mod test {
    use super::*;
    use host_registry_core::Operation;

    #[test]
    fn remove_account_data_output() {
        let account_id = Address::from_raw([1u8; 32]);
        let events = vec![
            RegistryEvent::AccountDataRemoved(account_id, "name".into(), Some("Jain".into()))
                .into(),
            Event::System(SystemEvent::ExtrinsicSuccess),
        ];
        let result = RemoveAccountData::result_from_events(events).unwrap();
        assert_eq!(result, Ok(Some("Jain".to_string())));
    }

    #[test]
    fn extrinsic_failed_error() {
        let error = RegistryError::NotAuthorized(Operation::HostAccountRegister);
        let events = vec![Event::System(SystemEvent::ExtrinsicFailed(error))];
        let result = RegisterAccount::result_from_events(events).unwrap();
        assert_eq!(result, Err(error));
    }

    #[test]
    fn empty_events_error() {
        let result = Transfer::result_from_events(vec![]);
        assert!(matches!(
            result,
            Err(EventExtractionError::ExstrinsicStatusMissing)
        ));
    }

    #[test]
    fn missing_registry_event_error() {
        let events = vec![Event::System(SystemEvent::ExtrinsicSuccess)];
        let result = CreateHost::result_from_events(events);
        assert!(matches!(result, Err(EventExtractionError::EventMissing)));
    }
}
