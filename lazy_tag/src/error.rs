// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by registration, binding, and invocation.

use alloc::string::String;
use core::fmt;

use crate::tag::TagId;
use crate::trigger::TriggerType;

/// Which registry rejected a duplicate registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RegistrationKind {
    /// A tag id was already taken.
    Tag,
    /// An event type already had an invoker.
    EventType,
}

impl fmt::Display for RegistrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tag => "tag id",
            Self::EventType => "event type",
        })
    }
}

/// Errors reported by the [`Dispatcher`](crate::dispatcher::Dispatcher).
///
/// A call that fails leaves every registry and invoker exactly as it was.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tag id or event type is already in use; the first registration is kept.
    #[error("cannot register {kind} `{name}`: already in use")]
    DuplicateRegistration {
        /// Registry that rejected the name.
        kind: RegistrationKind,
        /// The rejected name.
        name: String,
    },
    /// No tag is registered under this id.
    #[error("unknown tag id `{0}`")]
    UnknownTagId(TagId),
    /// No invoker is registered for this event type.
    #[error("unknown event type `{0}`")]
    UnknownEventType(TriggerType),
    /// The tag's selector matched no element at invocation time.
    #[error("cannot invoke tag `{tag}`: no element matches `{selector}`")]
    ContainerNotFound {
        /// Tag being invoked.
        tag: TagId,
        /// Selector that matched nothing.
        selector: String,
    },
}
