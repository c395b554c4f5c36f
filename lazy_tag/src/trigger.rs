// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger types and environment signals.
//!
//! A [`TriggerType`] names a strategy registered with the dispatcher (`"domReady"`, `"load"`,
//! `"visible"`, or anything custom). A [`Signal`] is what the host environment reports;
//! invokers subscribe to a [`Signals`] set when they are activated.

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// Name of a trigger strategy. Open-ended: new names come from registering new invokers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerType(String);

impl TriggerType {
    /// Built-in trigger firing once the document structure is ready.
    pub const DOM_READY: &'static str = "domReady";
    /// Built-in trigger firing once every resource has loaded.
    pub const LOAD: &'static str = "load";
    /// Built-in trigger firing once the container scrolls into view.
    pub const VISIBLE: &'static str = "visible";

    /// Wrap a trigger name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TriggerType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TriggerType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TriggerType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A signal reported by the host environment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Signal {
    /// Document structure is ready. One-shot.
    DomReady,
    /// All resources finished loading. One-shot.
    Load,
    /// The viewport scrolled. Repeatable.
    Scroll,
    /// The viewport was resized. Repeatable.
    Resize,
}

impl Signal {
    /// True for signals the environment reports at most once per page.
    pub const fn is_one_shot(self) -> bool {
        matches!(self, Self::DomReady | Self::Load)
    }

    /// The single-member [`Signals`] set for this signal.
    pub const fn flag(self) -> Signals {
        match self {
            Self::DomReady => Signals::DOM_READY,
            Self::Load => Signals::LOAD,
            Self::Scroll => Signals::SCROLL,
            Self::Resize => Signals::RESIZE,
        }
    }
}

impl From<Signal> for Signals {
    fn from(signal: Signal) -> Self {
        signal.flag()
    }
}

bitflags::bitflags! {
    /// A set of [`Signal`]s, used for listener subscriptions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Signals: u8 {
        /// [`Signal::DomReady`].
        const DOM_READY = 0b0000_0001;
        /// [`Signal::Load`].
        const LOAD      = 0b0000_0010;
        /// [`Signal::Scroll`].
        const SCROLL    = 0b0000_0100;
        /// [`Signal::Resize`].
        const RESIZE    = 0b0000_1000;
    }
}
