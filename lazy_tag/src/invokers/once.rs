// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-once-on-signal strategy behind the `domReady` and `load` triggers.

use alloc::vec;
use alloc::vec::Vec;

use crate::host::ElementResolver;
use crate::invoker::TriggerInvoker;
use crate::tag::{Tag, TagId};
use crate::trigger::{Signal, Signals};

/// Queues bound tags until its signal arrives, then releases them in binding order.
///
/// States are `waiting` and `fired`; `fired` is terminal. Tags bound after the signal are
/// released immediately. Binding the same tag twice releases it twice.
///
/// ```
/// use lazy_tag::invokers::OnceInvoker;
/// use lazy_tag::trigger::Signal;
///
/// let ready = OnceInvoker::dom_ready();
/// assert_eq!(ready.signal(), Signal::DomReady);
/// assert!(!ready.has_fired());
/// ```
#[derive(Clone, Debug)]
pub struct OnceInvoker {
    signal: Signal,
    pending: Vec<TagId>,
    fired: bool,
}

impl OnceInvoker {
    /// Fire on the first occurrence of `signal`.
    pub fn new(signal: Signal) -> Self {
        Self {
            signal,
            pending: Vec::new(),
            fired: false,
        }
    }

    /// Fire when the document structure is ready.
    pub fn dom_ready() -> Self {
        Self::new(Signal::DomReady)
    }

    /// Fire when every resource has loaded.
    pub fn load() -> Self {
        Self::new(Signal::Load)
    }

    /// The signal this invoker waits for.
    pub fn signal(&self) -> Signal {
        self.signal
    }

    /// True once the signal has arrived.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Tags waiting for the signal, in binding order.
    pub fn pending(&self) -> &[TagId] {
        &self.pending
    }
}

impl<R: ElementResolver + ?Sized> TriggerInvoker<R> for OnceInvoker {
    fn activate(&mut self) -> Signals {
        self.signal.flag()
    }

    fn handle_tag(&mut self, tag: &Tag, _resolver: &R) -> Vec<TagId> {
        if self.fired {
            return vec![tag.id().clone()];
        }
        self.pending.push(tag.id().clone());
        Vec::new()
    }

    fn on_signal(&mut self, signal: Signal, _resolver: &R) -> Vec<TagId> {
        if signal != self.signal || self.fired {
            return Vec::new();
        }
        self.fired = true;
        core::mem::take(&mut self.pending)
    }
}
