// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trigger strategy capability.
//!
//! ## Protocol
//!
//! 1) [`activate`](TriggerInvoker::activate) runs once, when the invoker is registered with a
//!    [`Dispatcher`](crate::dispatcher::Dispatcher). It returns the [`Signals`] the invoker
//!    listens to; this is its listener attachment.
//! 2) [`handle_tag`](TriggerInvoker::handle_tag) runs for every binding of a tag to the
//!    invoker's event type.
//! 3) [`on_signal`](TriggerInvoker::on_signal) runs for every subscribed signal the host reports.
//!
//! Steps 2 and 3 return the ids of the tags that are due *now*, in firing order.
//! The invoker never injects anything itself; the dispatcher performs the invocation.
//! An invoker must report each bound tag at most once per binding.

use alloc::vec::Vec;

use crate::host::ElementResolver;
use crate::tag::{Tag, TagId};
use crate::trigger::{Signal, Signals};

/// Decides when the tags bound to one trigger type fire.
///
/// The built-ins are [`OnceInvoker`](crate::invokers::OnceInvoker) (document ready, window
/// load) and [`VisibilityInvoker`](crate::invokers::VisibilityInvoker). Host code can register
/// its own with [`Dispatcher::register_event`](crate::dispatcher::Dispatcher::register_event).
pub trait TriggerInvoker<R: ElementResolver + ?Sized> {
    /// Attach to the environment. Called exactly once; returns the signals to deliver.
    fn activate(&mut self) -> Signals;

    /// Take a newly bound tag. Returns tags due immediately (for example when the trigger
    /// already happened).
    fn handle_tag(&mut self, tag: &Tag, resolver: &R) -> Vec<TagId>;

    /// React to a subscribed signal. Returns tags due now.
    fn on_signal(&mut self, signal: Signal, resolver: &R) -> Vec<TagId>;
}
