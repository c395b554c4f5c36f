// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tag and event-type registries.
//!
//! Both reject duplicates instead of overwriting, and a rejected registration leaves the
//! registry untouched.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::error::{Error, RegistrationKind};
use crate::host::ElementResolver;
use crate::invoker::TriggerInvoker;
use crate::tag::{Tag, TagId};
use crate::trigger::{Signal, Signals, TriggerType};

/// Tag id → [`Tag`].
#[derive(Clone, Debug, Default)]
pub struct TagRegistry {
    tags: BTreeMap<TagId, Tag>,
}

impl TagRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `tag` unless its id is taken.
    pub fn register(&mut self, tag: Tag) -> Result<&Tag, Error> {
        if self.tags.contains_key(tag.id().as_str()) {
            return Err(Error::DuplicateRegistration {
                kind: RegistrationKind::Tag,
                name: tag.id().as_str().into(),
            });
        }
        Ok(self.tags.entry(tag.id().clone()).or_insert(tag))
    }

    /// The tag registered under `id`.
    pub fn get(&self, id: &str) -> Option<&Tag> {
        self.tags.get(id)
    }

    /// True if `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.tags.contains_key(id)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True if no tag is registered.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

struct EventEntry<R: ElementResolver> {
    trigger: TriggerType,
    signals: Signals,
    invoker: Box<dyn TriggerInvoker<R>>,
}

/// Event type → the one [`TriggerInvoker`] serving it, kept in registration order.
pub struct EventTypeRegistry<R: ElementResolver> {
    entries: Vec<EventEntry<R>>,
    by_type: BTreeMap<TriggerType, usize>,
}

impl<R: ElementResolver> core::fmt::Debug for EventTypeRegistry<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.trigger, e.signals)))
            .finish()
    }
}

impl<R: ElementResolver> Default for EventTypeRegistry<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_type: BTreeMap::new(),
        }
    }
}

impl<R: ElementResolver> EventTypeRegistry<R> {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store and activate `invoker` unless `trigger` is taken.
    ///
    /// A rejected invoker is dropped without being activated. Returns the signals the
    /// invoker subscribed to.
    pub fn register(
        &mut self,
        trigger: TriggerType,
        mut invoker: Box<dyn TriggerInvoker<R>>,
    ) -> Result<Signals, Error> {
        if self.by_type.contains_key(trigger.as_str()) {
            return Err(Error::DuplicateRegistration {
                kind: RegistrationKind::EventType,
                name: trigger.as_str().into(),
            });
        }
        let signals = invoker.activate();
        self.by_type.insert(trigger.clone(), self.entries.len());
        self.entries.push(EventEntry {
            trigger,
            signals,
            invoker,
        });
        Ok(signals)
    }

    /// True if `trigger` has an invoker.
    pub fn contains(&self, trigger: &str) -> bool {
        self.by_type.contains_key(trigger)
    }

    /// The invoker serving `trigger`.
    pub fn get_mut(&mut self, trigger: &str) -> Option<&mut dyn TriggerInvoker<R>> {
        let idx = *self.by_type.get(trigger)?;
        Some(self.entries[idx].invoker.as_mut())
    }

    /// Registered event types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &TriggerType> {
        self.entries.iter().map(|e| &e.trigger)
    }

    /// Invokers subscribed to `signal`, in registration order.
    pub fn subscribers_mut(
        &mut self,
        signal: Signal,
    ) -> impl Iterator<Item = (&TriggerType, &mut dyn TriggerInvoker<R>)> {
        self.entries
            .iter_mut()
            .filter(move |e| e.signals.contains(signal.flag()))
            .map(|e| (&e.trigger, e.invoker.as_mut() as &mut dyn TriggerInvoker<R>))
    }

    /// Number of registered event types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no event type is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
