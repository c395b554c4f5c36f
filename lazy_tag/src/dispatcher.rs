// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatcher facade.
//!
//! ## Overview
//!
//! Composes the [`TagRegistry`] and the [`EventTypeRegistry`], forwards bindings to
//! invokers, routes host signals to the invokers subscribed to them, and performs the
//! invocation (clear the container, inject the markup) for every tag an invoker reports due.
//!
//! ## Signals
//!
//! The host calls [`Dispatcher::notify`] for each environment event. One-shot signals
//! ([`Signal::DomReady`], [`Signal::Load`]) are delivered at most once; repeats are ignored.
//! Signals delivered before an invoker was registered are not replayed to it.
//!
//! ## Failures
//!
//! Every failure is returned as an [`Error`] and logged with `tracing::warn!`.
//! A missing container during [`notify`](Dispatcher::notify) fails only that tag's
//! [`Invocation`]; the remaining due tags still run.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::host::Host;
use crate::invoker::TriggerInvoker;
use crate::invokers::{OnceInvoker, VisibilityInvoker};
use crate::registry::{EventTypeRegistry, TagRegistry};
use crate::settings::Settings;
use crate::tag::{Tag, TagId};
use crate::trigger::{Signal, Signals, TriggerType};

/// Outcome of one tag invocation caused by a binding or a signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Event type whose invoker reported the tag due.
    pub trigger: TriggerType,
    /// The tag.
    pub tag: TagId,
    /// `Ok` if the markup was injected.
    pub result: Result<(), Error>,
}

/// Registers tags and trigger strategies, and invokes tags when their triggers fire.
///
/// One dispatcher serves one page or application context. It owns all state; hosts drive
/// it by calling [`notify`](Self::notify) and pass themselves in wherever elements must be
/// resolved or markup injected.
pub struct Dispatcher<H: Host> {
    settings: Settings,
    events: EventTypeRegistry<H>,
    tags: TagRegistry,
    delivered: Signals,
}

impl<H: Host> core::fmt::Debug for Dispatcher<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("settings", &self.settings)
            .field("events", &self.events)
            .field("tags", &self.tags.len())
            .field("delivered", &self.delivered)
            .finish()
    }
}

impl<H: Host> Default for Dispatcher<H> {
    fn default() -> Self {
        Self::with_builtins(Settings::default())
    }
}

impl<H: Host> Dispatcher<H> {
    /// An empty dispatcher: no event types, no tags.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            events: EventTypeRegistry::new(),
            tags: TagRegistry::new(),
            delivered: Signals::empty(),
        }
    }

    /// A dispatcher with `"domReady"`, `"load"`, and `"visible"` already registered.
    pub fn with_builtins(settings: Settings) -> Self {
        let mut d = Self::new(settings);
        d.register_builtin(TriggerType::DOM_READY, OnceInvoker::dom_ready());
        d.register_builtin(TriggerType::LOAD, OnceInvoker::load());
        d.register_builtin(
            TriggerType::VISIBLE,
            VisibilityInvoker::with_options(settings.visibility),
        );
        d
    }

    fn register_builtin(&mut self, name: &str, invoker: impl TriggerInvoker<H> + 'static) {
        let registered = self.register_event(name, invoker);
        debug_assert!(registered.is_ok(), "built-in `{name}` registered twice");
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// True if `trigger` has an invoker.
    pub fn has_event(&self, trigger: &str) -> bool {
        self.events.contains(trigger)
    }

    /// True if a tag is registered under `id`.
    pub fn has_tag(&self, id: &str) -> bool {
        self.tags.contains(id)
    }

    /// The tag registered under `id`.
    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.get(id)
    }

    /// Registered event types in registration order.
    pub fn event_types(&self) -> impl Iterator<Item = &TriggerType> {
        self.events.types()
    }

    /// One-shot signals already delivered.
    pub fn delivered(&self) -> Signals {
        self.delivered
    }

    /// Register and activate an invoker for `trigger`.
    ///
    /// Fails with [`Error::DuplicateRegistration`] if `trigger` is taken; the existing invoker
    /// stays and `invoker` is dropped without being activated.
    pub fn register_event<I>(&mut self, trigger: impl Into<TriggerType>, invoker: I) -> Result<(), Error>
    where
        I: TriggerInvoker<H> + 'static,
    {
        let trigger = trigger.into();
        match self.events.register(trigger.clone(), Box::new(invoker)) {
            Ok(signals) => {
                tracing::debug!(%trigger, ?signals, "registered event type");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%trigger, "{err}; ignoring");
                Err(err)
            }
        }
    }

    /// Register a tag and return a copy of it.
    ///
    /// Fails with [`Error::DuplicateRegistration`] if `id` is taken; the first tag stays.
    pub fn register_tag(
        &mut self,
        id: impl Into<TagId>,
        selector: impl Into<String>,
        html: impl Into<String>,
    ) -> Result<Tag, Error> {
        match self.tags.register(Tag::new(id, selector, html)) {
            Ok(tag) => {
                tracing::debug!(tag = %tag.id(), selector = tag.selector(), "registered tag");
                Ok(tag.clone())
            }
            Err(err) => {
                tracing::warn!("{err}; ignoring");
                Err(err)
            }
        }
    }

    /// Bind a registered tag to a registered event type.
    ///
    /// Both names are validated before the invoker sees anything. If the invoker reports the
    /// tag due right away (its trigger already happened), it is invoked before returning.
    pub fn bind_tag_to_event(
        &mut self,
        trigger: &str,
        tag_id: &str,
        host: &mut H,
    ) -> Result<Vec<Invocation>, Error> {
        let Some(invoker) = self.events.get_mut(trigger) else {
            let err = Error::UnknownEventType(trigger.into());
            tracing::warn!("{err}; ignoring binding of `{tag_id}`");
            return Err(err);
        };
        let Some(tag) = self.tags.get(tag_id) else {
            let err = Error::UnknownTagId(tag_id.into());
            tracing::warn!("{err}; ignoring binding to `{trigger}`");
            return Err(err);
        };
        tracing::debug!(tag = tag_id, trigger, "bound tag");
        let due = invoker.handle_tag(tag, host);
        let trigger = TriggerType::from(trigger);
        Ok(due
            .into_iter()
            .map(|id| invoke_due(&self.tags, &self.settings, host, &trigger, id))
            .collect())
    }

    /// Deliver an environment signal to every invoker subscribed to it, then invoke whatever
    /// they report due, invoker by invoker in registration order.
    pub fn notify(&mut self, signal: Signal, host: &mut H) -> Vec<Invocation> {
        if signal.is_one_shot() {
            if self.delivered.contains(signal.flag()) {
                tracing::trace!(?signal, "one-shot signal already delivered; ignoring");
                return Vec::new();
            }
            self.delivered |= signal.flag();
        }
        let mut out = Vec::new();
        for (trigger, invoker) in self.events.subscribers_mut(signal) {
            let due = invoker.on_signal(signal, host);
            if !due.is_empty() {
                tracing::debug!(?signal, %trigger, count = due.len(), "tags due");
            }
            out.extend(
                due.into_iter()
                    .map(|id| invoke_due(&self.tags, &self.settings, host, trigger, id)),
            );
        }
        out
    }

    /// Invoke a tag directly: resolve its container, clear it (per settings), inject the markup.
    ///
    /// Embedded scripts run as a side effect; treat this as a one-shot action.
    pub fn invoke(&self, tag_id: &str, host: &mut H) -> Result<(), Error> {
        invoke_tag(&self.tags, &self.settings, host, tag_id)
    }
}

fn invoke_due<H: Host>(
    tags: &TagRegistry,
    settings: &Settings,
    host: &mut H,
    trigger: &TriggerType,
    id: TagId,
) -> Invocation {
    let result = invoke_tag(tags, settings, host, id.as_str());
    Invocation {
        trigger: trigger.clone(),
        tag: id,
        result,
    }
}

fn invoke_tag<H: Host>(
    tags: &TagRegistry,
    settings: &Settings,
    host: &mut H,
    tag_id: &str,
) -> Result<(), Error> {
    let Some(tag) = tags.get(tag_id) else {
        let err = Error::UnknownTagId(tag_id.into());
        tracing::warn!("{err}; ignoring");
        return Err(err);
    };
    let Some(container) = host.query_selector(tag.selector()) else {
        let err = Error::ContainerNotFound {
            tag: tag.id().clone(),
            selector: tag.selector().into(),
        };
        tracing::warn!("{err}");
        return Err(err);
    };
    if settings.clear_container {
        host.clear(container);
    }
    host.inject(container, tag.html());
    tracing::debug!(tag = tag_id, ?container, "invoked tag");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistrationKind;
    use crate::test_host::MockHost;
    use alloc::vec;
    use kurbo::Rect;

    fn host() -> MockHost {
        let mut h = MockHost::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let body = h.add("body", None, Rect::new(0.0, 0.0, 800.0, 4000.0));
        h.add("#a", Some(body), Rect::new(0.0, 0.0, 100.0, 100.0));
        h.add("#b", Some(body), Rect::new(0.0, 200.0, 100.0, 300.0));
        h.add("#far", Some(body), Rect::new(0.0, 2000.0, 100.0, 2100.0));
        h
    }

    fn dispatcher() -> Dispatcher<MockHost> {
        Dispatcher::with_builtins(Settings::default())
    }

    fn tags_of(out: &[Invocation]) -> Vec<&str> {
        out.iter().map(|i| i.tag.as_str()).collect()
    }

    #[test]
    fn builtins_are_registered_in_order() {
        let d = dispatcher();
        let names: Vec<&str> = d.event_types().map(TriggerType::as_str).collect();
        assert_eq!(names, ["domReady", "load", "visible"]);
        assert!(d.has_event("load"));
        assert!(!d.has_event("idle"));
        assert!(Dispatcher::<MockHost>::new(Settings::default())
            .event_types()
            .next()
            .is_none());
    }

    #[test]
    fn distinct_tags_invoke_independently() {
        let mut h = host();
        let mut d = dispatcher();
        d.register_tag("t1", "#a", "<p>one</p>").unwrap();
        d.register_tag("t2", "#b", "<p>two</p>").unwrap();
        d.invoke("t2", &mut h).unwrap();
        d.invoke("t1", &mut h).unwrap();
        assert_eq!(h.html("#a"), "<p>one</p>");
        assert_eq!(h.html("#b"), "<p>two</p>");
        assert_eq!(
            h.injected,
            vec![("#b", "<p>two</p>".into()), ("#a", "<p>one</p>".into())]
        );
    }

    #[test]
    fn register_tag_returns_the_tag() {
        let mut d = dispatcher();
        let tag = d.register_tag("banner", "#a", "<img src=x>").unwrap();
        assert_eq!(tag.id().as_str(), "banner");
        assert_eq!(d.tag("banner"), Some(&tag));
        let err = d.register_tag("banner", "#b", "other").unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateRegistration {
                kind: RegistrationKind::Tag,
                name: "banner".into()
            }
        );
        assert_eq!(d.tag("banner").unwrap().selector(), "#a");
    }

    #[test]
    fn duplicate_event_type_keeps_first_invoker() {
        let mut h = host();
        let mut d = dispatcher();
        // A second "load" that would fire on DomReady; it must never take effect.
        let err = d
            .register_event("load", OnceInvoker::dom_ready())
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateRegistration { .. }));
        d.register_tag("t1", "#a", "x").unwrap();
        d.bind_tag_to_event("load", "t1", &mut h).unwrap();
        assert!(d.notify(Signal::DomReady, &mut h).is_empty());
        assert_eq!(tags_of(&d.notify(Signal::Load, &mut h)), ["t1"]);
    }

    #[test]
    fn binding_validates_before_touching_invokers() {
        let mut h = host();
        let mut d = dispatcher();
        d.register_tag("t1", "#a", "x").unwrap();
        assert_eq!(
            d.bind_tag_to_event("idle", "t1", &mut h).unwrap_err(),
            Error::UnknownEventType("idle".into())
        );
        assert_eq!(
            d.bind_tag_to_event("load", "nope", &mut h).unwrap_err(),
            Error::UnknownTagId("nope".into())
        );
        // Nothing was queued by the failed binding.
        assert!(d.notify(Signal::Load, &mut h).is_empty());
        assert!(h.injected.is_empty());
    }

    #[test]
    fn load_fires_queued_tags_in_binding_order_once() {
        let mut h = host();
        let mut d = dispatcher();
        for (id, sel) in [("t3", "#b"), ("t1", "#a"), ("t2", "#far")] {
            d.register_tag(id, sel, id).unwrap();
            assert!(d.bind_tag_to_event("load", id, &mut h).unwrap().is_empty());
        }
        assert!(d.notify(Signal::DomReady, &mut h).is_empty());
        let out = d.notify(Signal::Load, &mut h);
        assert_eq!(tags_of(&out), ["t3", "t1", "t2"]);
        assert!(out.iter().all(|i| i.result.is_ok() && i.trigger.as_str() == "load"));
        assert!(d.delivered().contains(Signals::LOAD));

        // Repeated load signals are ignored.
        assert!(d.notify(Signal::Load, &mut h).is_empty());
        assert_eq!(h.injected.len(), 3);
    }

    #[test]
    fn binding_after_ready_invokes_immediately() {
        let mut h = host();
        let mut d = dispatcher();
        assert!(d.notify(Signal::DomReady, &mut h).is_empty());
        d.register_tag("late", "#a", "<b>late</b>").unwrap();
        let out = d.bind_tag_to_event("domReady", "late", &mut h).unwrap();
        assert_eq!(
            out,
            vec![Invocation {
                trigger: "domReady".into(),
                tag: "late".into(),
                result: Ok(()),
            }]
        );
        assert_eq!(h.html("#a"), "<b>late</b>");
        assert!(d.notify(Signal::DomReady, &mut h).is_empty());
        assert_eq!(h.injected.len(), 1);
    }

    #[test]
    fn missing_container_fails_only_that_tag() {
        let mut h = host();
        let mut d = dispatcher();
        d.register_tag("ghost", "#nowhere", "boo").unwrap();
        d.register_tag("real", "#a", "ok").unwrap();
        d.bind_tag_to_event("load", "ghost", &mut h).unwrap();
        d.bind_tag_to_event("load", "real", &mut h).unwrap();
        let out = d.notify(Signal::Load, &mut h);
        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0].result,
            Err(Error::ContainerNotFound {
                tag: "ghost".into(),
                selector: "#nowhere".into()
            })
        );
        assert_eq!(out[1].result, Ok(()));
        assert_eq!(h.html("#a"), "ok");
    }

    #[test]
    fn invoke_unknown_tag_is_an_error() {
        let mut h = host();
        let d = dispatcher();
        assert_eq!(
            d.invoke("never", &mut h),
            Err(Error::UnknownTagId("never".into()))
        );
        assert_eq!(
            d.invoke("never", &mut h),
            Err(Error::UnknownTagId("never".into()))
        );
    }

    #[test]
    fn clear_container_setting_controls_clearing() {
        let mut h = host();
        let mut d = dispatcher();
        d.register_tag("t1", "#a", "x").unwrap();
        d.invoke("t1", &mut h).unwrap();
        d.invoke("t1", &mut h).unwrap();
        assert_eq!(h.html("#a"), "x");
        assert_eq!(h.clears, 2);

        let mut h = host();
        let mut keep = Dispatcher::with_builtins(Settings {
            clear_container: false,
            ..Default::default()
        });
        keep.register_tag("t1", "#a", "x").unwrap();
        keep.invoke("t1", &mut h).unwrap();
        keep.invoke("t1", &mut h).unwrap();
        assert_eq!(h.html("#a"), "xx");
        assert_eq!(h.clears, 0);
    }

    #[test]
    fn one_tag_bound_to_two_triggers_fires_per_binding() {
        let mut h = host();
        let mut d = dispatcher();
        d.register_tag("both", "#a", "x").unwrap();
        d.bind_tag_to_event("domReady", "both", &mut h).unwrap();
        d.bind_tag_to_event("visible", "both", &mut h).unwrap();
        assert_eq!(tags_of(&d.notify(Signal::DomReady, &mut h)), ["both"]);
        assert_eq!(tags_of(&d.notify(Signal::Scroll, &mut h)), ["both"]);
        assert!(d.notify(Signal::Scroll, &mut h).is_empty());
        assert_eq!(h.injected.len(), 2);
    }

    #[test]
    fn visible_fires_once_scrolled_into_view() {
        let mut h = host();
        let mut d = dispatcher();
        d.register_tag("far", "#far", "<p>far</p>").unwrap();
        d.bind_tag_to_event("visible", "far", &mut h).unwrap();
        assert!(d.notify(Signal::Scroll, &mut h).is_empty());
        h.scroll_to(0.0, 1600.0);
        assert_eq!(tags_of(&d.notify(Signal::Scroll, &mut h)), ["far"]);
        h.scroll_to(0.0, 0.0);
        assert!(d.notify(Signal::Scroll, &mut h).is_empty());
        h.scroll_to(0.0, 1600.0);
        assert!(d.notify(Signal::Scroll, &mut h).is_empty());
    }

    #[test]
    fn custom_invokers_plug_in() {
        /// Fires every bound tag on the first resize.
        #[derive(Default)]
        struct OnResize(Vec<TagId>);

        impl TriggerInvoker<MockHost> for OnResize {
            fn activate(&mut self) -> Signals {
                Signals::RESIZE
            }
            fn handle_tag(&mut self, tag: &Tag, _r: &MockHost) -> Vec<TagId> {
                self.0.push(tag.id().clone());
                Vec::new()
            }
            fn on_signal(&mut self, _s: Signal, _r: &MockHost) -> Vec<TagId> {
                core::mem::take(&mut self.0)
            }
        }

        let mut h = host();
        let mut d = dispatcher();
        d.register_event("resize", OnResize::default()).unwrap();
        d.register_tag("t1", "#a", "x").unwrap();
        d.bind_tag_to_event("resize", "t1", &mut h).unwrap();
        assert!(d.notify(Signal::Scroll, &mut h).is_empty());
        let out = d.notify(Signal::Resize, &mut h);
        assert_eq!(tags_of(&out), ["t1"]);
        assert_eq!(out[0].trigger.as_str(), "resize");
    }
}
