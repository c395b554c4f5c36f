// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy Tag: deferred, trigger-driven injection of HTML fragments.
//!
//! ## Overview
//!
//! Register named HTML fragments ([`Tag`](crate::tag::Tag)s) against a container selector, bind
//! them to a trigger type, and let the [`Dispatcher`](crate::dispatcher::Dispatcher) inject each
//! fragment exactly once when its trigger fires. This keeps heavy markup and embedded scripts
//! (ads, widgets, embeds) out of the initial page until they are needed.
//!
//! ## Triggers
//!
//! Three trigger types are built in:
//! - `"domReady"`: fires once the document structure is ready.
//! - `"load"`: fires once every resource has loaded.
//! - `"visible"`: fires per tag, the first time its container scrolls into the viewport.
//!
//! Each is a [`TriggerInvoker`](crate::invoker::TriggerInvoker); register your own with
//! [`Dispatcher::register_event`](crate::dispatcher::Dispatcher::register_event).
//!
//! ## Host
//!
//! The crate does not touch a DOM directly. The host implements
//! [`ElementResolver`](crate::host::ElementResolver) and [`Host`](crate::host::Host), and
//! reports environment events with [`Dispatcher::notify`](crate::dispatcher::Dispatcher::notify).
//! With the `page_adapter` feature, the in-memory [`lazy_tag_page::Page`] is a ready-made host.
//!
//! ## Guarantees
//!
//! - Registrations never overwrite: a duplicate tag id or event type is an error and changes nothing.
//! - A tag fires at most once per binding. Binding a tag to two trigger types fires it once per binding.
//! - Within one invoker, tags fire in the order their condition became true, ties in binding order.
//! - Failures are values ([`Error`](crate::error::Error)) and are also logged through `tracing`.
//!
//! ## Workflow
//!
//! ```
//! # #[cfg(feature = "page_adapter")]
//! # {
//! use kurbo::{Point, Size, Vec2};
//! use lazy_tag::dispatcher::Dispatcher;
//! use lazy_tag::settings::Settings;
//! use lazy_tag::trigger::Signal;
//! use lazy_tag_page::{ElementNode, Page};
//!
//! let mut page = Page::new(Size::new(800.0, 600.0));
//! let body = page.body();
//! let slot = page.insert(
//!     body,
//!     ElementNode::new("div")
//!         .with_id("below-fold")
//!         .with_box(Vec2::new(0.0, 1500.0), Size::new(300.0, 250.0)),
//! );
//!
//! let mut lazy = Dispatcher::with_builtins(Settings::default());
//! lazy.register_tag("promo", "#below-fold", "<p>promo</p>").unwrap();
//! lazy.bind_tag_to_event("visible", "promo", &mut page).unwrap();
//!
//! // Still below the fold.
//! assert!(lazy.notify(Signal::Scroll, &mut page).is_empty());
//!
//! page.scroll_to(Point::new(0.0, 1200.0));
//! let fired = lazy.notify(Signal::Scroll, &mut page);
//! assert_eq!(fired.len(), 1);
//! assert_eq!(page.inner_html(slot), "<p>promo</p>");
//! # }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod dispatcher;
pub mod error;
pub mod geometry;
pub mod host;
pub mod invoker;
pub mod invokers;
pub mod registry;
pub mod settings;
pub mod tag;
pub mod trigger;

#[cfg(test)]
mod test_host;

pub use dispatcher::{Dispatcher, Invocation};
pub use error::Error;
