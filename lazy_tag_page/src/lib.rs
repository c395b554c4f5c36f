// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy Tag Page: a Kurbo-native, in-memory page model.
//!
//! This crate is the reference host for `lazy_tag`: it stands in for a browser document
//! in tests, demos, and headless tools.
//!
//! - Represents a tree of elements rooted at `body`, each with an offset box relative to its offset parent.
//! - Resolves compound simple selectors (`div`, `#id`, `.class`) to the first match in document order.
//! - Tracks a scrollable viewport.
//! - Records markup injections instead of executing them.
//!
//! ## Not a layout engine
//!
//! Geometry is supplied already laid out, in the same shape a browser reports it
//! (`offsetLeft`/`offsetTop` relative to the `offsetParent`, plus `offsetWidth`/`offsetHeight`).
//! The page never computes positions on its own.
//!
//! ## API overview
//!
//! - [`Page`]: the element tree, viewport, and injection log.
//! - [`ElementNode`]: per-element description (name, id, classes, box, flags).
//! - [`ElementFlags`]: rendering and positioning controls.
//! - [`ElementId`]: handle of an element.
//! - [`Injection`]: one recorded markup injection.
//!
//! ### Minimal usage
//!
//! ```
//! use lazy_tag_page::{ElementFlags, ElementNode, Page};
//! use kurbo::{Point, Rect, Size, Vec2};
//!
//! let mut page = Page::new(Size::new(800.0, 600.0));
//! let body = page.body();
//!
//! let card = page.insert(
//!     body,
//!     ElementNode::new("section")
//!         .with_box(Vec2::new(0.0, 900.0), Size::new(800.0, 400.0))
//!         .with_flags(ElementFlags::RENDERED | ElementFlags::POSITIONED),
//! );
//! let slot = page.insert(
//!     card,
//!     ElementNode::new("div")
//!         .with_id("ad-slot")
//!         .with_box(Vec2::new(20.0, 40.0), Size::new(300.0, 250.0)),
//! );
//!
//! assert_eq!(page.query_selector("#ad-slot"), Some(slot));
//! assert_eq!(page.offset_parent(slot), Some(card));
//! assert_eq!(page.offset_rect(slot), Rect::new(20.0, 40.0, 320.0, 290.0));
//!
//! page.scroll_to(Point::new(0.0, 700.0));
//! assert_eq!(page.viewport(), Rect::new(0.0, 700.0, 800.0, 1300.0));
//!
//! page.inject(slot, "<img src=x>");
//! assert_eq!(page.inner_html(slot), "<img src=x>");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod page;
mod selector;
mod types;

pub use page::Page;
pub use types::{ElementFlags, ElementId, ElementNode, Injection};
