// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the page model: element identifiers, flags, and box geometry.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Size, Vec2};

/// Identifier for an element in a [`Page`](crate::Page).
///
/// A small, copyable handle. Elements are never removed, so an `ElementId`
/// stays valid for the lifetime of the page that created it.
/// Ordering follows insertion order, which is not necessarily document order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling rendering and offset-parent resolution.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element generates a box (the opposite of `display: none`).
        const RENDERED   = 0b0000_0001;
        /// Element is positioned and therefore acts as an offset parent for its descendants.
        const POSITIONED = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::RENDERED
    }
}

/// Description of an element to insert into a page.
///
/// Geometry is already laid out: `offset` is relative to the element's
/// offset parent, exactly like `offsetLeft`/`offsetTop` in a browser.
#[derive(Clone, Debug, Default)]
pub struct ElementNode {
    /// Lower-case element name, e.g. `div`.
    pub tag_name: String,
    /// Value of the `id` attribute, if any.
    pub id: Option<String>,
    /// Class names.
    pub classes: Vec<String>,
    /// Offset relative to the offset parent.
    pub offset: Vec2,
    /// Border-box size.
    pub size: Size,
    /// Rendering and positioning flags.
    pub flags: ElementFlags,
}

impl ElementNode {
    /// A rendered element with the given tag name and no geometry.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    /// Set the `id` attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class name.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set offset (relative to the offset parent) and size.
    pub fn with_box(mut self, offset: Vec2, size: Size) -> Self {
        self.offset = offset;
        self.size = size;
        self
    }

    /// Replace the flags.
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// One recorded call of [`Page::inject`](crate::Page::inject).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Injection {
    /// Container that received the markup.
    pub container: ElementId,
    /// The markup, verbatim.
    pub html: String,
}
