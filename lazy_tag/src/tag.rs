// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tags: named HTML fragments bound to a container selector.

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// Identifier of a [`Tag`]. Unique within one [`TagRegistry`](crate::registry::TagRegistry).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(String);

impl TagId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TagId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TagId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An HTML fragment waiting to be injected into the container matched by `selector`.
///
/// Immutable once created; identity is the [`TagId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    id: TagId,
    selector: String,
    html: String,
}

impl Tag {
    /// Create a tag.
    pub fn new(id: impl Into<TagId>, selector: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selector: selector.into(),
            html: html.into(),
        }
    }

    /// The tag's identifier.
    pub fn id(&self) -> &TagId {
        &self.id
    }

    /// Selector of the container the markup goes into.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The markup, including any embedded scripts.
    pub fn html(&self) -> &str {
        &self.html
    }
}
