// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Host`] implementation for the in-memory [`Page`].
//!
//! ## Feature
//!
//! Enable with `page_adapter` (on by default).
//!
//! ## Notes
//!
//! [`Page::inject`] records markup instead of executing it, which makes the page a
//! convenient stand-in for a browser document in tests and headless tools.

use kurbo::Rect;
use lazy_tag_page::{ElementId, Page};

use crate::host::{ElementResolver, Host};

impl ElementResolver for Page {
    type Element = ElementId;

    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        Self::query_selector(self, selector)
    }

    fn offset_rect(&self, element: ElementId) -> Rect {
        Self::offset_rect(self, element)
    }

    fn offset_parent(&self, element: ElementId) -> Option<ElementId> {
        Self::offset_parent(self, element)
    }

    fn is_rendered(&self, element: ElementId) -> bool {
        Self::is_rendered(self, element)
    }

    fn viewport(&self) -> Rect {
        Self::viewport(self)
    }
}

impl Host for Page {
    fn clear(&mut self, container: ElementId) {
        Self::clear(self, container);
    }

    fn inject(&mut self, container: ElementId, html: &str) {
        Self::inject(self, container, html);
    }
}
