// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal host for unit tests: selectors match verbatim, geometry is given directly.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::host::{ElementResolver, Host};

#[derive(Clone, Debug)]
struct MockElement {
    selector: &'static str,
    parent: Option<usize>,
    rect: Rect,
    html: String,
}

#[derive(Clone, Debug)]
pub(crate) struct MockHost {
    elements: Vec<MockElement>,
    viewport: Rect,
    /// `(selector, html)` for every injection, oldest first.
    pub(crate) injected: Vec<(&'static str, String)>,
    pub(crate) clears: usize,
}

impl MockHost {
    pub(crate) fn new(viewport: Rect) -> Self {
        Self {
            elements: Vec::new(),
            viewport,
            injected: Vec::new(),
            clears: 0,
        }
    }

    pub(crate) fn add(&mut self, selector: &'static str, parent: Option<usize>, rect: Rect) -> usize {
        self.elements.push(MockElement {
            selector,
            parent,
            rect,
            html: String::new(),
        });
        self.elements.len() - 1
    }

    pub(crate) fn set_rect(&mut self, element: usize, rect: Rect) {
        self.elements[element].rect = rect;
    }

    pub(crate) fn scroll_to(&mut self, x: f64, y: f64) {
        self.viewport = Rect::from_origin_size(Point::new(x, y), self.viewport.size());
    }

    pub(crate) fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub(crate) fn html(&self, selector: &str) -> &str {
        self.elements
            .iter()
            .find(|e| e.selector == selector)
            .map(|e| e.html.as_str())
            .unwrap_or("")
    }
}

impl ElementResolver for MockHost {
    type Element = usize;

    fn query_selector(&self, selector: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.selector == selector)
    }

    fn offset_rect(&self, element: usize) -> Rect {
        self.elements[element].rect
    }

    fn offset_parent(&self, element: usize) -> Option<usize> {
        self.elements[element].parent
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }
}

impl Host for MockHost {
    fn clear(&mut self, container: usize) {
        self.clears += 1;
        self.elements[container].html.clear();
    }

    fn inject(&mut self, container: usize, html: &str) {
        let el = &mut self.elements[container];
        el.html.push_str(html);
        self.injected.push((el.selector, html.into()));
    }
}
