// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core page implementation: structure, geometry queries, scrolling, injection.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Size, Vec2};

use crate::selector::Selector;
use crate::types::{ElementFlags, ElementId, ElementNode, Injection};

/// An in-memory page: an element tree rooted at `body`, a scrollable viewport,
/// and a log of every markup injection.
pub struct Page {
    elements: Vec<Element>,
    scroll: Point,
    viewport_size: Size,
    injections: Vec<Injection>,
}

impl core::fmt::Debug for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Page")
            .field("elements", &self.elements.len())
            .field("viewport", &self.viewport())
            .field("injections", &self.injections.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Element {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    node: ElementNode,
    content: String,
}

impl Element {
    fn new(parent: Option<ElementId>, node: ElementNode) -> Self {
        Self {
            parent,
            children: Vec::new(),
            node,
            content: String::new(),
        }
    }
}

impl Page {
    /// Create a page with an empty `body` sized to the viewport, scrolled to the origin.
    pub fn new(viewport_size: Size) -> Self {
        let body = ElementNode::new("body").with_box(Vec2::ZERO, viewport_size);
        Self {
            elements: alloc::vec![Element::new(None, body)],
            scroll: Point::ORIGIN,
            viewport_size,
            injections: Vec::new(),
        }
    }

    /// The root element.
    pub fn body(&self) -> ElementId {
        ElementId::new(0)
    }

    /// Append a new element as the last child of `parent`.
    pub fn insert(&mut self, parent: ElementId, node: ElementNode) -> ElementId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        let id = ElementId::new(self.elements.len() as u32);
        self.elements.push(Element::new(Some(parent), node));
        self.element_mut(parent).children.push(id);
        id
    }

    /// The element's description as last updated.
    pub fn node(&self, id: ElementId) -> &ElementNode {
        &self.element(id).node
    }

    /// Move an element relative to its offset parent.
    pub fn set_offset(&mut self, id: ElementId, offset: Vec2) {
        self.element_mut(id).node.offset = offset;
    }

    /// Resize an element's border box.
    pub fn set_size(&mut self, id: ElementId, size: Size) {
        self.element_mut(id).node.size = size;
    }

    /// Replace an element's flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        self.element_mut(id).node.flags = flags;
    }

    /// True if the element and all of its ancestors generate boxes.
    pub fn is_rendered(&self, id: ElementId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            let el = self.element(c);
            if !el.node.flags.contains(ElementFlags::RENDERED) {
                return false;
            }
            cur = el.parent;
        }
        true
    }

    /// The element that `offset` is relative to: the nearest positioned ancestor, or `body`.
    ///
    /// `None` for `body` itself and for elements that are not rendered.
    pub fn offset_parent(&self, id: ElementId) -> Option<ElementId> {
        if !self.is_rendered(id) {
            return None;
        }
        let mut cur = self.element(id).parent;
        while let Some(c) = cur {
            let el = self.element(c);
            if el.parent.is_none() || el.node.flags.contains(ElementFlags::POSITIONED) {
                return Some(c);
            }
            cur = el.parent;
        }
        None
    }

    /// Offset position (relative to the offset parent) and size; `Rect::ZERO` when not rendered.
    pub fn offset_rect(&self, id: ElementId) -> Rect {
        if !self.is_rendered(id) {
            return Rect::ZERO;
        }
        let node = &self.element(id).node;
        Rect::from_origin_size(node.offset.to_point(), node.size)
    }

    /// First element in document order matching `selector`.
    ///
    /// Returns `None` when nothing matches or the selector uses unsupported syntax.
    pub fn query_selector(&self, selector: &str) -> Option<ElementId> {
        let sel = Selector::parse(selector)?;
        let mut stack = alloc::vec![self.body()];
        while let Some(id) = stack.pop() {
            let el = self.element(id);
            if sel.matches(&el.node) {
                return Some(id);
            }
            stack.extend(el.children.iter().rev().copied());
        }
        None
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> Point {
        self.scroll
    }

    /// Scroll to an absolute position; negative coordinates clamp to zero.
    pub fn scroll_to(&mut self, pos: Point) {
        self.scroll = Point::new(pos.x.max(0.0), pos.y.max(0.0));
    }

    /// Scroll relative to the current position.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.scroll_to(self.scroll + delta);
    }

    /// Change the viewport size.
    pub fn resize(&mut self, size: Size) {
        self.viewport_size = size;
    }

    /// The visible page rectangle: scroll offset and viewport size.
    pub fn viewport(&self) -> Rect {
        Rect::from_origin_size(self.scroll, self.viewport_size)
    }

    /// Remove all markup from an element.
    pub fn clear(&mut self, id: ElementId) {
        self.element_mut(id).content.clear();
    }

    /// Append markup to an element and record the injection.
    pub fn inject(&mut self, id: ElementId, html: &str) {
        self.element_mut(id).content.push_str(html);
        self.injections.push(Injection {
            container: id,
            html: html.into(),
        });
    }

    /// Markup currently held by an element.
    pub fn inner_html(&self, id: ElementId) -> &str {
        &self.element(id).content
    }

    /// Every injection so far, oldest first.
    pub fn injections(&self) -> &[Injection] {
        &self.injections
    }

    // --- internals ---

    fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.idx()]
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.idx()]
    }
}
