// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host environment contracts: element resolution, box geometry, and markup injection.
//!
//! A browser binding implements these over the real DOM; [`lazy_tag_page`] provides an
//! in-memory implementation behind the `page_adapter` feature.

use kurbo::Rect;

/// Read access to the host document: selectors, offset boxes, and the viewport.
pub trait ElementResolver {
    /// Handle of an element in the host document.
    type Element: Copy + core::fmt::Debug;

    /// First element matching `selector`, or `None`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Offset position relative to the element's offset parent, with the element's width and height.
    ///
    /// In browser terms: `offsetLeft`, `offsetTop`, `offsetWidth`, `offsetHeight`.
    fn offset_rect(&self, element: Self::Element) -> Rect;

    /// The element that [`offset_rect`](Self::offset_rect) is relative to, or `None` at the top.
    fn offset_parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// False if `element` generates no box (`display: none` on it or an ancestor).
    ///
    /// The default follows the browser signature of such an element: no offset parent
    /// and a zero-sized offset rect.
    fn is_rendered(&self, element: Self::Element) -> bool {
        let rect = self.offset_rect(element);
        self.offset_parent(element).is_some() || rect.width() != 0.0 || rect.height() != 0.0
    }

    /// The visible page rectangle: scroll offset as origin, viewport dimensions as size.
    fn viewport(&self) -> Rect;
}

/// Full host: element resolution plus the injection primitive.
pub trait Host: ElementResolver {
    /// Remove the container's existing content.
    fn clear(&mut self, container: Self::Element);

    /// Parse and insert `html` into the container and execute any embedded scripts in
    /// document order. Scripts may schedule further asynchronous work; that is not awaited.
    fn inject(&mut self, container: Self::Element, html: &str);
}
