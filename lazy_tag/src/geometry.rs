// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding-box visibility.
//!
//! The test is deliberately coarse: an element's page box is the sum of offsets along its
//! offset-parent chain plus its own size. CSS transforms, clipping ancestors, and
//! `position: fixed` are not taken into account.

use kurbo::Rect;

use crate::host::ElementResolver;

/// Page-absolute bounds of `element`, found by walking its offset-parent chain.
pub fn page_bounds<R: ElementResolver + ?Sized>(resolver: &R, element: R::Element) -> Rect {
    let local = resolver.offset_rect(element);
    let mut origin = local.origin().to_vec2();
    let mut parent = resolver.offset_parent(element);
    while let Some(p) = parent {
        origin += resolver.offset_rect(p).origin().to_vec2();
        parent = resolver.offset_parent(p);
    }
    Rect::from_origin_size(origin.to_point(), local.size())
}

/// True if `bounds` overlaps the half-open viewport `[x0, x1) × [y0, y1)`.
///
/// Boxes that only touch an edge do not count. A viewport with `x0 >= x1` or `y0 >= y1`
/// contains nothing.
pub fn intersects_viewport(bounds: Rect, viewport: Rect) -> bool {
    viewport.x0 < viewport.x1
        && viewport.y0 < viewport.y1
        && bounds.y0 < viewport.y1
        && bounds.x0 < viewport.x1
        && bounds.y1 > viewport.y0
        && bounds.x1 > viewport.x0
}

/// `viewport` grown by `margin` on every side; negative margins shrink it.
///
/// Corners are not re-sorted: a margin below minus half the viewport size leaves an
/// inverted rect, which [`intersects_viewport`] treats as empty.
pub(crate) fn expand_viewport(viewport: Rect, margin: f64) -> Rect {
    Rect::new(
        viewport.x0 - margin,
        viewport.y0 - margin,
        viewport.x1 + margin,
        viewport.y1 + margin,
    )
}
