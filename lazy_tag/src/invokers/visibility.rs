// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-visibility strategy behind the `visible` trigger.
//!
//! ## Checks
//!
//! On every scroll signal (and resize, when enabled) each tracked tag that has not fired
//! yet resolves its container and runs the bounding-box test from
//! [`geometry`](crate::geometry). A visible container fires its tag once; the tag is never
//! reported again, even after scrolling away and back.
//!
//! A container that does not resolve, or resolves to an element without a box
//! (`display: none`), is treated as not visible and retried on the next signal.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::geometry::{expand_viewport, intersects_viewport, page_bounds};
use crate::host::ElementResolver;
use crate::invoker::TriggerInvoker;
use crate::tag::{Tag, TagId};
use crate::trigger::{Signal, Signals};

/// Tuning for [`VisibilityInvoker`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Also re-check on viewport resize. Off by default: only scrolling triggers a check.
    pub recheck_on_resize: bool,
    /// Test visibility as soon as a tag is bound instead of waiting for the next scroll.
    pub check_on_bind: bool,
    /// Grow the viewport by this many pixels on every side before testing.
    pub margin: f64,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            recheck_on_resize: false,
            check_on_bind: false,
            margin: 0.0,
        }
    }
}

/// A tag bound to a [`VisibilityInvoker`] and whether it has fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedTag {
    tag: Tag,
    fired: bool,
}

impl TrackedTag {
    /// The bound tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// True once the container has been seen in the viewport.
    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Fires each bound tag the first time its container intersects the viewport.
#[derive(Clone, Debug, Default)]
pub struct VisibilityInvoker {
    options: VisibilityOptions,
    tracked: Vec<TrackedTag>,
}

impl VisibilityInvoker {
    /// An invoker with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An invoker with explicit options.
    pub fn with_options(options: VisibilityOptions) -> Self {
        Self {
            options,
            tracked: Vec::new(),
        }
    }

    /// Current options.
    pub fn options(&self) -> VisibilityOptions {
        self.options
    }

    /// Every bound tag in binding order.
    pub fn tracked(&self) -> &[TrackedTag] {
        &self.tracked
    }

    fn viewport<R: ElementResolver + ?Sized>(&self, resolver: &R) -> Rect {
        expand_viewport(resolver.viewport(), self.options.margin)
    }

    fn check_all<R: ElementResolver + ?Sized>(&mut self, resolver: &R) -> Vec<TagId> {
        let viewport = self.viewport(resolver);
        self.tracked
            .iter_mut()
            .filter(|entry| !entry.fired)
            .filter_map(|entry| check(entry, resolver, viewport))
            .collect()
    }
}

/// Fire `entry` if its container is in `viewport`.
fn check<R: ElementResolver + ?Sized>(
    entry: &mut TrackedTag,
    resolver: &R,
    viewport: Rect,
) -> Option<TagId> {
    let Some(container) = resolver.query_selector(entry.tag.selector()) else {
        tracing::trace!(
            tag = %entry.tag.id(),
            selector = entry.tag.selector(),
            "container not found; not visible"
        );
        return None;
    };
    if !resolver.is_rendered(container) {
        tracing::trace!(tag = %entry.tag.id(), "container not rendered; not visible");
        return None;
    }
    let bounds = page_bounds(resolver, container);
    let visible = intersects_viewport(bounds, viewport);
    tracing::trace!(tag = %entry.tag.id(), ?bounds, ?viewport, visible, "visibility check");
    if !visible {
        return None;
    }
    entry.fired = true;
    Some(entry.tag.id().clone())
}

impl<R: ElementResolver + ?Sized> TriggerInvoker<R> for VisibilityInvoker {
    fn activate(&mut self) -> Signals {
        if self.options.recheck_on_resize {
            Signals::SCROLL | Signals::RESIZE
        } else {
            Signals::SCROLL
        }
    }

    fn handle_tag(&mut self, tag: &Tag, resolver: &R) -> Vec<TagId> {
        let mut entry = TrackedTag {
            tag: tag.clone(),
            fired: false,
        };
        let due = if self.options.check_on_bind {
            let viewport = self.viewport(resolver);
            check(&mut entry, resolver, viewport).into_iter().collect()
        } else {
            Vec::new()
        };
        self.tracked.push(entry);
        due
    }

    fn on_signal(&mut self, signal: Signal, resolver: &R) -> Vec<TagId> {
        match signal {
            Signal::Scroll => self.check_all(resolver),
            Signal::Resize if self.options.recheck_on_resize => self.check_all(resolver),
            _ => Vec::new(),
        }
    }
}
