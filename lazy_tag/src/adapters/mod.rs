// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host implementations for concrete document models.
//!
//! - `page`: serves the in-memory [`lazy_tag_page::Page`] as an
//!   [`ElementResolver`](crate::host::ElementResolver) and [`Host`](crate::host::Host),
//!   so the built-in triggers can run headless. Requires the `page_adapter` feature.

#[cfg(feature = "page_adapter")]
pub mod page;
