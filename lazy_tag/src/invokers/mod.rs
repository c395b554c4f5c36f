// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in trigger strategies.

mod once;
mod visibility;

pub use once::OnceInvoker;
pub use visibility::{TrackedTag, VisibilityInvoker, VisibilityOptions};
