// Copyright 2025 the Lazy Tag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher configuration.

use crate::invokers::VisibilityOptions;

/// Runtime settings for a [`Dispatcher`](crate::dispatcher::Dispatcher).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Empty the container before injecting a tag's markup. On by default.
    pub clear_container: bool,
    /// Options for the built-in `visible` invoker installed by
    /// [`Dispatcher::with_builtins`](crate::dispatcher::Dispatcher::with_builtins).
    pub visibility: VisibilityOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clear_container: true,
            visibility: VisibilityOptions::default(),
        }
    }
}
