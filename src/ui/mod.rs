// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! This module holds the app-independent pieces of the UI, following the
//! Elm-style "state down, messages up" pattern used by the application:
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod styles;
