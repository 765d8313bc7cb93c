// SPDX-License-Identifier: MPL-2.0
//! `iced_dropzone` is a small media upload form built with the Iced GUI framework.
//!
//! A user picks a media category (text, image, audio, 3D) and chooses a file
//! of that type. Text files round-trip through a local HTTP endpoint that
//! echoes their decoded content back; images preview locally as base64 data
//! URLs with no network call. The audio and 3D flows are placeholders.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod ui;
