// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::form::preview::{ImagePreview, PreviewError};
use crate::form::text_upload::UploadError;
use crate::form::{Category, Generation};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Async completions carry the
/// generation they were started under so stale results can be discarded.
#[derive(Debug, Clone)]
pub enum Message {
    /// A category radio was clicked.
    CategorySelected(Category),
    /// The active panel's choose-file button was pressed.
    ChooseFileRequested,
    /// Result from the open file dialog.
    FileDialogResult(Option<PathBuf>),
    /// Result from the text upload round trip.
    UploadCompleted {
        generation: Generation,
        result: Result<String, UploadError>,
    },
    /// Result from the local image read.
    PreviewCompleted {
        generation: Generation,
        result: Result<ImagePreview, PreviewError>,
    },
    /// The reset button returns to the initial selector-less view.
    ResetRequested,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional upload endpoint override. Takes precedence over the
    /// `upload_endpoint` config entry.
    pub endpoint: Option<String>,
}
