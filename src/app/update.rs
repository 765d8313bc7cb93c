// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state mutation happens here, on the UI event loop. Side effects
//! (file dialogs, the upload round trip, the local image read) run as
//! `Task`s and come back as messages carrying the generation they were
//! started under; `FormState::complete` drops stale ones.

use super::{App, Message};
use crate::form::{self, Category, Outcome, Pending};
use iced::Task;
use std::path::PathBuf;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::CategorySelected(category) => {
            app.form.select_category(category);
            Task::none()
        }
        Message::ChooseFileRequested => handle_choose_file(app),
        Message::FileDialogResult(path) => handle_file_chosen(app, path),
        Message::UploadCompleted { generation, result } => {
            app.form.complete(generation, Outcome::from_upload(result));
            Task::none()
        }
        Message::PreviewCompleted { generation, result } => {
            app.form.complete(generation, Outcome::from_preview(result));
            Task::none()
        }
        Message::ResetRequested => {
            app.form.reset();
            Task::none()
        }
    }
}

/// Opens the file dialog filtered to the active category's extensions.
fn handle_choose_file(app: &App) -> Task<Message> {
    let Some(category) = app.form.category() else {
        return Task::none();
    };

    let (filter_name, extensions): (&'static str, &'static [&'static str]) = match category {
        Category::Text => ("Text file", &["txt"]),
        Category::Image => ("Image", &["png", "jpg", "jpeg", "gif", "bmp", "webp"]),
        // The audio and 3D panels have no wired handler.
        Category::Audio | Category::ThreeD => return Task::none(),
    };

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, extensions)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileDialogResult,
    )
}

/// Starts the async operation matching the active category. A cancelled
/// dialog leaves state untouched.
fn handle_file_chosen(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    match app.form.category() {
        Some(Category::Text) => {
            let generation = app.form.begin(Pending::Upload);
            let endpoint = app.endpoint.clone();
            Task::perform(
                form::text_upload::upload_text_file(endpoint, path),
                move |result| Message::UploadCompleted { generation, result },
            )
        }
        Some(Category::Image) => {
            let generation = app.form.begin(Pending::Preview);
            Task::perform(form::preview::load_preview(path), move |result| {
                Message::PreviewCompleted { generation, result }
            })
        }
        _ => Task::none(),
    }
}
