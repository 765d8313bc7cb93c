// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form and its side
//! effects.
//!
//! The `App` struct wires together the form state, localization, and the
//! configured upload endpoint, and translates messages into side effects
//! like file dialogs, the upload round trip, and the local image read. This
//! file intentionally keeps policy decisions (window sizing, endpoint
//! resolution) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::form::FormState;
use crate::i18n::fluent::I18n;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the form, localization, and the
/// upload endpoint configuration.
pub struct App {
    pub i18n: I18n,
    form: FormState,
    /// Endpoint the text uploader posts to.
    endpoint: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("category", &self.form.category())
            .field("uploaded", &self.form.uploaded())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            form: FormState::new(),
            endpoint: config::DEFAULT_UPLOAD_ENDPOINT.to_string(),
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load config: {err}");
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);
        let endpoint = flags
            .endpoint
            .unwrap_or_else(|| config.upload_endpoint().to_string());

        let app = App {
            i18n,
            form: FormState::new(),
            endpoint,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
        })
    }
}
