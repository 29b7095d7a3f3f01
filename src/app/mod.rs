// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the exhibit session.
//!
//! The `App` struct owns the [`ExhibitSessionController`] and translates Iced
//! messages into session commands and asynchronous tasks (the deferred
//! autoplay check and the gateway call). All state-machine logic lives in the
//! session; this module only wires it to the Iced runtime.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::infrastructure::media::DirectMediaHost;
use crate::session::ExhibitSessionController;
use iced::{window, Task};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Root Iced application state bridging the session controller, the
/// persisted configuration, and the rendering layer.
pub struct App {
    session: ExhibitSessionController,
    /// Inline validation message shown beside the participation form.
    inline_error: Option<String>,
    webhook_url: Option<String>,
    submit_timeout: Duration,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("has_webhook", &self.webhook_url.is_some())
            .finish()
    }
}

impl App {
    /// Initializes the session from persisted configuration and kicks off the
    /// opening room's autoplay attempt.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            config::Config::default()
        });

        let autoplay = config.autoplay.unwrap_or(true);
        let submit_timeout = Duration::from_secs(
            config
                .submit_timeout_secs
                .unwrap_or(config::DEFAULT_SUBMIT_TIMEOUT_SECS),
        );
        let webhook_url = flags.webhook_url.or(config.webhook_url);

        let mut app = App {
            session: ExhibitSessionController::new(Box::new(DirectMediaHost::new(autoplay))),
            inline_error: None,
            webhook_url,
            submit_timeout,
        };

        let task = match app.session.activate_current() {
            Some(check) => update::schedule_fallback_check(check),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        format!("Vernissage — {}", self.session.current_room().label)
    }
}

/// Builds the window settings.
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

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
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
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
