// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard surface is deliberately small: arrow keys for the two
//! navigation commands, plus Escape for the lightbox. Events already
//! captured by a widget (e.g. the email input) are left alone.

use super::{App, Message};
use iced::keyboard::{key, Key};
use iced::{event, Subscription};

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                    key: Key::Named(key::Named::ArrowRight),
                    ..
                }) => Some(Message::Next),
                event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                    key: Key::Named(key::Named::ArrowLeft),
                    ..
                }) => Some(Message::Previous),
                event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                    key: Key::Named(key::Named::Escape),
                    ..
                }) => Some(Message::CloseLightbox),
                _ => None,
            }
        })
    }
}
