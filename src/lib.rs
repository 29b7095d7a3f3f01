// SPDX-License-Identifier: MPL-2.0
//! `vernissage` is an interactive exhibit gallery built with the Iced GUI framework.
//!
//! It presents a fixed sequence of exhibit rooms, each pairing a media artifact
//! with a curatorial text, and lets a visitor step through rooms, control
//! embedded video, expand media into a full-screen lightbox, and take part in
//! an interactive installation whose result is conditionally forwarded to an
//! external automation webhook.

pub mod app;
pub mod application;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod lightbox;
pub mod navigation;
pub mod participation;
pub mod playback;
pub mod session;
