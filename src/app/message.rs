// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::GatewayError;
use crate::lightbox::MediaRef;
use crate::participation::Protocol;
use crate::playback::FallbackCheck;

/// Top-level messages consumed by `App::update`. Each variant is one command
/// against the session controller, plus the two re-entry points of its
/// asynchronous edges.
#[derive(Debug, Clone)]
pub enum Message {
    /// Step to the next room (navigation bar or right arrow key).
    Next,
    /// Step to the previous room (navigation bar or left arrow key).
    Previous,
    SelectChoice(Protocol),
    EmailChanged(String),
    SubmitParticipation,
    TogglePlay(usize),
    ToggleMute(usize),
    OpenLightbox(MediaRef),
    /// Explicit close, background click, or Escape.
    CloseLightbox,
    CarouselNext,
    CarouselPrevious,
    /// The 2-second autoplay verdict timer fired.
    FallbackCheckElapsed(FallbackCheck),
    /// The gateway call (or local settlement) finished.
    SubmissionCompleted(Result<(), GatewayError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Overrides the configured automation endpoint.
    pub webhook_url: Option<String>,
}
