// SPDX-License-Identifier: MPL-2.0
//! Media host port definition.
//!
//! This module defines the [`MediaHost`] trait for driving the concrete media
//! elements behind each playback slot. Infrastructure adapters implement this
//! trait; the playback registry only talks through it.
//!
//! # Design Notes
//!
//! - The host is **stateful** - it owns the actual media elements
//! - Methods are not `async` - an autoplay verdict is known synchronously,
//!   and deferred effects are handled by the caller via Iced `Task`s
//! - Autoplay rejection is an expected verdict, not a fault: the registry
//!   degrades to a user-initiated-play affordance

use std::fmt;

/// The runtime refused to start playback without a user gesture.
///
/// This models the real, observable autoplay restriction of constrained
/// platforms. It is never surfaced as an error to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayError;

impl fmt::Display for AutoplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "autoplay rejected by the media runtime")
    }
}

/// Port for driving the media element bound to a playback slot.
///
/// `room` is the room index owning the slot. Calls for rooms without media
/// are allowed and must be ignored by implementations.
pub trait MediaHost: Send {
    /// Starts playback of the room's media.
    ///
    /// # Errors
    ///
    /// Returns [`AutoplayError`] when the runtime refuses to start playback,
    /// typically because no user gesture preceded the attempt.
    fn play(&mut self, room: usize) -> Result<(), AutoplayError>;

    /// Pauses the room's media. Pausing a non-playing slot is a no-op.
    fn pause(&mut self, room: usize);

    /// Applies the mute flag to the room's media.
    fn set_muted(&mut self, room: usize, muted: bool);
}
