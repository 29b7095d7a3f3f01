// SPDX-License-Identifier: MPL-2.0
//! In-process media host.
//!
//! `DirectMediaHost` stands in for the platform media elements. It mirrors
//! the autoplay policy of constrained runtimes: when autoplay is disallowed,
//! the *first* play attempt for a room is rejected (no user gesture yet) and
//! later attempts, which follow a tap on the controls, succeed.

use crate::application::port::{AutoplayError, MediaHost};
use crate::catalog::ROOM_COUNT;

#[derive(Debug, Clone)]
pub struct DirectMediaHost {
    autoplay_allowed: bool,
    attempted: [bool; ROOM_COUNT],
    playing: [bool; ROOM_COUNT],
    muted: [bool; ROOM_COUNT],
}

impl DirectMediaHost {
    pub fn new(autoplay_allowed: bool) -> Self {
        Self {
            autoplay_allowed,
            attempted: [false; ROOM_COUNT],
            playing: [false; ROOM_COUNT],
            muted: [false; ROOM_COUNT],
        }
    }

    pub fn is_playing(&self, room: usize) -> bool {
        self.playing.get(room).copied().unwrap_or(false)
    }
}

impl MediaHost for DirectMediaHost {
    fn play(&mut self, room: usize) -> Result<(), AutoplayError> {
        let Some(attempted) = self.attempted.get_mut(room) else {
            return Ok(());
        };
        let first_attempt = !*attempted;
        *attempted = true;
        if first_attempt && !self.autoplay_allowed {
            return Err(AutoplayError);
        }
        self.playing[room] = true;
        Ok(())
    }

    fn pause(&mut self, room: usize) {
        if let Some(playing) = self.playing.get_mut(room) {
            *playing = false;
        }
    }

    fn set_muted(&mut self, room: usize, muted: bool) {
        if let Some(slot) = self.muted.get_mut(room) {
            *slot = muted;
        }
    }
}
