// SPDX-License-Identifier: MPL-2.0
//! Room navigation state.
//!
//! This module provides the `RoomNavigator` that tracks the visitor's current
//! room, enforces the sequence bounds, and derives the progress value shown in
//! the navigation chrome. It is the single source of truth for "where the
//! visitor stands" shared by the session controller and the rendering layer.

use crate::catalog::ROOM_COUNT;
use std::fmt;

/// Navigation target outside `[0, ROOM_COUNT)`.
///
/// This is a programmer error: a correctly bounded rendering layer never
/// produces one. The shell logs it and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    pub index: usize,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room index {} is outside the exhibit range 0..{}",
            self.index, ROOM_COUNT
        )
    }
}

/// A committed index change, consumed by the session controller to drive the
/// playback registry and force the lightbox closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

/// Tracks the current room index with bounds-checked transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomNavigator {
    current: usize,
}

impl RoomNavigator {
    /// Creates a navigator positioned at the first room.
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Advances to the next room. Saturates at the last room; never wraps.
    pub fn next(&mut self) -> Option<Transition> {
        if self.current + 1 < ROOM_COUNT {
            let from = self.current;
            self.current += 1;
            Some(Transition {
                from,
                to: self.current,
            })
        } else {
            None
        }
    }

    /// Steps back to the previous room. Saturates at the first room.
    pub fn previous(&mut self) -> Option<Transition> {
        if self.current > 0 {
            let from = self.current;
            self.current -= 1;
            Some(Transition {
                from,
                to: self.current,
            })
        } else {
            None
        }
    }

    /// Jumps directly to `index`.
    ///
    /// Returns `Ok(None)` when `index` is already the current room, and
    /// `Err(OutOfRangeError)` when `index` lies outside the exhibit.
    pub fn go_to(&mut self, index: usize) -> Result<Option<Transition>, OutOfRangeError> {
        if index >= ROOM_COUNT {
            return Err(OutOfRangeError { index });
        }
        if index == self.current {
            return Ok(None);
        }
        let from = self.current;
        self.current = index;
        Ok(Some(Transition { from, to: index }))
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_at_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_at_last(&self) -> bool {
        self.current == ROOM_COUNT - 1
    }

    /// Progress through the exhibit as a percentage, recomputed on read.
    pub fn progress_percent(&self) -> f32 {
        (self.current + 1) as f32 / ROOM_COUNT as f32 * 100.0
    }
}

impl Default for RoomNavigator {
    fn default() -> Self {
        Self::new()
    }
}
