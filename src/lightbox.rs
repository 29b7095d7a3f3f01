// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox state.
//!
//! At most one media item is expanded at a time; opening a new one replaces
//! any existing one, and any navigation transition forces the lightbox shut
//! since its source media may no longer belong to the active room.

/// Media kind a lightbox can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Identifies the expanded media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub src: String,
}

impl MediaRef {
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
        }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(MediaRef),
}

/// Owns the single lightbox instance.
#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    state: LightboxState,
}

impl LightboxController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands `media`, replacing any previously expanded item.
    pub fn open(&mut self, media: MediaRef) {
        self.state = LightboxState::Open(media);
    }

    /// Closes the lightbox. Closing an already-closed lightbox is a no-op.
    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }
}
