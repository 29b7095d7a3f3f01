// SPDX-License-Identifier: MPL-2.0
//! Panel stepping for the carousel room.
//!
//! The carousel cycles through a fixed series of story panels with its own
//! next/previous controls, saturating at both ends like the room navigator.
//! Each panel can be expanded into the lightbox.

/// Source locators of the story panels, in display order.
pub const PANELS: [&str; 6] = [
    "/Oeuvre6_1.png",
    "/Oeuvre6_2.png",
    "/Oeuvre6_3.png",
    "/Oeuvre6_4.png",
    "/Oeuvre6_5.png",
    "/Oeuvre6_6.png",
];

/// Current panel position within the carousel room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    current: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) {
        if self.current + 1 < PANELS.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_panel(&self) -> &'static str {
        PANELS[self.current]
    }

    pub fn is_at_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_at_last(&self) -> bool {
        self.current == PANELS.len() - 1
    }
}
