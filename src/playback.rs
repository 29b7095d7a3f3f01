// SPDX-License-Identifier: MPL-2.0
//! Per-room media playback state.
//!
//! The `MediaPlaybackRegistry` keeps one [`PlaybackSlot`] per video-bearing
//! room and drives the concrete media elements through the [`MediaHost`]
//! port. Autoplay rejection degrades to a "tap to activate" overlay decided
//! by a deferred check: the registry hands the caller a [`FallbackCheck`]
//! token to schedule, and discards it when it comes back stale.

use crate::application::port::{AutoplayError, MediaHost};
use crate::catalog::{RoomCatalog, ROOM_COUNT};
use std::time::Duration;

/// How long to wait before concluding that autoplay will not recover.
pub const FALLBACK_DELAY: Duration = Duration::from_secs(2);

/// Playback state of one video-bearing room.
///
/// The overlay flag is only ever raised while the slot is not playing, and
/// deactivation resets the whole record; see `on_room_deactivated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSlot {
    pub is_playing: bool,
    pub is_muted: bool,
    pub fallback_overlay_visible: bool,
    /// Bumped whenever a pending deferred check must be cancelled.
    generation: u64,
}

impl PlaybackSlot {
    /// The inactive-room state: paused, muted, no overlay.
    fn reset(generation: u64) -> Self {
        Self {
            is_playing: false,
            is_muted: true,
            fallback_overlay_visible: false,
            generation,
        }
    }
}

/// A scheduled autoplay-failure check, tagged with the slot generation it was
/// issued for. A check whose generation has advanced is ignored, so no
/// dangling timer can mutate a since-reset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackCheck {
    pub room: usize,
    generation: u64,
}

/// Tracks playback, mute, and fallback-overlay state for every video room.
#[derive(Debug, Clone)]
pub struct MediaPlaybackRegistry {
    slots: [Option<PlaybackSlot>; ROOM_COUNT],
}

impl MediaPlaybackRegistry {
    /// Creates one slot per video room of the catalog.
    pub fn from_catalog(catalog: &RoomCatalog) -> Self {
        let mut slots = [None; ROOM_COUNT];
        for index in catalog.video_rooms() {
            slots[index] = Some(PlaybackSlot::reset(0));
        }
        Self { slots }
    }

    /// Returns the slot for `room`, or `None` for rooms without media.
    pub fn slot(&self, room: usize) -> Option<&PlaybackSlot> {
        self.slots.get(room).and_then(|slot| slot.as_ref())
    }

    /// Attempts autoplay for the room that just became active.
    ///
    /// On success the slot starts playing (muted by default). On autoplay
    /// rejection the overlay stays hidden for now and a [`FallbackCheck`] is
    /// returned; the caller schedules it after [`FALLBACK_DELAY`] and feeds
    /// it back through [`fallback_check_elapsed`](Self::fallback_check_elapsed).
    pub fn on_room_activated(
        &mut self,
        room: usize,
        host: &mut dyn MediaHost,
    ) -> Option<FallbackCheck> {
        let slot = self.slots.get_mut(room)?.as_mut()?;
        host.set_muted(room, slot.is_muted);
        match host.play(room) {
            Ok(()) => {
                slot.is_playing = true;
                slot.fallback_overlay_visible = false;
                None
            }
            Err(AutoplayError) => {
                slot.is_playing = false;
                Some(FallbackCheck {
                    room,
                    generation: slot.generation,
                })
            }
        }
    }

    /// Pauses and resets the slot of a room that is no longer active.
    ///
    /// Bumping the generation cancels any deferred check still in flight.
    pub fn on_room_deactivated(&mut self, room: usize, host: &mut dyn MediaHost) {
        if let Some(slot) = self.slots.get_mut(room).and_then(|slot| slot.as_mut()) {
            host.pause(room);
            *slot = PlaybackSlot::reset(slot.generation + 1);
        }
    }

    /// Decides the deferred autoplay verdict.
    ///
    /// Shows the "tap to activate" overlay only when the check is still
    /// current and the slot never started playing in the meantime.
    pub fn fallback_check_elapsed(&mut self, check: FallbackCheck) {
        if let Some(slot) = self.slots.get_mut(check.room).and_then(|slot| slot.as_mut()) {
            if slot.generation == check.generation && !slot.is_playing {
                slot.fallback_overlay_visible = true;
            }
        }
    }

    /// Flips play/pause for `room`.
    ///
    /// A manual interaction supersedes the automatic fallback: the overlay is
    /// always cleared and any pending deferred check is cancelled.
    pub fn toggle_play(&mut self, room: usize, host: &mut dyn MediaHost) {
        if let Some(slot) = self.slots.get_mut(room).and_then(|slot| slot.as_mut()) {
            if slot.is_playing {
                host.pause(room);
                slot.is_playing = false;
            } else {
                slot.is_playing = host.play(room).is_ok();
            }
            slot.fallback_overlay_visible = false;
            slot.generation += 1;
        }
    }

    /// Flips the mute flag for `room`; play state is untouched.
    pub fn toggle_mute(&mut self, room: usize, host: &mut dyn MediaHost) {
        if let Some(slot) = self.slots.get_mut(room).and_then(|slot| slot.as_mut()) {
            slot.is_muted = !slot.is_muted;
            host.set_muted(room, slot.is_muted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ScriptedHost {
        allow_autoplay: bool,
        playing: [bool; ROOM_COUNT],
        muted: [bool; ROOM_COUNT],
        pause_calls: Vec<usize>,
    }

    impl ScriptedHost {
        fn rejecting() -> Self {
            Self {
                allow_autoplay: false,
                ..Self::default()
            }
        }

        fn permissive() -> Self {
            Self {
                allow_autoplay: true,
                ..Self::default()
            }
        }
    }

    impl MediaHost for ScriptedHost {
        fn play(&mut self, room: usize) -> Result<(), AutoplayError> {
            if !self.allow_autoplay {
                return Err(AutoplayError);
            }
            self.playing[room] = true;
            Ok(())
        }

        fn pause(&mut self, room: usize) {
            self.playing[room] = false;
            self.pause_calls.push(room);
        }

        fn set_muted(&mut self, room: usize, muted: bool) {
            self.muted[room] = muted;
        }
    }

    fn registry() -> MediaPlaybackRegistry {
        MediaPlaybackRegistry::from_catalog(&RoomCatalog::standard())
    }

    #[test]
    fn only_video_rooms_have_slots() {
        let registry = registry();
        assert!(registry.slot(0).is_none());
        assert!(registry.slot(1).is_some());
        assert!(registry.slot(2).is_some());
        assert!(registry.slot(3).is_none());
        assert!(registry.slot(4).is_none());
        assert!(registry.slot(5).is_some());
    }

    #[test]
    fn successful_autoplay_starts_muted_with_no_deferred_check() {
        let mut registry = registry();
        let mut host = ScriptedHost::permissive();

        let check = registry.on_room_activated(1, &mut host);
        assert!(check.is_none());

        let slot = registry.slot(1).expect("slot exists");
        assert!(slot.is_playing);
        assert!(slot.is_muted);
        assert!(!slot.fallback_overlay_visible);
        assert!(host.muted[1]);
    }

    #[test]
    fn rejected_autoplay_defers_the_overlay_decision() {
        let mut registry = registry();
        let mut host = ScriptedHost::rejecting();

        let check = registry
            .on_room_activated(1, &mut host)
            .expect("check expected on rejection");
        assert_eq!(check.room, 1);

        // Overlay stays hidden until the deferred check fires.
        let slot = registry.slot(1).expect("slot exists");
        assert!(!slot.is_playing);
        assert!(!slot.fallback_overlay_visible);

        registry.fallback_check_elapsed(check);
        assert!(registry.slot(1).expect("slot exists").fallback_overlay_visible);
    }

    #[test]
    fn deactivation_cancels_a_pending_check() {
        let mut registry = registry();
        let mut host = ScriptedHost::rejecting();

        let check = registry
            .on_room_activated(1, &mut host)
            .expect("check expected on rejection");
        registry.on_room_deactivated(1, &mut host);
        registry.fallback_check_elapsed(check);

        let slot = registry.slot(1).expect("slot exists");
        assert!(!slot.fallback_overlay_visible);
        assert_eq!(host.pause_calls, vec![1]);
    }

    #[test]
    fn check_is_ignored_once_playback_started() {
        let mut registry = registry();
        let mut host = ScriptedHost::rejecting();

        let check = registry
            .on_room_activated(1, &mut host)
            .expect("check expected on rejection");

        // The visitor taps play before the deferred check fires.
        host.allow_autoplay = true;
        registry.toggle_play(1, &mut host);
        registry.fallback_check_elapsed(check);

        let slot = registry.slot(1).expect("slot exists");
        assert!(slot.is_playing);
        assert!(!slot.fallback_overlay_visible);
    }

    #[test]
    fn deactivation_resets_the_slot_record() {
        let mut registry = registry();
        let mut host = ScriptedHost::permissive();

        registry.on_room_activated(1, &mut host);
        registry.toggle_mute(1, &mut host);
        registry.on_room_deactivated(1, &mut host);

        let slot = registry.slot(1).expect("slot exists");
        assert!(!slot.is_playing);
        assert!(slot.is_muted);
        assert!(!slot.fallback_overlay_visible);
    }

    #[test]
    fn toggle_play_clears_the_overlay() {
        let mut registry = registry();
        let mut host = ScriptedHost::rejecting();

        let check = registry
            .on_room_activated(1, &mut host)
            .expect("check expected on rejection");
        registry.fallback_check_elapsed(check);
        assert!(registry.slot(1).expect("slot exists").fallback_overlay_visible);

        host.allow_autoplay = true;
        registry.toggle_play(1, &mut host);

        let slot = registry.slot(1).expect("slot exists");
        assert!(slot.is_playing);
        assert!(!slot.fallback_overlay_visible);
    }

    #[test]
    fn toggle_mute_does_not_affect_play_state() {
        let mut registry = registry();
        let mut host = ScriptedHost::permissive();

        registry.on_room_activated(1, &mut host);
        registry.toggle_mute(1, &mut host);

        let slot = registry.slot(1).expect("slot exists");
        assert!(slot.is_playing);
        assert!(!slot.is_muted);
        assert!(!host.muted[1]);
    }

    #[test]
    fn operations_on_rooms_without_media_are_no_ops() {
        let mut registry = registry();
        let mut host = ScriptedHost::permissive();

        assert!(registry.on_room_activated(0, &mut host).is_none());
        registry.toggle_play(3, &mut host);
        registry.toggle_mute(4, &mut host);
        assert!(host.pause_calls.is_empty());
    }
}
