// SPDX-License-Identifier: MPL-2.0
//! Exhibit session façade.
//!
//! `ExhibitSessionController` composes the room navigator, the playback
//! registry, the lightbox, and the participation funnel into one coherent
//! session. It is the only surface the rendering layer talks to: commands go
//! in, read-only snapshots come out, and after any command the aggregate
//! state is internally consistent.
//!
//! The two asynchronous edges (the deferred autoplay check and the gateway
//! call) re-enter the session through [`fallback_check_elapsed`] and
//! [`complete_submission`]; everything else is synchronous.
//!
//! [`fallback_check_elapsed`]: ExhibitSessionController::fallback_check_elapsed
//! [`complete_submission`]: ExhibitSessionController::complete_submission

use crate::application::port::MediaHost;
use crate::carousel::CarouselState;
use crate::catalog::{Room, RoomCatalog};
use crate::lightbox::{LightboxController, LightboxState, MediaRef};
use crate::navigation::{OutOfRangeError, RoomNavigator, Transition};
use crate::participation::{
    ParticipationFunnel, Protocol, SubmissionPlan, ValidationError,
};
use crate::playback::{FallbackCheck, MediaPlaybackRegistry, PlaybackSlot};
use crate::error::GatewayError;
use std::fmt;

pub struct ExhibitSessionController {
    catalog: RoomCatalog,
    navigator: RoomNavigator,
    playback: MediaPlaybackRegistry,
    lightbox: LightboxController,
    funnel: ParticipationFunnel,
    carousel: CarouselState,
    media: Box<dyn MediaHost>,
}

impl fmt::Debug for ExhibitSessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExhibitSessionController")
            .field("current_index", &self.navigator.current_index())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("submission_status", self.funnel.status())
            .finish()
    }
}

impl ExhibitSessionController {
    /// Creates a session over the standard catalog, positioned at the first
    /// room. Call [`activate_current`](Self::activate_current) once after
    /// construction to start playback for the opening room.
    pub fn new(media: Box<dyn MediaHost>) -> Self {
        let catalog = RoomCatalog::standard();
        let playback = MediaPlaybackRegistry::from_catalog(&catalog);
        Self {
            catalog,
            navigator: RoomNavigator::new(),
            playback,
            lightbox: LightboxController::new(),
            funnel: ParticipationFunnel::new(),
            carousel: CarouselState::new(),
            media,
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Attempts autoplay for the current room; used once at session start.
    pub fn activate_current(&mut self) -> Option<FallbackCheck> {
        self.playback
            .on_room_activated(self.navigator.current_index(), self.media.as_mut())
    }

    pub fn next(&mut self) -> Option<FallbackCheck> {
        let transition = self.navigator.next()?;
        self.apply_transition(transition)
    }

    pub fn previous(&mut self) -> Option<FallbackCheck> {
        let transition = self.navigator.previous()?;
        self.apply_transition(transition)
    }

    pub fn go_to(&mut self, index: usize) -> Result<Option<FallbackCheck>, OutOfRangeError> {
        match self.navigator.go_to(index)? {
            Some(transition) => Ok(self.apply_transition(transition)),
            None => Ok(None),
        }
    }

    /// Applies the side effects of a committed index change: the lightbox is
    /// forced shut, the departed room's slot is paused and reset, and the new
    /// room's slot attempts autoplay.
    fn apply_transition(&mut self, transition: Transition) -> Option<FallbackCheck> {
        self.lightbox.close();
        self.playback
            .on_room_deactivated(transition.from, self.media.as_mut());
        self.playback
            .on_room_activated(transition.to, self.media.as_mut())
    }

    // ------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------

    pub fn toggle_play(&mut self, room: usize) {
        self.playback.toggle_play(room, self.media.as_mut());
    }

    pub fn toggle_mute(&mut self, room: usize) {
        self.playback.toggle_mute(room, self.media.as_mut());
    }

    pub fn fallback_check_elapsed(&mut self, check: FallbackCheck) {
        self.playback.fallback_check_elapsed(check);
    }

    // ------------------------------------------------------------------
    // Lightbox
    // ------------------------------------------------------------------

    pub fn open_lightbox(&mut self, media: MediaRef) {
        self.lightbox.open(media);
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    // ------------------------------------------------------------------
    // Participation
    // ------------------------------------------------------------------

    pub fn select_choice(&mut self, choice: Protocol) {
        self.funnel.select_choice(choice);
    }

    pub fn set_participation_email(&mut self, email: String) {
        self.funnel.set_email(email);
    }

    /// Validates and starts a submission; see
    /// [`ParticipationFunnel::begin_submission`] for the contract.
    pub fn submit_participation(&mut self) -> Result<SubmissionPlan, ValidationError> {
        self.funnel.begin_submission()
    }

    pub fn complete_submission(&mut self, result: Result<(), GatewayError>) {
        self.funnel.complete(result);
    }

    // ------------------------------------------------------------------
    // Carousel
    // ------------------------------------------------------------------

    pub fn carousel_next(&mut self) {
        self.carousel.next();
    }

    pub fn carousel_previous(&mut self) {
        self.carousel.previous();
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn current_room(&self) -> &Room {
        // The navigator's invariant keeps the index inside the catalog.
        self.catalog
            .room(self.navigator.current_index())
            .unwrap_or_else(|| &self.catalog.rooms()[0])
    }

    pub fn progress_percent(&self) -> f32 {
        self.navigator.progress_percent()
    }

    pub fn is_at_first(&self) -> bool {
        self.navigator.is_at_first()
    }

    pub fn is_at_last(&self) -> bool {
        self.navigator.is_at_last()
    }

    pub fn playback_slot(&self, room: usize) -> Option<&PlaybackSlot> {
        self.playback.slot(room)
    }

    pub fn lightbox(&self) -> &LightboxState {
        self.lightbox.state()
    }

    pub fn participation(&self) -> &ParticipationFunnel {
        &self.funnel
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::AutoplayError;

    #[derive(Default)]
    struct RecordingHost {
        reject_autoplay: bool,
        play_calls: Vec<usize>,
        pause_calls: Vec<usize>,
    }

    impl MediaHost for RecordingHost {
        fn play(&mut self, room: usize) -> Result<(), AutoplayError> {
            self.play_calls.push(room);
            if self.reject_autoplay {
                Err(AutoplayError)
            } else {
                Ok(())
            }
        }

        fn pause(&mut self, room: usize) {
            self.pause_calls.push(room);
        }

        fn set_muted(&mut self, _room: usize, _muted: bool) {}
    }

    fn session() -> ExhibitSessionController {
        ExhibitSessionController::new(Box::<RecordingHost>::default())
    }

    #[test]
    fn navigating_to_a_video_room_attempts_autoplay() {
        let mut session = session();
        assert!(session.next().is_none()); // room 1 autoplays fine
        let slot = session.playback_slot(1).expect("room 1 has a slot");
        assert!(slot.is_playing);
    }

    #[test]
    fn leaving_a_video_room_pauses_its_slot() {
        let mut session = session();
        session.next(); // into room 1 (video)
        session.next(); // into room 2 (video)
        let slot = session.playback_slot(1).expect("room 1 has a slot");
        assert!(!slot.is_playing);
        let slot = session.playback_slot(2).expect("room 2 has a slot");
        assert!(slot.is_playing);
    }

    #[test]
    fn any_navigation_forces_the_lightbox_closed() {
        let mut session = session();
        session.open_lightbox(MediaRef::image("/Oeuvre1.png"));
        assert!(matches!(session.lightbox(), LightboxState::Open(_)));

        session.next();
        assert_eq!(session.lightbox(), &LightboxState::Closed);
    }

    #[test]
    fn saturated_navigation_leaves_state_untouched() {
        let mut session = session();
        session.open_lightbox(MediaRef::image("/Oeuvre1.png"));
        assert!(session.previous().is_none());
        // No transition happened, so the lightbox survives.
        assert!(matches!(session.lightbox(), LightboxState::Open(_)));
    }

    #[test]
    fn participation_progress_survives_room_transitions() {
        let mut session = session();
        session.go_to(3).expect("room 3 exists");
        session.select_choice(Protocol::Optimize);
        session.set_participation_email("visiteur@example.com".to_string());

        session.previous();
        session.next();

        assert!(session.participation().is_selected(Protocol::Optimize));
        assert_eq!(session.participation().email(), "visiteur@example.com");
    }

    #[test]
    fn rejected_autoplay_yields_a_check_for_the_new_room() {
        let mut session = ExhibitSessionController::new(Box::new(RecordingHost {
            reject_autoplay: true,
            ..RecordingHost::default()
        }));
        let check = session.next().expect("autoplay was rejected");
        assert_eq!(check.room, 1);

        session.fallback_check_elapsed(check);
        let slot = session.playback_slot(1).expect("room 1 has a slot");
        assert!(slot.fallback_overlay_visible);
    }

    #[test]
    fn go_to_out_of_range_is_rejected_and_harmless() {
        let mut session = session();
        assert!(session.go_to(42).is_err());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn current_room_tracks_the_navigator() {
        let mut session = session();
        session.go_to(3).expect("room 3 exists");
        assert_eq!(session.current_room().title, "Systèmes Automatisés");
    }
}
