// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every user command is applied to the session synchronously; only the
//! deferred autoplay check and the submission gateway call spawn tasks, and
//! both re-enter here through their completion messages.

use super::{App, Message};
use crate::error::GatewayError;
use crate::infrastructure::webhook;
use crate::participation::SubmissionPlan;
use crate::playback::{FallbackCheck, FALLBACK_DELAY};
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Next => match self.session.next() {
                Some(check) => schedule_fallback_check(check),
                None => Task::none(),
            },
            Message::Previous => match self.session.previous() {
                Some(check) => schedule_fallback_check(check),
                None => Task::none(),
            },
            Message::SelectChoice(choice) => {
                self.session.select_choice(choice);
                self.inline_error = None;
                Task::none()
            }
            Message::EmailChanged(email) => {
                self.session.set_participation_email(email);
                Task::none()
            }
            Message::SubmitParticipation => self.handle_submit(),
            Message::SubmissionCompleted(result) => {
                self.session.complete_submission(result);
                Task::none()
            }
            Message::TogglePlay(room) => {
                self.session.toggle_play(room);
                Task::none()
            }
            Message::ToggleMute(room) => {
                self.session.toggle_mute(room);
                Task::none()
            }
            Message::OpenLightbox(media) => {
                self.session.open_lightbox(media);
                Task::none()
            }
            Message::CloseLightbox => {
                self.session.close_lightbox();
                Task::none()
            }
            Message::CarouselNext => {
                self.session.carousel_next();
                Task::none()
            }
            Message::CarouselPrevious => {
                self.session.carousel_previous();
                Task::none()
            }
            Message::FallbackCheckElapsed(check) => {
                self.session.fallback_check_elapsed(check);
                Task::none()
            }
        }
    }

    /// Validates the funnel and carries out the returned submission plan.
    fn handle_submit(&mut self) -> Task<Message> {
        match self.session.submit_participation() {
            Ok(SubmissionPlan::Forward(request)) => {
                self.inline_error = None;
                match self.webhook_url.clone() {
                    Some(url) => Task::perform(
                        webhook::forward(url, self.submit_timeout, request),
                        Message::SubmissionCompleted,
                    ),
                    None => Task::perform(
                        async { Err(GatewayError::NotConfigured) },
                        Message::SubmissionCompleted,
                    ),
                }
            }
            Ok(SubmissionPlan::ResolveLocally) => {
                self.inline_error = None;
                Task::perform(
                    webhook::settle_locally(webhook::LOCAL_RESOLVE_DELAY),
                    Message::SubmissionCompleted,
                )
            }
            Err(err) => {
                self.inline_error = Some(err.to_string());
                Task::none()
            }
        }
    }
}

/// Schedules the deferred autoplay verdict for a slot whose autoplay attempt
/// was rejected. The session discards the check if the slot's generation has
/// advanced by the time it fires.
pub(super) fn schedule_fallback_check(check: FallbackCheck) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(FALLBACK_DELAY).await;
            check
        },
        Message::FallbackCheckElapsed,
    )
}
