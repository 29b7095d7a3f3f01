// SPDX-License-Identifier: MPL-2.0
//! Participation funnel for the interactive installation.
//!
//! The funnel accumulates protocol choices, gates submission on a well-formed
//! email and a non-empty choice set, and classifies every submission before
//! it leaves the machine: only `EXECUTE` submissions are forwarded to the
//! automation webhook, while "void"-only submissions resolve locally and
//! never produce network traffic. The classification is a property of the
//! selected choices, not of transport success.
//!
//! State machine: `Idle -> Loading -> (Success | Error)`, `Error -> Loading`
//! on manual resubmission, `Success` terminal.

use crate::error::GatewayError;
use chrono::Utc;
use serde::Serialize;
use std::fmt;

/// The three invited protocols of the installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// "Optimiser ma candidature" — an AI-generated reply is mailed back.
    Optimize,
    /// "Contourner l'algorithme" — the participation is published publicly.
    Bypass,
    /// "Envoyer ma donnée dans le vide" — recorded, then silence.
    Void,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::Optimize, Protocol::Bypass, Protocol::Void];

    /// Name transmitted in the webhook payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Protocol::Optimize => "OPTIMIZE",
            Protocol::Bypass => "BYPASS",
            Protocol::Void => "VOID",
        }
    }

    /// Button label shown in the installation.
    pub fn label(self) -> &'static str {
        match self {
            Protocol::Optimize => "Optimiser ma candidature",
            Protocol::Bypass => "Contourner l'algorithme",
            Protocol::Void => "Envoyer ma donnée dans le vide",
        }
    }
}

/// Classification of a submission, resolved from the selected choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// At least one selected protocol leaves the system: forward the payload.
    Execute,
    /// Every selected protocol is Void: resolve locally, no outbound call.
    Void,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Execute => "EXECUTE",
            Action::Void => "VOID",
        }
    }

    fn resolve(choices: &[Protocol]) -> Self {
        if choices.iter().any(|choice| *choice != Protocol::Void) {
            Action::Execute
        } else {
            Action::Void
        }
    }
}

/// Rejected before any state transition; surfaced as an inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail,
    NoChoiceSelected,
    SubmissionInFlight,
    AlreadyArchived,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail => write!(f, "Email invalide."),
            ValidationError::NoChoiceSelected => {
                write!(f, "Sélectionnez d'abord au moins un protocole.")
            }
            ValidationError::SubmissionInFlight => write!(f, "Transmission en cours."),
            ValidationError::AlreadyArchived => {
                write!(f, "Votre participation est déjà archivée.")
            }
        }
    }
}

/// Submission lifecycle of the funnel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    /// Terminal: the funnel becomes display-only.
    Success,
    /// Retryable; carries the gateway's message for display.
    Error(String),
}

/// Payload transmitted to the automation webhook for `EXECUTE` submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub email: String,
    pub choices: Vec<&'static str>,
    pub timestamp: String,
    pub action: &'static str,
}

/// What the caller must do to carry a validated submission to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPlan {
    /// Forward the payload to the webhook, then report back.
    Forward(SubmissionRequest),
    /// No outbound call: settle locally and report success.
    ResolveLocally,
}

/// The choice-selection and email-submission state machine.
///
/// Policy: multi-choice, choice-first. Choices accumulate in insertion order
/// and each protocol can be selected at most once; there is no de-selection.
#[derive(Debug, Clone, Default)]
pub struct ParticipationFunnel {
    selected: Vec<Protocol>,
    email: String,
    status: SubmissionStatus,
}

impl ParticipationFunnel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `choice` to the accumulated set. Selecting a choice twice is a
    /// silent no-op, as is any selection after terminal success.
    pub fn select_choice(&mut self, choice: Protocol) {
        if self.status == SubmissionStatus::Success {
            return;
        }
        if !self.selected.contains(&choice) {
            self.selected.push(choice);
        }
    }

    /// Updates the email free text. Ignored while a submission is in flight
    /// or after terminal success.
    pub fn set_email(&mut self, email: String) {
        match self.status {
            SubmissionStatus::Idle | SubmissionStatus::Error(_) => self.email = email,
            SubmissionStatus::Loading | SubmissionStatus::Success => {}
        }
    }

    /// Validates the funnel and transitions it to `Loading`.
    ///
    /// On success the returned [`SubmissionPlan`] tells the caller whether
    /// the payload leaves the system; the caller reports the outcome through
    /// [`complete`](Self::complete). Validation failures leave
    /// `submission_status` untouched.
    pub fn begin_submission(&mut self) -> Result<SubmissionPlan, ValidationError> {
        match self.status {
            SubmissionStatus::Loading => return Err(ValidationError::SubmissionInFlight),
            SubmissionStatus::Success => return Err(ValidationError::AlreadyArchived),
            SubmissionStatus::Idle | SubmissionStatus::Error(_) => {}
        }
        if self.selected.is_empty() {
            return Err(ValidationError::NoChoiceSelected);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }

        self.status = SubmissionStatus::Loading;
        let action = Action::resolve(&self.selected);
        match action {
            Action::Execute => Ok(SubmissionPlan::Forward(SubmissionRequest {
                email: self.email.clone(),
                choices: self.selected.iter().map(|c| c.wire_name()).collect(),
                timestamp: Utc::now().to_rfc3339(),
                action: action.as_str(),
            })),
            Action::Void => Ok(SubmissionPlan::ResolveLocally),
        }
    }

    /// Records the outcome of an in-flight submission.
    ///
    /// Success is terminal; failure preserves the email and the accumulated
    /// choices so the visitor may retry with the same control.
    pub fn complete(&mut self, result: Result<(), GatewayError>) {
        if self.status != SubmissionStatus::Loading {
            return;
        }
        self.status = match result {
            Ok(()) => SubmissionStatus::Success,
            Err(err) => SubmissionStatus::Error(err.to_string()),
        };
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn selected_choices(&self) -> &[Protocol] {
        &self.selected
    }

    pub fn is_selected(&self, choice: Protocol) -> bool {
        self.selected.contains(&choice)
    }

    /// True once the funnel reached terminal success and became display-only.
    pub fn is_archived(&self) -> bool {
        self.status == SubmissionStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funnel_with(choices: &[Protocol], email: &str) -> ParticipationFunnel {
        let mut funnel = ParticipationFunnel::new();
        for choice in choices {
            funnel.select_choice(*choice);
        }
        funnel.set_email(email.to_string());
        funnel
    }

    #[test]
    fn selecting_a_choice_twice_is_idempotent() {
        let mut funnel = ParticipationFunnel::new();
        funnel.select_choice(Protocol::Optimize);
        funnel.select_choice(Protocol::Optimize);
        assert_eq!(funnel.selected_choices(), &[Protocol::Optimize]);
    }

    #[test]
    fn choices_accumulate_in_insertion_order() {
        let mut funnel = ParticipationFunnel::new();
        funnel.select_choice(Protocol::Void);
        funnel.select_choice(Protocol::Optimize);
        assert_eq!(
            funnel.selected_choices(),
            &[Protocol::Void, Protocol::Optimize]
        );
    }

    #[test]
    fn submission_requires_a_choice_even_with_a_wellformed_email() {
        let mut funnel = funnel_with(&[], "visiteur@example.com");
        let err = funnel.begin_submission().expect_err("no choice selected");
        assert_eq!(err, ValidationError::NoChoiceSelected);
        assert_eq!(funnel.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn submission_rejects_an_email_without_at_sign() {
        let mut funnel = funnel_with(&[Protocol::Optimize], "pas-un-email");
        let err = funnel.begin_submission().expect_err("email is malformed");
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(funnel.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn void_only_submissions_resolve_locally() {
        let mut funnel = funnel_with(&[Protocol::Void], "visiteur@example.com");
        let plan = funnel.begin_submission().expect("submission accepted");
        assert_eq!(plan, SubmissionPlan::ResolveLocally);
        assert_eq!(funnel.status(), &SubmissionStatus::Loading);
    }

    #[test]
    fn non_void_submissions_are_forwarded_as_execute() {
        let mut funnel = funnel_with(&[Protocol::Optimize], "visiteur@example.com");
        let plan = funnel.begin_submission().expect("submission accepted");
        match plan {
            SubmissionPlan::Forward(request) => {
                assert_eq!(request.email, "visiteur@example.com");
                assert_eq!(request.choices, vec!["OPTIMIZE"]);
                assert_eq!(request.action, "EXECUTE");
                assert!(!request.timestamp.is_empty());
            }
            SubmissionPlan::ResolveLocally => panic!("expected a forwarded plan"),
        }
    }

    #[test]
    fn a_void_choice_mixed_with_others_still_executes() {
        let mut funnel = funnel_with(
            &[Protocol::Void, Protocol::Bypass],
            "visiteur@example.com",
        );
        let plan = funnel.begin_submission().expect("submission accepted");
        match plan {
            SubmissionPlan::Forward(request) => {
                assert_eq!(request.choices, vec!["VOID", "BYPASS"]);
                assert_eq!(request.action, "EXECUTE");
            }
            SubmissionPlan::ResolveLocally => panic!("expected a forwarded plan"),
        }
    }

    #[test]
    fn request_serializes_with_the_wire_field_names() {
        let mut funnel = funnel_with(&[Protocol::Optimize], "visiteur@example.com");
        let plan = funnel.begin_submission().expect("submission accepted");
        let SubmissionPlan::Forward(request) = plan else {
            panic!("expected a forwarded plan");
        };

        let value = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(value["email"], "visiteur@example.com");
        assert_eq!(value["action"], "EXECUTE");
        assert_eq!(value["choices"][0], "OPTIMIZE");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn no_second_submission_while_loading() {
        let mut funnel = funnel_with(&[Protocol::Void], "visiteur@example.com");
        funnel.begin_submission().expect("submission accepted");
        let err = funnel.begin_submission().expect_err("already loading");
        assert_eq!(err, ValidationError::SubmissionInFlight);
    }

    #[test]
    fn gateway_failure_is_retryable_with_state_preserved() {
        let mut funnel = funnel_with(&[Protocol::Optimize], "visiteur@example.com");
        funnel.begin_submission().expect("submission accepted");
        funnel.complete(Err(GatewayError::Http {
            status: 500,
            message: "Scenario failed".to_string(),
        }));

        assert!(matches!(funnel.status(), SubmissionStatus::Error(_)));
        assert_eq!(funnel.email(), "visiteur@example.com");
        assert_eq!(funnel.selected_choices(), &[Protocol::Optimize]);

        // The same control retries and succeeds.
        funnel.begin_submission().expect("retry accepted");
        funnel.complete(Ok(()));
        assert_eq!(funnel.status(), &SubmissionStatus::Success);
    }

    #[test]
    fn success_is_terminal() {
        let mut funnel = funnel_with(&[Protocol::Void], "visiteur@example.com");
        funnel.begin_submission().expect("submission accepted");
        funnel.complete(Ok(()));

        funnel.select_choice(Protocol::Optimize);
        funnel.set_email("autre@example.com".to_string());
        let err = funnel.begin_submission().expect_err("funnel is archived");

        assert_eq!(err, ValidationError::AlreadyArchived);
        assert_eq!(funnel.selected_choices(), &[Protocol::Void]);
        assert_eq!(funnel.email(), "visiteur@example.com");
        assert!(funnel.is_archived());
    }

    #[test]
    fn stray_completion_outside_loading_is_ignored() {
        let mut funnel = funnel_with(&[Protocol::Void], "visiteur@example.com");
        funnel.complete(Ok(()));
        assert_eq!(funnel.status(), &SubmissionStatus::Idle);
    }
}
