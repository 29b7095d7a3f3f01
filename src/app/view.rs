// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Projects the session snapshots into widgets. Every handler here emits a
//! session command; no state lives in the view.

use super::{App, Message};
use crate::carousel;
use crate::catalog::{Room, RoomKind, CURATORIAL_NOTICE};
use crate::lightbox::{LightboxState, MediaKind, MediaRef};
use crate::participation::{ParticipationFunnel, Protocol, SubmissionStatus};
use crate::session::ExhibitSessionController;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, progress_bar, text, text_input, Column, Container, Row, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let session = &self.session;
        let room = session.current_room();

        let header = Column::new()
            .spacing(4)
            .push(text(room.label).size(13))
            .push(text(room.title).size(26));

        let media_column = Container::new(view_media(session, room))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Top);

        let cartel_column = Container::new(view_cartel(self, room))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .padding(16);

        let base: Element<'_, Message> = Column::new()
            .spacing(16)
            .padding(20)
            .push(header)
            .push(
                Row::new()
                    .spacing(24)
                    .height(Length::Fill)
                    .push(media_column)
                    .push(cartel_column),
            )
            .push(view_navigation_bar(session))
            .into();

        match session.lightbox() {
            LightboxState::Open(media) => Stack::new()
                .push(base)
                .push(view_lightbox(media))
                .into(),
            LightboxState::Closed => base,
        }
    }
}

fn view_media<'a>(session: &'a ExhibitSessionController, room: &'a Room) -> Element<'a, Message> {
    match room.kind {
        RoomKind::Image => view_image(room),
        RoomKind::Video => view_video(session, room),
        RoomKind::Interactive => view_protocols(session.participation()),
        RoomKind::Carousel => view_carousel(session),
    }
}

fn view_image(room: &Room) -> Element<'_, Message> {
    let src = room.media_src.unwrap_or_default();
    Column::new()
        .spacing(12)
        .align_x(Horizontal::Center)
        .push(text(src).size(15))
        .push(button(text("Agrandir")).on_press(Message::OpenLightbox(MediaRef::image(src))))
        .into()
}

fn view_video<'a>(session: &'a ExhibitSessionController, room: &'a Room) -> Element<'a, Message> {
    let index = session.current_index();
    let src = room.media_src.unwrap_or_default();

    let mut column = Column::new()
        .spacing(12)
        .align_x(Horizontal::Center)
        .push(text(src).size(15));

    let Some(slot) = session.playback_slot(index) else {
        return column.into();
    };

    if slot.fallback_overlay_visible {
        // Autoplay could not be confirmed; offer a user-initiated start.
        column = column.push(
            button(text("Activer la lecture").size(18)).on_press(Message::TogglePlay(index)),
        );
    }

    let play_label = if slot.is_playing { "Pause" } else { "Lecture" };
    let mute_label = if slot.is_muted {
        "Activer le son"
    } else {
        "Couper le son"
    };

    column
        .push(
            Row::new()
                .spacing(8)
                .push(button(text(play_label)).on_press(Message::TogglePlay(index)))
                .push(button(text(mute_label)).on_press(Message::ToggleMute(index)))
                .push(
                    button(text("Agrandir"))
                        .on_press(Message::OpenLightbox(MediaRef::video(src))),
                ),
        )
        .into()
}

fn view_protocols(funnel: &ParticipationFunnel) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(12)
        .push(text("Système en cours d'exécution").size(12));

    for protocol in Protocol::ALL {
        let selected = funnel.is_selected(protocol);
        let label = if selected {
            format!("● {}", protocol.label())
        } else {
            protocol.label().to_string()
        };
        // A choice can be taken at most once; an archived funnel takes none.
        let enabled = !selected && !funnel.is_archived();
        column = column.push(
            button(text(label))
                .width(Length::Fill)
                .on_press_maybe(enabled.then_some(Message::SelectChoice(protocol))),
        );
    }

    let status_line = if funnel.selected_choices().is_empty() {
        "Statut : en attente"
    } else {
        "Statut : signal acquis"
    };
    column.push(text(status_line).size(12)).into()
}

fn view_carousel(session: &ExhibitSessionController) -> Element<'_, Message> {
    let state = session.carousel();
    let counter = format!("SÉRIE {:02}/{:02}", state.current_index() + 1, carousel::PANELS.len());

    Column::new()
        .spacing(12)
        .align_x(Horizontal::Center)
        .push(text(state.current_panel()).size(15))
        .push(
            Row::new()
                .spacing(8)
                .push(
                    button(text("←"))
                        .on_press_maybe((!state.is_at_first()).then_some(Message::CarouselPrevious)),
                )
                .push(text(counter).size(12))
                .push(
                    button(text("→"))
                        .on_press_maybe((!state.is_at_last()).then_some(Message::CarouselNext)),
                ),
        )
        .push(
            button(text("Agrandir"))
                .on_press(Message::OpenLightbox(MediaRef::image(state.current_panel()))),
        )
        .into()
}

fn view_cartel<'a>(app: &'a App, room: &'a Room) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(10)
        .push(text(room.medium).size(12))
        .push(text(room.description).size(15));

    if room.kind == RoomKind::Interactive {
        column = column
            .push(view_transmission(app))
            .push(text(CURATORIAL_NOTICE).size(13));
    }
    column.into()
}

/// Transmission section of the interactive room: email capture, submit
/// control, and the funnel's status feedback.
fn view_transmission(app: &App) -> Element<'_, Message> {
    let funnel = app.session.participation();

    if funnel.is_archived() {
        return Column::new()
            .spacing(8)
            .push(text("Votre signal a été archivé.").size(16))
            .push(
                text("Le système a enregistré votre participation. Elle demeure irréversible.")
                    .size(13),
            )
            .into();
    }

    let loading = funnel.status() == &SubmissionStatus::Loading;

    let mut email_input = text_input("adresse@email.com", funnel.email());
    if !loading {
        email_input = email_input
            .on_input(Message::EmailChanged)
            .on_submit(Message::SubmitParticipation);
    }

    let submit_label = if loading { "Transmission..." } else { "Transmettre" };

    let mut column = Column::new()
        .spacing(8)
        .push(text("TRANSMISSION").size(11))
        .push(email_input)
        .push(
            button(text(submit_label))
                .on_press_maybe((!loading).then_some(Message::SubmitParticipation)),
        );

    if let SubmissionStatus::Error(message) = funnel.status() {
        column = column.push(text(format!("Le système n'a pas répondu. {message}")).size(12));
    }
    if let Some(message) = &app.inline_error {
        column = column.push(text(message.as_str()).size(12));
    }
    column.into()
}

fn view_navigation_bar(session: &ExhibitSessionController) -> Element<'_, Message> {
    let counter = format!("{:02}/06", session.current_index() + 1);

    Row::new()
        .spacing(16)
        .align_y(Vertical::Center)
        .push(
            button(text("← Précédent"))
                .on_press_maybe((!session.is_at_first()).then_some(Message::Previous)),
        )
        .push(progress_bar(0.0..=100.0, session.progress_percent()).girth(4))
        .push(text(counter).size(12))
        .push(
            button(text("Suivant →"))
                .on_press_maybe((!session.is_at_last()).then_some(Message::Next)),
        )
        .into()
}

/// Full-screen overlay replacing any previously expanded media. A click on
/// the background closes it, like the explicit close control.
fn view_lightbox(media: &MediaRef) -> Element<'_, Message> {
    let kind_label = match media.kind {
        MediaKind::Image => "IMAGE",
        MediaKind::Video => "VIDÉO",
    };

    let panel = Column::new()
        .spacing(12)
        .align_x(Horizontal::Center)
        .push(text(kind_label).size(12))
        .push(text(media.src.as_str()).size(22))
        .push(button(text("Fermer")).on_press(Message::CloseLightbox));

    mouse_area(
        Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(Message::CloseLightbox)
    .into()
}
