// SPDX-License-Identifier: MPL-2.0
//! Immutable exhibit catalog.
//!
//! The catalog is the static content lookup for the six exhibit rooms:
//! room labels, cartel texts, and media source locators. It is built once at
//! session start and never mutated; everything stateful lives in the session
//! controller and its components.

/// Number of rooms in the exhibit sequence.
pub const ROOM_COUNT: usize = 6;

/// What kind of artifact a room presents.
///
/// The session controller only branches on this tag; it stays oblivious to
/// which room is "the form" versus "the carousel".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    /// A still image, expandable into the lightbox.
    Image,
    /// An embedded video with play/mute controls and an autoplay fallback.
    Video,
    /// The interactive participation installation.
    Interactive,
    /// A panel carousel with its own stepping controls.
    Carousel,
}

/// One step in the ordered exhibit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub kind: RoomKind,
    /// Room label shown in the navigation chrome, e.g. `SALLE 01 — ADMINISTRATION`.
    pub label: &'static str,
    pub title: &'static str,
    pub medium: &'static str,
    pub description: &'static str,
    /// Source locator of the room's primary media, when it has one.
    pub media_src: Option<&'static str>,
}

/// The fixed room catalog.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: [Room; ROOM_COUNT],
}

impl RoomCatalog {
    /// Builds the standard six-room exhibit.
    pub fn standard() -> Self {
        Self {
            rooms: [
                Room {
                    kind: RoomKind::Image,
                    label: "SALLE 01 — ADMINISTRATION",
                    title: "Autoportrait Administratif",
                    medium: "GRAPHISME ÉDITORIAL — 2026",
                    description: "Ce document constitue le point d'entrée de l'exposition. \
                        Le curriculum vitae n'est plus un outil fonctionnel, mais un objet \
                        culturel normé : une pièce d'archive. Le CV devient un autoportrait \
                        contraint, optimisé pour être trié, puis oublié.",
                    media_src: Some("/Oeuvre1.png"),
                },
                Room {
                    kind: RoomKind::Video,
                    label: "SALLE 02 — PRÉSENCE",
                    title: "Fais Exister Ta Marque",
                    medium: "FILM MANIFESTE — 2026",
                    description: "Un film manifeste sur le travail invisible de celui qui \
                        donne voix et présence à un produit brut. Rien ne change dans la \
                        substance ; tout se joue dans la mise en scène.",
                    media_src: Some("/Oeuvre2.mp4"),
                },
                Room {
                    kind: RoomKind::Video,
                    label: "SALLE 03 — IMMOBILITÉ",
                    title: "Immobile",
                    medium: "FILM CONTEMPLATIF — 2026",
                    description: "« The outside stands still. The inside insists. » Un homme \
                        demeure parfaitement immobile tandis que le monde continue de se \
                        mouvoir et de le contourner.",
                    media_src: Some("/Oeuvre3.mp4"),
                },
                Room {
                    kind: RoomKind::Interactive,
                    label: "SALLE 04 — SYSTÈME",
                    title: "Systèmes Automatisés",
                    medium: "INSTALLATION INTERACTIVE — 2026",
                    description: "Vous êtes invité à participer à cette œuvre en \
                        sélectionnant un ou plusieurs protocoles d'interaction, puis en \
                        entrant votre adresse email. Chaque choix déclenche un traitement \
                        unique, automatisé et archivé.",
                    media_src: None,
                },
                Room {
                    kind: RoomKind::Carousel,
                    label: "SALLE 05 — INJONCTIONS",
                    title: "Le Dogme du Succès",
                    medium: "SÉRIE INSTAGRAM — 2026",
                    description: "Ce carrousel détourne le format des conseils \
                        professionnels sur réseaux sociaux. Chaque slide se présente comme \
                        une affiche institutionnelle ; sous cette surface rassurante, le \
                        texte révèle des injonctions paradoxales.",
                    media_src: None,
                },
                Room {
                    kind: RoomKind::Video,
                    label: "SALLE 06 — ARCHÉOLOGIE SONORE",
                    title: "ASMR du Ghosting",
                    medium: "VIDÉO SONORE — 2026",
                    description: "Une exploration sonore du silence institutionnel : \
                        froissement de papier, clic de souris, scroll d'inbox vide, silence \
                        prolongé. Ce que l'on entend n'est pas le silence, mais sa \
                        fabrication.",
                    media_src: Some("/videos/asmr_placeholder.mp4"),
                },
            ],
        }
    }

    /// Returns the room at `index`, or `None` outside `[0, ROOM_COUNT)`.
    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Indices of the rooms that carry a playback slot.
    pub fn video_rooms(&self) -> impl Iterator<Item = usize> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.kind == RoomKind::Video)
            .map(|(index, _)| index)
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Curatorial notice displayed beside the interactive installation.
pub const CURATORIAL_NOTICE: &str = "L'installation propose trois protocoles \
    algorithmiques reproduisant les mécaniques du recrutement contemporain :\n\n\
    Optimiser ma candidature — vous recevez un email automatisé contenant une \
    réponse générée par IA, sans intervention humaine directe.\n\n\
    Contourner l'algorithme — une publication publique est générée et diffusée \
    dans la minute.\n\n\
    Envoyer ma donnée dans le vide — honore le ghosting absolu : le silence. \
    Aucune réponse. Aucun accusé de réception. L'action est enregistrée, puis \
    disparaît du système sans retour.";
