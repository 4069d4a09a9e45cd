// SPDX-License-Identifier: MPL-2.0
//! Guests component encapsulating state and update logic.
//!
//! The component owns three pieces of state with very different lifetimes:
//! the record list (fixed at construction), the failure set (grows
//! monotonically, never shrinks within a session), and the lightbox
//! selection (fully transient). The failure set and the selection are
//! orthogonal; no transition of one ever consults the other.

use super::record::{GalleryConfig, GuestRecord};
use super::{card, lightbox};
use crate::error::Error;
use crate::media::image::{load_image_async, ImageData};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{responsive, scrollable, Column, Row, Text};
use iced::{alignment, Element, Length, Task};
use std::collections::{BTreeSet, HashMap};

/// Messages emitted by the gallery widgets and the image loader.
#[derive(Debug, Clone)]
pub enum Message {
    /// One image load attempt finished, success or failure. Fired exactly
    /// once per record per session.
    ImageLoaded {
        id: u32,
        result: Result<ImageData, Error>,
    },
    /// A grid card was clicked.
    CardPressed(u32),
    /// The close button or the Escape key dismissed the lightbox.
    CloseLightbox,
    /// The backdrop outside the lightbox panel was clicked.
    BackdropPressed,
}

/// Gallery state: fixed records plus the two transient pieces of UI state.
#[derive(Debug)]
pub struct State {
    records: Vec<GuestRecord>,
    /// Decoded images by guest id; absent means not loaded (yet).
    images: HashMap<u32, ImageData>,
    /// Ids whose image failed to load. Insert-only for the session; a
    /// failed id is never retried.
    failed: BTreeSet<u32>,
    /// Id of the record open in the lightbox, if any.
    selected: Option<u32>,
}

impl State {
    /// Build the gallery and start loading every record's image.
    pub fn new(config: GalleryConfig) -> (Self, Task<Message>) {
        let records = config.generate();

        let load_all = Task::batch(records.iter().map(|record| {
            let id = record.id;
            Task::perform(load_image_async(record.image_path.clone()), move |result| {
                Message::ImageLoaded { id, result }
            })
        }));

        (
            Self {
                records,
                images: HashMap::new(),
                failed: BTreeSet::new(),
                selected: None,
            },
            load_all,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ImageLoaded { id, result } => {
                match result {
                    Ok(data) => {
                        self.images.insert(id, data);
                    }
                    // The failure is contained here: recorded, never
                    // surfaced, never retried. Re-inserting is a no-op.
                    Err(_) => {
                        self.failed.insert(id);
                    }
                }
                Task::none()
            }
            Message::CardPressed(id) => {
                if self.records.iter().any(|record| record.id == id) {
                    self.selected = Some(id);
                }
                Task::none()
            }
            Message::CloseLightbox | Message::BackdropPressed => {
                self.selected = None;
                Task::none()
            }
        }
    }

    /// Dismiss the lightbox, if open. No-op otherwise.
    pub fn close_lightbox(&mut self) {
        self.selected = None;
    }

    /// Whether the lightbox layer is currently shown.
    #[must_use]
    pub fn lightbox_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The record currently open in the lightbox.
    #[must_use]
    pub fn selected_record(&self) -> Option<&GuestRecord> {
        self.selected
            .and_then(|id| self.records.iter().find(|record| record.id == id))
    }

    #[must_use]
    pub fn records(&self) -> &[GuestRecord] {
        &self.records
    }

    /// Whether this id's image failed to load this session.
    #[must_use]
    pub fn is_failed(&self, id: u32) -> bool {
        self.failed.contains(&id)
    }

    /// Number of ids recorded as failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    #[must_use]
    pub fn image(&self, id: u32) -> Option<&ImageData> {
        self.images.get(&id)
    }

    /// Render the gallery; the lightbox layer is stacked on top of the
    /// grid while a record is selected.
    pub fn view(&self) -> Element<'_, Message> {
        let base = self.view_grid();
        match self.selected_record() {
            Some(record) => lightbox::view(self, record, base),
            None => base,
        }
    }

    /// Responsive card grid: the column count follows the available width.
    fn view_grid<'a>(&'a self) -> Element<'a, Message> {
        responsive(move |size| {
            let columns = ((size.width / sizing::CARD_MIN_WIDTH).floor() as usize).max(1);

            let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
            for chunk in self.records.chunks(columns) {
                let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
                for record in chunk {
                    row = row.push(card::view(
                        record,
                        self.image(record.id),
                        self.is_failed(record.id),
                    ));
                }
                // Pad the trailing row so its cards keep the same width.
                for _ in chunk.len()..columns {
                    row = row.push(
                        iced::widget::space().width(Length::FillPortion(1)),
                    );
                }
                rows = rows.push(row);
            }

            let content = Column::new()
                .spacing(spacing::XL)
                .padding(spacing::LG)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .push(header())
                .push(rows);

            scrollable(content).into()
        })
        .into()
    }
}

/// Header block above the grid.
fn header<'a>() -> Element<'a, Message> {
    let title = Text::new("Our Honored Guests")
        .size(typography::DISPLAY)
        .align_x(alignment::Horizontal::Center);

    let subtitle = Text::new(
        "We are privileged to welcome a distinguished gathering of visionaries, \
         leaders, and pioneers who inspire and guide our journey.",
    )
    .size(typography::BODY_LG)
    .color(palette::GRAY_200)
    .align_x(alignment::Horizontal::Center);

    Column::new()
        .spacing(spacing::MD)
        .max_width(600.0)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn gallery_state() -> State {
        let (state, _task) = State::new(GalleryConfig::default());
        state
    }

    fn failure(id: u32) -> Message {
        Message::ImageLoaded {
            id,
            result: Err(Error::Io("no such file".to_string())),
        }
    }

    #[test]
    fn starts_closed_with_no_failures() {
        let state = gallery_state();

        assert!(!state.lightbox_open());
        assert!(state.selected_record().is_none());
        assert_eq!(state.failed_count(), 0);
        assert_eq!(state.records().len(), 56);
    }

    #[test]
    fn load_failure_marks_id_and_is_idempotent() {
        let mut state = gallery_state();

        let _ = state.update(failure(25));
        assert!(state.is_failed(25));
        assert!(!state.is_failed(24));
        assert_eq!(state.failed_count(), 1);

        // Marking the same id again leaves the set unchanged.
        let _ = state.update(failure(25));
        assert_eq!(state.failed_count(), 1);
    }

    #[test]
    fn failure_set_is_independent_of_selection() {
        let mut state = gallery_state();

        let _ = state.update(failure(7));
        let _ = state.update(Message::CardPressed(7));
        assert!(state.lightbox_open());
        assert!(state.is_failed(7));

        let _ = state.update(Message::CloseLightbox);
        assert!(state.is_failed(7));
        assert_eq!(state.failed_count(), 1);
    }

    #[test]
    fn card_press_opens_and_close_actions_dismiss() {
        let mut state = gallery_state();

        let _ = state.update(Message::CardPressed(1));
        assert!(state.lightbox_open());
        assert_eq!(state.selected_record().map(|r| r.id), Some(1));

        let _ = state.update(Message::CloseLightbox);
        assert!(!state.lightbox_open());

        let _ = state.update(Message::CardPressed(3));
        let _ = state.update(Message::BackdropPressed);
        assert!(!state.lightbox_open());
    }

    #[test]
    fn pressing_an_unknown_id_does_not_open() {
        let mut state = gallery_state();

        // Guest 10 is excluded by the default configuration.
        let _ = state.update(Message::CardPressed(10));
        assert!(!state.lightbox_open());

        let _ = state.update(Message::CardPressed(999));
        assert!(!state.lightbox_open());
    }

    #[test]
    fn escape_helper_closes_the_lightbox() {
        let mut state = gallery_state();

        let _ = state.update(Message::CardPressed(2));
        state.close_lightbox();
        assert!(!state.lightbox_open());

        // Closing when already closed stays closed.
        state.close_lightbox();
        assert!(!state.lightbox_open());
    }

    #[test]
    fn successful_load_makes_image_available() {
        let mut state = gallery_state();

        let data = ImageData::from_rgba(2, 2, vec![0; 16]);
        let _ = state.update(Message::ImageLoaded {
            id: 3,
            result: Ok(data),
        });

        assert!(state.image(3).is_some());
        assert!(!state.is_failed(3));
    }

    #[test]
    fn gallery_view_renders_in_every_state() {
        let mut state = gallery_state();
        let _ = state.view();

        let _ = state.update(failure(25));
        let _ = state.view();

        let _ = state.update(Message::CardPressed(1));
        let _ = state.view();

        let _ = state.update(Message::CardPressed(25));
        let _ = state.view();
    }
}
