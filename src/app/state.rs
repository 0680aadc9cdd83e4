// Per-page state, split out of app.rs.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::gallery::GalleryController;
use crate::types::{ForumCategory, PartnerKind, ProfileSection};
use crate::views::widgets::PhotoAttachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Directory,
    Detail,
    Checkin,
    Forum,
    Profile,
}

/// Button that walks Idle → Busy → Done → Idle on wall-clock deadlines,
/// the way the web front end fakes its network calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Busy {
        until: Instant,
    },
    Done {
        until: Instant,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimedButton {
    pub phase: ButtonPhase,
    done_hold: Duration,
}

impl TimedButton {
    /// Start the Busy phase; ignored while a run is already in flight.
    pub fn trigger(&mut self, now: Instant, busy: Duration, done_hold: Duration) {
        if !matches!(self.phase, ButtonPhase::Idle) {
            return;
        }
        self.done_hold = done_hold;
        self.phase = ButtonPhase::Busy { until: now + busy };
    }

    /// Advance past any deadline that has passed. Returns true when the
    /// phase changed so the caller can repaint.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            ButtonPhase::Busy { until } if now >= until => {
                self.phase = ButtonPhase::Done {
                    until: now + self.done_hold,
                };
                true
            }
            ButtonPhase::Done { until } if now >= until => {
                self.phase = ButtonPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, ButtonPhase::Idle)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            ButtonPhase::Idle => None,
            ButtonPhase::Busy { until } | ButtonPhase::Done { until } => Some(until),
        }
    }
}

#[derive(Default)]
pub struct DirectoryState {
    pub kind_filter: Option<PartnerKind>,
    pub query: String,
    /// CTA pressed on this partner; the detail page opens when the
    /// deadline passes.
    pub opening: Option<(u32, Instant)>,
}

pub struct DetailState {
    pub partner_id: u32,
    pub gallery: GalleryController,
    pub checkin_widget: TimedButton,
    pub reservations: HashMap<u32, TimedButton>,
}

impl DetailState {
    pub fn new(partner_id: u32, gallery: GalleryController) -> Self {
        Self {
            partner_id,
            gallery,
            checkin_widget: TimedButton::default(),
            reservations: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckinReceipt {
    pub book_id: String,
    pub location: String,
    pub rating: u8,
    pub has_photo: bool,
}

#[derive(Default)]
pub struct CheckinState {
    pub book_id: String,
    pub location: String,
    pub observations: String,
    pub rating: u8,
    pub photo: Option<PhotoAttachment>,
    pub scanning: bool,
    pub locating: bool,
    pub submitting: bool,
    /// Some while the success modal is up.
    pub receipt: Option<CheckinReceipt>,
    pub reset_due: Option<Instant>,
}

impl CheckinState {
    /// Clears the form the way the page resets itself after a successful
    /// submission; the modal (receipt) is closed by the user.
    pub fn reset_form(&mut self) {
        self.book_id.clear();
        self.location.clear();
        self.observations.clear();
        self.rating = 0;
        self.photo = None;
    }
}

#[derive(Debug, Clone)]
pub struct PostReceipt {
    pub title: String,
    pub category: ForumCategory,
    pub content: String,
}

#[derive(Default)]
pub struct ComposerState {
    pub title: String,
    pub category: Option<ForumCategory>,
    pub content: String,
    pub publishing: bool,
    pub receipt: Option<PostReceipt>,
}

#[derive(Default)]
pub struct ForumState {
    pub category_filter: Option<ForumCategory>,
    pub query: String,
    pub composing: bool,
}

pub struct ProfileState {
    pub section: ProfileSection,
    pub name: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub interest_draft: String,
    pub avatar: Option<PhotoAttachment>,
    pub save: TimedButton,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            section: ProfileSection::default(),
            name: "Ana Beatriz".to_string(),
            bio: "Leitora de romances e colecionadora de marcadores de página. \
                  Libero livros no Café Cultura quase toda semana."
                .to_string(),
            interests: vec![
                "Romance".to_string(),
                "Ficção científica".to_string(),
                "Poesia".to_string(),
            ],
            interest_draft: String::new(),
            avatar: None,
            save: TimedButton::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_button_walks_its_phases() {
        let t0 = Instant::now();
        let mut b = TimedButton::default();
        assert!(b.is_idle());

        b.trigger(t0, Duration::from_millis(100), Duration::from_millis(200));
        assert!(matches!(b.phase, ButtonPhase::Busy { .. }));

        // Before the busy deadline nothing moves.
        assert!(!b.tick(t0 + Duration::from_millis(50)));
        assert!(matches!(b.phase, ButtonPhase::Busy { .. }));

        assert!(b.tick(t0 + Duration::from_millis(100)));
        assert!(matches!(b.phase, ButtonPhase::Done { .. }));

        assert!(b.tick(t0 + Duration::from_millis(400)));
        assert!(b.is_idle());
    }

    #[test]
    fn trigger_is_ignored_while_running() {
        let t0 = Instant::now();
        let mut b = TimedButton::default();
        b.trigger(t0, Duration::from_millis(100), Duration::from_millis(100));
        let deadline = b.next_deadline();
        b.trigger(t0, Duration::from_secs(60), Duration::from_secs(60));
        assert_eq!(b.next_deadline(), deadline);
    }

    #[test]
    fn checkin_reset_clears_fields_but_not_the_modal() {
        let mut c = CheckinState {
            book_id: "WBS-1234".into(),
            location: "Café Cultura".into(),
            observations: "capa amassada".into(),
            rating: 4,
            receipt: Some(CheckinReceipt {
                book_id: "WBS-1234".into(),
                location: "Café Cultura".into(),
                rating: 4,
                has_photo: false,
            }),
            ..Default::default()
        };
        c.reset_form();
        assert!(c.book_id.is_empty());
        assert!(c.location.is_empty());
        assert!(c.observations.is_empty());
        assert_eq!(c.rating, 0);
        assert!(c.receipt.is_some());
    }
}
