use crate::animation::{Face, FlipAnimation};
use crate::models::{Category, QuestionRequest, QuestionResponse};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    Pending,
    Shown,
}

/// Per-player card state. Only the request matching `awaiting` may change
/// what is displayed; anything else is a stale reply.
#[derive(Debug)]
pub struct GameSession {
    pub category: Option<Category>,
    pub card_state: CardState,
    pub question: Option<String>,
    pub pending_since: Option<Instant>,
    pub flip: Option<FlipAnimation>,
    next_seq: u64,
    awaiting: Option<u64>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            category: None,
            card_state: CardState::Hidden,
            question: None,
            pending_since: None,
            flip: None,
            next_seq: 0,
            awaiting: None,
        }
    }

    pub fn choose_category(&mut self, category: Category) {
        self.reset();
        self.category = Some(category);
        tracing::info!(%category, "category selected");
    }

    /// Hidden -> Pending. Returns the request to dispatch, or `None` when
    /// the card is not face down or no category is chosen.
    pub fn reveal(&mut self, now: Instant) -> Option<QuestionRequest> {
        if self.card_state != CardState::Hidden {
            return None;
        }
        let request = self.begin_request(now)?;
        self.flip = Some(FlipAnimation::new(now, Face::Front, Face::Back));
        Some(request)
    }

    /// Shown -> Pending. The current question stays on screen until the
    /// new one replaces it.
    pub fn reroll(&mut self, now: Instant) -> Option<QuestionRequest> {
        if self.card_state != CardState::Shown {
            return None;
        }
        self.begin_request(now)
    }

    /// Back to Hidden with no category. Outstanding replies become stale.
    pub fn reset(&mut self) {
        self.category = None;
        self.card_state = CardState::Hidden;
        self.question = None;
        self.pending_since = None;
        self.flip = None;
        self.awaiting = None;
    }

    /// Pending -> Shown for the outstanding request. Returns whether the
    /// response was applied.
    pub fn apply_response(&mut self, response: QuestionResponse) -> bool {
        if self.card_state != CardState::Pending || self.awaiting != Some(response.seq) {
            tracing::debug!(seq = response.seq, awaiting = ?self.awaiting, "dropping stale question");
            return false;
        }
        self.card_state = CardState::Shown;
        self.question = Some(response.text);
        self.pending_since = None;
        self.awaiting = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.card_state == CardState::Pending
    }

    pub fn visible_face(&self, now: Instant) -> Face {
        match self.flip {
            Some(flip) if !flip.is_finished(now) => flip.visible_face(now),
            _ => match self.card_state {
                CardState::Hidden => Face::Front,
                CardState::Pending | CardState::Shown => Face::Back,
            },
        }
    }

    pub fn card_width_factor(&self, now: Instant) -> f32 {
        match self.flip {
            Some(flip) if !flip.is_finished(now) => flip.width_factor(now),
            _ => 1.0,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.flip.is_some_and(|flip| !flip.is_finished(now))
    }

    fn begin_request(&mut self, now: Instant) -> Option<QuestionRequest> {
        let category = self.category?;
        self.next_seq += 1;
        self.awaiting = Some(self.next_seq);
        self.card_state = CardState::Pending;
        self.pending_since = Some(now);
        Some(QuestionRequest {
            seq: self.next_seq,
            category,
        })
    }
}
