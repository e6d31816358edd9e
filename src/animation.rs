use std::time::{Duration, Instant};

pub const FLIP_DURATION: Duration = Duration::from_millis(360);
const MIN_WIDTH_FACTOR: f32 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// Horizontal squeeze that stands in for a 3D card flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipAnimation {
    started_at: Instant,
    from: Face,
    to: Face,
}

impl FlipAnimation {
    pub fn new(started_at: Instant, from: Face, to: Face) -> Self {
        Self {
            started_at,
            from,
            to,
        }
    }

    /// 0.0 at start, 1.0 once `FLIP_DURATION` has passed.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / FLIP_DURATION.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn visible_face(&self, now: Instant) -> Face {
        if self.progress(now) < 0.5 {
            self.from
        } else {
            self.to
        }
    }

    /// Fraction of the full card width to draw.
    pub fn width_factor(&self, now: Instant) -> f32 {
        let p = self.progress(now);
        (1.0 - 2.0 * p).abs().max(MIN_WIDTH_FACTOR)
    }
}
