use crate::core::display::{Display, OverlayId};
use crate::game::judgment::Judgment;
use log::debug;

/// How long a judgment label stays on screen, in seconds.
pub const FEEDBACK_DURATION: f32 = 0.5;

#[derive(Debug)]
struct FeedbackEvent {
    overlay: OverlayId,
    judgment: Judgment,
    created: f32,
}

/// Transient judgment labels with independent expiry timers. Growth is
/// bounded by expiry alone, which holds because judgment is at-most-once
/// per note.
#[derive(Debug, Default)]
pub struct FeedbackManager {
    events: Vec<FeedbackEvent>,
}

impl FeedbackManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a judgment label at the given rim anchor.
    pub fn show(&mut self, judgment: Judgment, anchor: (f32, f32), now: f32, display: &mut dyn Display) {
        let overlay = display.show_overlay(judgment.label(), judgment.color(), anchor);
        self.events.push(FeedbackEvent { overlay, judgment, created: now });
    }

    /// Removes every label whose lifetime has elapsed. Runs once per frame;
    /// a label created within the same frame cannot have expired yet.
    pub fn prune(&mut self, now: f32, display: &mut dyn Display) {
        self.events.retain(|event| {
            if now - event.created >= FEEDBACK_DURATION {
                debug!("feedback {:?} expired", event.judgment);
                display.hide_overlay(event.overlay);
                false
            } else {
                true
            }
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
