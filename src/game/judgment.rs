use crate::core::display::Color;

// Distance-from-center bands, in display pixels. The hit band is a superset
// of the perfect band; the miss line sits past the rim so every note is
// judged before it leaves the visible area.
pub const PERFECT_NEAR: f32 = 115.0;
pub const PERFECT_FAR: f32 = 125.0;
pub const HIT_NEAR: f32 = 100.0;
pub const HIT_FAR: f32 = 140.0;
pub const MISS_DISTANCE: f32 = 140.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Judgment {
    Perfect,
    Good,
    Miss,
}

impl Judgment {
    pub const fn label(self) -> &'static str {
        match self {
            Judgment::Perfect => "Perfect!",
            Judgment::Good => "Good!",
            Judgment::Miss => "Miss!",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Judgment::Perfect => Color::GREEN,
            Judgment::Good => Color::YELLOW,
            Judgment::Miss => Color::RED,
        }
    }
}

/// Scores a note at the given distance from center against the button state.
///
/// Bands are checked narrowest first: the hit band contains the perfect band,
/// so the order is what lets the better grade win. Perfect and Good require
/// the note's button to be held at the instant of the check (a sustained
/// check, not an edge); Miss fires unconditionally at the miss line, so every
/// note is eventually judged even if never pressed.
pub fn classify(distance: f32, held: bool) -> Option<Judgment> {
    if (PERFECT_NEAR..=PERFECT_FAR).contains(&distance) && held {
        Some(Judgment::Perfect)
    } else if (HIT_NEAR..=HIT_FAR).contains(&distance) && held {
        Some(Judgment::Good)
    } else if distance >= MISS_DISTANCE {
        Some(Judgment::Miss)
    } else {
        None
    }
}
