use crate::core::display::{Color, Display, SpriteId};
use crate::core::input::Direction;
use crate::core::space;
use crate::game::judgment::{self, Judgment};
use serde::{Deserialize, Serialize};

// sin/cos of 22.5 degrees. Splitting each step into a long and a short
// component along the two axes gives every direction the same radial speed
// (0.924^2 + 0.383^2 ~= 1), axis-aligned and diagonal alike.
pub const LONG_COMPONENT: f32 = 0.924;
pub const SHORT_COMPONENT: f32 = 0.383;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NoteKind {
    Tap,
    /// Sustained note; `beats` is the hold length in beats. Travels and
    /// judges like a tap for now, the length is carried for sustain logic.
    Hold { beats: f32 },
    /// Rest marker in a beatmap; spawns nothing.
    Silence,
}

impl NoteKind {
    pub fn spawns(self) -> bool {
        !matches!(self, NoteKind::Silence)
    }
}

/// One traveling note: spawned at the display center, flying outward along
/// its direction until a judgment band claims it. Judged exactly once; once
/// judged it is off-screen and inert.
#[derive(Debug)]
pub struct Note {
    direction: Direction,
    kind: NoteKind,
    x: f32,
    y: f32,
    judgment: Option<Judgment>,
    on_screen: bool,
    sprite: Option<SpriteId>,
}

impl Note {
    pub fn new(direction: Direction, kind: NoteKind) -> Self {
        debug_assert!(kind.spawns(), "silence entries never become notes");
        Self {
            direction,
            kind,
            x: 0.0,
            y: 0.0,
            judgment: None,
            on_screen: false,
            sprite: None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn kind(&self) -> NoteKind {
        self.kind
    }

    pub fn judgment(&self) -> Option<Judgment> {
        self.judgment
    }

    pub fn on_screen(&self) -> bool {
        self.on_screen
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn distance_from_center(&self) -> f32 {
        space::distance_from_center(self.x, self.y)
    }

    /// Unspawned -> Traveling: place the note at the center and attach its
    /// sprite to the display.
    pub fn start(&mut self, display: &mut dyn Display) {
        debug_assert!(!self.on_screen, "start on a note already on screen");
        debug_assert!(self.judgment.is_none(), "start on a judged note");
        let sprite = display.attach_note(
            space::note_outer_radius(),
            space::note_inner_radius(),
            Color::NOTE_RING,
            Color::BACKGROUND,
        );
        display.set_note_position(sprite, self.x, self.y);
        self.sprite = Some(sprite);
        self.on_screen = true;
    }

    /// Advances the note outward by one frame's travel.
    pub fn travel(&mut self, delta: f32, speed: f32, display: &mut dyn Display) {
        debug_assert!(self.on_screen, "travel on a note not on screen");
        let long = speed * delta * LONG_COMPONENT;
        let short = speed * delta * SHORT_COMPONENT;
        let (dx, dy) = match self.direction {
            Direction::UpLeft => (-short, -long),
            Direction::LeftUp => (-long, -short),
            Direction::LeftDown => (-long, short),
            Direction::DownLeft => (-short, long),
            Direction::DownRight => (short, long),
            Direction::RightDown => (long, short),
            Direction::RightUp => (long, -short),
            Direction::UpRight => (short, -long),
        };
        self.x += dx;
        self.y += dy;
        if let Some(sprite) = self.sprite {
            display.set_note_position(sprite, self.x, self.y);
        }
    }

    /// Scores the note against the current button state. Returns the newly
    /// assigned judgment, or None while the note keeps traveling. A judged
    /// note is never re-evaluated.
    pub fn evaluate(&mut self, held: bool) -> Option<Judgment> {
        if self.judgment.is_some() {
            return None;
        }
        let judgment = judgment::classify(self.distance_from_center(), held)?;
        self.judgment = Some(judgment);
        Some(judgment)
    }

    /// Detaches the sprite and takes the note off screen. The game loop drops
    /// off-screen notes from its active list on the next pass.
    pub fn remove(&mut self, display: &mut dyn Display) {
        if let Some(sprite) = self.sprite.take() {
            display.detach_note(sprite);
        }
        self.on_screen = false;
    }
}
