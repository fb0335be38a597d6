/// Handle for an attached note sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u64);

/// Handle for a text overlay (feedback labels, instruction lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// Packed RGB color, as the display hardware takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xFFFFFF);
    pub const GREEN: Self = Self(0x00FF00);
    pub const YELLOW: Self = Self(0xFFFF00);
    pub const RED: Self = Self(0xFF0000);
    pub const NOTE_RING: Self = Self(0xADD8FF);
    pub const BACKGROUND: Self = Self(0x000000);
}

/// Abstraction over the round display.
/// Implementations: a GC9A01 driver in firmware, NullDisplay (headless),
/// RecordingDisplay (testing). The engine issues these calls as side effects
/// of state transitions and owns no pixels itself; positions are
/// center-origin world coordinates.
pub trait Display {
    /// Adds a note ring to the note layer: an outer circle in the ring
    /// color with a background-colored inner circle punched out of it.
    fn attach_note(&mut self, outer_radius: f32, inner_radius: f32, ring: Color, fill: Color) -> SpriteId;
    fn set_note_position(&mut self, sprite: SpriteId, x: f32, y: f32);
    fn detach_note(&mut self, sprite: SpriteId);

    fn show_overlay(&mut self, text: &str, color: Color, position: (f32, f32)) -> OverlayId;
    fn hide_overlay(&mut self, overlay: OverlayId);
}

/// Headless display: hands out unique handles and draws nothing.
#[derive(Debug, Default)]
pub struct NullDisplay {
    next_id: u64,
}

impl NullDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Display for NullDisplay {
    fn attach_note(&mut self, _outer_radius: f32, _inner_radius: f32, _ring: Color, _fill: Color) -> SpriteId {
        SpriteId(self.next())
    }

    fn set_note_position(&mut self, _sprite: SpriteId, _x: f32, _y: f32) {}

    fn detach_note(&mut self, _sprite: SpriteId) {}

    fn show_overlay(&mut self, _text: &str, _color: Color, _position: (f32, f32)) -> OverlayId {
        OverlayId(self.next())
    }

    fn hide_overlay(&mut self, _overlay: OverlayId) {}
}

/// One recorded display call, for asserting on engine side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    AttachNote(SpriteId),
    SetNotePosition(SpriteId, f32, f32),
    DetachNote(SpriteId),
    ShowOverlay(OverlayId, String, Color, (f32, f32)),
    HideOverlay(OverlayId),
}

/// Records every call it receives; used by deterministic scenario tests.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    next_id: u64,
    pub calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn overlays_shown(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DisplayCall::ShowOverlay(_, text, _, _) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Display for RecordingDisplay {
    fn attach_note(&mut self, _outer_radius: f32, _inner_radius: f32, _ring: Color, _fill: Color) -> SpriteId {
        let sprite = SpriteId(self.next());
        self.calls.push(DisplayCall::AttachNote(sprite));
        sprite
    }

    fn set_note_position(&mut self, sprite: SpriteId, x: f32, y: f32) {
        self.calls.push(DisplayCall::SetNotePosition(sprite, x, y));
    }

    fn detach_note(&mut self, sprite: SpriteId) {
        self.calls.push(DisplayCall::DetachNote(sprite));
    }

    fn show_overlay(&mut self, text: &str, color: Color, position: (f32, f32)) -> OverlayId {
        let overlay = OverlayId(self.next());
        self.calls.push(DisplayCall::ShowOverlay(overlay, text.to_string(), color, position));
        overlay
    }

    fn hide_overlay(&mut self, overlay: OverlayId) {
        self.calls.push(DisplayCall::HideOverlay(overlay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_display_hands_out_unique_handles() {
        let mut display = NullDisplay::new();
        let a = display.attach_note(25.0, 20.0, Color::NOTE_RING, Color::BACKGROUND);
        let b = display.attach_note(25.0, 20.0, Color::NOTE_RING, Color::BACKGROUND);
        assert_ne!(a, b);
        let o = display.show_overlay("x", Color::WHITE, (0.0, 0.0));
        assert_ne!(o.0, b.0);
    }

    #[test]
    fn recording_display_records_in_call_order() {
        let mut display = RecordingDisplay::new();
        let sprite = display.attach_note(25.0, 20.0, Color::NOTE_RING, Color::BACKGROUND);
        display.set_note_position(sprite, 1.0, -2.0);
        display.detach_note(sprite);
        assert_eq!(
            display.calls,
            vec![
                DisplayCall::AttachNote(sprite),
                DisplayCall::SetNotePosition(sprite, 1.0, -2.0),
                DisplayCall::DetachNote(sprite),
            ]
        );
    }
}
