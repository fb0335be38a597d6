use crate::core::input::Direction;

// -----------------------------------------------------------------------------
// Display geometry (center-origin world space)
// -----------------------------------------------------------------------------
#[inline(always)] pub const fn display_width() -> f32 { 240.0 }
#[inline(always)] pub const fn display_height() -> f32 { 240.0 }
#[inline(always)] pub const fn display_radius() -> f32 { 120.0 }

// Note ring visuals, passed through to the display collaborator.
#[inline(always)] pub const fn note_outer_radius() -> f32 { 25.0 }
#[inline(always)] pub const fn note_inner_radius() -> f32 { 20.0 }

/// Rim anchor for a direction's button: where its judgment feedback lands.
/// Center-origin; the physical buttons sit just inside the bezel.
#[inline(always)]
pub const fn anchor(direction: Direction) -> (f32, f32) {
    match direction {
        Direction::UpLeft => (-60.0, -80.0),
        Direction::LeftUp => (-90.0, -40.0),
        Direction::LeftDown => (-90.0, 40.0),
        Direction::DownLeft => (-60.0, 80.0),
        Direction::DownRight => (60.0, 80.0),
        Direction::RightDown => (90.0, 40.0),
        Direction::RightUp => (90.0, -40.0),
        Direction::UpRight => (60.0, -80.0),
    }
}

#[inline(always)]
pub fn distance_from_center(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}
