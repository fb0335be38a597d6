use serde::{Deserialize, Serialize};

/// One of the eight rim buttons and the travel direction it guards,
/// indexed 0..7 clockwise-ish from the upper-left button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Direction {
    UpLeft = 0,
    LeftUp = 1,
    LeftDown = 2,
    DownLeft = 3,
    DownRight = 4,
    RightDown = 5,
    RightUp = 6,
    UpRight = 7,
}

pub const DIRECTION_COUNT: usize = 8;

impl Direction {
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::UpLeft,
        Direction::LeftUp,
        Direction::LeftDown,
        Direction::DownLeft,
        Direction::DownRight,
        Direction::RightDown,
        Direction::RightUp,
        Direction::UpRight,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::UpLeft),
            1 => Ok(Direction::LeftUp),
            2 => Ok(Direction::LeftDown),
            3 => Ok(Direction::DownLeft),
            4 => Ok(Direction::DownRight),
            5 => Ok(Direction::RightDown),
            6 => Ok(Direction::RightUp),
            7 => Ok(Direction::UpRight),
            other => Err(format!("direction index {} out of range 0..=7", other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction as u8
    }
}

/// A single press or release transition on one rim button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub direction: Direction,
    pub pressed: bool,
}

/// Abstraction over the button event source.
/// Implementations: a keypad driver in firmware, ScriptedInput for tests and
/// the headless demo. One event per call; the engine dequeues at most one
/// event per frame, so bursts are served across consecutive frames.
pub trait InputSource {
    fn poll(&mut self, now: f32) -> Option<InputEvent>;
}

/// An event with a delivery time relative to the script epoch.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedEvent {
    pub at: f32,
    pub event: InputEvent,
}

/// Replays a fixed event list in order. The epoch is the time of the first
/// poll, so a script always lines up with the screen that starts draining it.
pub struct ScriptedInput {
    events: Vec<ScriptedEvent>,
    cursor: usize,
    epoch: Option<f32>,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<ScriptedEvent>) -> Self {
        events.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { events, cursor: 0, epoch: None }
    }

    pub fn exhausted(&self) -> bool {
        self.cursor >= self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, now: f32) -> Option<InputEvent> {
        let epoch = *self.epoch.get_or_insert(now);
        let scripted = self.events.get(self.cursor)?;
        if now - epoch >= scripted.at {
            self.cursor += 1;
            Some(scripted.event)
        } else {
            None
        }
    }
}

/// An input source that never produces events.
pub struct SilentInput;

impl InputSource for SilentInput {
    fn poll(&mut self, _now: f32) -> Option<InputEvent> {
        None
    }
}

/// Held / previously-held state for the eight buttons, with per-frame edge
/// detection. `begin_frame` must run exactly once per frame, before any event
/// of that frame is applied; the snapshot is a copy, never an alias.
#[derive(Debug, Default)]
pub struct ButtonState {
    held: [bool; DIRECTION_COUNT],
    previous_held: [bool; DIRECTION_COUNT],
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.previous_held = self.held;
    }

    pub fn apply(&mut self, event: InputEvent) {
        self.held[event.direction.index()] = event.pressed;
    }

    #[inline(always)]
    pub fn is_held(&self, direction: Direction) -> bool {
        self.held[direction.index()]
    }

    #[inline(always)]
    pub fn is_just_pressed(&self, direction: Direction) -> bool {
        self.held[direction.index()] && !self.previous_held[direction.index()]
    }

    #[inline(always)]
    pub fn is_just_released(&self, direction: Direction) -> bool {
        !self.held[direction.index()] && self.previous_held[direction.index()]
    }

    pub fn any_just_pressed(&self) -> bool {
        Direction::ALL.iter().any(|&d| self.is_just_pressed(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn press(direction: Direction) -> InputEvent {
        InputEvent { direction, pressed: true }
    }

    fn release(direction: Direction) -> InputEvent {
        InputEvent { direction, pressed: false }
    }

    #[test]
    fn direction_rejects_out_of_range_index() {
        assert!(Direction::try_from(7).is_ok());
        assert!(Direction::try_from(8).is_err());
        assert!(Direction::try_from(255).is_err());
    }

    #[test]
    fn just_pressed_only_on_the_transition_frame() {
        let mut buttons = ButtonState::new();

        buttons.begin_frame();
        buttons.apply(press(Direction::DownLeft));
        assert!(buttons.is_held(Direction::DownLeft));
        assert!(buttons.is_just_pressed(Direction::DownLeft));

        // Still held on the next frame, but no longer an edge.
        buttons.begin_frame();
        assert!(buttons.is_held(Direction::DownLeft));
        assert!(!buttons.is_just_pressed(Direction::DownLeft));
    }

    #[test]
    fn just_released_only_on_the_transition_frame() {
        let mut buttons = ButtonState::new();

        buttons.begin_frame();
        buttons.apply(press(Direction::RightUp));
        buttons.begin_frame();
        buttons.apply(release(Direction::RightUp));
        assert!(buttons.is_just_released(Direction::RightUp));
        assert!(!buttons.is_held(Direction::RightUp));

        buttons.begin_frame();
        assert!(!buttons.is_just_released(Direction::RightUp));
    }

    #[test]
    fn snapshot_is_a_copy_not_an_alias() {
        let mut buttons = ButtonState::new();
        buttons.begin_frame();
        buttons.apply(press(Direction::UpLeft));
        // Mutating held after the snapshot must not retroactively change
        // previous_held: the press is still an edge this frame.
        assert!(buttons.is_just_pressed(Direction::UpLeft));
    }

    #[test]
    fn scripted_input_delivers_in_order_one_per_poll() {
        let mut input = ScriptedInput::new(vec![
            ScriptedEvent { at: 0.0, event: press(Direction::UpLeft) },
            ScriptedEvent { at: 0.0, event: press(Direction::UpRight) },
            ScriptedEvent { at: 0.5, event: release(Direction::UpLeft) },
        ]);

        assert_eq!(input.poll(10.0), Some(press(Direction::UpLeft)));
        assert_eq!(input.poll(10.0), Some(press(Direction::UpRight)));
        // Third event not yet due relative to the first-poll epoch.
        assert_eq!(input.poll(10.3), None);
        assert_eq!(input.poll(10.5), Some(release(Direction::UpLeft)));
        assert!(input.exhausted());
        assert_eq!(input.poll(99.0), None);
    }

    proptest! {
        /// Edge predicates are mutually exclusive with their opposite and
        /// consistent with the held state after any event sequence.
        #[test]
        fn edge_predicates_consistent(events in proptest::collection::vec((0u8..8, any::<bool>()), 0..64)) {
            let mut buttons = ButtonState::new();
            for (index, pressed) in events {
                let direction = Direction::try_from(index).unwrap();
                buttons.begin_frame();
                buttons.apply(InputEvent { direction, pressed });
                for d in Direction::ALL {
                    if buttons.is_just_pressed(d) {
                        prop_assert!(buttons.is_held(d));
                        prop_assert!(!buttons.is_just_released(d));
                    }
                    if buttons.is_just_released(d) {
                        prop_assert!(!buttons.is_held(d));
                    }
                }
            }
        }

        /// A frame with no events has no edges.
        #[test]
        fn quiet_frame_has_no_edges(events in proptest::collection::vec((0u8..8, any::<bool>()), 0..32)) {
            let mut buttons = ButtonState::new();
            for (index, pressed) in events {
                let direction = Direction::try_from(index).unwrap();
                buttons.begin_frame();
                buttons.apply(InputEvent { direction, pressed });
            }
            buttons.begin_frame();
            for d in Direction::ALL {
                prop_assert!(!buttons.is_just_pressed(d));
                prop_assert!(!buttons.is_just_released(d));
            }
        }
    }
}
