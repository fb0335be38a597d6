use crate::core::clock::TimeProvider;
use crate::core::display::{Color, Display, OverlayId};
use crate::core::input::{ButtonState, InputSource};
use crate::screens::{Screen, ScreenAction};
use log::debug;

const PAGES: [&[&str]; 2] = [
    &["rimsync", "", "press any button", "to begin :)"],
    &[
        "how to play:",
        "notes fly out from center",
        "press matching button",
        "when they reach the edge.",
        "(perfect if at center of edge!)",
        "",
        "good luck!",
    ],
];

const LINE_TOP: f32 = -70.0;
const LINE_SPACING: f32 = 15.0;

pub struct State {
    page: usize,
    overlays: Vec<OverlayId>,
    buttons: ButtonState,
}

pub fn init(display: &mut dyn Display) -> State {
    let mut state = State {
        page: 0,
        overlays: Vec::new(),
        buttons: ButtonState::new(),
    };
    show_page(&mut state, display);
    state
}

fn show_page(state: &mut State, display: &mut dyn Display) {
    debug!("Showing instructions page {}", state.page);
    for (i, line) in PAGES[state.page].iter().enumerate() {
        let position = (0.0, LINE_TOP + i as f32 * LINE_SPACING);
        state.overlays.push(display.show_overlay(line, Color::WHITE, position));
    }
}

fn hide_page(state: &mut State, display: &mut dyn Display) {
    for overlay in state.overlays.drain(..) {
        display.hide_overlay(overlay);
    }
}

/// Any press advances a page. Edge-triggered: a button held across frames
/// does not flip through pages on its own.
pub fn update(
    state: &mut State,
    time: &dyn TimeProvider,
    input: &mut dyn InputSource,
    display: &mut dyn Display,
) -> ScreenAction {
    state.buttons.begin_frame();
    if let Some(event) = input.poll(time.now()) {
        state.buttons.apply(event);
    }

    if state.buttons.any_just_pressed() {
        hide_page(state, display);
        state.page += 1;
        if state.page >= PAGES.len() {
            return ScreenAction::Navigate(Screen::Gameplay);
        }
        show_page(state, display);
    }

    ScreenAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::display::RecordingDisplay;
    use crate::core::input::{Direction, InputEvent, ScriptedEvent, ScriptedInput, SilentInput};

    fn press(direction: Direction, at: f32) -> ScriptedEvent {
        ScriptedEvent { at, event: InputEvent { direction, pressed: true } }
    }

    fn release(direction: Direction, at: f32) -> ScriptedEvent {
        ScriptedEvent { at, event: InputEvent { direction, pressed: false } }
    }

    #[test]
    fn init_shows_the_first_page() {
        let mut display = RecordingDisplay::new();
        let state = init(&mut display);
        assert_eq!(state.page, 0);
        assert_eq!(display.overlays_shown().count(), PAGES[0].len());
        assert_eq!(display.overlays_shown().next(), Some("rimsync"));
    }

    #[test]
    fn presses_advance_pages_then_start_gameplay() {
        let clock = ManualClock::new();
        let mut display = RecordingDisplay::new();
        let mut input = ScriptedInput::new(vec![
            press(Direction::DownLeft, 0.0),
            release(Direction::DownLeft, 0.1),
            press(Direction::DownLeft, 0.2),
        ]);
        let mut state = init(&mut display);

        assert_eq!(update(&mut state, &clock, &mut input, &mut display), ScreenAction::None);
        assert_eq!(state.page, 1);

        clock.advance(0.1);
        assert_eq!(update(&mut state, &clock, &mut input, &mut display), ScreenAction::None);

        clock.advance(0.1);
        assert_eq!(
            update(&mut state, &clock, &mut input, &mut display),
            ScreenAction::Navigate(Screen::Gameplay)
        );
    }

    #[test]
    fn held_button_does_not_auto_advance() {
        let clock = ManualClock::new();
        let mut display = RecordingDisplay::new();
        let mut input = ScriptedInput::new(vec![press(Direction::UpLeft, 0.0)]);
        let mut state = init(&mut display);

        update(&mut state, &clock, &mut input, &mut display);
        assert_eq!(state.page, 1);

        // Button stays held; no new edge, no page flip.
        let mut silent = SilentInput;
        for _ in 0..5 {
            clock.advance(0.1);
            assert_eq!(update(&mut state, &clock, &mut silent, &mut display), ScreenAction::None);
        }
        assert_eq!(state.page, 1);
    }
}
