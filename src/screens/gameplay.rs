use crate::core::clock::{GameClock, TimeProvider};
use crate::core::display::Display;
use crate::core::input::{ButtonState, InputSource};
use crate::core::space;
use crate::game::feedback::FeedbackManager;
use crate::game::note::Note;
use crate::game::song::Song;
use crate::screens::ScreenAction;
use log::{debug, info};

pub struct State {
    song: Song,
    speed: f32,
    clock: GameClock,
    buttons: ButtonState,
    feedback: FeedbackManager,
    notes: Vec<Note>,
    next_beat: usize,
    log_timer: f32,
}

pub fn init(song: Song, speed: f32) -> State {
    info!(
        "Starting '{}' ({} bpm, {} beats, note speed {}).",
        song.name,
        song.bpm,
        song.beatmap.len(),
        speed
    );
    State {
        song,
        speed,
        clock: GameClock::new(),
        buttons: ButtonState::new(),
        feedback: FeedbackManager::new(),
        notes: Vec::new(),
        next_beat: 0,
        log_timer: 0.0,
    }
}

/// One frame of the game loop: prune feedback, sample the clock, apply at
/// most one input event, dispatch the due beat, advance every active note.
pub fn update(
    state: &mut State,
    time: &dyn TimeProvider,
    input: &mut dyn InputSource,
    display: &mut dyn Display,
) -> ScreenAction {
    let now = time.now();

    state.feedback.prune(now, display);

    let delta = state.clock.sample(now);
    let game_time = state.clock.game_time();

    state.buttons.begin_frame();
    // At most one queued event per frame; a burst of transitions is served
    // across consecutive frames. See InputSource.
    if let Some(event) = input.poll(now) {
        state.buttons.apply(event);
    }

    dispatch_due_beat(state, game_time, display);
    advance_notes(state, delta, now, display);

    state.log_timer += delta;
    if state.log_timer >= 1.0 {
        info!(
            "Time: {:.2}, Beat: {}/{}, Active Notes: {}, Feedback: {}",
            game_time,
            state.next_beat,
            state.song.beatmap.len(),
            state.notes.len(),
            state.feedback.len()
        );
        state.log_timer -= 1.0;
    }

    if song_resolved(state) {
        info!("'{}' fully resolved.", state.song.name);
        return ScreenAction::Finished;
    }
    ScreenAction::None
}

fn dispatch_due_beat(state: &mut State, game_time: f32, display: &mut dyn Display) {
    if state.next_beat >= state.song.beatmap.len() {
        return;
    }
    if game_time < state.song.beat_due_time(state.next_beat) {
        return;
    }
    debug!("Beat {} due at {:.2}.", state.next_beat, game_time);
    for spec in &state.song.beatmap[state.next_beat] {
        if !spec.kind.spawns() {
            continue;
        }
        let mut note = Note::new(spec.direction, spec.kind);
        note.start(display);
        state.notes.push(note);
    }
    state.next_beat += 1;
}

fn advance_notes(state: &mut State, delta: f32, now: f32, display: &mut dyn Display) {
    let mut i = 0;
    while i < state.notes.len() {
        if !state.notes[i].on_screen() {
            state.notes.swap_remove(i);
            continue;
        }
        let note = &mut state.notes[i];
        note.travel(delta, state.speed, display);
        let held = state.buttons.is_held(note.direction());
        if let Some(judgment) = note.evaluate(held) {
            info!(
                "{:?} on {:?} ({:?}) at distance {:.1}.",
                judgment,
                note.direction(),
                note.kind(),
                note.distance_from_center()
            );
            note.remove(display);
            state
                .feedback
                .show(judgment, space::anchor(note.direction()), now, display);
        }
        i += 1;
    }
}

/// All beats dispatched, every note judged and dropped, every feedback label
/// expired.
fn song_resolved(state: &State) -> bool {
    state.next_beat >= state.song.beatmap.len() && state.notes.is_empty() && state.feedback.is_empty()
}
