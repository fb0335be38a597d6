use crate::app::App;
use crate::core::clock::SystemClock;
use crate::core::display::NullDisplay;
use crate::core::input::{Direction, InputEvent, ScriptedEvent, ScriptedInput};
use crate::core::song_loading;
use crate::core::space;
use crate::game::judgment::PERFECT_NEAR;
use crate::game::song::Song;
use log::{info, LevelFilter};
use std::error::Error;

mod app;
mod config;
mod core;
mod game;
mod screens;

// Demo script timing. The script epoch is the first instructions frame; the
// two page presses land shortly after it, and gameplay time starts roughly
// when the second press is observed.
const PAGE_ONE_PRESS: f32 = 0.05;
const PAGE_TWO_PRESS: f32 = 0.30;
const GAMEPLAY_EPOCH: f32 = PAGE_TWO_PRESS + 0.02;
const PRESS_RELEASE_GAP: f32 = 0.10;

/// Builds an input script that flips through the instruction pages, then
/// presses each note of the first catalog song while it sits inside the
/// perfect band. Later catalog songs get no events and play out as misses.
fn demo_script(catalog: &[Song], note_speed: f32) -> Vec<ScriptedEvent> {
    let mut events = Vec::new();
    for page_press in [PAGE_ONE_PRESS, PAGE_TWO_PRESS] {
        let direction = Direction::UpLeft;
        events.push(ScriptedEvent { at: page_press, event: InputEvent { direction, pressed: true } });
        events.push(ScriptedEvent {
            at: page_press + PRESS_RELEASE_GAP,
            event: InputEvent { direction, pressed: false },
        });
    }

    let Some(song) = catalog.first() else {
        return events;
    };
    // Press 3 px into the band so one frame of epoch drift cannot land the
    // press outside it; one event per frame means stacking the notes of a
    // beat a frame apart.
    let press_offset = (PERFECT_NEAR + 3.0) / note_speed;
    for (beat, specs) in song.beatmap.iter().enumerate() {
        let due = GAMEPLAY_EPOCH + song.beat_due_time(beat);
        for (slot, spec) in specs.iter().filter(|s| s.kind.spawns()).enumerate() {
            let stagger = slot as f32 * 0.02;
            events.push(ScriptedEvent {
                at: due + press_offset + stagger,
                event: InputEvent { direction: spec.direction, pressed: true },
            });
            events.push(ScriptedEvent {
                at: due + press_offset + PRESS_RELEASE_GAP + stagger,
                event: InputEvent { direction: spec.direction, pressed: false },
            });
        }
    }
    events
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .filter_module("rimsync::screens::gameplay", LevelFilter::Debug)
        .filter_module("rimsync::core::song_loading", LevelFilter::Debug)
        .init();

    info!(
        "rimsync starting ({}x{} round panel, radius {}).",
        space::display_width(),
        space::display_height(),
        space::display_radius()
    );

    config::load();
    let settings = config::get();
    let catalog = song_loading::catalog_or_builtin(settings.catalog_path.as_deref());

    // Headless wiring: a real build swaps these for the keypad and panel
    // drivers. The scripted input plays the first song cleanly, so the run
    // log shows every spawn and judgment.
    let script = demo_script(&catalog, settings.note_speed);
    let mut app = App::new(
        Box::new(SystemClock::new()),
        Box::new(ScriptedInput::new(script)),
        Box::new(NullDisplay::new()),
        settings,
        catalog,
    );
    app.run()?;

    info!("rimsync exited gracefully.");
    Ok(())
}
