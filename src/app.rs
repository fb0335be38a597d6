use crate::config::Settings;
use crate::core::clock::TimeProvider;
use crate::core::display::Display;
use crate::core::input::InputSource;
use crate::game::song::Song;
use crate::screens::{gameplay, instructions, Screen, ScreenAction};
use log::{debug, info, warn};
use std::error::Error;
use std::time::Duration;

enum ActiveScreen {
    Instructions(instructions::State),
    Gameplay(gameplay::State),
}

/// Counts loop iterations and reports the rate once per second of clock
/// time. With the fixed cadence this hovers around 1000 / frame_interval_ms.
struct FrameCounter {
    last_report: f32,
    frames: u32,
}

impl FrameCounter {
    fn new(now: f32) -> Self {
        Self { last_report: now, frames: 0 }
    }

    fn tick(&mut self, now: f32) -> Option<u32> {
        self.frames += 1;
        if now - self.last_report >= 1.0 {
            let fps = self.frames;
            self.frames = 0;
            self.last_report = now;
            Some(fps)
        } else {
            None
        }
    }
}

/// Owns the platform collaborators and the catalog, and runs the
/// instructions -> gameplay flow once per catalog song. Single-threaded:
/// every screen update happens on this thread, with a fixed sleep between
/// frames. Sleep only bounds the polling rate; all logic runs off sampled
/// time, so scheduling jitter affects smoothness, never correctness.
pub struct App {
    clock: Box<dyn TimeProvider>,
    input: Box<dyn InputSource>,
    display: Box<dyn Display>,
    settings: Settings,
    catalog: Vec<Song>,
}

impl App {
    pub fn new(
        clock: Box<dyn TimeProvider>,
        input: Box<dyn InputSource>,
        display: Box<dyn Display>,
        settings: Settings,
        catalog: Vec<Song>,
    ) -> Self {
        Self { clock, input, display, settings, catalog }
    }

    fn enter(&mut self, target: Screen, song: &Song) -> ActiveScreen {
        match target {
            Screen::Instructions => {
                ActiveScreen::Instructions(instructions::init(&mut *self.display))
            }
            Screen::Gameplay => {
                ActiveScreen::Gameplay(gameplay::init(song.clone(), self.settings.note_speed))
            }
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        if self.catalog.is_empty() {
            warn!("Song catalog is empty; nothing to play.");
            return Ok(());
        }

        let frame_interval = Duration::from_millis(self.settings.frame_interval_ms);
        let mut frame_counter = FrameCounter::new(self.clock.now());
        let catalog = self.catalog.clone();

        for song in catalog {
            info!("Up next: '{}'.", song.name);
            let mut screen = self.enter(Screen::Instructions, &song);

            loop {
                let action = match &mut screen {
                    ActiveScreen::Instructions(state) => {
                        instructions::update(state, &*self.clock, &mut *self.input, &mut *self.display)
                    }
                    ActiveScreen::Gameplay(state) => {
                        gameplay::update(state, &*self.clock, &mut *self.input, &mut *self.display)
                    }
                };

                match action {
                    ScreenAction::None => {}
                    ScreenAction::Navigate(target) => screen = self.enter(target, &song),
                    ScreenAction::Finished => break,
                }

                if let Some(fps) = frame_counter.tick(self.clock.now()) {
                    debug!("{} frames in the last second.", fps);
                }
                std::thread::sleep(frame_interval);
            }
        }

        info!("Catalog exhausted.");
        Ok(())
    }
}
