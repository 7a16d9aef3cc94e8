//! Pong Duel entry point
//!
//! Headless native host: runs the frame loop at a fixed cadence with a seeded
//! keyboard and logs what happens. A window backend would swap the
//! `RandomKeyboard` for its own polled key state.

use std::time::Instant;

use pong_duel::Settings;
use pong_duel::platform::RandomKeyboard;
use pong_duel::renderer::{LogPresenter, Presenter};
use pong_duel::sim::{GameEvent, GameState, RenderSnapshot, TickInput, tick};

/// Game instance holding all host state
struct Game {
    state: GameState,
    presenter: LogPresenter,
    settings: Settings,
}

impl Game {
    fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            presenter: LogPresenter::default(),
            settings,
        }
    }

    /// One frame: simulate, report events, present
    fn frame(&mut self, input: &TickInput) {
        tick(&mut self.state, input);

        for event in &self.state.events {
            match event {
                GameEvent::Scored { side, left, right } => {
                    log::info!("{:?} scores: {} - {}", side, left, right);
                }
                GameEvent::PaddleHit { .. } | GameEvent::WallBounce => {}
            }
        }

        self.presenter.present(&RenderSnapshot::from(&self.state));
    }

    /// Run for the configured number of frames or until quit is held
    fn run(&mut self, keyboard: &mut RandomKeyboard) {
        let frame_time = self.settings.frame_duration();

        for _ in 0..self.settings.demo_frames {
            let input = self.settings.bindings.snapshot(&keyboard.poll());
            // Quit is honoured between frames, never mid-update
            if input.quit {
                log::info!("Quit requested");
                break;
            }

            let started = Instant::now();
            self.frame(&input);

            if self.settings.paced {
                if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Pong Duel (headless) starting...");

    let settings = Settings::load();
    log::info!(
        "{} Hz, {} frames, seed {}, bindings {:?}",
        settings.frame_rate,
        settings.demo_frames,
        settings.demo_seed,
        settings.bindings
    );

    let mut keyboard = RandomKeyboard::new(settings.demo_seed, &settings.bindings);

    let mut game = Game::new(settings);
    game.run(&mut keyboard);

    log::info!(
        "Finished after {} frames. Score {} - {}, ball speed {:.3}",
        game.presenter.frames,
        game.state.score.left,
        game.state.score.right,
        game.state.ball_speed
    );
}
