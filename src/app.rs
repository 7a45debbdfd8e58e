use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::game::{Game, Outcome};

/// Hosts the game: routes ticks and keys, watches for the terminal outcome,
/// and decides when to quit. The input handler lives here — the game core
/// only ever sees direction flags and discrete commands.
pub struct App {
    pub game: Game,
    pub should_quit: bool,
    /// Whether the terminal reports key releases (kitty keyboard protocol).
    /// Without them a held arrow arrives as repeated presses, so the paddle
    /// falls back to one step per press instead of flag-driven motion.
    release_events: bool,
    rng: StdRng,
}

impl App {
    pub fn new(config: &Config, release_events: bool) -> Self {
        let mut rng = StdRng::from_entropy();
        let game = Game::new(
            config.brick_rows,
            config.brick_cols,
            config.starting_lives,
            &mut rng,
        );
        Self {
            game,
            should_quit: false,
            release_events,
            rng,
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(outcome) = self.game.update(&mut self.rng) {
            match outcome {
                Outcome::Won => log::info!("wall cleared, final score {}", self.game.score),
                Outcome::Lost => log::info!("out of lives, final score {}", self.game.score),
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.kind == KeyEventKind::Release {
            match key.code {
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                    self.game.set_left(false)
                }
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                    self.game.set_right(false)
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.game.reset(&mut self.rng),
            KeyCode::Char(' ') => {
                if self.game.is_over() {
                    self.game.reset(&mut self.rng);
                } else if key.kind == KeyEventKind::Press {
                    // Pause toggles on the initial press only, never on auto-repeat
                    self.game.toggle_pause();
                }
            }
            KeyCode::Enter => {
                if self.game.is_over() {
                    self.game.reset(&mut self.rng);
                }
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                if self.release_events {
                    self.game.set_left(true);
                } else {
                    self.game.nudge_left();
                }
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                if self.release_events {
                    self.game.set_right(true);
                } else {
                    self.game.nudge_right();
                }
            }
            _ => {}
        }
    }
}
