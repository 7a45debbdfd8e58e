use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Startup-only knobs. The brick grid is fixed for the life of the process,
/// so everything here is read once before the terminal is set up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between ticks. 16 ≈ 60 FPS.
    pub tick_rate_ms: u64,
    pub starting_lives: u32,
    pub brick_rows: usize,
    pub brick_cols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            starting_lives: 3,
            brick_rows: 3,
            brick_cols: 5,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::read().sanitized()
    }

    fn read() -> Self {
        let path = Self::config_path();
        match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> PathBuf {
        // Store next to the executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join("brickbreak.json");
            }
        }
        PathBuf::from("brickbreak.json")
    }

    /// Clamp every knob to a range the playfield can actually hold.
    fn sanitized(mut self) -> Self {
        self.tick_rate_ms = self.tick_rate_ms.clamp(5, 100);
        self.starting_lives = self.starting_lives.clamp(1, 9);
        self.brick_rows = self.brick_rows.clamp(1, 8);
        self.brick_cols = self.brick_cols.clamp(1, 12);
        self
    }
}
