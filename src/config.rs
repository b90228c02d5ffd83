use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const PIXEL_SIZE: u32 = 1;
pub const WINDOW_WIDTH: u32 = 512;
pub const WINDOW_HEIGHT: u32 = 512;

// GLOBAL_SCALAR is PIXEL_SIZE / 4, folded into the integer math below
pub const MAX_CELL_WIDTH: usize = (WINDOW_WIDTH * PIXEL_SIZE / 4) as usize * 2;
pub const MAX_CELL_HEIGHT: usize = (WINDOW_HEIGHT * PIXEL_SIZE / 4) as usize * 2;

/// Chance (out of an inclusive 0..=100 draw) that a random-filled cell starts alive
pub const CELL_CHANCE: u32 = 5;

pub const MIN_ZOOM: i32 = 4;
pub const MAX_ZOOM: i32 = 128;
pub const DEFAULT_ZOOM: i32 = 4;
pub const DEFAULT_PAN_SPEED: i32 = 1;

/// Upper bound on simulation advances (and frames) per second
pub const STEP_RATE_HZ: u32 = 60;

pub fn frame_interval() -> Duration {
    Duration::from_secs(1) / STEP_RATE_HZ
}

const DEFAULT_FONT_PATH: &str = "assets/hud.ttf";

/// Runtime knobs read once from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub font_path: PathBuf,
    pub probe: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            probe: false,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(v) = lookup("LIFE_FONT") {
            if !v.trim().is_empty() {
                settings.font_path = PathBuf::from(v);
            }
        }

        if let Some(v) = lookup("LIFE_PROBE") {
            settings.probe = parse_flag(&v);
        }

        if let Some(v) = lookup("LIFE_SEED") {
            match v.trim().parse::<u64>() {
                Ok(seed) => settings.seed = Some(seed),
                Err(_) => log::warn!("Ignoring LIFE_SEED={:?}: not an unsigned integer", v),
            }
        }

        settings
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
