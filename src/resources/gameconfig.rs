//! Game configuration resource.
//!
//! Manages gameplay tunables loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 420
//! height = 700
//!
//! [loop]
//! fps = 60
//!
//! [intro]
//! char_delay = 0.05
//! line_pause = 1.0
//! end_pause = 3.0
//! lines = WARNING!|WARNING!|HOSTILES DETECTED|HOSTILES INCOMING
//!
//! [boss]
//! hp = 21500
//! engine_hp = 1000
//! explosion_amount = 10000
//!
//! [enemy]
//! hp = 120
//! count = 4
//! spacing = 1.5
//! reload = 5.0
//!
//! [player]
//! shot_interval = 0.048
//! bullet_speed = 600
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;
use thiserror::Error;

use crate::components::damage::DEFAULT_EXPLOSION_AMOUNT;
use crate::components::dialogue::RevealTiming;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 420;
const DEFAULT_SCREEN_HEIGHT: u32 = 700;
const DEFAULT_FPS: u32 = 60;
const DEFAULT_BOSS_HP: i32 = 21_500;
const DEFAULT_ENGINE_HP: i32 = 1_000;
const DEFAULT_ENEMY_HP: i32 = 120;
const DEFAULT_ENEMY_COUNT: u32 = 4;
const DEFAULT_ENEMY_SPACING: f32 = 1.5;
const DEFAULT_ENEMY_RELOAD: f32 = 5.0;
// 3 frames at 60 fps
const DEFAULT_SHOT_INTERVAL: f32 = 0.048;
const DEFAULT_BULLET_SPEED: f32 = 600.0;
const DEFAULT_CONFIG_PATH: &str = "./starlance.ini";
const LINE_SEPARATOR: &str = "|";

const DEFAULT_INTRO_LINES: [&str; 4] = [
    "WARNING!",
    "WARNING!",
    "HOSTILES DETECTED",
    "HOSTILES INCOMING",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("failed to save config file {path:?}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Simulated frames per second of the headless loop.
    pub fps: u32,
    pub intro_timing: RevealTiming,
    pub intro_lines: Vec<String>,
    pub boss_hp: i32,
    /// Hit points of each boss engine.
    pub engine_hp: i32,
    pub explosion_amount: i32,
    pub enemy_hp: i32,
    pub enemy_count: u32,
    /// Seconds between two enemies of a wave entering.
    pub enemy_spacing: f32,
    pub enemy_reload: f32,
    pub shot_interval: f32,
    pub bullet_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            fps: DEFAULT_FPS,
            intro_timing: RevealTiming::default(),
            intro_lines: DEFAULT_INTRO_LINES.iter().map(|l| l.to_string()).collect(),
            boss_hp: DEFAULT_BOSS_HP,
            engine_hp: DEFAULT_ENGINE_HP,
            explosion_amount: DEFAULT_EXPLOSION_AMOUNT,
            enemy_hp: DEFAULT_ENEMY_HP,
            enemy_count: DEFAULT_ENEMY_COUNT,
            enemy_spacing: DEFAULT_ENEMY_SPACING,
            enemy_reload: DEFAULT_ENEMY_RELOAD,
            shot_interval: DEFAULT_SHOT_INTERVAL,
            bullet_speed: DEFAULT_BULLET_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|reason| ConfigError::Load {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} screen, fps={}, boss hp={}, {} enemies",
            self.screen_width, self.screen_height, self.fps, self.boss_hp, self.enemy_count
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|reason| ConfigError::Load {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();
        // out-of-range integers are skipped like unparseable ones
        let int = |section: &str, key: &str| {
            config
                .getint(section, key)
                .ok()
                .flatten()
                .and_then(|v| i32::try_from(v).ok())
        };
        let uint = |section: &str, key: &str| {
            config
                .getuint(section, key)
                .ok()
                .flatten()
                .and_then(|v| u32::try_from(v).ok())
        };

        // [screen] section
        if let Some(width) = uint("screen", "width") {
            self.screen_width = width;
        }
        if let Some(height) = uint("screen", "height") {
            self.screen_height = height;
        }

        // [loop] section
        if let Some(fps) = uint("loop", "fps") {
            self.fps = fps;
        }

        // [intro] section
        if let Some(delay) = float("intro", "char_delay") {
            self.intro_timing.char_delay = delay as f32;
        }
        if let Some(pause) = float("intro", "line_pause") {
            self.intro_timing.line_pause = pause as f32;
        }
        if let Some(pause) = float("intro", "end_pause") {
            self.intro_timing.end_pause = pause as f32;
        }
        if let Some(lines) = config.get("intro", "lines") {
            self.intro_lines = lines
                .split(LINE_SEPARATOR)
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect();
        }

        // [boss] section
        if let Some(hp) = int("boss", "hp") {
            self.boss_hp = hp;
        }
        if let Some(hp) = int("boss", "engine_hp") {
            self.engine_hp = hp;
        }
        if let Some(amount) = int("boss", "explosion_amount") {
            self.explosion_amount = amount;
        }

        // [enemy] section
        if let Some(hp) = int("enemy", "hp") {
            self.enemy_hp = hp;
        }
        if let Some(count) = uint("enemy", "count") {
            self.enemy_count = count;
        }
        if let Some(spacing) = float("enemy", "spacing") {
            self.enemy_spacing = spacing as f32;
        }
        if let Some(reload) = float("enemy", "reload") {
            self.enemy_reload = reload as f32;
        }

        // [player] section
        if let Some(interval) = float("player", "shot_interval") {
            self.shot_interval = interval as f32;
        }
        if let Some(speed) = float("player", "bullet_speed") {
            self.bullet_speed = speed as f32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        // [screen] section
        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));

        // [loop] section
        config.set("loop", "fps", Some(self.fps.to_string()));

        // [intro] section
        config.set("intro", "char_delay", Some(self.intro_timing.char_delay.to_string()));
        config.set("intro", "line_pause", Some(self.intro_timing.line_pause.to_string()));
        config.set("intro", "end_pause", Some(self.intro_timing.end_pause.to_string()));
        config.set(
            "intro",
            "lines",
            Some(self.intro_lines.join(LINE_SEPARATOR)),
        );

        // [boss] section
        config.set("boss", "hp", Some(self.boss_hp.to_string()));
        config.set("boss", "engine_hp", Some(self.engine_hp.to_string()));
        config.set(
            "boss",
            "explosion_amount",
            Some(self.explosion_amount.to_string()),
        );

        // [enemy] section
        config.set("enemy", "hp", Some(self.enemy_hp.to_string()));
        config.set("enemy", "count", Some(self.enemy_count.to_string()));
        config.set("enemy", "spacing", Some(self.enemy_spacing.to_string()));
        config.set("enemy", "reload", Some(self.enemy_reload.to_string()));

        // [player] section
        config.set("player", "shot_interval", Some(self.shot_interval.to_string()));
        config.set("player", "bullet_speed", Some(self.bullet_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::Save {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Seconds per simulated frame.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}
