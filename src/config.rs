//! Game configuration and profiles
//!
//! Two profiles ship with the game: `Arcade` (side-thrown fruit, ice, big
//! bursts) and `Classic` (fruit raining from the top, no ice, one to three
//! fruit per wave). Everything else is a knob on top of a profile.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Viewport;
use crate::consts::*;

/// Spawn geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnMode {
    /// Launched from the left/right edge, arcing under gravity
    #[default]
    Arc,
    /// Dropped from above the top edge with a little drift
    Rain,
}

impl SpawnMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnMode::Arc => "Arc",
            SpawnMode::Rain => "Rain",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arc" | "throw" => Some(SpawnMode::Arc),
            "rain" | "fall" => Some(SpawnMode::Rain),
            _ => None,
        }
    }

    /// Downward acceleration for fruit spawned in this mode (px/s²)
    pub fn gravity(&self) -> f32 {
        match self {
            SpawnMode::Arc => ARC_GRAVITY,
            SpawnMode::Rain => RAIN_GRAVITY,
        }
    }
}

/// How many fruit a single spawn wave produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchPolicy {
    /// Pick one of `sizes` uniformly each wave
    Burst { sizes: Vec<u32> },
    /// Odd waves spawn one fruit, even waves two or three
    Alternating,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        BatchPolicy::Burst {
            sizes: vec![10, 6, 8, 4],
        }
    }
}

/// Preset bundles of settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Profile {
    #[default]
    Arcade,
    Classic,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Arcade => "Arcade",
            Profile::Classic => "Classic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arcade" => Some(Profile::Arcade),
            "classic" => Some(Profile::Classic),
            _ => None,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub profile: Profile,

    // === Spawning ===
    pub spawn_mode: SpawnMode,
    /// Whether the ice fruit is part of the spawn table
    pub include_ice: bool,
    pub batch: BatchPolicy,
    /// Fruit bounding box edge (px)
    pub fruit_size: f32,

    // === Round timing ===
    pub round_secs: u32,
    pub spawn_interval_ms: u64,
    pub countdown_interval_ms: u64,
    pub frame_hz: u32,

    // === Effects ===
    pub ice_pause_ms: u64,
    pub ice_overlay_ms: u64,
    pub bomb_effect_ms: u64,
    pub shine_burst: usize,
    pub bomb_shine_burst: usize,

    /// Initial play area; hosts call `GameSession::resize` as it changes
    pub viewport: Viewport,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_profile(Profile::Arcade)
    }
}

impl GameConfig {
    /// Create a config with the defaults of a profile
    pub fn from_profile(profile: Profile) -> Self {
        let classic = profile == Profile::Classic;
        Self {
            profile,

            spawn_mode: if classic { SpawnMode::Rain } else { SpawnMode::Arc },
            include_ice: !classic,
            batch: if classic {
                BatchPolicy::Alternating
            } else {
                BatchPolicy::default()
            },
            fruit_size: FRUIT_SIZE,

            round_secs: ROUND_SECS,
            spawn_interval_ms: SPAWN_INTERVAL.as_millis() as u64,
            countdown_interval_ms: COUNTDOWN_INTERVAL.as_millis() as u64,
            frame_hz: SIM_HZ,

            ice_pause_ms: ICE_PAUSE.as_millis() as u64,
            ice_overlay_ms: ICE_OVERLAY.as_millis() as u64,
            bomb_effect_ms: BOMB_EFFECT.as_millis() as u64,
            shine_burst: if classic { CLASSIC_SHINE_BURST } else { SHINE_BURST },
            bomb_shine_burst: BOMB_SHINE_BURST,

            viewport: Viewport::default(),
        }
    }

    /// Parse a JSON config. Missing fields take the Arcade defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys only, serialization can't fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Repair values the simulation can't run with, logging each fix
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::from_profile(self.profile);

        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            log::warn!(
                "Invalid viewport {}x{}, using {}x{}",
                self.viewport.width,
                self.viewport.height,
                defaults.viewport.width,
                defaults.viewport.height
            );
            self.viewport = defaults.viewport;
        }
        if !(self.fruit_size > 0.0) {
            log::warn!("Invalid fruit size {}, using {}", self.fruit_size, defaults.fruit_size);
            self.fruit_size = defaults.fruit_size;
        }
        if let BatchPolicy::Burst { sizes } = &self.batch {
            if sizes.is_empty() {
                log::warn!("Empty burst table, using {:?}", defaults.batch);
                self.batch = BatchPolicy::default();
            }
        }
        if self.round_secs == 0 {
            log::warn!("round_secs must be > 0, using {}", defaults.round_secs);
            self.round_secs = defaults.round_secs;
        }
        if self.frame_hz == 0 {
            log::warn!("frame_hz must be > 0, using {}", SIM_HZ);
            self.frame_hz = SIM_HZ;
        }
        if self.spawn_interval_ms == 0 {
            log::warn!("spawn_interval_ms must be > 0, using {}", defaults.spawn_interval_ms);
            self.spawn_interval_ms = defaults.spawn_interval_ms;
        }
        if self.countdown_interval_ms == 0 {
            log::warn!(
                "countdown_interval_ms must be > 0, using {}",
                defaults.countdown_interval_ms
            );
            self.countdown_interval_ms = defaults.countdown_interval_ms;
        }
        self
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_hz.max(1)
    }

    /// Timestep handed to entity integration, in seconds
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_hz.max(1) as f32
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    pub fn ice_pause(&self) -> Duration {
        Duration::from_millis(self.ice_pause_ms)
    }

    pub fn ice_overlay(&self) -> Duration {
        Duration::from_millis(self.ice_overlay_ms)
    }

    pub fn bomb_effect(&self) -> Duration {
        Duration::from_millis(self.bomb_effect_ms)
    }
}
