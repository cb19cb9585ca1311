//! Fruit Slice - swipe-to-slice arcade game core
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, slicing, round lifecycle, scheduling)
//! - `render`: Draw command hand-off for an external renderer
//! - `config`: Data-driven game profiles
//! - `web`: Browser binding (wasm32 only)

pub mod config;
pub mod render;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{BatchPolicy, GameConfig, Profile, SpawnMode};
pub use sim::{GameEvent, GameSession, RoundPhase};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation timestep (60 Hz frame loop)
    pub const SIM_HZ: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Largest chunk of wall-clock time accepted by a single `advance`
    pub const MAX_ADVANCE: Duration = Duration::from_millis(250);

    /// Round defaults
    pub const ROUND_SECS: u32 = 60;
    pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);
    pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1500);

    /// Effect durations
    pub const ICE_PAUSE: Duration = Duration::from_secs(5);
    pub const ICE_OVERLAY: Duration = Duration::from_secs(1);
    pub const BOMB_EFFECT: Duration = Duration::from_secs(2);

    /// Viewport used when the host hasn't reported a size yet
    pub const DEFAULT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_HEIGHT: f32 = 720.0;

    /// Fruit defaults
    pub const FRUIT_SIZE: f32 = 120.0;
    /// Arc mode gravity (0.3 px/frame² at 60 Hz)
    pub const ARC_GRAVITY: f32 = 1080.0;
    /// Rain mode gravity, a gentle fall
    pub const RAIN_GRAVITY: f32 = 180.0;

    /// Shine burst sizes
    pub const SHINE_BURST: usize = 40;
    pub const CLASSIC_SHINE_BURST: usize = 30;
    pub const BOMB_SHINE_BURST: usize = 10;
}

/// Axis-aligned play area, origin at the top-left, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: consts::DEFAULT_WIDTH,
            height: consts::DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Centre of the play area
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
