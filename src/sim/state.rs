//! Round state and core simulation types
//!
//! Everything the frame loop, the slice engine and the timers share lives
//! here: the round phase and score, the entity collections and the events
//! queued for the UI.

use serde::{Deserialize, Serialize};

use super::fruit::{Fruit, FruitKind};
use super::particles::{ScorePopup, ShineParticle, SlicedFruitParticle};
use crate::consts::ROUND_SECS;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundPhase {
    /// Fresh session, nothing scheduled
    #[default]
    Ready,
    /// Countdown running
    Running,
    /// Countdown frozen by an ice slice; fruit still spawn, move and slice
    IcePaused,
    /// Timer ran out or the round was stopped
    Ended,
}

impl RoundPhase {
    /// Slicing, spawning and scoring are live
    pub fn is_active(&self) -> bool {
        matches!(self, RoundPhase::Running | RoundPhase::IcePaused)
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndCause {
    TimeUp,
    /// `end_round` called by the host
    Stopped,
}

/// Score and countdown of the current round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Unclamped, bombs can take it negative
    pub score: i64,
    /// Whole seconds left on the countdown
    pub time_remaining: u32,
    /// Bomb flash/shake currently showing
    pub bomb_active: bool,
    /// "Timer frozen" overlay currently showing
    pub ice_overlay: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            phase: RoundPhase::Ready,
            score: 0,
            time_remaining: ROUND_SECS,
            bomb_active: false,
            ice_overlay: false,
        }
    }
}

impl RoundState {
    /// Fresh state for a round of `round_secs`
    pub fn new(round_secs: u32) -> Self {
        Self {
            time_remaining: round_secs,
            ..Self::default()
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RoundPhase::Ended
    }

    pub fn is_timer_paused(&self) -> bool {
        self.phase == RoundPhase::IcePaused
    }

    /// One countdown step. Returns true when this step ran the timer out.
    pub fn count_down(&mut self) -> bool {
        if self.time_remaining == 0 {
            return false;
        }
        self.time_remaining -= 1;
        self.time_remaining == 0
    }
}

/// All live entities (draw order back to front)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub shine: Vec<ShineParticle>,
    pub pieces: Vec<SlicedFruitParticle>,
    pub fruits: Vec<Fruit>,
    pub popups: Vec<ScorePopup>,
    /// Last fruit ID handed out (IDs stay unique across rounds)
    next_id: u32,
}

impl World {
    /// Allocate a new fruit ID
    pub fn next_entity_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Drop every entity. IDs keep counting.
    pub fn clear(&mut self) {
        self.shine.clear();
        self.pieces.clear();
        self.fruits.clear();
        self.popups.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shine.is_empty()
            && self.pieces.is_empty()
            && self.fruits.is_empty()
            && self.popups.is_empty()
    }

    /// Total entity count across every collection
    pub fn len(&self) -> usize {
        self.shine.len() + self.pieces.len() + self.fruits.len() + self.popups.len()
    }
}

/// Notifications for the UI layer
///
/// Durations are in seconds so the UI can run its own overlay animations
/// without asking the core again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted {
        duration_secs: u32,
    },
    FruitSliced {
        id: u32,
        kind: FruitKind,
        points: i32,
        score: i64,
    },
    /// Countdown frozen; show the overlay for `overlay_secs`
    IceEffectBegan {
        pause_secs: f32,
        overlay_secs: f32,
    },
    IceOverlayCleared,
    /// Countdown running again
    IceEffectEnded,
    /// Red flash and screen shake
    BombEffectBegan {
        duration_secs: f32,
        penalty: i32,
    },
    BombEffectEnded,
    RoundEnded {
        final_score: i64,
        cause: RoundEndCause,
    },
}
