//! Ephemeral visual entities
//!
//! Shine sparks, flying fruit halves and floating score text. None of these
//! affect gameplay; each one moves on its own and knows when it is done.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fruit::FruitKind;
use crate::Viewport;

/// Linear RGB, 0-1 per channel
pub type Rgb = [f32; 3];

/// CSS `lime`
pub const LIME: Rgb = [0.0, 1.0, 0.0];
/// CSS `red`
pub const RED: Rgb = [1.0, 0.0, 0.0];

/// Anything that advances by itself and eventually expires
///
/// The frame tick drives every collection through this trait, so adding a
/// new effect only means implementing it.
pub trait DecayingParticle {
    /// Integrate one step of `dt` seconds
    fn update(&mut self, dt: f32);

    /// True once the entity must no longer be drawn
    fn is_expired(&self, viewport: &Viewport) -> bool;
}

/// Glowing spark thrown out of a slice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShineParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    pub size: f32,
    /// 1 at birth, expired at 0
    pub life: f32,
    pub opacity: f32,
}

/// Max spark speed on each axis (px/s)
const SHINE_SPEED: f32 = 300.0;
/// Life lost per second
const SHINE_DECAY: f32 = 1.2;
/// Radius lost per second
const SHINE_SHRINK: f32 = 6.0;

impl ShineParticle {
    pub fn new(origin: Vec2, rng: &mut impl Rng) -> Self {
        let hue = rng.random_range(0.0..360.0);
        Self {
            pos: origin,
            vel: Vec2::new(
                rng.random_range(-SHINE_SPEED..SHINE_SPEED),
                rng.random_range(-SHINE_SPEED..SHINE_SPEED),
            ),
            color: hsl_to_rgb(hue, 1.0, 0.75),
            size: rng.random_range(4.0..12.0),
            life: 1.0,
            opacity: 1.0,
        }
    }

    /// A burst of `count` sparks at `origin`
    pub fn burst(origin: Vec2, count: usize, rng: &mut impl Rng) -> Vec<Self> {
        (0..count).map(|_| Self::new(origin, rng)).collect()
    }
}

impl DecayingParticle for ShineParticle {
    fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life -= SHINE_DECAY * dt;
        self.opacity = self.life.max(0.0);
        self.size = (self.size - SHINE_SHRINK * dt).max(0.0);
    }

    fn is_expired(&self, _viewport: &Viewport) -> bool {
        self.life <= 0.0
    }
}

/// Which way a fruit half flies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceSide {
    Left,
    Right,
}

impl PieceSide {
    fn sign(self) -> f32 {
        match self {
            PieceSide::Left => -1.0,
            PieceSide::Right => 1.0,
        }
    }
}

/// Half of a sliced fruit tumbling off screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlicedFruitParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: FruitKind,
    pub side: PieceSide,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    pub gravity: f32,
}

const PIECE_KICK: Vec2 = Vec2::new(180.0, -360.0);
const PIECE_GRAVITY: f32 = 1080.0;
const PIECE_SPIN: f32 = 9.0;
/// Scale multiplier per 60 Hz frame
const PIECE_SHRINK: f32 = 0.99;

impl SlicedFruitParticle {
    pub fn new(origin: Vec2, kind: FruitKind, side: PieceSide) -> Self {
        Self {
            pos: origin,
            vel: Vec2::new(PIECE_KICK.x * side.sign(), PIECE_KICK.y),
            kind,
            side,
            rotation: 0.0,
            rotation_speed: PIECE_SPIN * side.sign(),
            scale: 1.0,
            gravity: PIECE_GRAVITY,
        }
    }

    /// Left and right halves
    pub fn halves(origin: Vec2, kind: FruitKind) -> [Self; 2] {
        [
            Self::new(origin, kind, PieceSide::Left),
            Self::new(origin, kind, PieceSide::Right),
        ]
    }
}

impl DecayingParticle for SlicedFruitParticle {
    fn update(&mut self, dt: f32) {
        self.pos.x += self.vel.x * dt;
        self.vel.y += self.gravity * dt;
        self.pos.y += self.vel.y * dt;
        self.rotation += self.rotation_speed * dt;
        self.scale *= PIECE_SHRINK.powf(dt * 60.0);
    }

    fn is_expired(&self, viewport: &Viewport) -> bool {
        self.pos.y > viewport.height
    }
}

/// Floating "+3" / "-5" text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePopup {
    pub pos: Vec2,
    pub text: String,
    pub color: Rgb,
    pub alpha: f32,
    /// Vertical speed (px/s, negative is up)
    pub drift: f32,
}

const POPUP_DRIFT: f32 = -60.0;
const POPUP_FADE: f32 = 1.2;

impl ScorePopup {
    pub fn new(pos: Vec2, points: i32) -> Self {
        let text = if points > 0 {
            format!("+{points}")
        } else {
            points.to_string()
        };
        Self {
            pos,
            text,
            color: if points >= 0 { LIME } else { RED },
            alpha: 1.0,
            drift: POPUP_DRIFT,
        }
    }
}

impl DecayingParticle for ScorePopup {
    fn update(&mut self, dt: f32) {
        self.pos.y += self.drift * dt;
        self.alpha -= POPUP_FADE * dt;
    }

    fn is_expired(&self, _viewport: &Viewport) -> bool {
        self.alpha <= 0.0
    }
}

/// HSL (hue in degrees, s/l in 0-1) to RGB
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m]
}
