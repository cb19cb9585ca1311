//! Fruit entities
//!
//! A fruit is an emoji in a square bounding box. `pos` is the top-left corner
//! of that box, the emoji is drawn at its centre and the hit circle has a
//! radius of half the box.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::geometry::distance_point_to_segment;
use super::particles::DecayingParticle;
use crate::config::{GameConfig, SpawnMode};
use crate::{Viewport, consts::*};

/// Fruit types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Orange,
    Grape,
    Strawberry,
    /// Costs points and flashes the screen
    Bomb,
    /// Freezes the countdown for a while
    Ice,
}

impl FruitKind {
    pub const ALL: [FruitKind; 6] = [
        FruitKind::Apple,
        FruitKind::Orange,
        FruitKind::Grape,
        FruitKind::Strawberry,
        FruitKind::Bomb,
        FruitKind::Ice,
    ];

    /// The spawn table without ice
    pub const WITHOUT_ICE: [FruitKind; 5] = [
        FruitKind::Apple,
        FruitKind::Orange,
        FruitKind::Grape,
        FruitKind::Strawberry,
        FruitKind::Bomb,
    ];

    /// Score for slicing this kind
    pub fn points(self) -> i32 {
        match self {
            FruitKind::Apple => 1,
            FruitKind::Orange => 3,
            FruitKind::Grape => 5,
            FruitKind::Strawberry => 5,
            FruitKind::Bomb => -5,
            FruitKind::Ice => 2,
        }
    }

    /// Visual token handed to the renderer
    pub fn emoji(self) -> &'static str {
        match self {
            FruitKind::Apple => "🍎",
            FruitKind::Orange => "🍊",
            FruitKind::Grape => "🍇",
            FruitKind::Strawberry => "🍓",
            FruitKind::Bomb => "💣",
            FruitKind::Ice => "❄️",
        }
    }

    pub fn spawn_table(include_ice: bool) -> &'static [FruitKind] {
        if include_ice {
            &Self::ALL
        } else {
            &Self::WITHOUT_ICE
        }
    }
}

/// A sliceable fruit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub kind: FruitKind,
    pub points: i32,
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    pub sliced: bool,
}

/// Arc mode: vertical spawn band as fractions of the viewport height
const ARC_BAND_TOP: f32 = 0.1;
const ARC_BAND_BOTTOM: f32 = 0.9;
/// Arc mode launch speeds (px/s)
const ARC_VX_MIN: f32 = 180.0;
const ARC_VX_MAX: f32 = 360.0;
const ARC_VY_MIN: f32 = 480.0;
const ARC_VY_MAX: f32 = 600.0;
/// Rain mode speeds (px/s)
const RAIN_DRIFT: f32 = 60.0;
const RAIN_VY_MIN: f32 = 60.0;
const RAIN_VY_MAX: f32 = 180.0;

impl Fruit {
    /// Create a stationary fruit at `pos`
    pub fn new(id: u32, kind: FruitKind, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            size,
            kind,
            points: kind.points(),
            gravity: ARC_GRAVITY,
            sliced: false,
        }
    }

    /// Spawn a random fruit according to the configured spawn mode
    pub fn spawn(id: u32, rng: &mut impl Rng, config: &GameConfig, viewport: &Viewport) -> Self {
        let table = FruitKind::spawn_table(config.include_ice);
        let kind = *table.choose(rng).unwrap_or(&FruitKind::Apple);
        let size = config.fruit_size;
        let mut fruit = Self::new(id, kind, Vec2::ZERO, size);
        fruit.gravity = config.spawn_mode.gravity();

        match config.spawn_mode {
            SpawnMode::Arc => {
                let top = viewport.height * ARC_BAND_TOP;
                let span = (viewport.height * (ARC_BAND_BOTTOM - ARC_BAND_TOP) - size).max(0.0);
                let y = top + rng.random::<f32>() * span;
                let vx = rng.random_range(ARC_VX_MIN..ARC_VX_MAX);
                let vy = -rng.random_range(ARC_VY_MIN..ARC_VY_MAX);
                if rng.random_bool(0.5) {
                    fruit.pos = Vec2::new(0.0, y);
                    fruit.vel = Vec2::new(vx, vy);
                } else {
                    fruit.pos = Vec2::new(viewport.width - size, y);
                    fruit.vel = Vec2::new(-vx, vy);
                }
            }
            SpawnMode::Rain => {
                let x = rng.random::<f32>() * (viewport.width - size).max(0.0);
                fruit.pos = Vec2::new(x, -size);
                fruit.vel = Vec2::new(
                    rng.random_range(-RAIN_DRIFT..RAIN_DRIFT),
                    rng.random_range(RAIN_VY_MIN..RAIN_VY_MAX),
                );
            }
        }

        fruit
    }

    /// Centre of the bounding box, where the emoji is drawn
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Hit circle radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Where slice sparks come from (upper part of the fruit)
    #[inline]
    pub fn shine_origin(&self) -> Vec2 {
        self.pos + Vec2::new(self.size / 2.0, self.size / 6.0)
    }

    /// Integrate one step. Sliced fruit stay put.
    pub fn tick(&mut self, dt: f32) {
        if self.sliced {
            return;
        }
        self.vel.y += self.gravity * dt;
        self.pos += self.vel * dt;
    }

    /// Off the left/right edge, below the bottom, or already sliced
    pub fn is_expired(&self, viewport: &Viewport) -> bool {
        self.sliced
            || self.pos.x > viewport.width
            || self.pos.x + self.size < 0.0
            || self.pos.y > viewport.height
    }

    /// Does the swipe segment `a`-`b` cut this fruit?
    pub fn test_slice(&self, a: Vec2, b: Vec2) -> bool {
        if self.sliced {
            return false;
        }
        distance_point_to_segment(self.center(), a, b) < self.radius()
    }
}

impl DecayingParticle for Fruit {
    fn update(&mut self, dt: f32) {
        self.tick(dt);
    }

    fn is_expired(&self, viewport: &Viewport) -> bool {
        Fruit::is_expired(self, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_point_table() {
        let expected = [
            (FruitKind::Apple, 1),
            (FruitKind::Orange, 3),
            (FruitKind::Grape, 5),
            (FruitKind::Strawberry, 5),
            (FruitKind::Bomb, -5),
            (FruitKind::Ice, 2),
        ];
        for (kind, points) in expected {
            assert_eq!(kind.points(), points, "{kind:?}");
            assert_eq!(Fruit::new(1, kind, Vec2::ZERO, 120.0).points, points);
        }
    }

    #[test]
    fn test_slice_radius_boundary() {
        // Centre at (60, 60), radius 60
        let fruit = Fruit::new(1, FruitKind::Apple, Vec2::ZERO, 120.0);
        let inside = 60.0 - 0.01;
        assert!(fruit.test_slice(Vec2::new(0.0, 60.0 + inside), Vec2::new(120.0, 60.0 + inside)));

        let outside = 60.0 + 0.01;
        assert!(!fruit.test_slice(Vec2::new(0.0, 60.0 + outside), Vec2::new(120.0, 60.0 + outside)));
    }

    #[test]
    fn test_sliced_fruit_cannot_be_sliced_again() {
        let mut fruit = Fruit::new(1, FruitKind::Orange, Vec2::ZERO, 120.0);
        let (a, b) = (Vec2::new(0.0, 60.0), Vec2::new(120.0, 60.0));
        assert!(fruit.test_slice(a, b));
        fruit.sliced = true;
        assert!(!fruit.test_slice(a, b));
        assert!(!fruit.test_slice(a, b));
    }

    #[test]
    fn test_zero_length_swipe_still_hits_under_the_point() {
        let fruit = Fruit::new(1, FruitKind::Grape, Vec2::ZERO, 120.0);
        let p = Vec2::new(60.0, 60.0);
        assert!(fruit.test_slice(p, p));
    }

    #[test]
    fn test_tick_applies_gravity_until_sliced() {
        let mut fruit = Fruit::new(1, FruitKind::Apple, Vec2::new(100.0, 100.0), 120.0);
        fruit.vel = Vec2::new(300.0, -540.0);
        fruit.tick(SIM_DT);
        // 0.3 px/frame² of gravity, then position moves by the new velocity
        assert!((fruit.vel.y - (-540.0 + 18.0)).abs() < 1e-3);
        assert!((fruit.pos.x - 105.0).abs() < 1e-3);
        assert!((fruit.pos.y - (100.0 - 8.7)).abs() < 1e-3);

        fruit.sliced = true;
        let frozen = fruit.pos;
        fruit.tick(SIM_DT);
        assert_eq!(fruit.pos, frozen);
    }

    #[test]
    fn test_expiry_bounds() {
        let viewport = Viewport::new(800.0, 600.0);
        let at = |x, y| Fruit::new(1, FruitKind::Apple, Vec2::new(x, y), 120.0);

        assert!(!at(0.0, 300.0).is_expired(&viewport));
        assert!(!at(-119.0, 300.0).is_expired(&viewport));
        assert!(at(-121.0, 300.0).is_expired(&viewport));
        assert!(at(801.0, 300.0).is_expired(&viewport));
        assert!(at(300.0, 601.0).is_expired(&viewport));
        // Above the top is fine, arcs come back down
        assert!(!at(300.0, -400.0).is_expired(&viewport));

        let mut sliced = at(300.0, 300.0);
        sliced.sliced = true;
        assert!(sliced.is_expired(&viewport));
    }

    #[test]
    fn test_spawn_without_ice() {
        let config = GameConfig::from_profile(Profile::Classic);
        let viewport = Viewport::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for id in 0..500 {
            let fruit = Fruit::spawn(id, &mut rng, &config, &viewport);
            assert_ne!(fruit.kind, FruitKind::Ice);
        }
    }

    #[test]
    fn test_spawn_uses_every_kind() {
        let config = GameConfig::default();
        let viewport = Viewport::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for id in 0..500 {
            seen.insert(Fruit::spawn(id, &mut rng, &config, &viewport).kind);
        }
        assert_eq!(seen.len(), FruitKind::ALL.len());
    }

    proptest! {
        #[test]
        fn prop_arc_spawn_geometry(seed in any::<u64>(), w in 300.0f32..3000.0, h in 300.0f32..2000.0) {
            let config = GameConfig::default();
            let viewport = Viewport::new(w, h);
            let mut rng = Pcg32::seed_from_u64(seed);
            let fruit = Fruit::spawn(1, &mut rng, &config, &viewport);

            let top = h * 0.1;
            let span = (h * 0.8 - fruit.size).max(0.0);
            prop_assert!(fruit.pos.y >= top && fruit.pos.y <= top + span + 1e-3);
            prop_assert!(fruit.vel.y <= -480.0 && fruit.vel.y > -600.0);
            if fruit.pos.x == 0.0 {
                prop_assert!(fruit.vel.x >= 180.0 && fruit.vel.x < 360.0);
            } else {
                prop_assert!((fruit.pos.x - (w - fruit.size)).abs() < 1e-3);
                prop_assert!(fruit.vel.x <= -180.0 && fruit.vel.x > -360.0);
            }
        }

        #[test]
        fn prop_rain_spawn_geometry(seed in any::<u64>(), w in 300.0f32..3000.0) {
            let config = GameConfig::from_profile(Profile::Classic);
            let viewport = Viewport::new(w, 720.0);
            let mut rng = Pcg32::seed_from_u64(seed);
            let fruit = Fruit::spawn(1, &mut rng, &config, &viewport);

            prop_assert_eq!(fruit.pos.y, -fruit.size);
            prop_assert!(fruit.pos.x >= 0.0 && fruit.pos.x <= w - fruit.size + 1e-3);
            prop_assert!(fruit.vel.y > 0.0);
            prop_assert!(fruit.vel.x.abs() <= 60.0);
            prop_assert_eq!(fruit.gravity, RAIN_GRAVITY);
        }
    }
}
