//! Swipe slicing
//!
//! Tests the newest segment of a swipe against every live fruit. One segment
//! can cut several fruit; each hit scores, spawns its particles and reports
//! the side effect (bomb/ice) for the session to schedule.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fruit::FruitKind;
use super::particles::{ScorePopup, ShineParticle, SlicedFruitParticle};
use super::state::{RoundState, World};
use crate::config::GameConfig;

/// Kind-specific consequence of a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceEffect {
    None,
    Bomb,
    Ice,
}

impl From<FruitKind> for SliceEffect {
    fn from(kind: FruitKind) -> Self {
        match kind {
            FruitKind::Bomb => SliceEffect::Bomb,
            FruitKind::Ice => SliceEffect::Ice,
            _ => SliceEffect::None,
        }
    }
}

/// One fruit cut by a segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceHit {
    pub id: u32,
    pub kind: FruitKind,
    pub points: i32,
    pub center: Vec2,
    pub effect: SliceEffect,
}

/// Result of testing one swipe segment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliceOutcome {
    pub hits: Vec<SliceHit>,
}

impl SliceOutcome {
    pub fn is_miss(&self) -> bool {
        self.hits.is_empty()
    }

    /// Net score change
    pub fn points(&self) -> i64 {
        self.hits.iter().map(|h| h.points as i64).sum()
    }

    pub fn has_effect(&self, effect: SliceEffect) -> bool {
        self.hits.iter().any(|h| h.effect == effect)
    }
}

/// Cut every unsliced fruit the segment `a`-`b` passes through
///
/// Marks fruit sliced, updates the score and spawns popups, shine bursts
/// and fruit halves. Fruit are not removed here; the next frame tick drops
/// them. Does nothing unless the round is live.
pub fn slice_segment(
    world: &mut World,
    round: &mut RoundState,
    rng: &mut impl Rng,
    config: &GameConfig,
    a: Vec2,
    b: Vec2,
) -> SliceOutcome {
    let mut outcome = SliceOutcome::default();
    if !round.phase.is_active() {
        return outcome;
    }

    for fruit in world.fruits.iter_mut() {
        if !fruit.test_slice(a, b) {
            continue;
        }
        fruit.sliced = true;
        round.score += fruit.points as i64;

        let center = fruit.center();
        world.popups.push(ScorePopup::new(center, fruit.points));

        let burst = match fruit.kind {
            FruitKind::Bomb => config.bomb_shine_burst,
            _ => config.shine_burst,
        };
        world
            .shine
            .extend(ShineParticle::burst(fruit.shine_origin(), burst, rng));
        world
            .pieces
            .extend(SlicedFruitParticle::halves(center, fruit.kind));

        log::debug!(
            "Sliced {:?} #{} for {} (score {})",
            fruit.kind,
            fruit.id,
            fruit.points,
            round.score
        );
        outcome.hits.push(SliceHit {
            id: fruit.id,
            kind: fruit.kind,
            points: fruit.points,
            center,
            effect: fruit.kind.into(),
        });
    }

    outcome
}
