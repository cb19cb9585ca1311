//! Timed fruit waves

use rand::Rng;
use rand::seq::IndexedRandom;

use super::fruit::Fruit;
use super::state::{RoundState, World};
use crate::Viewport;
use crate::config::{BatchPolicy, GameConfig};

/// Produces a wave of fruit each time the spawn timer fires
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    /// Waves spawned this round
    waves: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.waves = 0;
    }

    pub fn waves(&self) -> u32 {
        self.waves
    }

    /// Size of the next wave (counts the wave)
    pub fn next_batch_size(&mut self, policy: &BatchPolicy, rng: &mut impl Rng) -> u32 {
        self.waves += 1;
        match policy {
            BatchPolicy::Burst { sizes } => sizes.choose(rng).copied().unwrap_or(0),
            BatchPolicy::Alternating => {
                if self.waves % 2 == 1 {
                    1
                } else {
                    rng.random_range(2..=3)
                }
            }
        }
    }

    /// Spawn one wave into `world`. No-op unless the round is live.
    ///
    /// Returns the number of fruit added.
    pub fn spawn_batch(
        &mut self,
        round: &RoundState,
        world: &mut World,
        rng: &mut impl Rng,
        config: &GameConfig,
        viewport: &Viewport,
    ) -> usize {
        if !round.phase.is_active() {
            return 0;
        }
        let count = self.next_batch_size(&config.batch, rng);
        for _ in 0..count {
            let id = world.next_entity_id();
            world.fruits.push(Fruit::spawn(id, rng, config, viewport));
        }
        log::debug!("Wave {}: spawned {} fruit", self.waves, count);
        count as usize
    }
}
