//! Fixed timestep frame tick
//!
//! Advances every entity one step and drops whatever expired. This is the
//! only place entities leave the world.

use super::particles::DecayingParticle;
use super::state::World;
use crate::Viewport;

/// Step every entity in `items`, then keep only the live ones
pub fn advance_all<P: DecayingParticle>(items: &mut Vec<P>, viewport: &Viewport, dt: f32) {
    for item in items.iter_mut() {
        item.update(dt);
    }
    items.retain(|item| !item.is_expired(viewport));
}

/// Advance the world by one fixed timestep
pub fn frame_tick(world: &mut World, viewport: &Viewport, dt: f32) {
    advance_all(&mut world.shine, viewport, dt);
    advance_all(&mut world.pieces, viewport, dt);
    advance_all(&mut world.fruits, viewport, dt);
    advance_all(&mut world.popups, viewport, dt);
}
