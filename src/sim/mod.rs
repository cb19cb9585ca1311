//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Simulated time only (the host feeds elapsed time in)
//! - No rendering or platform dependencies

pub mod fruit;
pub mod geometry;
pub mod particles;
pub mod schedule;
pub mod session;
pub mod slice;
pub mod spawner;
pub mod state;
pub mod tick;

pub use fruit::{Fruit, FruitKind};
pub use geometry::distance_point_to_segment;
pub use particles::{DecayingParticle, PieceSide, ScorePopup, ShineParticle, SlicedFruitParticle};
pub use schedule::{Scheduler, Task, TaskHandle};
pub use session::GameSession;
pub use slice::{SliceEffect, SliceHit, SliceOutcome, slice_segment};
pub use spawner::Spawner;
pub use state::{GameEvent, RoundEndCause, RoundPhase, RoundState, World};
pub use tick::{advance_all, frame_tick};
