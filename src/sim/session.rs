//! A single game session
//!
//! Owns the round, the world, the swipe trail and the scheduler. Hosts feed
//! it pointer samples and elapsed time; it hands back snapshots and events.

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::fruit::Fruit;
use super::particles::{ScorePopup, ShineParticle, SlicedFruitParticle};
use super::schedule::{Scheduler, Task, TaskHandle};
use super::slice::{SliceEffect, SliceOutcome, slice_segment};
use super::spawner::Spawner;
use super::state::{GameEvent, RoundEndCause, RoundPhase, RoundState, World};
use super::tick;
use crate::Viewport;
use crate::config::GameConfig;
use crate::consts::MAX_ADVANCE;
use crate::render::HudState;

/// Pending one-shot effect timers, so a repeat effect can restart them
#[derive(Debug, Clone, Default)]
struct EffectTimers {
    ice_resume: Option<TaskHandle>,
    ice_overlay: Option<TaskHandle>,
    bomb: Option<TaskHandle>,
}

/// One player's game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    viewport: Viewport,
    seed: u64,
    rng: Pcg32,
    round: RoundState,
    world: World,
    spawner: Spawner,
    scheduler: Scheduler,
    effects: EffectTimers,
    /// Current swipe, oldest first; empty when the pointer is up
    trail: Vec<Vec2>,
    dragging: bool,
    events: Vec<GameEvent>,
    /// Frames simulated this round
    frames: u64,
}

impl GameSession {
    /// Create a session in the `Ready` phase
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = config.sanitized();
        Self {
            viewport: config.viewport,
            round: RoundState::new(config.round_secs),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world: World::default(),
            spawner: Spawner::new(),
            scheduler: Scheduler::new(),
            effects: EffectTimers::default(),
            trail: Vec::new(),
            dragging: false,
            events: Vec::new(),
            frames: 0,
        }
    }

    /// Back to `Ready`: timers cancelled, entities and trail cleared
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.effects = EffectTimers::default();
        self.world.clear();
        self.spawner.reset();
        self.trail.clear();
        self.dragging = false;
        self.round = RoundState::new(self.config.round_secs);
        self.frames = 0;
    }

    // === Lifecycle ===

    /// Start (or restart) a round
    ///
    /// Every outstanding timer from a previous round is cancelled before the
    /// frame, spawn and countdown schedules are armed again.
    pub fn start_round(&mut self) {
        self.reset();
        self.round.phase = RoundPhase::Running;

        self.scheduler
            .schedule_every(Task::Frame, self.config.frame_interval());
        self.scheduler
            .schedule_every(Task::Spawn, self.config.spawn_interval());
        self.scheduler
            .schedule_every(Task::Countdown, self.config.countdown_interval());

        log::info!(
            "Round started: {}s, {} spawn, seed {}",
            self.config.round_secs,
            self.config.spawn_mode.as_str(),
            self.seed
        );
        self.events.push(GameEvent::RoundStarted {
            duration_secs: self.config.round_secs,
        });
    }

    /// Stop the round now. No-op unless a round is live.
    pub fn end_round(&mut self) {
        if self.round.phase.is_active() {
            self.finish(RoundEndCause::Stopped);
        }
    }

    fn finish(&mut self, cause: RoundEndCause) {
        self.scheduler.cancel_all();
        self.effects = EffectTimers::default();

        // Close out effects still showing so listeners can drop their overlays
        if self.round.ice_overlay {
            self.round.ice_overlay = false;
            self.events.push(GameEvent::IceOverlayCleared);
        }
        if self.round.phase == RoundPhase::IcePaused {
            self.events.push(GameEvent::IceEffectEnded);
        }
        if self.round.bomb_active {
            self.round.bomb_active = false;
            self.events.push(GameEvent::BombEffectEnded);
        }
        self.round.phase = RoundPhase::Ended;

        log::info!(
            "Round ended ({:?}) with score {} after {} frames",
            cause,
            self.round.score,
            self.frames
        );
        self.events.push(GameEvent::RoundEnded {
            final_score: self.round.score,
            cause,
        });
    }

    /// Track the host's drawing surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Viewport::new(width, height);
        } else {
            log::warn!("Ignoring resize to {}x{}", width, height);
        }
    }

    // === Time ===

    /// Run every timer that falls due within the next `dt` of simulated time
    ///
    /// Large gaps (backgrounded tab) are clamped to avoid a burst of catch-up
    /// frames.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt.min(MAX_ADVANCE);
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.settle(until);
    }

    /// Same as `advance` without the clamp, for tests and replays
    pub fn advance_exact(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.settle(until);
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Frame => self.frame_tick(),
            Task::Spawn => {
                self.spawn_batch();
            }
            Task::Countdown => self.timer_tick(),
            Task::ResumeCountdown => self.resume_countdown(),
            Task::ClearIceOverlay => {
                self.effects.ice_overlay = None;
                self.round.ice_overlay = false;
                self.events.push(GameEvent::IceOverlayCleared);
            }
            Task::ClearBomb => {
                self.effects.bomb = None;
                self.round.bomb_active = false;
                self.events.push(GameEvent::BombEffectEnded);
            }
        }
    }

    /// Advance all entities by one frame
    pub fn frame_tick(&mut self) {
        tick::frame_tick(&mut self.world, &self.viewport, self.config.frame_dt());
        self.frames += 1;
    }

    /// Spawn one wave of fruit. Returns how many were added.
    pub fn spawn_batch(&mut self) -> usize {
        self.spawner.spawn_batch(
            &self.round,
            &mut self.world,
            &mut self.rng,
            &self.config,
            &self.viewport,
        )
    }

    /// One second of countdown. Ends the round at zero.
    pub fn timer_tick(&mut self) {
        if self.round.phase != RoundPhase::Running {
            return;
        }
        if self.round.count_down() {
            self.finish(RoundEndCause::TimeUp);
        }
    }

    // === Effects ===

    fn trigger_ice(&mut self) {
        self.scheduler.cancel_task(Task::Countdown);
        if let Some(pending) = self.effects.ice_resume.take() {
            // Another ice while frozen restarts the freeze
            self.scheduler.cancel(pending);
        }
        if let Some(pending) = self.effects.ice_overlay.take() {
            self.scheduler.cancel(pending);
        }
        self.round.phase = RoundPhase::IcePaused;
        self.round.ice_overlay = true;
        self.effects.ice_resume = Some(
            self.scheduler
                .schedule_once(Task::ResumeCountdown, self.config.ice_pause()),
        );
        self.effects.ice_overlay = Some(
            self.scheduler
                .schedule_once(Task::ClearIceOverlay, self.config.ice_overlay()),
        );

        log::debug!("Ice: countdown frozen at {}s", self.round.time_remaining);
        self.events.push(GameEvent::IceEffectBegan {
            pause_secs: self.config.ice_pause().as_secs_f32(),
            overlay_secs: self.config.ice_overlay().as_secs_f32(),
        });
    }

    fn resume_countdown(&mut self) {
        self.effects.ice_resume = None;
        if self.round.phase != RoundPhase::IcePaused {
            return;
        }
        self.round.phase = RoundPhase::Running;
        self.scheduler
            .schedule_every(Task::Countdown, self.config.countdown_interval());
        log::debug!("Ice: countdown resumed at {}s", self.round.time_remaining);
        self.events.push(GameEvent::IceEffectEnded);
    }

    fn trigger_bomb(&mut self, penalty: i32) {
        if let Some(pending) = self.effects.bomb.take() {
            self.scheduler.cancel(pending);
        }
        self.round.bomb_active = true;
        self.effects.bomb = Some(
            self.scheduler
                .schedule_once(Task::ClearBomb, self.config.bomb_effect()),
        );
        log::debug!("Bomb: {} points", penalty);
        self.events.push(GameEvent::BombEffectBegan {
            duration_secs: self.config.bomb_effect().as_secs_f32(),
            penalty,
        });
    }

    // === Input ===

    /// Start a swipe
    pub fn on_pointer_down(&mut self, point: Vec2) {
        self.dragging = true;
        self.trail.clear();
        self.trail.push(point);
    }

    /// Extend the swipe and slice along its newest segment
    ///
    /// Ignored while the pointer is up. On a miss the trail collapses to the
    /// newest point so a long stale swipe doesn't linger on screen.
    pub fn on_pointer_sample(&mut self, point: Vec2) -> Option<SliceOutcome> {
        if !self.dragging {
            return None;
        }
        self.trail.push(point);
        let outcome = self.slice_trail()?;
        if outcome.is_miss() {
            self.trail.clear();
            self.trail.push(point);
        }
        Some(outcome)
    }

    /// End the swipe
    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
        self.trail.clear();
    }

    /// Pointer left the play area; same as releasing it
    pub fn on_pointer_leave(&mut self) {
        self.on_pointer_up();
    }

    /// Slice along the newest trail segment. None if the round isn't live
    /// or the trail has fewer than two points.
    fn slice_trail(&mut self) -> Option<SliceOutcome> {
        if !self.round.phase.is_active() {
            return None;
        }
        let (a, b) = match self.trail.as_slice() {
            [.., a, b] => (*a, *b),
            _ => return None,
        };

        let outcome = slice_segment(
            &mut self.world,
            &mut self.round,
            &mut self.rng,
            &self.config,
            a,
            b,
        );

        for hit in &outcome.hits {
            self.events.push(GameEvent::FruitSliced {
                id: hit.id,
                kind: hit.kind,
                points: hit.points,
                score: self.round.score,
            });
            match hit.effect {
                SliceEffect::Bomb => self.trigger_bomb(hit.points),
                SliceEffect::Ice => self.trigger_ice(),
                SliceEffect::None => {}
            }
        }
        Some(outcome)
    }

    // === Snapshot ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn fruits(&self) -> &[Fruit] {
        &self.world.fruits
    }

    pub fn shine_particles(&self) -> &[ShineParticle] {
        &self.world.shine
    }

    pub fn sliced_pieces(&self) -> &[SlicedFruitParticle] {
        &self.world.pieces
    }

    pub fn score_popups(&self) -> &[ScorePopup] {
        &self.world.popups
    }

    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    pub fn score(&self) -> i64 {
        self.round.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.round.time_remaining
    }

    pub fn is_game_over(&self) -> bool {
        self.round.is_game_over()
    }

    pub fn is_timer_paused(&self) -> bool {
        self.round.is_timer_paused()
    }

    /// Simulated time since the session was created
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Frames simulated this round
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Waves spawned this round
    pub fn waves(&self) -> u32 {
        self.spawner.waves()
    }

    pub fn hud(&self) -> HudState {
        HudState::from_round(&self.round)
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;
    use crate::sim::fruit::FruitKind;

    const SEC: Duration = Duration::from_secs(1);

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), 12345)
    }

    /// Replace the world's fruit with one stationary fruit whose centre is `center`
    fn place(s: &mut GameSession, kind: FruitKind, center: Vec2) -> u32 {
        s.world.fruits.clear();
        let id = s.world.next_entity_id();
        let size = s.config.fruit_size;
        s.world
            .fruits
            .push(Fruit::new(id, kind, center - Vec2::splat(size / 2.0), size));
        id
    }

    /// Swipe horizontally through `at`
    fn swipe(s: &mut GameSession, at: Vec2) -> Option<SliceOutcome> {
        s.on_pointer_down(at - Vec2::new(80.0, 0.0));
        let outcome = s.on_pointer_sample(at + Vec2::new(80.0, 0.0));
        s.on_pointer_up();
        outcome
    }

    #[test]
    fn test_new_session_is_ready() {
        let s = session();
        assert_eq!(s.phase(), RoundPhase::Ready);
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_remaining(), 60);
        assert!(!s.is_game_over());
        assert!(s.world().is_empty());
    }

    #[test]
    fn test_ready_session_does_nothing() {
        let mut s = session();
        s.advance_exact(10 * SEC);
        assert!(s.world().is_empty());
        assert_eq!(s.time_remaining(), 60);
        assert_eq!(s.frames(), 0);
    }

    #[test]
    fn test_timer_runs_out_after_sixty_ticks() {
        let mut s = session();
        s.start_round();
        s.advance_exact(59 * SEC);
        assert_eq!(s.time_remaining(), 1);
        assert_eq!(s.phase(), RoundPhase::Running);

        s.advance_exact(SEC);
        assert_eq!(s.time_remaining(), 0);
        assert!(s.is_game_over());

        s.advance_exact(10 * SEC);
        assert_eq!(s.time_remaining(), 0);
        s.timer_tick();
        assert_eq!(s.time_remaining(), 0);

        let events = s.drain_events();
        assert!(matches!(
            events.last(),
            Some(GameEvent::RoundEnded { cause: RoundEndCause::TimeUp, .. })
        ));
    }

    #[test]
    fn test_schedules_are_independent() {
        let mut s = session();
        s.start_round();
        s.advance_exact(3 * SEC);
        // 60 Hz frames, 1.5s spawns, 1s countdown
        assert!((179..=180).contains(&s.frames()));
        assert_eq!(s.waves(), 2);
        assert_eq!(s.time_remaining(), 57);
    }

    #[test]
    fn test_apple_then_bomb_score() {
        let mut s = session();
        s.start_round();
        let center = Vec2::new(400.0, 300.0);

        place(&mut s, FruitKind::Apple, center);
        assert!(!swipe(&mut s, center).expect("live round").is_miss());
        place(&mut s, FruitKind::Bomb, center);
        assert!(!swipe(&mut s, center).expect("live round").is_miss());

        assert_eq!(s.score(), -4);
        assert!(s.round().bomb_active);
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::BombEffectBegan {
            duration_secs: 2.0,
            penalty: -5
        }));
    }

    #[test]
    fn test_bomb_effect_clears_after_two_seconds() {
        let mut s = session();
        s.start_round();
        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Bomb, center);
        swipe(&mut s, center);

        s.advance_exact(Duration::from_millis(1999));
        assert!(s.round().bomb_active);
        s.advance_exact(Duration::from_millis(1));
        assert!(!s.round().bomb_active);
        assert!(s.drain_events().contains(&GameEvent::BombEffectEnded));
        // Gameplay was never blocked
        assert_eq!(s.phase(), RoundPhase::Running);
    }

    #[test]
    fn test_ice_freezes_countdown_for_five_seconds() {
        let mut s = session();
        s.start_round();
        s.advance_exact(10 * SEC);
        assert_eq!(s.time_remaining(), 50);

        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Ice, center);
        swipe(&mut s, center);
        assert_eq!(s.score(), 2);
        assert!(s.is_timer_paused());
        assert!(s.round().ice_overlay);

        s.advance_exact(SEC);
        assert!(!s.round().ice_overlay);
        s.advance_exact(4 * SEC);
        assert_eq!(s.time_remaining(), 50);
        assert_eq!(s.phase(), RoundPhase::Running);

        s.advance_exact(SEC);
        assert_eq!(s.time_remaining(), 49);
        s.advance_exact(3 * SEC);
        assert_eq!(s.time_remaining(), 46);

        let events = s.drain_events();
        assert!(events.contains(&GameEvent::IceOverlayCleared));
        assert!(events.contains(&GameEvent::IceEffectEnded));
    }

    #[test]
    fn test_gameplay_continues_during_ice() {
        let mut s = session();
        s.start_round();
        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Ice, center);
        swipe(&mut s, center);
        let waves = s.waves();
        let frames = s.frames();

        s.advance_exact(3 * SEC);
        assert!(s.is_timer_paused());
        assert!(s.waves() > waves);
        assert!(s.frames() > frames);

        place(&mut s, FruitKind::Orange, center);
        swipe(&mut s, center);
        assert_eq!(s.score(), 5);
    }

    #[test]
    fn test_second_ice_restarts_freeze_without_double_countdown() {
        let mut s = session();
        s.start_round();
        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Ice, center);
        swipe(&mut s, center);

        s.advance_exact(3 * SEC);
        place(&mut s, FruitKind::Ice, center);
        swipe(&mut s, center);

        // First freeze would have ended here
        s.advance_exact(3 * SEC);
        assert!(s.is_timer_paused());
        assert_eq!(s.time_remaining(), 60);

        s.advance_exact(2 * SEC);
        assert_eq!(s.phase(), RoundPhase::Running);
        s.advance_exact(10 * SEC);
        assert_eq!(s.time_remaining(), 50);
    }

    #[test]
    fn test_miss_collapses_trail_hit_keeps_it() {
        let mut s = session();
        s.start_round();
        s.world.fruits.clear();

        s.on_pointer_down(Vec2::new(10.0, 10.0));
        s.on_pointer_sample(Vec2::new(20.0, 10.0));
        assert_eq!(s.trail(), &[Vec2::new(20.0, 10.0)]);

        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Grape, center);
        s.on_pointer_sample(center - Vec2::new(70.0, 0.0));
        assert_eq!(s.trail().len(), 1);
        let outcome = s.on_pointer_sample(center + Vec2::new(70.0, 0.0));
        assert!(!outcome.expect("live round").is_miss());
        assert_eq!(s.trail().len(), 2);

        s.on_pointer_up();
        assert!(s.trail().is_empty());
    }

    #[test]
    fn test_samples_ignored_while_pointer_up() {
        let mut s = session();
        s.start_round();
        assert!(s.on_pointer_sample(Vec2::new(5.0, 5.0)).is_none());
        assert!(s.trail().is_empty());
    }

    #[test]
    fn test_zero_length_segment_is_safe() {
        let mut s = session();
        s.start_round();
        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Apple, center);
        s.on_pointer_down(center);
        let outcome = s.on_pointer_sample(center).expect("live round");
        assert_eq!(outcome.hits.len(), 1);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut s = session();
        s.start_round();
        s.advance_exact(4 * SEC);
        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Ice, center);
        s.on_pointer_down(center - Vec2::new(80.0, 0.0));
        s.on_pointer_sample(center + Vec2::new(80.0, 0.0));
        assert!(!s.world().is_empty());
        assert!(s.is_timer_paused());

        s.start_round();
        assert!(s.world().is_empty());
        assert!(s.trail().is_empty());
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_remaining(), 60);
        assert_eq!(s.phase(), RoundPhase::Running);

        // Stale ice resume must not fire into the new round
        s.advance_exact(5 * SEC);
        assert_eq!(s.time_remaining(), 55);
    }

    #[test]
    fn test_double_start_keeps_one_set_of_schedules() {
        let mut s = session();
        s.start_round();
        s.start_round();
        assert_eq!(s.scheduler.len(), 3);
        s.advance_exact(10 * SEC);
        assert_eq!(s.time_remaining(), 50);
        assert_eq!(s.waves(), 6);
    }

    #[test]
    fn test_end_round_freezes_world() {
        let mut s = session();
        s.start_round();
        s.advance_exact(2 * SEC);
        s.end_round();
        assert!(s.is_game_over());
        assert!(s.scheduler.is_empty());

        let positions: Vec<Vec2> = s.fruits().iter().map(|f| f.pos).collect();
        s.advance_exact(2 * SEC);
        let after: Vec<Vec2> = s.fruits().iter().map(|f| f.pos).collect();
        assert_eq!(positions, after);

        // No scoring once ended
        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Grape, center);
        assert!(swipe(&mut s, center).is_none());
        assert_eq!(s.score(), 0);

        // Ending twice reports once
        s.end_round();
        let ended = s
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundEnded { .. }))
            .count();
        assert_eq!(ended, 1);
    }

    #[test]
    fn test_end_round_closes_active_effects() {
        let mut s = session();
        s.start_round();
        let center = Vec2::new(400.0, 300.0);
        place(&mut s, FruitKind::Ice, center);
        swipe(&mut s, center);
        place(&mut s, FruitKind::Bomb, center);
        swipe(&mut s, center);
        s.drain_events();

        s.end_round();
        assert!(!s.round().ice_overlay && !s.round().bomb_active);
        assert_eq!(
            s.drain_events(),
            vec![
                GameEvent::IceOverlayCleared,
                GameEvent::IceEffectEnded,
                GameEvent::BombEffectEnded,
                GameEvent::RoundEnded {
                    final_score: -3,
                    cause: RoundEndCause::Stopped
                },
            ]
        );
    }

    #[test]
    fn test_end_round_without_effects_only_reports_end() {
        let mut s = session();
        s.start_round();
        s.drain_events();
        s.end_round();
        assert!(matches!(
            s.drain_events().as_slice(),
            [GameEvent::RoundEnded { cause: RoundEndCause::Stopped, .. }]
        ));
    }

    #[test]
    fn test_zero_length_round_is_repaired_and_ends() {
        let config = GameConfig {
            round_secs: 0,
            ..GameConfig::default()
        };
        let mut s = GameSession::new(config, 7);
        s.start_round();
        s.advance_exact(600 * SEC);
        assert!(s.is_game_over());
        assert!(matches!(
            s.drain_events().last(),
            Some(GameEvent::RoundEnded { cause: RoundEndCause::TimeUp, .. })
        ));
    }

    #[test]
    fn test_advance_clamps_large_gaps() {
        let mut s = session();
        s.start_round();
        s.advance(10 * SEC);
        assert_eq!(s.elapsed(), MAX_ADVANCE);
        assert_eq!(s.time_remaining(), 60);
    }

    #[test]
    fn test_same_seed_same_game() {
        let run = |seed| {
            let mut s = GameSession::new(GameConfig::default(), seed);
            s.start_round();
            for i in 0..300 {
                s.advance_exact(Duration::from_millis(16));
                let y = 100.0 + (i % 50) as f32 * 10.0;
                s.on_pointer_down(Vec2::new(0.0, y));
                s.on_pointer_sample(Vec2::new(1280.0, y));
                s.on_pointer_up();
            }
            (s.score(), s.fruits().len(), s.time_remaining())
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_classic_profile_runs() {
        let mut s = GameSession::new(GameConfig::from_profile(Profile::Classic), 1);
        s.start_round();
        s.advance_exact(SEC * 3);
        // Waves of 1 then 2-3
        assert!((3..=4).contains(&s.fruits().len()));
        assert!(s.fruits().iter().all(|f| f.kind != FruitKind::Ice));
    }

    #[test]
    fn test_resize() {
        let mut s = session();
        s.resize(640.0, 480.0);
        assert_eq!(s.viewport(), Viewport::new(640.0, 480.0));
        s.resize(0.0, 480.0);
        assert_eq!(s.viewport(), Viewport::new(640.0, 480.0));
    }
}
