//! Fruit Slice entry point
//!
//! Native builds run a headless round driven by a swiping bot and print a
//! JSON summary. The browser build is driven through `fruit_slice::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;

    use anyhow::{Context, Result, anyhow};
    use clap::Parser;
    use glam::Vec2;
    use serde::Serialize;

    use fruit_slice::consts::SIM_HZ;
    use fruit_slice::sim::{FruitKind, GameEvent, GameSession, RoundEndCause};
    use fruit_slice::{GameConfig, Profile, SpawnMode};

    #[derive(Parser, Debug)]
    #[command(name = "fruit-slice", about = "Play headless rounds with a swiping bot")]
    struct Args {
        /// RNG seed for the first round (later rounds use seed + n)
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Number of rounds to play
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// Arcade or Classic
        #[arg(long)]
        profile: Option<String>,
        /// Override spawn geometry: Arc or Rain
        #[arg(long)]
        spawn_mode: Option<String>,
        /// JSON config file (applied before --profile/--spawn-mode overrides)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Frames the bot waits between swipes
        #[arg(long, default_value_t = 12)]
        reaction_frames: u32,
        /// Let the bot swipe bombs too
        #[arg(long)]
        reckless: bool,
        #[arg(long)]
        pretty: bool,
    }

    #[derive(Debug, Default, Serialize)]
    struct RoundSummary {
        seed: u64,
        profile: &'static str,
        spawn_mode: &'static str,
        final_score: i64,
        end_cause: Option<RoundEndCause>,
        fruit_sliced: u32,
        bombs_sliced: u32,
        ice_sliced: u32,
        swipes: u32,
        waves: u32,
        frames: u64,
    }

    /// Swipes through the lowest visible fruit every few frames
    struct SwipeBot {
        reaction_frames: u32,
        avoid_bombs: bool,
        cooldown: u32,
        swipes: u32,
    }

    impl SwipeBot {
        fn new(reaction_frames: u32, avoid_bombs: bool) -> Self {
            Self {
                reaction_frames,
                avoid_bombs,
                cooldown: reaction_frames,
                swipes: 0,
            }
        }

        fn act(&mut self, session: &mut GameSession) {
            if self.cooldown > 0 {
                self.cooldown -= 1;
                return;
            }
            let viewport = session.viewport();
            let on_screen = |c: Vec2| c.x > 0.0 && c.x < viewport.width && c.y > 0.0 && c.y < viewport.height;
            let target = session
                .fruits()
                .iter()
                .filter(|f| !f.sliced)
                .filter(|f| !(self.avoid_bombs && f.kind == FruitKind::Bomb))
                .map(|f| (f.center(), f.size))
                .filter(|(c, _)| on_screen(*c))
                .max_by(|a, b| a.0.y.total_cmp(&b.0.y));

            let Some((center, size)) = target else {
                return;
            };
            // Short vertical cut so neighbours are less likely to be caught
            let reach = Vec2::new(0.0, size * 0.4);
            session.on_pointer_down(center - reach);
            session.on_pointer_sample(center + reach);
            session.on_pointer_up();
            self.swipes += 1;
            self.cooldown = self.reaction_frames;
        }
    }

    fn load_config(args: &Args) -> Result<GameConfig> {
        let mut config = match &args.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                GameConfig::from_json(&json)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(name) = &args.profile {
            let profile =
                Profile::from_str(name).ok_or_else(|| anyhow!("unknown profile '{name}'"))?;
            let viewport = config.viewport;
            config = GameConfig::from_profile(profile);
            config.viewport = viewport;
        }
        if let Some(name) = &args.spawn_mode {
            config.spawn_mode = SpawnMode::from_str(name)
                .ok_or_else(|| anyhow!("unknown spawn mode '{name}'"))?;
        }
        Ok(config)
    }

    fn play_round(config: &GameConfig, seed: u64, args: &Args) -> Result<RoundSummary> {
        let mut session = GameSession::new(config.clone(), seed);
        let mut bot = SwipeBot::new(args.reaction_frames, !args.reckless);
        let mut summary = RoundSummary {
            seed,
            profile: config.profile.as_str(),
            spawn_mode: config.spawn_mode.as_str(),
            ..RoundSummary::default()
        };

        let frame = Duration::from_secs(1) / SIM_HZ;
        // Generous cap: ice can stretch a round well past its nominal length
        let max_frames = (config.round_secs as u64 + 600) * SIM_HZ as u64;

        session.start_round();
        for _ in 0..max_frames {
            session.advance(frame);
            bot.act(&mut session);

            for event in session.drain_events() {
                match event {
                    GameEvent::FruitSliced { kind, .. } => {
                        summary.fruit_sliced += 1;
                        match kind {
                            FruitKind::Bomb => summary.bombs_sliced += 1,
                            FruitKind::Ice => summary.ice_sliced += 1,
                            _ => {}
                        }
                    }
                    GameEvent::RoundEnded { final_score, cause } => {
                        summary.final_score = final_score;
                        summary.end_cause = Some(cause);
                    }
                    _ => {}
                }
            }
            if session.is_game_over() {
                break;
            }
        }

        if summary.end_cause.is_none() {
            return Err(anyhow!("round with seed {seed} never ended"));
        }
        summary.swipes = bot.swipes;
        summary.waves = session.waves();
        summary.frames = session.frames();
        Ok(summary)
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();
        if args.rounds == 0 {
            return Err(anyhow!("rounds must be > 0"));
        }
        let config = load_config(&args)?;
        log::info!(
            "Fruit Slice (native): {} rounds, {} profile",
            args.rounds,
            config.profile.as_str()
        );

        let mut summaries = Vec::with_capacity(args.rounds as usize);
        for n in 0..args.rounds {
            summaries.push(play_round(&config, args.seed.wrapping_add(n as u64), &args)?);
        }

        let json = if args.pretty {
            serde_json::to_string_pretty(&summaries)?
        } else {
            serde_json::to_string(&summaries)?
        };
        println!("{json}");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is fruit_slice::web, this is just to satisfy the compiler
}
