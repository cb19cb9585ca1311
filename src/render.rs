//! Draw command hand-off
//!
//! The core never touches a canvas. Each frame the host asks for a flat,
//! back-to-front list of primitives plus the HUD state and draws them with
//! whatever it has (2D canvas, GPU, terminal).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::particles::Rgb;
use crate::sim::{GameSession, RoundState};

/// Emoji glyph size (px)
pub const EMOJI_FONT_PX: f32 = 40.0;
/// Score popup font size (px)
pub const POPUP_FONT_PX: f32 = 30.0;
/// Swipe trail stroke
pub const TRAIL_WIDTH: f32 = 3.0;
pub const TRAIL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
/// Glow radius around shine sparks
pub const SHINE_GLOW: f32 = 20.0;
/// Full-screen bomb flash
pub const BOMB_FLASH_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.5];
/// "Timer frozen" overlay background
pub const ICE_OVERLAY_COLOR: [f32; 4] = [173.0 / 255.0, 216.0 / 255.0, 230.0 / 255.0, 0.7];
/// Score/timer opacity while the countdown is frozen
pub const DIMMED_HUD_ALPHA: f32 = 0.7;

/// A single thing to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Filled glowing circle
    Disc {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
        glow: f32,
    },
    /// Emoji token centred at `center`
    Emoji {
        token: &'static str,
        center: Vec2,
        font_px: f32,
        rotation: f32,
        scale: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        font_px: f32,
        color: [f32; 4],
    },
    /// Open polyline through `points`
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: [f32; 4],
    },
}

fn rgba(rgb: Rgb, alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0)]
}

/// Everything the session wants on screen this frame, back to front
///
/// Sliced fruit are skipped; their halves and sparks carry the visual.
pub fn draw_list(session: &GameSession) -> Vec<DrawCommand> {
    let world = session.world();
    let mut commands = Vec::with_capacity(world.len() + 1);

    commands.extend(world.shine.iter().map(|p| DrawCommand::Disc {
        center: p.pos,
        radius: p.size,
        color: rgba(p.color, p.opacity),
        glow: SHINE_GLOW,
    }));

    commands.extend(world.pieces.iter().map(|p| DrawCommand::Emoji {
        token: p.kind.emoji(),
        center: p.pos,
        font_px: EMOJI_FONT_PX,
        rotation: p.rotation,
        scale: p.scale,
    }));

    commands.extend(
        world
            .fruits
            .iter()
            .filter(|f| !f.sliced)
            .map(|f| DrawCommand::Emoji {
                token: f.kind.emoji(),
                center: f.center(),
                font_px: EMOJI_FONT_PX,
                rotation: 0.0,
                scale: 1.0,
            }),
    );

    let trail = session.trail();
    if trail.len() > 1 {
        commands.push(DrawCommand::Polyline {
            points: trail.to_vec(),
            width: TRAIL_WIDTH,
            color: TRAIL_COLOR,
        });
    }

    commands.extend(world.popups.iter().map(|p| DrawCommand::Text {
        text: p.text.clone(),
        pos: p.pos,
        font_px: POPUP_FONT_PX,
        color: rgba(p.color, p.alpha),
    }));

    commands
}

/// Score/timer display and overlay flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudState {
    pub score: i64,
    pub time_remaining: u32,
    pub game_over: bool,
    /// Countdown frozen by ice
    pub timer_paused: bool,
    /// Opacity for score and timer text
    pub hud_alpha: f32,
    /// Red flash + shake
    pub bomb_flash: bool,
    /// "Timer frozen" banner
    pub ice_overlay: bool,
}

impl HudState {
    pub fn from_round(round: &RoundState) -> Self {
        let timer_paused = round.is_timer_paused();
        Self {
            score: round.score,
            time_remaining: round.time_remaining,
            game_over: round.is_game_over(),
            timer_paused,
            hud_alpha: if timer_paused { DIMMED_HUD_ALPHA } else { 1.0 },
            bomb_flash: round.bomb_active,
            ice_overlay: round.ice_overlay,
        }
    }

    /// Full-screen tint to draw over the playfield, bomb first
    pub fn overlay_tint(&self) -> Option<[f32; 4]> {
        if self.bomb_flash {
            Some(BOMB_FLASH_COLOR)
        } else if self.ice_overlay {
            Some(ICE_OVERLAY_COLOR)
        } else {
            None
        }
    }
}
