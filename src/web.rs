//! Browser binding
//!
//! The page owns the canvas and `requestAnimationFrame`; it forwards pointer
//! events and elapsed milliseconds here and draws whatever comes back.

use std::time::Duration;

use glam::Vec2;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::{GameConfig, Profile};
use crate::render::{self, HudState};
use crate::sim::GameSession;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Fruit Slice starting...");
}

/// Seed from the page clock, for hosts that don't pick their own
#[wasm_bindgen]
pub fn clock_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let jitter = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (jitter << 32)
}

fn to_js<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(Serialize)]
struct HudView {
    #[serde(flatten)]
    hud: HudState,
    overlay_tint: Option<[f32; 4]>,
}

/// A game session driven from JavaScript
#[wasm_bindgen]
pub struct WebSession {
    inner: GameSession,
}

#[wasm_bindgen]
impl WebSession {
    /// New session for a canvas of `width` x `height` CSS pixels
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, width: f32, height: f32, profile: &str) -> Result<WebSession, JsValue> {
        let profile = Profile::from_str(profile)
            .ok_or_else(|| JsValue::from_str(&format!("unknown profile '{profile}'")))?;
        let mut config = GameConfig::from_profile(profile);
        config.viewport = crate::Viewport::new(width, height);
        Ok(Self {
            inner: GameSession::new(config, seed),
        })
    }

    /// New session from a JSON config; missing fields take defaults
    pub fn from_config_json(seed: u64, json: &str) -> Result<WebSession, JsValue> {
        let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: GameSession::new(config, seed),
        })
    }

    pub fn start_round(&mut self) {
        self.inner.start_round();
    }

    pub fn end_round(&mut self) {
        self.inner.end_round();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.inner.resize(width, height);
    }

    /// Feed elapsed wall-clock time (ms) since the last call
    pub fn advance(&mut self, elapsed_ms: f64) {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.inner.advance(Duration::from_secs_f64(elapsed_ms / 1000.0));
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.inner.on_pointer_down(Vec2::new(x, y));
    }

    /// Returns the number of fruit cut by this sample
    pub fn pointer_sample(&mut self, x: f32, y: f32) -> u32 {
        self.inner
            .on_pointer_sample(Vec2::new(x, y))
            .map_or(0, |outcome| outcome.hits.len() as u32)
    }

    pub fn pointer_up(&mut self) {
        self.inner.on_pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.inner.on_pointer_leave();
    }

    pub fn score(&self) -> f64 {
        self.inner.score() as f64
    }

    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Back-to-front draw commands for this frame
    pub fn draw_list_json(&self) -> Result<String, JsValue> {
        to_js(&render::draw_list(&self.inner))
    }

    pub fn hud_json(&self) -> Result<String, JsValue> {
        let hud = self.inner.hud();
        to_js(&HudView {
            hud,
            overlay_tint: hud.overlay_tint(),
        })
    }

    /// Events since the last call, oldest first
    pub fn events_json(&mut self) -> Result<String, JsValue> {
        to_js(&self.inner.drain_events())
    }
}
