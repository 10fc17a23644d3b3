//! TuningGame handle exported to the page
//!
//! The page's game runtime owns rendering, physics and tweens. Each frame it
//! passes the body contact state, the control snapshot and the parameter
//! texts, applies the returned velocity and renders the HUD text.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use game_core::{Config, Controls, Frame, Pointer, Session, TaskId};
use glam::Vec2;

/// Running game exposed to JavaScript
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct TuningGame {
    session: Session,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TuningGame {
    /// Start a game. `config_json` optionally overrides any config field.
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(
        seed: u32,
        config_json: Option<String>,
        raw_x1: &str,
        raw_x2: &str,
    ) -> Result<TuningGame, String> {
        let config = match config_json.as_deref() {
            Some(json) if !json.trim().is_empty() => parse_config(json)?,
            _ => Config::default(),
        };
        let session = Session::new(seed as u64, config, raw_x1, raw_x2)
            .map_err(|e| format!("Failed to start game: {}", e))?;
        log::info!("TuningGame started with seed {}", seed);
        Ok(Self { session })
    }

    /// Level description for the runtime to build sprites and bodies from
    pub fn layout_json(&self) -> Result<String, String> {
        serde_json::to_string(&self.session.level)
            .map_err(|e| format!("Failed to serialize level: {:?}", e))
    }

    /// Advance one frame. Returns `[vel_x, vel_y]` for the player body.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        now_ms: f64,
        dt_ms: f64,
        vel_x: f32,
        vel_y: f32,
        on_floor: bool,
        touching_down: bool,
        left: bool,
        right: bool,
        jump: bool,
        pointer1_down: bool,
        pointer1_x: f32,
        pointer1_y: f32,
        pointer2_down: bool,
        pointer2_x: f32,
        pointer2_y: f32,
        raw_x1: &str,
        raw_x2: &str,
    ) -> Vec<f32> {
        let frame = Frame {
            now: now_ms,
            dt: dt_ms,
            vel: Vec2::new(vel_x, vel_y),
            on_floor,
            touching_down,
            controls: Controls {
                left,
                right,
                jump,
                pointer1: Pointer::new(pointer1_down, pointer1_x, pointer1_y),
                pointer2: Pointer::new(pointer2_down, pointer2_x, pointer2_y),
            },
            raw_x1,
            raw_x2,
        };
        let vel = self.session.tick(&frame);
        vec![vel.x, vel.y]
    }

    /// Submit button handler. `now_ms` is the runtime clock at the click.
    /// Returns the id of the scheduled update.
    pub fn submit(&mut self, now_ms: f64) -> Result<f64, String> {
        self.session
            .submit(now_ms)
            .map(|id| id.0 as f64)
            .map_err(|e| format!("Submit rejected: {}", e))
    }

    pub fn cancel(&mut self, task_id: f64) -> bool {
        self.session.cancel(TaskId(task_id as u64))
    }

    /// Overlap callback: the player touched star `index`
    pub fn collect_star(&mut self, index: u32) -> bool {
        self.session.collect_star(index)
    }

    /// Current jump power, or undefined while unset
    pub fn jump_power(&self) -> Option<f64> {
        self.session.power.value()
    }

    pub fn jump_power_text(&self) -> String {
        self.session.hud.jump_power.clone()
    }

    pub fn param1_text(&self) -> String {
        self.session.hud.param1.clone()
    }

    pub fn param2_text(&self) -> String {
        self.session.hud.param2.clone()
    }

    pub fn star_text(&self) -> String {
        self.session.hud.stars.clone()
    }

    pub fn win_visible(&self) -> bool {
        self.session.hud.win_visible
    }

    /// Flourishes to play since the last call
    pub fn take_flourishes_json(&mut self) -> Result<String, String> {
        let flourishes = self.session.take_flourishes();
        serde_json::to_string(&flourishes)
            .map_err(|e| format!("Failed to serialize flourishes: {:?}", e))
    }

    /// Animation cues raised by the last tick
    pub fn animation_cues_json(&self) -> Result<String, String> {
        serde_json::to_string(&self.session.events.animation)
            .map_err(|e| format!("Failed to serialize animation cues: {:?}", e))
    }
}

fn parse_config(json: &str) -> Result<Config, String> {
    let config: Config =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Rejected config: {}", e))?;
    Ok(config)
}
