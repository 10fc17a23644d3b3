use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};
use crate::params::Params;
use crate::pipeline::SupersedeMode;
use crate::policy::ResponsePolicy;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub policy: ResponsePolicy,
    pub run_speed: f32,
    pub jump_cooldown_ms: f64,
    pub submit_delay_ms: f64,
    pub flourish_duration_ms: f64,
    pub supersede: SupersedeMode,
    pub touch_split_x: f32,
    pub touch_run_min_y: f32,
    pub touch_jump_max_y: f32,
    pub star_count: u32,
    /// Reject non-numeric parameters on submit instead of scoring NaN
    pub strict_parameters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: ResponsePolicy::default(),
            run_speed: Params::RUN_SPEED,
            jump_cooldown_ms: Params::JUMP_COOLDOWN_MS,
            submit_delay_ms: Params::SUBMIT_DELAY_MS,
            flourish_duration_ms: Params::FLOURISH_DURATION_MS,
            supersede: SupersedeMode::default(),
            touch_split_x: Params::TOUCH_SPLIT_X,
            touch_run_min_y: Params::TOUCH_RUN_MIN_Y,
            touch_jump_max_y: Params::TOUCH_JUMP_MAX_Y,
            star_count: Params::STAR_COUNT,
            strict_parameters: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        self.policy.validate()?;
        let durations = [
            ("jump_cooldown_ms", self.jump_cooldown_ms),
            ("submit_delay_ms", self.submit_delay_ms),
            ("flourish_duration_ms", self.flourish_duration_ms),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::InvalidConfig(format!(
                    "{name} must be a non-negative duration, got {value}"
                )));
            }
        }
        if !self.run_speed.is_finite() || self.run_speed < 0.0 {
            return Err(TuningError::InvalidConfig(format!(
                "run_speed must be non-negative, got {}",
                self.run_speed
            )));
        }
        if self.star_count == 0 {
            return Err(TuningError::InvalidConfig(
                "star_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
