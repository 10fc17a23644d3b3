use std::fmt;

use glam::Vec2;
use serde::Serialize;

use crate::components::Facing;
use crate::error::{Result, TuningError};

/// Time resource for tracking simulation time, in milliseconds
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f64,  // Delta time for this tick
    pub now: f64, // Runtime clock
}

impl Time {
    pub fn new(dt: f64, now: f64) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1000.0 / crate::Params::DESIRED_FPS as f64,
            now: 0.0,
        }
    }
}

/// Current jump power. Starts unset and is only written by the update pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpPower {
    #[default]
    Unset,
    Value(f64),
}

impl JumpPower {
    pub fn value(&self) -> Option<f64> {
        match self {
            JumpPower::Unset => None,
            JumpPower::Value(v) => Some(*v),
        }
    }
}

impl fmt::Display for JumpPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpPower::Unset => write!(f, "none"),
            JumpPower::Value(v) => write!(f, "{}", page_number(*v)),
        }
    }
}

/// Number text the way the page shows it: `NaN`, `Infinity`, and exponent
/// form from 1e21 up or below 1e-6.
fn page_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = v.abs();
    if v != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", v);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        format!("{}", v)
    }
}

/// The two tuning parameters as last read from the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterPair {
    pub x1: f64,
    pub x2: f64,
}

impl Default for ParameterPair {
    fn default() -> Self {
        Self {
            x1: f64::NAN,
            x2: f64::NAN,
        }
    }
}

impl ParameterPair {
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Parse raw text; anything that isn't a number becomes NaN.
    pub fn parse_lossy(raw_x1: &str, raw_x2: &str) -> Self {
        Self {
            x1: parse_number(raw_x1).unwrap_or(f64::NAN),
            x2: parse_number(raw_x2).unwrap_or(f64::NAN),
        }
    }

    /// Parse raw text, rejecting non-numeric input.
    pub fn parse_strict(raw_x1: &str, raw_x2: &str) -> Result<Self> {
        let x1 = parse_number(raw_x1).ok_or_else(|| TuningError::InvalidParameter {
            name: "x1",
            raw: raw_x1.to_string(),
        })?;
        let x2 = parse_number(raw_x2).ok_or_else(|| TuningError::InvalidParameter {
            name: "x2",
            raw: raw_x2.to_string(),
        })?;
        Ok(Self { x1, x2 })
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Star collection progress
#[derive(Debug, Clone, Copy)]
pub struct StarTally {
    pub collected: u32,
    pub total: u32,
}

impl StarTally {
    pub fn new(total: u32) -> Self {
        Self {
            collected: 0,
            total,
        }
    }

    pub fn increment(&mut self) {
        self.collected += 1;
    }

    pub fn has_won(&self) -> bool {
        self.collected >= self.total
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// A pointer (touch) as reported by the runtime, in world coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub down: bool,
    pub pos: Vec2,
}

impl Pointer {
    pub fn new(down: bool, x: f32, y: f32) -> Self {
        Self {
            down,
            pos: Vec2::new(x, y),
        }
    }
}

/// Control snapshot for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub pointer1: Pointer,
    pub pointer2: Pointer,
}

/// Sprite animation requests for the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationCue {
    Play { facing: Facing },
    Stop { frame: u32 },
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub jumped: Option<f64>, // impulse applied this tick
    pub star_collected: bool,
    pub won: bool,
    pub power_updated: bool,
    pub animation: Vec<AnimationCue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.jumped = None;
        self.star_collected = false;
        self.won = false;
        self.power_updated = false;
        self.animation.clear();
    }
}

/// Text shown by the runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub jump_power: String,
    pub param1: String,
    pub param2: String,
    pub stars: String,
    pub win_visible: bool,
}

impl Hud {
    pub const LOADING: &'static str = "loading...";

    pub fn new(raw_x1: &str, raw_x2: &str, stars: &StarTally) -> Self {
        let mut hud = Self {
            jump_power: "Jump power: 0".to_string(),
            param1: String::new(),
            param2: String::new(),
            stars: String::new(),
            win_visible: false,
        };
        hud.show_params(raw_x1, raw_x2);
        hud.show_stars(stars);
        hud
    }

    pub fn show_params(&mut self, raw_x1: &str, raw_x2: &str) {
        self.param1 = format!("Param 1: {}", raw_x1);
        self.param2 = format!("Param 2: {}", raw_x2);
    }

    pub fn show_loading(&mut self) {
        self.jump_power = format!("Jump power: {}", Self::LOADING);
    }

    pub fn show_power(&mut self, power: JumpPower) {
        self.jump_power = format!("Jump power: {}", power);
    }

    pub fn show_stars(&mut self, stars: &StarTally) {
        self.stars = format!("Star: {}/{}", stars.collected, stars.total);
    }
}
