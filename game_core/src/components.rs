use glam::Vec2;
use serde::Serialize;

/// Which way the player sprite is oriented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Left,
    Right,
    Idle,
}

/// Player component - the controllable actor
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub facing: Facing,
    pub jump_timer: f64, // Runtime clock value after which the next jump may fire
}

impl Player {
    pub fn new() -> Self {
        Self {
            facing: Facing::Right,
            jump_timer: 0.0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Mirror of the runtime's physics body for one tick.
///
/// Contact flags are written by the runtime before the tick; `vel` is read
/// back after it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Body {
    pub vel: Vec2,
    pub on_floor: bool,
    pub touching_down: bool,
}

impl Body {
    pub fn is_grounded(&self) -> bool {
        self.on_floor || self.touching_down
    }
}

/// Platform component - immovable ledge
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Platform {
    pub pos: Vec2,
}

impl Platform {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

/// Star component - collectible
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Star {
    pub index: u32,
    pub pos: Vec2,
    pub bounce: Vec2,
}

impl Star {
    pub fn new(index: u32, pos: Vec2, bounce: Vec2) -> Self {
        Self { index, pos, bounce }
    }
}
