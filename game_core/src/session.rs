use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use crate::components::{Body, Facing, Player};
use crate::config::Config;
use crate::error::Result;
use crate::level::Level;
use crate::pipeline::{Flourish, TaskId, UpdatePipeline};
use crate::resources::{
    Controls, Events, GameRng, Hud, JumpPower, ParameterPair, StarTally, Time,
};
use crate::systems::{collect_star, find_star};

/// Everything the runtime reports for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub now: f64,
    pub dt: f64,
    pub vel: Vec2,
    pub on_floor: bool,
    pub touching_down: bool,
    pub controls: Controls,
    pub raw_x1: &'a str,
    pub raw_x2: &'a str,
}

/// One running game: world, tuning state and HUD
pub struct Session {
    pub world: World,
    pub player: Entity,
    pub time: Time,
    pub level: Level,
    pub config: Config,
    pub params: ParameterPair,
    pub raw_x1: String,
    pub raw_x2: String,
    pub power: JumpPower,
    pub stars: StarTally,
    pub hud: Hud,
    pub events: Events,
    pub pipeline: UpdatePipeline,
    pub rng: GameRng,
}

impl Session {
    /// Build the level and HUD. `raw_x1`/`raw_x2` are the parameter texts on
    /// the page at startup.
    pub fn new(seed: u64, config: Config, raw_x1: &str, raw_x2: &str) -> Result<Self> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let level = Level::generate(&mut rng, config.star_count);
        let mut world = World::new();
        let player = level.spawn(&mut world);
        let stars = StarTally::new(config.star_count);

        Ok(Self {
            world,
            player,
            time: Time::default(),
            level,
            params: ParameterPair::parse_lossy(raw_x1, raw_x2),
            raw_x1: raw_x1.to_string(),
            raw_x2: raw_x2.to_string(),
            power: JumpPower::Unset,
            hud: Hud::new(raw_x1, raw_x2, &stars),
            stars,
            events: Events::new(),
            pipeline: UpdatePipeline::new(),
            rng,
            config,
        })
    }

    /// Advance one frame and return the velocity the runtime should apply
    pub fn tick(&mut self, frame: &Frame) -> Vec2 {
        self.time = Time::new(frame.dt, frame.now);
        if self.raw_x1 != frame.raw_x1 {
            self.raw_x1 = frame.raw_x1.to_string();
        }
        if self.raw_x2 != frame.raw_x2 {
            self.raw_x2 = frame.raw_x2.to_string();
        }

        for (_entity, body) in self.world.query_mut::<&mut Body>() {
            body.vel = frame.vel;
            body.on_floor = frame.on_floor;
            body.touching_down = frame.touching_down;
        }

        crate::step(
            &mut self.world,
            &self.time,
            &self.level,
            &self.config,
            frame,
            &mut self.params,
            &mut self.power,
            &mut self.pipeline,
            &mut self.hud,
            &mut self.events,
        );

        self.velocity()
    }

    /// Schedule a jump power update from the parameters read on the last
    /// tick. `now` is the runtime clock at the moment of the click; the update
    /// lands `submit_delay_ms` after it.
    ///
    /// With `strict_parameters` set, non-numeric input is rejected and nothing
    /// is scheduled. Otherwise this never fails.
    pub fn submit(&mut self, now: f64) -> Result<TaskId> {
        let params = if self.config.strict_parameters {
            ParameterPair::parse_strict(&self.raw_x1, &self.raw_x2)?
        } else {
            self.params
        };
        Ok(self
            .pipeline
            .submit(params, now, &self.config, &mut self.hud))
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.pipeline.cancel(id)
    }

    /// Collect the star with level index `index`
    pub fn collect_star(&mut self, index: u32) -> bool {
        match find_star(&self.world, index) {
            Some(star) => collect_star(
                &mut self.world,
                star,
                &mut self.stars,
                &mut self.hud,
                &mut self.events,
            ),
            None => {
                debug!("star {} already collected", index);
                false
            }
        }
    }

    pub fn take_flourishes(&mut self) -> Vec<Flourish> {
        self.pipeline.take_flourishes()
    }

    pub fn velocity(&self) -> Vec2 {
        self.world
            .get::<&Body>(self.player)
            .map(|body| body.vel)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn facing(&self) -> Facing {
        self.world
            .get::<&Player>(self.player)
            .map(|player| player.facing)
            .unwrap_or(Facing::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TuningError;

    fn frame<'a>(now: f64, raw_x1: &'a str, raw_x2: &'a str) -> Frame<'a> {
        Frame {
            now,
            dt: 33.0,
            vel: Vec2::ZERO,
            on_floor: true,
            touching_down: false,
            controls: Controls::default(),
            raw_x1,
            raw_x2,
        }
    }

    #[test]
    fn test_new_session_starts_unset() {
        let session = Session::new(1, Config::new(), "1", "2").unwrap();
        assert_eq!(session.power, JumpPower::Unset);
        assert_eq!(session.hud.param1, "Param 1: 1");
        assert_eq!(session.hud.param2, "Param 2: 2");
        assert_eq!(session.hud.stars, "Star: 0/3");
        assert_eq!(session.facing(), Facing::Right);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            star_count: 0,
            ..Config::default()
        };
        assert!(Session::new(1, config, "", "").is_err());
    }

    #[test]
    fn test_submit_captures_last_tick_parameters() {
        let mut session = Session::new(1, Config::new(), "", "").unwrap();
        session.tick(&frame(0.0, "-4", "6"));
        session.submit(0.0).unwrap();

        // Editing the inputs after submitting does not change the result
        session.tick(&frame(100.0, "0", "0"));
        session.tick(&frame(500.0, "0", "0"));

        assert_eq!(session.power, JumpPower::Value(100.0));
        assert_eq!(session.params, ParameterPair::new(0.0, 0.0));
    }

    #[test]
    fn test_tick_preserves_vertical_velocity_without_jump() {
        let mut session = Session::new(1, Config::new(), "", "").unwrap();
        let mut f = frame(0.0, "", "");
        f.vel = Vec2::new(40.0, 120.0);
        let vel = session.tick(&f);
        assert_eq!(vel, Vec2::new(0.0, 120.0));
    }

    #[test]
    fn test_collect_star_by_index() {
        let mut session = Session::new(1, Config::new(), "", "").unwrap();
        assert!(session.collect_star(0));
        assert!(!session.collect_star(0));
        assert!(!session.collect_star(17));
        assert_eq!(session.hud.stars, "Star: 1/3");
    }

    #[test]
    fn test_click_between_ticks_waits_full_delay() {
        let mut session = Session::new(1, Config::new(), "", "").unwrap();
        session.tick(&frame(0.0, "-4", "6"));
        session.submit(30.0).unwrap();

        session.tick(&frame(33.0, "-4", "6"));
        session.tick(&frame(500.0, "-4", "6"));
        assert_eq!(session.power, JumpPower::Unset, "470 ms after the click");

        session.tick(&frame(530.0, "-4", "6"));
        assert_eq!(session.power, JumpPower::Value(100.0));
    }

    #[test]
    fn test_configured_star_count_drives_level_and_win() {
        let config = Config {
            star_count: 2,
            ..Config::default()
        };
        let mut session = Session::new(1, config, "", "").unwrap();
        assert_eq!(session.level.stars.len(), 2);
        assert_eq!(session.hud.stars, "Star: 0/2");

        assert!(session.collect_star(0));
        assert!(session.collect_star(1));
        assert!(!session.collect_star(2));
        assert_eq!(session.hud.stars, "Star: 2/2");
        assert!(session.hud.win_visible);

        let config = Config {
            star_count: 5,
            ..Config::default()
        };
        let session = Session::new(1, config, "", "").unwrap();
        assert_eq!(session.level.stars.len(), 5);
        assert_eq!(session.hud.stars, "Star: 0/5");
    }

    #[test]
    fn test_strict_parameters_reject_non_numeric_submit() {
        let config = Config {
            strict_parameters: true,
            ..Config::default()
        };
        let mut session = Session::new(1, config, "", "").unwrap();
        session.tick(&frame(0.0, "-4", "six"));

        let err = session.submit(10.0).unwrap_err();
        assert_eq!(
            err,
            TuningError::InvalidParameter {
                name: "x2",
                raw: "six".to_string()
            }
        );
        assert_eq!(session.pipeline.pending_count(), 0);
        assert_eq!(session.hud.jump_power, "Jump power: 0");

        session.tick(&frame(33.0, "-4", "6"));
        assert!(session.submit(40.0).is_ok());
        session.tick(&frame(540.0, "-4", "6"));
        assert_eq!(session.power, JumpPower::Value(100.0));
    }

    #[test]
    fn test_lossy_parameters_submit_nan() {
        let mut session = Session::new(1, Config::new(), "", "").unwrap();
        session.tick(&frame(0.0, "-4", "six"));
        assert!(session.submit(0.0).is_ok());
        session.tick(&frame(500.0, "-4", "six"));
        assert!(session.power.value().is_some_and(f64::is_nan));
    }
}
