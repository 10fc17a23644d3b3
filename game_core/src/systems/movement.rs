use hecs::World;

use crate::components::{Body, Facing, Player};
use crate::config::Config;
use crate::resources::{AnimationCue, Controls, Events};

/// Idle frame shown after running left
const LEFT_IDLE_FRAME: u32 = 0;
/// Idle frame shown otherwise
const RIGHT_IDLE_FRAME: u32 = 5;

/// Horizontal movement intent for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunIntent {
    Left,
    Right,
    Stand,
}

impl RunIntent {
    /// Keys win over touch; a touch in the lower band steers by screen half.
    pub fn from_controls(controls: &Controls, config: &Config) -> Self {
        let touch = controls.pointer1;
        let touch_runs = touch.down && touch.pos.y > config.touch_run_min_y;

        if controls.left || (touch_runs && touch.pos.x < config.touch_split_x) {
            RunIntent::Left
        } else if controls.right || (touch_runs && touch.pos.x > config.touch_split_x) {
            RunIntent::Right
        } else {
            RunIntent::Stand
        }
    }
}

/// Set horizontal velocity and facing for the player
pub fn run_player(world: &mut World, controls: &Controls, config: &Config, events: &mut Events) {
    let intent = RunIntent::from_controls(controls, config);

    for (_entity, (player, body)) in world.query_mut::<(&mut Player, &mut Body)>() {
        body.vel.x = 0.0;

        match intent {
            RunIntent::Left => {
                body.vel.x = -config.run_speed;
                face(player, Facing::Left, events);
            }
            RunIntent::Right => {
                body.vel.x = config.run_speed;
                face(player, Facing::Right, events);
            }
            RunIntent::Stand => {
                if player.facing != Facing::Idle {
                    let frame = if player.facing == Facing::Left {
                        LEFT_IDLE_FRAME
                    } else {
                        RIGHT_IDLE_FRAME
                    };
                    events.animation.push(AnimationCue::Stop { frame });
                    player.facing = Facing::Idle;
                }
            }
        }
    }
}

fn face(player: &mut Player, facing: Facing, events: &mut Events) {
    if player.facing != facing {
        events.animation.push(AnimationCue::Play { facing });
        player.facing = facing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Pointer;

    fn setup() -> (World, hecs::Entity, Config, Events) {
        let mut world = World::new();
        let player = world.spawn((Player::new(), Body::default()));
        (world, player, Config::new(), Events::new())
    }

    fn facing(world: &World, entity: hecs::Entity) -> Facing {
        world.get::<&Player>(entity).unwrap().facing
    }

    fn vel_x(world: &World, entity: hecs::Entity) -> f32 {
        world.get::<&Body>(entity).unwrap().vel.x
    }

    #[test]
    fn test_left_key_runs_left() {
        let (mut world, player, config, mut events) = setup();
        let controls = Controls {
            left: true,
            ..Default::default()
        };

        run_player(&mut world, &controls, &config, &mut events);

        assert_eq!(vel_x(&world, player), -150.0);
        assert_eq!(facing(&world, player), Facing::Left);
        assert_eq!(
            events.animation,
            vec![AnimationCue::Play {
                facing: Facing::Left
            }]
        );
    }

    #[test]
    fn test_initial_right_facing_does_not_replay() {
        let (mut world, player, config, mut events) = setup();
        let controls = Controls {
            right: true,
            ..Default::default()
        };

        run_player(&mut world, &controls, &config, &mut events);

        assert_eq!(vel_x(&world, player), 150.0);
        assert!(events.animation.is_empty());
    }

    #[test]
    fn test_stop_after_left_shows_frame_zero() {
        let (mut world, player, config, mut events) = setup();
        let left = Controls {
            left: true,
            ..Default::default()
        };
        run_player(&mut world, &left, &config, &mut events);
        events.clear();

        run_player(&mut world, &Controls::default(), &config, &mut events);

        assert_eq!(vel_x(&world, player), 0.0);
        assert_eq!(facing(&world, player), Facing::Idle);
        assert_eq!(events.animation, vec![AnimationCue::Stop { frame: 0 }]);

        events.clear();
        run_player(&mut world, &Controls::default(), &config, &mut events);
        assert!(events.animation.is_empty(), "idle emits its cue once");
    }

    #[test]
    fn test_stop_after_right_shows_frame_five() {
        let (mut world, _player, config, mut events) = setup();
        run_player(&mut world, &Controls::default(), &config, &mut events);
        assert_eq!(events.animation, vec![AnimationCue::Stop { frame: 5 }]);
    }

    #[test]
    fn test_touch_regions() {
        let config = Config::new();
        let touch = |x, y| {
            let controls = Controls {
                pointer1: Pointer::new(true, x, y),
                ..Default::default()
            };
            RunIntent::from_controls(&controls, &config)
        };

        assert_eq!(touch(100.0, 300.0), RunIntent::Left);
        assert_eq!(touch(700.0, 300.0), RunIntent::Right);
        assert_eq!(touch(100.0, 200.0), RunIntent::Stand);
        assert_eq!(touch(400.0, 300.0), RunIntent::Stand);

        let lifted = Controls {
            pointer1: Pointer::new(false, 100.0, 300.0),
            ..Default::default()
        };
        assert_eq!(RunIntent::from_controls(&lifted, &config), RunIntent::Stand);
    }
}
