use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use serde::Serialize;

use crate::components::{Body, Platform, Player, Star};
use crate::params::Params;
use crate::resources::GameRng;

/// Sprite animation the runtime should register for the player
#[derive(Debug, Clone, Serialize)]
pub struct AnimationSpec {
    pub name: &'static str,
    pub frames: Vec<u32>,
    pub fps: u32,
    pub looped: bool,
}

/// Player body settings handed to the runtime's physics
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSpec {
    pub spawn: Vec2,
    pub bounce_y: f32,
    pub gravity_y: f32,
    pub body_size: Vec2,
    pub body_offset: Vec2,
    pub collide_world_bounds: bool,
    pub animations: Vec<AnimationSpec>,
}

/// Level definition
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    pub width: f32,
    pub height: f32,
    pub desired_fps: u32,
    pub player: PlayerSpec,
    pub platform_size: Vec2,
    pub platforms: Vec<Platform>,
    pub stars: Vec<Star>,
}

impl Level {
    /// The single TuningGame level with `star_count` stars placed from `rng`.
    ///
    /// Star `i` sits in column `star_count - i` and row `i`, 100 px apart.
    pub fn generate(rng: &mut GameRng, star_count: u32) -> Self {
        let platforms = vec![
            Platform::new(Vec2::new(400.0, 500.0)),
            Platform::new(Vec2::new(-150.0, 450.0)),
            Platform::new(Vec2::new(450.0, 300.0)),
        ];

        let stars = (0..star_count)
            .map(|i| {
                let column = (star_count - i) as f32;
                let row = i as f32;
                let pos = Vec2::new(
                    column * 100.0 + rng.0.gen::<f32>() * 150.0,
                    row * 100.0 + rng.0.gen::<f32>() * 150.0,
                );
                let bounce = Vec2::new(
                    0.7 + rng.0.gen::<f32>() * 10.2,
                    0.7 + rng.0.gen::<f32>() * 10.2,
                );
                Star::new(i, pos, bounce)
            })
            .collect();

        Self {
            width: Params::WORLD_WIDTH,
            height: Params::WORLD_HEIGHT,
            desired_fps: Params::DESIRED_FPS,
            player: PlayerSpec {
                spawn: Vec2::new(Params::PLAYER_SPAWN_X, Params::PLAYER_SPAWN_Y),
                bounce_y: Params::PLAYER_BOUNCE_Y,
                gravity_y: Params::PLAYER_GRAVITY_Y,
                body_size: Vec2::new(20.0, 32.0),
                body_offset: Vec2::new(5.0, 16.0),
                collide_world_bounds: true,
                animations: vec![
                    AnimationSpec {
                        name: "left",
                        frames: vec![0, 1, 2, 3],
                        fps: 10,
                        looped: true,
                    },
                    AnimationSpec {
                        name: "turn",
                        frames: vec![4],
                        fps: 20,
                        looped: true,
                    },
                    AnimationSpec {
                        name: "right",
                        frames: vec![5, 6, 7, 8],
                        fps: 10,
                        looped: true,
                    },
                ],
            },
            platform_size: Vec2::new(400.0, 32.0),
            platforms,
            stars,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Populate `world` with the level's entities and return the player
    pub fn spawn(&self, world: &mut World) -> Entity {
        for platform in &self.platforms {
            world.spawn((*platform,));
        }
        for star in &self.stars {
            world.spawn((*star,));
        }
        world.spawn((Player::new(), Body::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_placement_within_bands() {
        let level = Level::generate(&mut GameRng::new(1), 3);
        assert_eq!(level.stars.len(), 3);
        for star in &level.stars {
            let column = (3 - star.index) as f32 * 100.0;
            let row = star.index as f32 * 100.0;
            assert!(star.pos.x >= column && star.pos.x < column + 150.0);
            assert!(star.pos.y >= row && star.pos.y < row + 150.0);
            assert!(star.bounce.x >= 0.7 && star.bounce.x < 10.9);
            assert!(star.bounce.y >= 0.7 && star.bounce.y < 10.9);
        }
    }

    #[test]
    fn test_star_placement_deterministic_per_seed() {
        let a = Level::generate(&mut GameRng::new(99), 3);
        let b = Level::generate(&mut GameRng::new(99), 3);
        for (sa, sb) in a.stars.iter().zip(&b.stars) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.bounce, sb.bounce);
        }
    }

    #[test]
    fn test_star_count_follows_request() {
        let level = Level::generate(&mut GameRng::new(5), 5);
        assert_eq!(level.stars.len(), 5);
        let indices: Vec<u32> = level.stars.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert!(level.stars[0].pos.x >= 500.0 && level.stars[0].pos.x < 650.0);
    }

    #[test]
    fn test_spawn_populates_world() {
        let level = Level::generate(&mut GameRng::default(), 3);
        let mut world = World::new();
        let player = level.spawn(&mut world);

        assert_eq!(world.query::<&Platform>().iter().count(), 3);
        assert_eq!(world.query::<&Star>().iter().count(), 3);
        assert!(world.get::<&Player>(player).is_ok());
        assert!(world.get::<&Body>(player).is_ok());
    }
}
