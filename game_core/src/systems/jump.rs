use hecs::World;

use crate::components::{Body, Player};
use crate::config::Config;
use crate::resources::{Controls, Events, JumpPower, Pointer, Time};

/// True when the jump key is down or a pointer touches the upper band
pub fn wants_jump(controls: &Controls, config: &Config) -> bool {
    let upper = |p: &Pointer| p.down && p.pos.y < config.touch_jump_max_y;
    controls.jump || upper(&controls.pointer1) || upper(&controls.pointer2)
}

/// Launch the player if a jump is requested, it is grounded and the cooldown
/// has passed. The impulse is looked up on every jump so a new jump power
/// applies to the next jump.
pub fn try_jump(
    world: &mut World,
    time: &Time,
    controls: &Controls,
    config: &Config,
    power: JumpPower,
    events: &mut Events,
) {
    if !wants_jump(controls, config) {
        return;
    }

    for (_entity, (player, body)) in world.query_mut::<(&mut Player, &mut Body)>() {
        if body.is_grounded() && time.now > player.jump_timer {
            let impulse = config.policy.impulse(power);
            body.vel.y = impulse as f32;
            player.jump_timer = time.now + config.jump_cooldown_ms;
            events.jumped = Some(impulse);
        }
    }
}
