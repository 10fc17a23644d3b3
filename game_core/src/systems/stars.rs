use hecs::{Entity, World};
use log::info;

use crate::components::Star;
use crate::resources::{Events, Hud, StarTally};

/// Collect a star the runtime reported overlapping the player.
///
/// Returns false for entities that are not (or no longer) stars.
pub fn collect_star(
    world: &mut World,
    star: Entity,
    tally: &mut StarTally,
    hud: &mut Hud,
    events: &mut Events,
) -> bool {
    if world.get::<&Star>(star).is_err() {
        return false;
    }
    if world.despawn(star).is_err() {
        return false;
    }

    tally.increment();
    hud.show_stars(tally);
    events.star_collected = true;

    if tally.has_won() {
        info!("all {} stars collected", tally.total);
        hud.win_visible = true;
        events.won = true;
    }
    true
}

/// Find a live star by its level index
pub fn find_star(world: &World, index: u32) -> Option<Entity> {
    world
        .query::<&Star>()
        .iter()
        .find(|(_e, star)| star.index == index)
        .map(|(e, _)| e)
}
