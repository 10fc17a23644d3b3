pub mod components;
pub mod config;
pub mod error;
pub mod level;
pub mod metric;
pub mod params;
pub mod pipeline;
pub mod policy;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::TuningError;
pub use level::*;
pub use metric::*;
pub use params::*;
pub use pipeline::*;
pub use policy::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one tick of the TuningGame rules
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    level: &Level,
    config: &Config,
    frame: &Frame,
    params: &mut ParameterPair,
    power: &mut JumpPower,
    pipeline: &mut UpdatePipeline,
    hud: &mut Hud,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Land any jump power updates that came due since the last tick
    let completed = pipeline.run_due(time.now, config, level, power, hud);
    events.power_updated = !completed.is_empty();

    // 2. Read the tuning parameters
    read_parameters(frame.raw_x1, frame.raw_x2, params, hud);

    // 3. Run / face
    run_player(world, &frame.controls, config, events);

    // 4. Jump with the current jump power
    try_jump(world, time, &frame.controls, config, *power, events);
}
