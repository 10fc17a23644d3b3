use crate::resources::{Hud, ParameterPair};

/// Ingest the raw parameter texts read from the page this tick
pub fn read_parameters(raw_x1: &str, raw_x2: &str, params: &mut ParameterPair, hud: &mut Hud) {
    *params = ParameterPair::parse_lossy(raw_x1, raw_x2);
    hud.show_params(raw_x1, raw_x2);
}
