use crate::params::Params;

/// Jump power metric for a parameter pair.
///
/// `-2·(x1 + 4)² − (x2 − 6)² + 100`: peaks at 100 for (−4, 6) and falls off
/// twice as fast along x1. NaN in either input yields NaN.
pub fn jump_metric(x1: f64, x2: f64) -> f64 {
    let dx1 = x1 - Params::METRIC_PEAK_X1;
    let dx2 = x2 - Params::METRIC_PEAK_X2;
    -2.0 * dx1 * dx1 - dx2 * dx2 + Params::METRIC_PEAK
}
