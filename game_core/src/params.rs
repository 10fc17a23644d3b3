/// Game tuning parameters for TuningGame
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // World (pixels, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    pub const DESIRED_FPS: u32 = 30;

    // Player body
    pub const PLAYER_SPAWN_X: f32 = 32.0;
    pub const PLAYER_SPAWN_Y: f32 = 32.0;
    pub const PLAYER_BOUNCE_Y: f32 = 0.2;
    pub const PLAYER_GRAVITY_Y: f32 = 350.0;
    pub const RUN_SPEED: f32 = 150.0;

    // Jumping
    pub const BASELINE_IMPULSE: f64 = -150.0;
    pub const IMPULSE_OFFSET: f64 = -200.0;
    pub const JUMP_COOLDOWN_MS: f64 = 300.0;

    // Touch regions
    pub const TOUCH_SPLIT_X: f32 = 400.0;
    pub const TOUCH_RUN_MIN_Y: f32 = 250.0;
    pub const TOUCH_JUMP_MAX_Y: f32 = 350.0;

    // Stars
    pub const STAR_COUNT: u32 = 3;

    // Update pipeline
    pub const SUBMIT_DELAY_MS: f64 = 500.0;
    pub const FLOURISH_DURATION_MS: f64 = 1500.0;
    pub const FLOURISH_TEXT_OFFSET_X: f32 = -120.0;
    pub const FLOURISH_TEXT_END_Y: f32 = -32.0;
    pub const FLOURISH_ICON_OFFSET_X: f32 = -45.0;
    pub const FLOURISH_ICON_END_Y: f32 = -180.0;

    // Metric peak
    pub const METRIC_PEAK: f64 = 100.0;
    pub const METRIC_PEAK_X1: f64 = -4.0;
    pub const METRIC_PEAK_X2: f64 = 6.0;
}
