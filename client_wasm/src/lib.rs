//! Browser client for TuningGame
//!
//! Exposes the game rules to the page's JavaScript game runtime. Parameter
//! inputs can be passed in directly or read from `input#x1` / `input#x2`.

mod game;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logger;

pub use game::TuningGame;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
const X1_SELECTOR: &str = "input#x1";
#[cfg(target_arch = "wasm32")]
const X2_SELECTOR: &str = "input#x2";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TuningGame {
    /// Start a game with the parameter inputs currently on the page
    pub fn from_page(seed: u32, config_json: Option<String>) -> Result<TuningGame, String> {
        TuningGame::new(
            seed,
            config_json,
            &dom::read_input(X1_SELECTOR),
            &dom::read_input(X2_SELECTOR),
        )
    }

    /// Submit button handler stamped with the page clock
    pub fn submit_from_page(&mut self) -> Result<f64, String> {
        self.submit(dom::now_ms())
    }

    /// Like `tick`, reading the clock and parameter inputs from the page
    #[allow(clippy::too_many_arguments)]
    pub fn tick_from_page(
        &mut self,
        dt_ms: f64,
        vel_x: f32,
        vel_y: f32,
        on_floor: bool,
        touching_down: bool,
        left: bool,
        right: bool,
        jump: bool,
        pointer1_down: bool,
        pointer1_x: f32,
        pointer1_y: f32,
        pointer2_down: bool,
        pointer2_x: f32,
        pointer2_y: f32,
    ) -> Vec<f32> {
        let raw_x1 = dom::read_input(X1_SELECTOR);
        let raw_x2 = dom::read_input(X2_SELECTOR);
        self.tick(
            dom::now_ms(),
            dt_ms,
            vel_x,
            vel_y,
            on_floor,
            touching_down,
            left,
            right,
            jump,
            pointer1_down,
            pointer1_x,
            pointer1_y,
            pointer2_down,
            pointer2_x,
            pointer2_y,
            &raw_x1,
            &raw_x2,
        )
    }
}
