pub mod input;
pub mod jump;
pub mod movement;
pub mod stars;

pub use input::*;
pub use jump::*;
pub use movement::*;
pub use stars::*;
