pub mod player;
pub use player::*;

pub mod console_player;
pub use console_player::*;

pub mod ai;
pub use ai::{AIPlayer, Evaluator, Strategy};
