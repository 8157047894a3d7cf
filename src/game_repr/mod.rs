mod moves;
mod piece;
mod position;
mod square;
mod legality;
mod piece_moves;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
pub use piece_moves::*;
