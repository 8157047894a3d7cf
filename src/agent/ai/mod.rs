// AI Agent - one-ply greedy evaluation
//
// Every legal move is played on a copy of the position, scored by material
// (mates first, stalemates as a draw) and taken back. A random strategy is
// available as a baseline opponent.

mod ai_player;
mod evaluation;
mod evaluator;

pub use ai_player::AIPlayer;
pub use evaluation::{material, material_balance};
pub use evaluator::{score_move, Evaluator, Strategy, CHECKMATE, STALEMATE};
