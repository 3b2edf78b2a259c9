mod board;
mod game_state;
mod minimax;
mod types;

pub use board::{Board, SLOT_COUNT};
pub use game_state::TicTacToeGameState;
pub use minimax::{MoveEvaluation, best_move};
pub use types::{FirstPlayerMode, GameStatus, Mark};
