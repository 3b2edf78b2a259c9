use super::board::Board;
use super::types::Mark;

/// Outcome of one search level: the slot chosen at that level (`None` when
/// the position was already terminal on entry) and its adversarial score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub slot: Option<usize>,
    pub score: i32,
}

/// Picks the optimal slot for `maximizer`, assuming it is the maximizer's
/// turn and that `minimizer` answers perfectly. Explores every legal
/// continuation down to a terminal state; a won position scores
/// `empty_count + 1` so that faster wins outrank slower ones, a lost one
/// scores the negation, a full board scores 0.
///
/// The board is used as scratch space (place/undo pairs) but is restored
/// exactly to its entry state before returning. No two searches may share
/// one board; clone it for hypothetical positions.
pub fn best_move(board: &mut Board, maximizer: Mark, minimizer: Mark) -> MoveEvaluation {
    minimax(board, 0, true, maximizer, minimizer)
}

fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    maximizer: Mark,
    minimizer: Mark,
) -> MoveEvaluation {
    if board.winning_mark() == Some(maximizer) {
        return MoveEvaluation {
            slot: None,
            score: (board.empty_count() + 1) as i32,
        };
    }
    if board.winning_mark() == Some(minimizer) {
        return MoveEvaluation {
            slot: None,
            score: -((board.empty_count() + 1) as i32),
        };
    }
    if !board.has_empty_slot() {
        return MoveEvaluation { slot: None, score: 0 };
    }

    if is_maximizing {
        let mut max_eval = MoveEvaluation {
            slot: None,
            score: i32::MIN,
        };
        for slot in board.available_moves() {
            board.place(slot, maximizer);
            let mut eval = minimax(board, depth + 1, false, maximizer, minimizer);
            board.undo(slot);

            eval.slot = Some(slot);
            // Strict comparison keeps the lowest-index slot on ties.
            if eval.score > max_eval.score {
                max_eval = eval;
            }
        }
        max_eval
    } else {
        let mut min_eval = MoveEvaluation {
            slot: None,
            score: i32::MAX,
        };
        for slot in board.available_moves() {
            board.place(slot, minimizer);
            let mut eval = minimax(board, depth + 1, true, maximizer, minimizer);
            board.undo(slot);

            eval.slot = Some(slot);
            if eval.score < min_eval.score {
                min_eval = eval;
            }
        }
        min_eval
    }
}
