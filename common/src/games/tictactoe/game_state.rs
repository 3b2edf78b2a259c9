use rand::Rng;

use super::board::{Board, SLOT_COUNT};
use super::minimax::best_move;
use super::types::{FirstPlayerMode, GameStatus, Mark};

/// One match between the human and the machine. Owns the authoritative
/// board and enforces everything the board itself leaves to callers:
/// turn order, bounds, occupancy, and the finished-game guard.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub machine_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark, first_player_mode: FirstPlayerMode) -> Self {
        let machine_mark = human_mark
            .opponent()
            .expect("human mark must be X or O");

        let machine_opens = match first_player_mode {
            FirstPlayerMode::Human => false,
            FirstPlayerMode::Machine => true,
            FirstPlayerMode::Random => rand::rng().random(),
        };

        Self {
            board: Board::new(),
            human_mark,
            machine_mark,
            current_mark: if machine_opens { machine_mark } else { human_mark },
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, slot: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if slot >= SLOT_COUNT {
            return Err("Square is out of bounds".to_string());
        }

        if !self.board.place(slot, mark) {
            return Err("Square is already marked".to_string());
        }

        self.last_move = Some(slot);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    /// Runs the search for the machine's mark and applies the chosen slot.
    /// Returns the slot that was played.
    pub fn machine_move(&mut self) -> Result<usize, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != self.machine_mark {
            return Err("Not the machine's turn".to_string());
        }

        let evaluation = best_move(&mut self.board, self.machine_mark, self.human_mark);
        let slot = evaluation
            .slot
            .ok_or_else(|| "No squares left to play".to_string())?;

        self.place_mark(self.machine_mark, slot)?;
        Ok(slot)
    }

    pub fn machine_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.machine_mark
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        if let Some(opponent) = self.current_mark.opponent() {
            self.current_mark = opponent;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = self.board.winning_mark() {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if !self.board.has_empty_slot() {
            self.status = GameStatus::Draw;
        }
    }
}
