use std::sync::Arc;
use tokio::sync::Mutex;

use common::games::tictactoe::{
    FirstPlayerMode, GameStatus, Mark, SLOT_COUNT, TicTacToeGameState, best_move,
};
use common::log;
use serde::Serialize;

/// Cumulative results across games. Owned by the web driver, never by the
/// game core; a new game keeps it, only an explicit reset clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub machine_wins: u32,
    pub ties: u32,
}

/// Plain-data view of the session for the wire layer.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    pub cells: [Mark; SLOT_COUNT],
    pub status: GameStatus,
    pub current_mark: Mark,
    pub human_mark: Mark,
    pub machine_mark: Mark,
    pub last_move: Option<usize>,
    pub scores: Scoreboard,
}

struct SessionInner {
    game: TicTacToeGameState,
    scores: Scoreboard,
    scored: bool,
}

impl SessionInner {
    /// Counts a finished game exactly once; `scored` is re-armed on reset.
    fn record_outcome(&mut self) {
        if self.scored || self.game.status == GameStatus::InProgress {
            return;
        }

        if self.game.status == GameStatus::Draw {
            self.scores.ties += 1;
        } else if self.game.winner_mark() == Some(self.game.human_mark) {
            self.scores.human_wins += 1;
        } else {
            self.scores.machine_wins += 1;
        }
        self.scored = true;
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            cells: *self.game.board.cells(),
            status: self.game.status,
            current_mark: self.game.current_mark,
            human_mark: self.game.human_mark,
            machine_mark: self.game.machine_mark,
            last_move: self.game.last_move,
            scores: self.scores,
        }
    }
}

/// The single authoritative match behind the web API. All handlers share
/// one session; the mutex also guarantees that no two searches ever run
/// against the same board.
#[derive(Clone)]
pub struct MatchSession {
    state: Arc<Mutex<SessionInner>>,
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSession {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionInner {
                game: TicTacToeGameState::new(Mark::X, FirstPlayerMode::Human),
                scores: Scoreboard::default(),
                scored: false,
            })),
        }
    }

    pub async fn snapshot(&self) -> StateSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Applies the human's move and, while the game is still open, lets
    /// the machine answer before returning the resulting state.
    pub async fn place_human_mark(&self, slot: usize) -> Result<StateSnapshot, String> {
        {
            let mut inner = self.state.lock().await;
            let human_mark = inner.game.human_mark;
            inner.game.place_mark(human_mark, slot)?;
            inner.record_outcome();
        }

        self.play_machine_turn().await;
        Ok(self.snapshot().await)
    }

    /// Discards the current game, keeps the scoreboard. When the machine
    /// opens it plays its first move before this returns.
    pub async fn reset(&self, first_player: FirstPlayerMode) -> StateSnapshot {
        {
            let mut inner = self.state.lock().await;
            inner.game = TicTacToeGameState::new(Mark::X, first_player);
            inner.scored = false;
        }

        self.play_machine_turn().await;
        self.snapshot().await
    }

    pub async fn reset_scores(&self) -> StateSnapshot {
        let mut inner = self.state.lock().await;
        inner.scores = Scoreboard::default();
        inner.snapshot()
    }

    async fn play_machine_turn(&self) {
        let (mut board, machine_mark, human_mark) = {
            let inner = self.state.lock().await;
            if !inner.game.machine_turn() {
                return;
            }
            (
                inner.game.board.clone(),
                inner.game.machine_mark,
                inner.game.human_mark,
            )
        };

        // The search is synchronous and CPU-bound; run it off the async
        // workers against a cloned board, then apply the chosen slot to
        // the authoritative state.
        let result =
            tokio::task::spawn_blocking(move || best_move(&mut board, machine_mark, human_mark))
                .await;

        if let Ok(evaluation) = result
            && let Some(slot) = evaluation.slot
        {
            let mut inner = self.state.lock().await;
            if let Err(e) = inner.game.place_mark(machine_mark, slot) {
                log!("Machine failed to place mark at square {}: {}", slot, e);
            }
            inner.record_outcome();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn human_slot(session: &MatchSession) -> usize {
        let snapshot = session.snapshot().await;
        snapshot
            .cells
            .iter()
            .position(|&mark| mark == Mark::Empty)
            .unwrap()
    }

    #[tokio::test]
    async fn test_machine_answers_every_open_human_move() {
        let session = MatchSession::new();
        session.reset(FirstPlayerMode::Human).await;

        let snapshot = session.place_human_mark(0).await.unwrap();

        if snapshot.status == GameStatus::InProgress {
            let machine_marks = snapshot
                .cells
                .iter()
                .filter(|&&mark| mark == Mark::O)
                .count();
            assert_eq!(machine_marks, 1);
            assert_eq!(snapshot.current_mark, Mark::X);
        }
    }

    #[tokio::test]
    async fn test_machine_opens_when_asked() {
        let session = MatchSession::new();

        let snapshot = session.reset(FirstPlayerMode::Machine).await;

        assert_eq!(
            snapshot
                .cells
                .iter()
                .filter(|&&mark| mark == Mark::O)
                .count(),
            1
        );
        assert_eq!(snapshot.current_mark, Mark::X);
    }

    #[tokio::test]
    async fn test_occupied_square_is_reported_not_applied() {
        let session = MatchSession::new();
        session.reset(FirstPlayerMode::Machine).await;

        let taken = session
            .snapshot()
            .await
            .cells
            .iter()
            .position(|&mark| mark == Mark::O)
            .unwrap();

        let result = session.place_human_mark(taken).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_finished_game_is_scored_once_and_scores_survive_reset() {
        let session = MatchSession::new();
        session.reset(FirstPlayerMode::Human).await;

        // Feed the first empty slot until the game ends; optimal machine
        // play means this ends in a machine win or a tie.
        loop {
            let slot = human_slot(&session).await;
            let snapshot = session.place_human_mark(slot).await.unwrap();
            if snapshot.status != GameStatus::InProgress {
                break;
            }
        }

        let finished = session.snapshot().await;
        let total =
            finished.scores.human_wins + finished.scores.machine_wins + finished.scores.ties;
        assert_eq!(total, 1);
        assert_eq!(finished.scores.human_wins, 0);

        let after_reset = session.reset(FirstPlayerMode::Human).await;
        assert_eq!(after_reset.scores, finished.scores);
        assert_eq!(after_reset.status, GameStatus::InProgress);

        let cleared = session.reset_scores().await;
        assert_eq!(cleared.scores, Scoreboard::default());
    }
}
