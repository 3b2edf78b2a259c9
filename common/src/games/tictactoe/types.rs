use serde::{Deserialize, Serialize};

/// A mark on the board: an empty square, or one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// The opposing mark, or `None` for `Empty`.
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// The display character for this mark (`' '` for `Empty`).
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// The terminal or in-progress status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

/// Who opens the first game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    Human,
    Machine,
    Random,
}
