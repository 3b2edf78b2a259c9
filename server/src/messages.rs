use common::games::tictactoe::{GameStatus, Mark};
use serde::{Deserialize, Serialize};

use crate::session::{Scoreboard, StateSnapshot};

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub cells: Vec<char>,
    pub status: GameStatus,
    pub current_mark: char,
    pub your_mark: char,
    pub machine_mark: char,
    pub last_move: Option<usize>,
    pub scores: Scoreboard,
    pub message: String,
}

impl StateResponse {
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Self {
        Self {
            cells: snapshot.cells.iter().map(|mark| mark.symbol()).collect(),
            status: snapshot.status,
            current_mark: snapshot.current_mark.symbol(),
            your_mark: snapshot.human_mark.symbol(),
            machine_mark: snapshot.machine_mark.symbol(),
            last_move: snapshot.last_move,
            scores: snapshot.scores,
            message: status_message(snapshot),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceMarkRequest {
    pub slot: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub machine_first: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

fn status_message(snapshot: &StateSnapshot) -> String {
    match snapshot.status {
        GameStatus::Draw => "It's a tie!".to_string(),
        GameStatus::XWon | GameStatus::OWon => {
            if snapshot.status == GameStatus::XWon && snapshot.human_mark == Mark::X
                || snapshot.status == GameStatus::OWon && snapshot.human_mark == Mark::O
            {
                "You win!".to_string()
            } else {
                "Machine wins!".to_string()
            }
        }
        GameStatus::InProgress => {
            if snapshot.current_mark == snapshot.human_mark {
                format!("Your turn! You are {}", snapshot.human_mark.symbol())
            } else {
                "Machine is thinking...".to_string()
            }
        }
    }
}
