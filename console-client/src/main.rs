mod input;
mod render;

use std::io::{self, Write};

use clap::Parser;
use common::games::tictactoe::{FirstPlayerMode, GameStatus, Mark, TicTacToeGameState};

use input::parse_square;
use render::{render_board, render_reference_grid};

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// Let the machine make the opening move.
    #[arg(long)]
    machine_first: bool,
}

fn main() {
    let args = Args::parse();

    let first_player = if args.machine_first {
        FirstPlayerMode::Machine
    } else {
        FirstPlayerMode::Human
    };
    let mut state = TicTacToeGameState::new(Mark::X, first_player);

    println!("Squares are numbered 1-9:");
    println!("{}", render_reference_grid());
    println!();

    while state.status == GameStatus::InProgress {
        if state.machine_turn() {
            let machine_symbol = state.machine_mark.symbol();
            match state.machine_move() {
                Ok(slot) => {
                    println!("Machine ({}) takes square {}", machine_symbol, slot + 1)
                }
                Err(e) => {
                    eprintln!("{}", e);
                    break;
                }
            }
        } else {
            let slot = prompt_for_square(&state);
            if let Err(e) = state.place_mark(state.human_mark, slot) {
                eprintln!("{}", e);
                continue;
            }
        }

        println!("{}", render_board(&state.board));
        println!();
    }

    match state.winner_mark() {
        Some(mark) => println!("{} wins!", mark.symbol()),
        None => println!("It's a tie!"),
    }
}

/// Keeps asking until the input names an empty square.
fn prompt_for_square(state: &TicTacToeGameState) -> usize {
    loop {
        print!(
            "Your turn ({}). Enter a square (1-9): ",
            state.human_mark.symbol()
        );
        io::stdout().flush().expect("Failed to flush stdout");

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!();
                std::process::exit(0);
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                std::process::exit(1);
            }
        }

        match parse_square(&line) {
            Ok(slot) => {
                if state.board.available_moves().contains(&slot) {
                    return slot;
                }
                println!("Square {} is already taken. Try again.", slot + 1);
            }
            Err(message) => println!("{}. Try again.", message),
        }
    }
}
