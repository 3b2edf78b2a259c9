use common::games::tictactoe::Board;

/// Three rows of three cells separated by `|`.
pub fn render_board(board: &Board) -> String {
    let cells = board.cells();
    (0..3)
        .map(|row| {
            let start = row * 3;
            format!(
                "| {} | {} | {} |",
                cells[start].symbol(),
                cells[start + 1].symbol(),
                cells[start + 2].symbol()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The numbered guide shown once at startup, mapping squares 1-9 onto the
/// grid.
pub fn render_reference_grid() -> String {
    (0..3)
        .map(|row| {
            let start = row * 3 + 1;
            format!("| {} | {} | {} |", start, start + 1, start + 2)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Mark;

    #[test]
    fn test_empty_board_renders_blank_cells() {
        let board = Board::new();

        assert_eq!(
            render_board(&board),
            "|   |   |   |\n|   |   |   |\n|   |   |   |"
        );
    }

    #[test]
    fn test_marks_appear_in_their_cells() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(4, Mark::O);
        board.place(8, Mark::X);

        assert_eq!(
            render_board(&board),
            "| X |   |   |\n|   | O |   |\n|   |   | X |"
        );
    }

    #[test]
    fn test_reference_grid_counts_one_through_nine() {
        assert_eq!(
            render_reference_grid(),
            "| 1 | 2 | 3 |\n| 4 | 5 | 6 |\n| 7 | 8 | 9 |"
        );
    }
}
