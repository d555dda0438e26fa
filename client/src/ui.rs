use common::{GameSnapshot, GameStatus, Mark, ScoreBoard};

/// Empty cells show their index so the player knows what to type; the
/// winning line is bracketed after a win.
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| render_cell(snapshot, row * 3 + col))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn render_cell(snapshot: &GameSnapshot, index: usize) -> String {
    let mark = snapshot.cells[index];
    let highlighted = snapshot
        .winning_line
        .is_some_and(|line| line.contains(&index));

    if highlighted {
        format!("[{}]", mark.as_str())
    } else if mark == Mark::Empty {
        format!(" {} ", index)
    } else {
        format!(" {} ", mark.as_str())
    }
}

pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.status {
        GameStatus::InProgress => format!("Player {}'s turn", snapshot.current_mark.as_str()),
        GameStatus::XWon => "Player X wins!".to_string(),
        GameStatus::OWon => "Player O wins!".to_string(),
        GameStatus::Draw => "Game ended in a draw!".to_string(),
    }
}

pub fn score_line(scores: &ScoreBoard) -> String {
    format!(
        "Player X: {}  Player O: {}",
        scores.x_wins, scores.o_wins
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::GameMode;

    fn snapshot_with(
        cells: [Mark; 9],
        status: GameStatus,
        winning_line: Option<[usize; 3]>,
    ) -> GameSnapshot {
        GameSnapshot {
            cells,
            current_mark: Mark::X,
            status,
            mode: GameMode::HumanVsHuman,
            scores: ScoreBoard::default(),
            winning_line,
        }
    }

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let snapshot = snapshot_with([E; 9], GameStatus::InProgress, None);
        let rendered = render_board(&snapshot);
        assert_eq!(
            rendered,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_marks_replace_cell_numbers() {
        let snapshot = snapshot_with(
            [X, E, E, E, O, E, E, E, E],
            GameStatus::InProgress,
            None,
        );
        let rendered = render_board(&snapshot);
        assert!(rendered.starts_with(" X | 1 | 2 "));
        assert!(rendered.contains(" 3 | O | 5 "));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let snapshot = snapshot_with(
            [X, X, X, O, O, E, E, E, E],
            GameStatus::XWon,
            Some([0, 1, 2]),
        );
        let rendered = render_board(&snapshot);
        assert!(rendered.starts_with("[X]|[X]|[X]"));
        assert!(rendered.contains(" O | O | 5 "));
    }

    #[test]
    fn test_status_line_wording() {
        let in_progress = snapshot_with([E; 9], GameStatus::InProgress, None);
        assert_eq!(status_line(&in_progress), "Player X's turn");

        let won = snapshot_with([E; 9], GameStatus::OWon, None);
        assert_eq!(status_line(&won), "Player O wins!");

        let drawn = snapshot_with([E; 9], GameStatus::Draw, None);
        assert_eq!(status_line(&drawn), "Game ended in a draw!");
    }

    #[test]
    fn test_score_line() {
        let scores = ScoreBoard {
            x_wins: 3,
            o_wins: 1,
        };
        assert_eq!(score_line(&scores), "Player X: 3  Player O: 1");
    }
}
