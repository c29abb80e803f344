//! Detection of squares that complete a line.

use super::super::{Board, Mark, Position, Square};
use super::LINES;
use tracing::{instrument, trace};

/// Returns the empty square of a line holding two `mark`s and one gap.
fn completing_square(board: &Board, mark: Mark, line: &[Position; 3]) -> Option<Position> {
    let mut owned = 0;
    let mut gap = None;

    for &pos in line {
        match board.get(pos) {
            Square::Empty if gap.is_none() => gap = Some(pos),
            Square::Empty => return None,
            Square::Occupied(m) if m == mark => owned += 1,
            Square::Occupied(_) => return None,
        }
    }

    if owned == 2 { gap } else { None }
}

/// Finds a square that would complete a line for `mark`.
///
/// A line qualifies when exactly two of its squares hold `mark` and the
/// third is empty. Called with the mover's own marker this is a winning
/// opportunity; called with the opponent's it is a threat to block.
///
/// When several lines qualify, the last one in scan order (rows, then
/// columns, then diagonals) decides.
#[instrument(skip(board))]
pub fn find_threat_or_opportunity(board: &Board, mark: Mark) -> Option<Position> {
    let found = LINES
        .iter()
        .rev()
        .find_map(|line| completing_square(board, mark, line));
    trace!(?found, "Line scan complete");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(xs: &[u8], os: &[u8]) -> Board {
        let mut board = Board::new();
        for &n in xs {
            board.place(Position::from_number(n).unwrap(), Mark::X).unwrap();
        }
        for &n in os {
            board.place(Position::from_number(n).unwrap(), Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn test_no_candidate_on_empty_board() {
        assert_eq!(find_threat_or_opportunity(&Board::new(), Mark::X), None);
    }

    #[test]
    fn test_finds_gap_in_row() {
        let board = board_with(&[1, 2], &[5]);
        assert_eq!(
            find_threat_or_opportunity(&board, Mark::X),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_blocked_line_is_not_a_candidate() {
        let board = board_with(&[1, 2], &[3]);
        assert_eq!(find_threat_or_opportunity(&board, Mark::X), None);
    }

    #[test]
    fn test_single_marker_is_not_a_candidate() {
        let board = board_with(&[1], &[9]);
        assert_eq!(find_threat_or_opportunity(&board, Mark::X), None);
        assert_eq!(find_threat_or_opportunity(&board, Mark::O), None);
    }

    #[test]
    fn test_last_scanned_line_decides_between_candidates() {
        // O can finish row 4-5-6 at 6, row 7-8-9 at 9, or diagonal 3-5-7 at 3.
        let board = board_with(&[1, 2], &[4, 5, 7, 8]);
        assert_eq!(
            find_threat_or_opportunity(&board, Mark::O),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_candidate_square_is_always_empty() {
        let board = board_with(&[1, 5, 6], &[2, 9]);
        let pos = find_threat_or_opportunity(&board, Mark::X).unwrap();
        assert!(board.is_empty(pos));
    }
}
