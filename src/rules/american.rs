//! American checkers: the standard rules fixed at 8×8

use crate::board::{Board, Piece, Position};
use crate::moves::Move;

use super::{RuleEngine, StandardRules};

/// The classic American game. A thin delegate around [`StandardRules`] at
/// board size 8; it exists so callers can name the variant explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmericanCheckersRules {
    inner: StandardRules,
}

impl AmericanCheckersRules {
    pub fn new() -> Self {
        Self {
            inner: StandardRules::default(),
        }
    }
}

impl RuleEngine for AmericanCheckersRules {
    fn board_size(&self) -> u8 {
        self.inner.board_size()
    }

    fn non_capture_moves(&self, piece: Piece, pos: Position, board: &Board) -> Vec<Move> {
        self.inner.non_capture_moves(piece, pos, board)
    }

    fn capture_moves(&self, piece: Piece, pos: Position, board: &Board) -> Vec<Move> {
        self.inner.capture_moves(piece, pos, board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_american_is_eight_by_eight() {
        let rules = AmericanCheckersRules::new();
        assert_eq!(rules.board_size(), 8);

        let board = rules.initial_board().unwrap();
        assert_eq!(board.size(), 8);
        assert_eq!(board.piece_count(Player::Red), 12);
        assert_eq!(board.piece_count(Player::Black), 12);
    }

    #[test]
    fn test_matches_standard_rules_move_generation() {
        let american = AmericanCheckersRules::new();
        let standard = StandardRules::default();
        let board = american.initial_board().unwrap();

        assert_eq!(
            american.all_moves(&board, Player::Red),
            standard.all_moves(&board, Player::Red)
        );
    }
}
