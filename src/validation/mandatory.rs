//! Mandatory-capture enforcement

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::rules::RuleEngine;

use super::MoveValidator;

/// The last validator in the canonical pipeline: when the rule engine
/// reports any mandatory move, the candidate must be one of them.
pub struct MandatoryCaptureValidator;

impl MoveValidator for MandatoryCaptureValidator {
    fn name(&self) -> &'static str {
        "mandatory"
    }

    fn priority(&self) -> u32 {
        40
    }

    fn validate(
        &self,
        board: &Board,
        mv: &Move,
        player: Player,
        rules: &dyn RuleEngine,
    ) -> Result<()> {
        let mandatory = rules.mandatory_moves(board, player);
        if mandatory.is_empty() || mandatory.contains(mv) {
            Ok(())
        } else {
            Err(Error::RuleViolation {
                rule: format!(
                    "captures are mandatory ({} maximal sequence(s) available)",
                    mandatory.len()
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Position};
    use crate::rules::StandardRules;

    fn setup() -> Board {
        Board::new(8)
            .unwrap()
            .set_piece(
                Position::new(3, 3),
                Piece::new(1, Player::Red, PieceKind::Regular),
            )
            .unwrap()
            .set_piece(
                Position::new(4, 4),
                Piece::new(2, Player::Black, PieceKind::Regular),
            )
            .unwrap()
    }

    #[test]
    fn test_accepts_the_mandatory_capture() {
        let board = setup();
        let jump = Move::jump(
            Position::new(3, 3),
            Position::new(5, 5),
            vec![Position::new(4, 4)],
        );
        let result = MandatoryCaptureValidator.validate(
            &board,
            &jump,
            Player::Red,
            &StandardRules::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_slide_while_capture_exists() {
        let board = setup();
        let slide = Move::slide(Position::new(3, 3), Position::new(4, 2));
        let err = MandatoryCaptureValidator
            .validate(&board, &slide, Player::Red, &StandardRules::default())
            .unwrap_err();
        assert!(matches!(err, Error::RuleViolation { .. }));
    }

    #[test]
    fn test_no_captures_means_no_constraint() {
        let board = Board::new(8)
            .unwrap()
            .set_piece(
                Position::new(2, 1),
                Piece::new(1, Player::Red, PieceKind::Regular),
            )
            .unwrap();
        let slide = Move::slide(Position::new(2, 1), Position::new(3, 2));
        let result = MandatoryCaptureValidator.validate(
            &board,
            &slide,
            Player::Red,
            &StandardRules::default(),
        );
        assert!(result.is_ok());
    }
}
