//! Secondary move-validation pipeline
//!
//! The rule engine is authoritative for legality; this pipeline is an
//! independent second check that produces *descriptive* failures. Validators
//! run in ascending priority order and every applicable failure is collected,
//! so the caller sees all of a move's problems in one error instead of just
//! the first.

pub mod capture;
pub mod diagonal;
pub mod mandatory;
pub mod structural;

// Re-exports
pub use capture::CaptureValidator;
pub use diagonal::DiagonalValidator;
pub use mandatory::MandatoryCaptureValidator;
pub use structural::StructuralValidator;

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::rules::RuleEngine;

/// One independent check over a candidate move.
pub trait MoveValidator {
    /// Short name used when reporting failures
    fn name(&self) -> &'static str;

    /// Lower priorities run first
    fn priority(&self) -> u32;

    /// Whether this validator applies to the given move at all
    fn should_validate(&self, _board: &Board, _mv: &Move) -> bool {
        true
    }

    fn validate(
        &self,
        board: &Board,
        mv: &Move,
        player: Player,
        rules: &dyn RuleEngine,
    ) -> Result<()>;
}

/// Runs every applicable validator and aggregates all failures.
pub struct ValidationEngine {
    validators: Vec<Box<dyn MoveValidator>>,
}

impl ValidationEngine {
    /// An empty pipeline
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// The canonical pipeline: structural, diagonal, capture, mandatory
    pub fn standard() -> Self {
        Self::new()
            .with(Box::new(StructuralValidator))
            .with(Box::new(DiagonalValidator))
            .with(Box::new(CaptureValidator))
            .with(Box::new(MandatoryCaptureValidator))
    }

    /// Add a validator, keeping the pipeline sorted by priority
    pub fn with(mut self, validator: Box<dyn MoveValidator>) -> Self {
        self.validators.push(validator);
        self.validators.sort_by_key(|v| v.priority());
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run the pipeline. On failure the error message joins every failing
    /// validator's reason, in priority order.
    pub fn validate(
        &self,
        board: &Board,
        mv: &Move,
        player: Player,
        rules: &dyn RuleEngine,
    ) -> Result<()> {
        let mut reasons: Vec<String> = Vec::new();
        for validator in &self.validators {
            if !validator.should_validate(board, mv) {
                continue;
            }
            if let Err(err) = validator.validate(board, mv, player, rules) {
                let reason = match err {
                    Error::InvalidMove { reason } => reason,
                    other => other.to_string(),
                };
                reasons.push(format!("{}: {}", validator.name(), reason));
            }
        }
        if reasons.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidMove {
                reason: reasons.join("; "),
            })
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Position};
    use crate::rules::StandardRules;

    #[test]
    fn test_standard_pipeline_order() {
        let engine = ValidationEngine::standard();
        assert_eq!(engine.len(), 4);
        let priorities: Vec<u32> = engine.validators.iter().map(|v| v.priority()).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn test_accepts_legal_opening_move() {
        let rules = StandardRules::default();
        let board = rules.initial_board().unwrap();
        let engine = ValidationEngine::standard();
        let mv = Move::slide(Position::new(2, 1), Position::new(3, 2));
        assert!(engine.validate(&board, &mv, Player::Red, &rules).is_ok());
    }

    #[test]
    fn test_aggregates_multiple_failures() {
        // Non-diagonal move from an empty square: both the structural and
        // the diagonal validators must appear in the single error.
        let rules = StandardRules::default();
        let board = Board::new(8).unwrap();
        let engine = ValidationEngine::standard();
        let mv = Move::slide(Position::new(3, 3), Position::new(3, 5));

        let err = engine
            .validate(&board, &mv, Player::Red, &rules)
            .unwrap_err();
        match err {
            Error::InvalidMove { reason } => {
                assert!(reason.contains("structural"), "got: {reason}");
                assert!(reason.contains("diagonal"), "got: {reason}");
            }
            other => panic!("expected InvalidMove, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_pipeline_accepts_everything() {
        let rules = StandardRules::default();
        let board = Board::new(8).unwrap();
        let engine = ValidationEngine::new();
        assert!(engine.is_empty());
        let mv = Move::slide(Position::new(0, 0), Position::new(5, 1));
        assert!(engine.validate(&board, &mv, Player::Red, &rules).is_ok());
    }

    #[test]
    fn test_mandatory_failure_reported() {
        let rules = StandardRules::default();
        let board = Board::new(8)
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
            .unwrap();
        let engine = ValidationEngine::standard();
        let slide = Move::slide(Position::new(3, 3), Position::new(4, 2));

        let err = engine
            .validate(&board, &slide, Player::Red, &rules)
            .unwrap_err();
        match err {
            Error::InvalidMove { reason } => {
                assert!(reason.contains("mandatory"), "got: {reason}");
            }
            other => panic!("expected InvalidMove, got {other:?}"),
        }
    }
}
