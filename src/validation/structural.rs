//! Structural checks: bounds, occupancy, ownership

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::rules::RuleEngine;

use super::MoveValidator;

/// The first validator in the canonical pipeline: positions in range, source
/// occupied by the mover's piece, destination distinct and empty.
pub struct StructuralValidator;

impl MoveValidator for StructuralValidator {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn priority(&self) -> u32 {
        10
    }

    fn validate(
        &self,
        board: &Board,
        mv: &Move,
        player: Player,
        _rules: &dyn RuleEngine,
    ) -> Result<()> {
        let size = board.size();
        if !mv.from().in_bounds(size) {
            return Err(Error::InvalidMove {
                reason: format!("source {} is off the board", mv.from()),
            });
        }
        if !mv.to().in_bounds(size) {
            return Err(Error::InvalidMove {
                reason: format!("destination {} is off the board", mv.to()),
            });
        }
        if mv.from() == mv.to() {
            return Err(Error::InvalidMove {
                reason: "source and destination are the same square".to_string(),
            });
        }
        let Some(piece) = board.get(mv.from()) else {
            return Err(Error::InvalidMove {
                reason: format!("no piece at {}", mv.from()),
            });
        };
        if piece.player != player {
            return Err(Error::InvalidMove {
                reason: format!("piece at {} belongs to {}", mv.from(), piece.player),
            });
        }
        if board.get(mv.to()).is_some() {
            return Err(Error::InvalidMove {
                reason: format!("destination {} is occupied", mv.to()),
            });
        }
        Ok(())
    }
}
