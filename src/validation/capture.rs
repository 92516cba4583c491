//! Capture-specific checks

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::rules::RuleEngine;

use super::MoveValidator;

/// Runs only on capture moves: every listed capture square must hold a live
/// opponent piece and must lie on the move's path.
pub struct CaptureValidator;

impl MoveValidator for CaptureValidator {
    fn name(&self) -> &'static str {
        "capture"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn should_validate(&self, _board: &Board, mv: &Move) -> bool {
        mv.is_capture()
    }

    fn validate(
        &self,
        board: &Board,
        mv: &Move,
        player: Player,
        _rules: &dyn RuleEngine,
    ) -> Result<()> {
        for &capture in mv.captures() {
            match board.get(capture) {
                Some(victim) if victim.player != player => {}
                Some(_) => {
                    return Err(Error::InvalidMove {
                        reason: format!("cannot capture own piece at {capture}"),
                    });
                }
                None => {
                    return Err(Error::InvalidMove {
                        reason: format!("no piece to capture at {capture}"),
                    });
                }
            }
        }

        if mv.steps().is_empty() {
            // A bare single jump runs along one segment, so the capture must
            // sit strictly between the endpoints. Bare multi-jumps carry no
            // intermediate landings; their chain geometry is reconstructed by
            // the diagonal validator instead.
            if mv.capture_count() == 1 {
                let path = mv.from().between(mv.to());
                for &capture in mv.captures() {
                    if !path.contains(&capture) {
                        return Err(Error::InvalidMove {
                            reason: format!("capture at {capture} is not on the move path"),
                        });
                    }
                }
            }
        } else {
            let step_captures: Vec<_> =
                mv.steps().iter().filter_map(|s| s.capture).collect();
            if step_captures != mv.captures() {
                return Err(Error::InvalidMove {
                    reason: "capture list does not match the step path".to_string(),
                });
            }
        }
        Ok(())
    }
}
