//! Diagonal-geometry checks

use crate::board::{Board, PieceKind, Player};
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::rules::RuleEngine;

use super::MoveValidator;

/// Checks that a move runs along diagonals with plausible distances.
///
/// When a step decomposition is present each step is checked individually
/// (a zig-zag multi-jump's endpoints need not share a diagonal). Distances
/// are enforced strictly for regular pieces - slide 1, jump 2 - while kings
/// are allowed longer segments so flying-king variants pass through; the
/// rule engine remains the authority on whether flying is actually enabled.
pub struct DiagonalValidator;

impl DiagonalValidator {
    /// Check an endpoint-only multi-jump by reconstructing its chain.
    ///
    /// A bare multi-capture move carries no intermediate landings, but for a
    /// regular piece each landing is the mirror of the current square over
    /// the victim, so the whole chain follows from the ordered capture list.
    /// For kings the landing after each victim is not determined by the
    /// capture list (flying variants allow several), so their geometry is
    /// left to the rule engine's own legality check.
    fn check_implied_chain(board: &Board, mv: &Move, is_king: bool) -> Result<()> {
        if is_king {
            return Ok(());
        }
        let size = board.size();
        let mut cur = mv.from();
        for &capture in mv.captures() {
            if cur.diagonal_distance(capture) != Some(1) {
                return Err(Error::InvalidMove {
                    reason: format!("capture at {capture} is not adjacent to {cur}"),
                });
            }
            let landing = cur
                .direction_to(capture)
                .and_then(|(dr, dc)| capture.offset(dr, dc, size));
            let Some(landing) = landing else {
                return Err(Error::InvalidMove {
                    reason: format!("jump over {capture} lands off the board"),
                });
            };
            cur = landing;
        }
        if cur != mv.to() {
            return Err(Error::InvalidMove {
                reason: format!(
                    "captures do not lead from {} to {}",
                    mv.from(),
                    mv.to()
                ),
            });
        }
        Ok(())
    }

    fn check_segment(
        from: crate::board::Position,
        to: crate::board::Position,
        is_king: bool,
        is_jump: bool,
    ) -> Result<()> {
        let Some(dist) = from.diagonal_distance(to) else {
            return Err(Error::InvalidMove {
                reason: format!("{from} -> {to} is not a diagonal"),
            });
        };
        let ok = if is_king {
            // Flying variants allow any distance; a jump needs room for the
            // victim, so at least 2.
            !is_jump || dist >= 2
        } else if is_jump {
            dist == 2
        } else {
            dist == 1
        };
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidMove {
                reason: format!(
                    "{from} -> {to} covers {dist} squares, not a legal {}",
                    if is_jump { "jump" } else { "slide" }
                ),
            })
        }
    }
}

impl MoveValidator for DiagonalValidator {
    fn name(&self) -> &'static str {
        "diagonal"
    }

    fn priority(&self) -> u32 {
        20
    }

    fn validate(
        &self,
        board: &Board,
        mv: &Move,
        _player: Player,
        _rules: &dyn RuleEngine,
    ) -> Result<()> {
        let is_king = board
            .get(mv.from())
            .map(|p| p.kind == PieceKind::King)
            .unwrap_or(false);

        if !mv.steps().is_empty() {
            for step in mv.steps() {
                Self::check_segment(step.from, step.to, is_king, step.capture.is_some())?;
            }
            return Ok(());
        }
        if mv.capture_count() >= 2 {
            return Self::check_implied_chain(board, mv, is_king);
        }
        Self::check_segment(mv.from(), mv.to(), is_king, mv.is_capture())
    }
}
