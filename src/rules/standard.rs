//! Classic rules: forward-only men, one-step kings, mandatory maximal capture

use smallvec::SmallVec;

use crate::board::{Board, Piece, Position};
use crate::error::Result;
use crate::moves::{Move, MoveStep};

use super::capture::capture_sequences;
use super::{with_promotion_flags, RuleEngine, DIAGONALS};

/// The standard rule set at any even board size of at least 4.
///
/// Regular pieces slide one square forward-diagonally and capture in any
/// diagonal direction; kings slide and capture one step in any diagonal
/// direction; promotion happens on the far rank; captures are mandatory and
/// maximal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardRules {
    size: u8,
}

impl StandardRules {
    /// Create a rule set for the given board size (even, at least 4)
    pub fn new(size: u8) -> Result<Self> {
        // Reuse the board's size validation so the two can never disagree.
        Board::new(size)?;
        Ok(Self { size })
    }

    /// Slide directions for one piece: forward-only for men, all four for kings
    pub(crate) fn slide_directions(piece: Piece) -> SmallVec<[(i32, i32); 4]> {
        if piece.is_king() {
            SmallVec::from_slice(&DIAGONALS)
        } else {
            let forward = piece.player.forward();
            SmallVec::from_slice(&[(forward, 1), (forward, -1)])
        }
    }
}

impl Default for StandardRules {
    /// The common 8×8 game
    fn default() -> Self {
        Self { size: 8 }
    }
}

impl RuleEngine for StandardRules {
    fn board_size(&self) -> u8 {
        self.size
    }

    fn non_capture_moves(&self, piece: Piece, pos: Position, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        for (dr, dc) in Self::slide_directions(piece) {
            let Some(landing) = pos.offset(dr, dc, board.size()) else {
                continue;
            };
            if board.is_empty_at(landing) {
                moves.push(
                    Move::slide(pos, landing).with_steps(vec![MoveStep::slide(pos, landing)]),
                );
            }
        }
        with_promotion_flags(self, piece, moves)
    }

    fn capture_moves(&self, piece: Piece, pos: Position, board: &Board) -> Vec<Move> {
        let moves = capture_sequences(board, piece, pos, false);
        with_promotion_flags(self, piece, moves)
    }
}
