//! Configurable variants built on top of the standard rules
//!
//! `CustomRules` is the extension point for rule variants: it holds a
//! [`StandardRules`] delegate and a set of [`RuleOptions`], and overrides
//! only the movement behavior a given option actually changes. Everything
//! else (mandatory maximal capture, promotion, setup, termination) flows
//! through the shared trait defaults, so variants stay additive and never
//! reimplement common geometry.

use crate::board::{Board, Piece, PieceKind, Position};
use crate::error::Result;
use crate::moves::{Move, MoveStep};

use super::capture::capture_sequences;
use super::{with_promotion_flags, RuleEngine, StandardRules, DIAGONALS};

/// Behavior switches for [`CustomRules`]. Defaults reproduce the standard
/// rules exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// Kings slide and capture across any number of empty squares
    pub flying_kings: bool,
    /// Regular pieces may also slide backward
    pub backward_slides: bool,
}

/// A rule variant assembled from a standard delegate plus options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomRules {
    delegate: StandardRules,
    options: RuleOptions,
}

impl CustomRules {
    pub fn new(size: u8, options: RuleOptions) -> Result<Self> {
        Ok(Self {
            delegate: StandardRules::new(size)?,
            options,
        })
    }

    /// International-draughts style kings on the given board size
    pub fn flying_kings(size: u8) -> Result<Self> {
        Self::new(
            size,
            RuleOptions {
                flying_kings: true,
                ..RuleOptions::default()
            },
        )
    }

    pub fn options(&self) -> RuleOptions {
        self.options
    }
}

impl RuleEngine for CustomRules {
    fn board_size(&self) -> u8 {
        self.delegate.board_size()
    }

    fn non_capture_moves(&self, piece: Piece, pos: Position, board: &Board) -> Vec<Move> {
        if piece.is_king() && self.options.flying_kings {
            let mut moves = Vec::new();
            for &(dr, dc) in &DIAGONALS {
                let mut dist = 1;
                while let Some(landing) = pos.offset(dr * dist, dc * dist, board.size()) {
                    if !board.is_empty_at(landing) {
                        break;
                    }
                    moves.push(
                        Move::slide(pos, landing)
                            .with_steps(vec![MoveStep::slide(pos, landing)]),
                    );
                    dist += 1;
                }
            }
            return with_promotion_flags(self, piece, moves);
        }
        if piece.kind == PieceKind::Regular && self.options.backward_slides {
            let mut moves = Vec::new();
            for &(dr, dc) in &DIAGONALS {
                let Some(landing) = pos.offset(dr, dc, board.size()) else {
                    continue;
                };
                if board.is_empty_at(landing) {
                    moves.push(
                        Move::slide(pos, landing)
                            .with_steps(vec![MoveStep::slide(pos, landing)]),
                    );
                }
            }
            return with_promotion_flags(self, piece, moves);
        }
        self.delegate.non_capture_moves(piece, pos, board)
    }

    fn capture_moves(&self, piece: Piece, pos: Position, board: &Board) -> Vec<Move> {
        if self.options.flying_kings {
            let moves = capture_sequences(board, piece, pos, true);
            return with_promotion_flags(self, piece, moves);
        }
        self.delegate.capture_moves(piece, pos, board)
    }
}
