//! Immutable board with cached piece counts

use super::{Piece, Player, Position};
use crate::error::{Error, Result};

/// An N×N grid of optional pieces.
///
/// `Board` only records occupancy; it has no notion of move legality. The
/// dark-square invariant of standard variants is checked by
/// [`RuleEngine::is_valid_board`](crate::rules::RuleEngine::is_valid_board),
/// never enforced here, so rule variants and tests are free to place pieces
/// anywhere.
///
/// All mutating operations (`set_piece`, `move_piece`, `remove_piece`) return
/// a new `Board` and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Piece>>,
    red_count: u16,
    black_count: u16,
}

impl Board {
    /// Create an empty board. Size must be even and at least 4.
    pub fn new(size: u8) -> Result<Self> {
        if size < 4 || size % 2 != 0 {
            return Err(Error::InvalidBoardState(format!(
                "board size must be even and at least 4, got {size}"
            )));
        }
        Ok(Self {
            size,
            cells: vec![None; size as usize * size as usize],
            red_count: 0,
            black_count: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.size as usize + pos.col as usize
    }

    fn checked_index(&self, pos: Position) -> Result<usize> {
        if pos.in_bounds(self.size) {
            Ok(self.index(pos))
        } else {
            Err(Error::InvalidPosition {
                row: pos.row as i32,
                col: pos.col as i32,
            })
        }
    }

    /// Occupant of `pos`, failing on an out-of-range coordinate
    pub fn piece_at(&self, pos: Position) -> Result<Option<Piece>> {
        Ok(self.cells[self.checked_index(pos)?])
    }

    /// Panic-free lookup: `None` for both empty and out-of-range cells.
    ///
    /// Move generation pre-validates coordinates with [`Position::offset`],
    /// so in that context the two cases never need to be distinguished.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.in_bounds(self.size) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    /// Check if a cell is empty (out-of-range cells count as occupied)
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.in_bounds(self.size) && self.cells[self.index(pos)].is_none()
    }

    /// Place (or replace) a piece, returning the new board
    pub fn set_piece(&self, pos: Position, piece: Piece) -> Result<Board> {
        let idx = self.checked_index(pos)?;
        let mut next = self.clone();
        if let Some(old) = next.cells[idx] {
            next.dec_count(old.player);
        }
        next.cells[idx] = Some(piece);
        next.inc_count(piece.player);
        Ok(next)
    }

    /// Move the occupant of `from` to the empty cell `to`
    pub fn move_piece(&self, from: Position, to: Position) -> Result<Board> {
        let from_idx = self.checked_index(from)?;
        let to_idx = self.checked_index(to)?;
        let piece = self.cells[from_idx].ok_or_else(|| {
            Error::InvalidBoardState(format!("no piece at {from} to move"))
        })?;
        if self.cells[to_idx].is_some() {
            return Err(Error::InvalidBoardState(format!(
                "destination {to} is occupied"
            )));
        }
        let mut next = self.clone();
        next.cells[from_idx] = None;
        next.cells[to_idx] = Some(piece);
        Ok(next)
    }

    /// Remove the occupant of `pos`
    pub fn remove_piece(&self, pos: Position) -> Result<Board> {
        let idx = self.checked_index(pos)?;
        let piece = self.cells[idx].ok_or_else(|| {
            Error::InvalidBoardState(format!("no piece at {pos} to remove"))
        })?;
        let mut next = self.clone();
        next.cells[idx] = None;
        next.dec_count(piece.player);
        Ok(next)
    }

    /// Remove the occupants of every listed position
    pub fn remove_pieces(&self, positions: &[Position]) -> Result<Board> {
        let mut board = self.clone();
        for &pos in positions {
            board = board.remove_piece(pos)?;
        }
        Ok(board)
    }

    /// Cached piece count for a player
    #[inline]
    pub fn piece_count(&self, player: Player) -> u16 {
        match player {
            Player::Red => self.red_count,
            Player::Black => self.black_count,
        }
    }

    /// All of a player's pieces with their positions, in row-major order
    pub fn player_pieces(&self, player: Player) -> Vec<(Position, Piece)> {
        self.iter_pieces()
            .filter(|(_, piece)| piece.player == player)
            .collect()
    }

    pub fn occupied_positions(&self) -> Vec<Position> {
        self.iter_pieces().map(|(pos, _)| pos).collect()
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.cells[self.index(p)].is_none()).collect()
    }

    /// The dark squares, the only playable cells in standard variants
    pub fn playable_positions(&self) -> Vec<Position> {
        self.positions().filter(|p| p.is_dark()).collect()
    }

    fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    fn iter_pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.positions()
            .filter_map(|pos| self.cells[self.index(pos)].map(|piece| (pos, piece)))
    }

    #[inline]
    fn inc_count(&mut self, player: Player) {
        match player {
            Player::Red => self.red_count += 1,
            Player::Black => self.black_count += 1,
        }
    }

    #[inline]
    fn dec_count(&mut self, player: Player) {
        match player {
            Player::Red => self.red_count -= 1,
            Player::Black => self.black_count -= 1,
        }
    }
}
