//! Rule engines for checkers/draughts variants
//!
//! A [`RuleEngine`] is a stateless strategy parameterized by board size:
//! given a board it answers legality, enumerates moves, decides promotion
//! and termination. The trait carries default implementations for everything
//! that is pure shared geometry (mandatory-move filtering, turn enumeration,
//! promotion ranks, initial setup, termination); a variant implements only
//! the movement primitives that actually differ.

pub mod american;
pub mod capture;
pub mod custom;
pub mod standard;

// Re-exports
pub use american::AmericanCheckersRules;
pub use custom::{CustomRules, RuleOptions};
pub use standard::StandardRules;

use crate::board::{Board, Piece, PieceKind, Player, Position};
use crate::error::Result;
use crate::moves::Move;

/// The four diagonal directions as (row, col) deltas
pub const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Per-variant legality, move generation, promotion, setup and termination.
pub trait RuleEngine {
    /// Board size this engine was configured for
    fn board_size(&self) -> u8;

    /// Non-capture moves for one piece
    fn non_capture_moves(&self, piece: Piece, pos: Position, board: &Board) -> Vec<Move>;

    /// Capture sequences for one piece, every chain prefix included
    fn capture_moves(&self, piece: Piece, pos: Position, board: &Board) -> Vec<Move>;

    /// Check a single candidate move by re-deriving the mandatory-move
    /// decision: when captures are available the candidate must equal one of
    /// the mandatory moves, otherwise it must appear among the piece's
    /// generated moves.
    fn validate_move(&self, board: &Board, mv: &Move, player: Player) -> bool {
        let Some(piece) = board.get(mv.from()) else {
            return false;
        };
        if piece.player != player {
            return false;
        }
        let mandatory = self.mandatory_moves(board, player);
        if !mandatory.is_empty() {
            return mandatory.contains(mv);
        }
        self.non_capture_moves(piece, mv.from(), board).contains(mv)
            || self.capture_moves(piece, mv.from(), board).contains(mv)
    }

    /// All capture sequences for `player`, filtered to the globally maximum
    /// capture count. Empty means no capture is available.
    fn mandatory_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();
        for (pos, piece) in board.player_pieces(player) {
            moves.extend(self.capture_moves(piece, pos, board));
        }
        let max = moves.iter().map(Move::capture_count).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        moves.retain(|mv| mv.capture_count() == max);
        moves
    }

    /// Every legal move for `player`: the mandatory set when captures exist,
    /// otherwise all non-capture moves.
    fn all_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        let mandatory = self.mandatory_moves(board, player);
        if !mandatory.is_empty() {
            return mandatory;
        }
        let mut moves = Vec::new();
        for (pos, piece) in board.player_pieces(player) {
            moves.extend(self.non_capture_moves(piece, pos, board));
        }
        moves
    }

    /// Legal moves for the piece at `pos`, honoring the mandatory-capture
    /// rule across the whole board (a piece with no part in the maximal
    /// capture gets an empty list).
    fn piece_moves(&self, board: &Board, pos: Position) -> Vec<Move> {
        let Some(piece) = board.get(pos) else {
            return Vec::new();
        };
        let mandatory = self.mandatory_moves(board, piece.player);
        if !mandatory.is_empty() {
            return mandatory.into_iter().filter(|mv| mv.from() == pos).collect();
        }
        self.non_capture_moves(piece, pos, board)
    }

    /// True iff the piece is not yet a king and lands on its far rank
    fn should_promote(&self, piece: Piece, landing: Position) -> bool {
        piece.kind == PieceKind::Regular
            && landing.row == piece.player.far_rank(self.board_size())
    }

    /// King the piece when promotion is due, otherwise return it unchanged
    fn promote(&self, piece: Piece) -> Piece {
        piece.promoted()
    }

    /// The game ends when a player has no pieces or the mover has no moves
    fn is_game_over(&self, board: &Board, to_move: Player) -> bool {
        board.piece_count(Player::Red) == 0
            || board.piece_count(Player::Black) == 0
            || self.all_moves(board, to_move).is_empty()
    }

    /// Resolve the winner: elimination first, then "mover with no moves
    /// loses". If *both* players are stuck (reachable only through unusual
    /// variants) the side with more pieces wins; equal counts are a draw.
    fn winner(&self, board: &Board, to_move: Player) -> Option<Player> {
        if board.piece_count(Player::Red) == 0 {
            return Some(Player::Black);
        }
        if board.piece_count(Player::Black) == 0 {
            return Some(Player::Red);
        }
        if !self.all_moves(board, to_move).is_empty() {
            return None;
        }
        let opponent = to_move.opponent();
        if !self.all_moves(board, opponent).is_empty() {
            return Some(opponent);
        }
        // Mutual stalemate fallback: piece-count comparison
        use std::cmp::Ordering;
        match board.piece_count(Player::Red).cmp(&board.piece_count(Player::Black)) {
            Ordering::Greater => Some(Player::Red),
            Ordering::Less => Some(Player::Black),
            Ordering::Equal => None,
        }
    }

    /// Standard starting position: each player's men fill the dark squares
    /// of the `size / 2 - 1` rows nearest their own edge.
    fn initial_board(&self) -> Result<Board> {
        let size = self.board_size();
        let rows = size / 2 - 1;
        let mut board = Board::new(size)?;
        let mut next_id = 0u32;
        for row in 0..rows {
            for col in 0..size {
                let pos = Position::new(row, col);
                if pos.is_dark() {
                    board = board
                        .set_piece(pos, Piece::new(next_id, Player::Red, PieceKind::Regular))?;
                    next_id += 1;
                }
            }
        }
        for row in (size - rows)..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                if pos.is_dark() {
                    board = board
                        .set_piece(pos, Piece::new(next_id, Player::Black, PieceKind::Regular))?;
                    next_id += 1;
                }
            }
        }
        Ok(board)
    }

    /// A board is valid for this engine when it has the configured size and
    /// every piece sits on a dark square.
    fn is_valid_board(&self, board: &Board) -> bool {
        board.size() == self.board_size()
            && board.occupied_positions().iter().all(|pos| pos.is_dark())
    }
}

/// Stamp the promotion flag onto generated moves based on their final
/// landing square. Used by every variant after move generation.
pub(crate) fn with_promotion_flags<R: RuleEngine + ?Sized>(
    rules: &R,
    piece: Piece,
    moves: Vec<Move>,
) -> Vec<Move> {
    moves
        .into_iter()
        .map(|mv| {
            let promote = rules.should_promote(piece, mv.to());
            mv.with_promotion(promote)
        })
        .collect()
}
