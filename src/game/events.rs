//! Observer events
//!
//! Observers receive a closed set of event variants through a single
//! callback and pattern-match on the ones they care about; there are no
//! optional per-event methods to probe for.

use crate::board::{Board, Piece, Player, Position};
use crate::moves::Move;

/// Everything a [`Game`](super::Game) reports to its observers.
///
/// Dispatch is synchronous: events fire inline during `make_move`, `undo`
/// and `redo`, after the game's own state has already been updated.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A move was executed
    Move { mv: Move, board: Board },
    /// The turn passed to `player`
    TurnChange { player: Player },
    /// A submitted move failed validation; game state is unchanged
    InvalidMove { mv: Move, reason: String },
    /// The game ended; `None` means a draw
    GameEnd { winner: Option<Player> },
    /// A piece reached its far rank and was kinged
    PiecePromoted { position: Position, piece: Piece },
    /// The board changed (move, undo, redo or reset)
    BoardUpdate { board: Board },
    /// Pieces were removed by a capture move
    PiecesCaptured {
        positions: Vec<Position>,
        pieces: Vec<Piece>,
    },
}

/// A subscriber to game events.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Handle returned by [`Game::add_observer`](super::Game::add_observer),
/// used to remove the observer later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);
