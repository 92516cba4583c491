//! Rule-configurable draughts (checkers) engine
//!
//! A board-game engine for draughts variants built around three layers:
//! an immutable board model, pluggable rule engines that generate and
//! police moves, and a game orchestrator with undo/redo history and
//! observer notifications.
//!
//! # Architecture
//!
//! - [`board`]: immutable [`Board`], [`Position`], [`Piece`] and [`Player`]
//! - [`moves`]: the [`Move`] value with its capture list and step chain
//! - [`rules`]: the [`RuleEngine`] trait plus the [`StandardRules`],
//!   [`AmericanCheckersRules`] and [`CustomRules`] variants
//! - [`validation`]: composable move validators aggregated by
//!   [`ValidationEngine`]
//! - [`game`]: [`Game`] orchestration, command history and [`GameEvent`]s
//! - [`notation`]: `Display` and parsing for the textual move notation
//!
//! # Quick Start
//!
//! ```
//! use draughts::{Game, GameConfig, Move, Position, StandardRules};
//!
//! let rules = StandardRules::new(8).unwrap();
//! let mut game = Game::new(GameConfig::new(Box::new(rules))).unwrap();
//!
//! // Red opens with a forward slide.
//! let mv = Move::slide(Position::new(2, 1), Position::new(3, 2));
//! game.make_move(mv).unwrap();
//! assert_eq!(game.move_count(), 1);
//! ```
//!
//! # Rule variants
//!
//! [`StandardRules`] and [`AmericanCheckersRules`] play 8x8 American
//! checkers: men slide forward, kings move one step in any direction,
//! captures are mandatory and a player must take one of the sequences
//! that captures the most pieces. [`CustomRules`] layers options on top,
//! such as flying kings and backward slides for men, on any even board
//! size from 4 up.

pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod notation;
pub mod rules;
pub mod validation;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, PieceKind, Player, Position};
pub use error::{Error, Result};
pub use game::{Game, GameConfig, GameEvent, GameObserver, GameState, ObserverId};
pub use moves::{Move, MoveStep};
pub use notation::parse_move;
pub use rules::{AmericanCheckersRules, CustomRules, RuleEngine, RuleOptions, StandardRules};
pub use validation::{MoveValidator, ValidationEngine};
