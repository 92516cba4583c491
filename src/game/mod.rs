//! Game orchestration: turns, validation, history, observers
//!
//! [`Game`] owns the mutable state of one match: the current board, the
//! player to move, the undo/redo stacks and the observer list. Every state
//! change flows through a [`Command`], so history can always be walked
//! backward without recomputation and forward by replay.

pub mod command;
pub mod events;

// Re-exports
pub use command::{Command, CommandOutcome, MoveCommand, Snapshot};
pub use events::{GameEvent, GameObserver, ObserverId};

use log::debug;

use crate::board::{Board, Piece, Player, Position};
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::rules::RuleEngine;
use crate::validation::ValidationEngine;

/// Everything needed to start a game.
pub struct GameConfig {
    pub rules: Box<dyn RuleEngine>,
    /// Defaults to Red
    pub starting_player: Option<Player>,
}

impl GameConfig {
    pub fn new(rules: Box<dyn RuleEngine>) -> Self {
        Self {
            rules,
            starting_player: None,
        }
    }

    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = Some(player);
        self
    }
}

/// A read-only snapshot of the whole game, recomputed on demand.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub moves: Vec<Move>,
    pub captured_pieces: Vec<Piece>,
    pub winner: Option<Player>,
    pub is_over: bool,
}

/// One match: board, turn, history and observers.
///
/// `Game` is single-writer state; callers must serialize access. All reads
/// and mutations run synchronously to completion.
pub struct Game {
    rules: Box<dyn RuleEngine>,
    validation: ValidationEngine,
    board: Board,
    current_player: Player,
    starting_player: Player,
    captured: Vec<Piece>,
    move_count: u32,
    over: bool,
    winner: Option<Player>,
    done: Vec<Box<dyn Command>>,
    undone: Vec<Box<dyn Command>>,
    observers: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_observer_id: u64,
}

impl Game {
    /// Start a game from the rule engine's initial board.
    ///
    /// The starting position may already be terminal (a degenerate rule
    /// variant); the game is then born in the over state.
    pub fn new(config: GameConfig) -> Result<Self> {
        let starting_player = config.starting_player.unwrap_or(Player::Red);
        let board = config.rules.initial_board()?;
        let mut game = Self {
            rules: config.rules,
            validation: ValidationEngine::standard(),
            board,
            current_player: starting_player,
            starting_player,
            captured: Vec::new(),
            move_count: 0,
            over: false,
            winner: None,
            done: Vec::new(),
            undone: Vec::new(),
            observers: Vec::new(),
            next_observer_id: 0,
        };
        game.refresh_termination();
        Ok(game)
    }

    // ---- queries ----

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// The moves played so far, oldest first
    pub fn history(&self) -> Vec<Move> {
        self.done.iter().map(|cmd| cmd.played_move().clone()).collect()
    }

    /// Legal moves for the piece at `pos` (empty for an empty square)
    pub fn possible_moves(&self, pos: Position) -> Result<Vec<Move>> {
        if !pos.in_bounds(self.board.size()) {
            return Err(Error::InvalidPosition {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        Ok(self.rules.piece_moves(&self.board, pos))
    }

    /// Every legal move for the player to move
    pub fn all_moves(&self) -> Vec<Move> {
        self.rules.all_moves(&self.board, self.current_player)
    }

    /// The mandatory (maximal) captures for the player to move
    pub fn mandatory_moves(&self) -> Vec<Move> {
        self.rules.mandatory_moves(&self.board, self.current_player)
    }

    /// A full read-only snapshot
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.clone(),
            current_player: self.current_player,
            moves: self.history(),
            captured_pieces: self.captured.clone(),
            winner: self.winner,
            is_over: self.over,
        }
    }

    // ---- observers ----

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    fn emit(&mut self, event: GameEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }

    // ---- mutations ----

    /// Validate and execute one move.
    ///
    /// Failure is atomic: on any validation error the game is left exactly
    /// as it was, an [`GameEvent::InvalidMove`] fires, and the error is
    /// returned so the caller can retry with a corrected move.
    pub fn make_move(&mut self, mv: Move) -> Result<()> {
        if self.over {
            return Err(Error::GameOver);
        }
        let player = self.current_player;

        if let Err(err) = self.check_move(&mv, player) {
            let reason = match &err {
                Error::InvalidMove { reason } => reason.clone(),
                other => other.to_string(),
            };
            debug!("{player} submitted invalid move {mv}: {reason}");
            self.emit(GameEvent::InvalidMove {
                mv: mv.clone(),
                reason,
            });
            return Err(err);
        }

        let command = MoveCommand::new(mv, self.snapshot());
        let outcome = command.execute(self.rules.as_ref())?;
        debug!("{player} plays {}", command.played_move());
        self.apply(Box::new(command), outcome);
        Ok(())
    }

    /// Revert the most recent move by restoring its snapshot.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.done.pop() else {
            return false;
        };
        let snapshot = command.undo_state().clone();
        debug!("undo {}", command.played_move());
        self.board = snapshot.board;
        self.current_player = snapshot.player;
        self.captured = snapshot.captured;
        self.move_count = snapshot.move_count;
        self.over = snapshot.over;
        self.winner = snapshot.winner;
        self.undone.push(command);

        let board = self.board.clone();
        self.emit(GameEvent::BoardUpdate { board });
        self.emit(GameEvent::TurnChange {
            player: self.current_player,
        });
        true
    }

    /// Replay the most recently undone move, recomputing its result.
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.undone.pop() else {
            return false;
        };
        match command.execute(self.rules.as_ref()) {
            Ok(outcome) => {
                debug!("redo {}", command.played_move());
                self.apply(command, outcome);
                true
            }
            Err(_) => {
                self.undone.push(command);
                false
            }
        }
    }

    /// Drop all history and restart from the rule engine's initial board
    pub fn reset(&mut self) -> Result<()> {
        self.board = self.rules.initial_board()?;
        self.current_player = self.starting_player;
        self.captured.clear();
        self.move_count = 0;
        self.done.clear();
        self.undone.clear();
        self.refresh_termination();
        let board = self.board.clone();
        self.emit(GameEvent::BoardUpdate { board });
        Ok(())
    }

    // ---- internals ----

    fn check_move(&self, mv: &Move, player: Player) -> Result<()> {
        if !self.rules.validate_move(&self.board, mv, player) {
            return Err(Error::InvalidMove {
                reason: format!("not a legal move for {player}"),
            });
        }
        self.validation
            .validate(&self.board, mv, player, self.rules.as_ref())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            player: self.current_player,
            captured: self.captured.clone(),
            move_count: self.move_count,
            over: self.over,
            winner: self.winner,
        }
    }

    fn refresh_termination(&mut self) {
        self.over = self.rules.is_game_over(&self.board, self.current_player);
        self.winner = if self.over {
            self.rules.winner(&self.board, self.current_player)
        } else {
            None
        };
    }

    /// Commit an executed command and fire events in the canonical order:
    /// move, captures, promotion, board update, then turn change or game end.
    fn apply(&mut self, command: Box<dyn Command>, outcome: CommandOutcome) {
        let mv = command.played_move().clone();
        self.board = outcome.board;
        self.captured.extend(outcome.captured_pieces.iter().copied());
        self.move_count += 1;
        self.done.push(command);
        self.undone.clear();
        self.current_player = self.current_player.opponent();
        self.refresh_termination();

        let board = self.board.clone();
        self.emit(GameEvent::Move {
            mv,
            board: board.clone(),
        });
        if !outcome.captured_positions.is_empty() {
            self.emit(GameEvent::PiecesCaptured {
                positions: outcome.captured_positions,
                pieces: outcome.captured_pieces,
            });
        }
        if let Some((position, piece)) = outcome.promoted {
            self.emit(GameEvent::PiecePromoted { position, piece });
        }
        self.emit(GameEvent::BoardUpdate { board });
        if self.over {
            self.emit(GameEvent::GameEnd {
                winner: self.winner,
            });
        } else {
            self.emit(GameEvent::TurnChange {
                player: self.current_player,
            });
        }
    }
}
