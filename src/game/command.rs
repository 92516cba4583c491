//! Command-based move execution with snapshot undo
//!
//! Each executed move is wrapped in a command that snapshots the full
//! pre-move state. Undo is a plain snapshot restore; redo re-executes the
//! stored move against the rules so the result is always freshly recomputed.
//! The full-board snapshot trades memory for simplicity; boards are small.

use crate::board::{Board, Piece, Player, Position};
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::rules::RuleEngine;

/// Complete pre-move state captured by a command.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) player: Player,
    pub(crate) captured: Vec<Piece>,
    pub(crate) move_count: u32,
    pub(crate) over: bool,
    pub(crate) winner: Option<Player>,
}

/// What executing a command produced.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub board: Board,
    pub captured_positions: Vec<Position>,
    pub captured_pieces: Vec<Piece>,
    /// Set when the moving piece was kinged on its landing square
    pub promoted: Option<(Position, Piece)>,
}

/// A reversible unit of game history.
pub trait Command {
    /// Recompute the post-state from the stored pre-state
    fn execute(&self, rules: &dyn RuleEngine) -> Result<CommandOutcome>;

    /// The snapshot to restore on undo
    fn undo_state(&self) -> &Snapshot;

    /// The move this command plays
    fn played_move(&self) -> &Move;
}

/// The one command kind the core needs: play a validated move.
#[derive(Debug, Clone)]
pub struct MoveCommand {
    mv: Move,
    pre: Snapshot,
}

impl MoveCommand {
    pub fn new(mv: Move, pre: Snapshot) -> Self {
        Self { mv, pre }
    }
}

impl Command for MoveCommand {
    fn execute(&self, rules: &dyn RuleEngine) -> Result<CommandOutcome> {
        let pre = &self.pre.board;

        // Collect the victims before touching the board so ids survive into
        // the captured-piece report.
        let mut captured_pieces = Vec::with_capacity(self.mv.capture_count());
        for &pos in self.mv.captures() {
            match pre.piece_at(pos)? {
                Some(piece) => captured_pieces.push(piece),
                None => {
                    return Err(Error::InvalidBoardState(format!(
                        "no piece to capture at {pos}"
                    )))
                }
            }
        }

        let mut board = pre.move_piece(self.mv.from(), self.mv.to())?;
        if self.mv.is_capture() {
            board = board.remove_pieces(self.mv.captures())?;
        }

        let mut promoted = None;
        if let Some(piece) = board.get(self.mv.to()) {
            if rules.should_promote(piece, self.mv.to()) {
                let king = rules.promote(piece);
                board = board.set_piece(self.mv.to(), king)?;
                promoted = Some((self.mv.to(), king));
            }
        }

        Ok(CommandOutcome {
            board,
            captured_positions: self.mv.captures().to_vec(),
            captured_pieces,
            promoted,
        })
    }

    fn undo_state(&self) -> &Snapshot {
        &self.pre
    }

    fn played_move(&self) -> &Move {
        &self.mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;
    use crate::rules::{RuleEngine, StandardRules};

    fn snapshot(board: Board, player: Player) -> Snapshot {
        Snapshot {
            board,
            player,
            captured: Vec::new(),
            move_count: 0,
            over: false,
            winner: None,
        }
    }

    #[test]
    fn test_execute_slide() {
        let rules = StandardRules::default();
        let board = rules.initial_board().unwrap();
        let mv = Move::slide(Position::new(2, 1), Position::new(3, 2));
        let cmd = MoveCommand::new(mv, snapshot(board.clone(), Player::Red));

        let outcome = cmd.execute(&rules).unwrap();
        assert_eq!(outcome.board.get(Position::new(2, 1)), None);
        assert!(outcome.board.get(Position::new(3, 2)).is_some());
        assert!(outcome.captured_pieces.is_empty());
        assert!(outcome.promoted.is_none());
        // Snapshot still holds the pre-move board.
        assert!(cmd.undo_state().board.get(Position::new(2, 1)).is_some());
    }

    #[test]
    fn test_execute_capture_reports_victims() {
        let rules = StandardRules::default();
        let victim = Piece::new(9, Player::Black, PieceKind::Regular);
        let board = Board::new(8)
            .unwrap()
            .set_piece(
                Position::new(3, 3),
                Piece::new(1, Player::Red, PieceKind::Regular),
            )
            .unwrap()
            .set_piece(Position::new(4, 4), victim)
            .unwrap();
        let mv = Move::jump(
            Position::new(3, 3),
            Position::new(5, 5),
            vec![Position::new(4, 4)],
        );
        let cmd = MoveCommand::new(mv, snapshot(board, Player::Red));

        let outcome = cmd.execute(&rules).unwrap();
        assert_eq!(outcome.captured_pieces, vec![victim]);
        assert_eq!(outcome.captured_positions, vec![Position::new(4, 4)]);
        assert_eq!(outcome.board.piece_count(Player::Black), 0);
        assert_eq!(outcome.board.get(Position::new(4, 4)), None);
    }

    #[test]
    fn test_execute_applies_promotion() {
        let rules = StandardRules::default();
        let board = Board::new(8)
            .unwrap()
            .set_piece(
                Position::new(6, 1),
                Piece::new(1, Player::Red, PieceKind::Regular),
            )
            .unwrap();
        let mv = Move::slide(Position::new(6, 1), Position::new(7, 2)).with_promotion(true);
        let cmd = MoveCommand::new(mv, snapshot(board, Player::Red));

        let outcome = cmd.execute(&rules).unwrap();
        let (pos, king) = outcome.promoted.unwrap();
        assert_eq!(pos, Position::new(7, 2));
        assert!(king.is_king());
        assert_eq!(king.id, 1);
        assert!(outcome.board.get(Position::new(7, 2)).unwrap().is_king());
    }

    #[test]
    fn test_execute_against_stale_board_fails_cleanly() {
        let rules = StandardRules::default();
        let board = Board::new(8).unwrap();
        let mv = Move::slide(Position::new(2, 1), Position::new(3, 2));
        let cmd = MoveCommand::new(mv, snapshot(board, Player::Red));
        assert!(cmd.execute(&rules).is_err());
    }
}
