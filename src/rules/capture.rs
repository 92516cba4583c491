//! Recursive multi-jump capture search
//!
//! From a piece at its origin, every diagonal direction is probed for a jump:
//! an adjacent (or, for flying kings, first-on-ray) opponent with an empty
//! landing square beyond it. Each valid jump extends the path and the search
//! recurses from the landing square. Every prefix of a chain, including a
//! single jump, is recorded as a candidate move, because a forced
//! mid-sequence stop is legal.
//!
//! The consumed-capture list is path-local: it travels down one branch by
//! value and never leaks into sibling branches, so independent sequences
//! starting from the same origin may each capture disjoint sets, while no
//! single path captures the same square twice. The board itself is never
//! mutated during the search; the mover's origin square simply counts as
//! empty, since the piece has left it.

use log::trace;
use smallvec::SmallVec;

use crate::board::{Board, Piece, Position};
use crate::moves::{Move, MoveStep};

use super::DIAGONALS;

/// Jumped squares on the current path. Chains beyond 8 captures are
/// possible on large boards, at which point this spills to the heap.
type Consumed = SmallVec<[Position; 8]>;

/// All capture sequences for `piece` standing at `origin`.
///
/// Regular pieces jump in all four diagonal directions even though their
/// slide is forward-only. With `flying_kings`, kings jump the first opponent
/// anywhere along a ray and may land on any empty square beyond it.
///
/// Promotion flags are not set here; they are stamped by the calling rule
/// engine from each candidate's final landing square.
pub(crate) fn capture_sequences(
    board: &Board,
    piece: Piece,
    origin: Position,
    flying_kings: bool,
) -> Vec<Move> {
    let mut out = Vec::new();
    extend(
        board,
        piece,
        origin,
        origin,
        &Consumed::new(),
        &[],
        flying_kings,
        &mut out,
    );
    trace!(
        "capture search from {origin}: {} candidate sequence(s)",
        out.len()
    );
    out
}

/// Occupant of `cell` as seen mid-path: the vacated origin counts as empty
#[inline]
fn path_occupant(board: &Board, origin: Position, cell: Position) -> Option<Piece> {
    if cell == origin {
        None
    } else {
        board.get(cell)
    }
}

#[allow(clippy::too_many_arguments)]
fn extend(
    board: &Board,
    piece: Piece,
    origin: Position,
    cur: Position,
    consumed: &Consumed,
    steps: &[MoveStep],
    flying_kings: bool,
    out: &mut Vec<Move>,
) {
    let size = board.size();
    for &(dr, dc) in &DIAGONALS {
        if flying_kings && piece.is_king() {
            // First piece on the ray is the only capture candidate.
            let mut dist = 1;
            let target = loop {
                let Some(cell) = cur.offset(dr * dist, dc * dist, size) else {
                    break None;
                };
                if path_occupant(board, origin, cell).is_some() {
                    break Some((cell, dist));
                }
                dist += 1;
            };
            let Some((target, target_dist)) = target else {
                continue;
            };
            if !is_capturable(board, origin, target, piece, consumed) {
                continue;
            }
            // Any empty square beyond the victim is a landing choice.
            let mut landing_dist = target_dist + 1;
            while let Some(landing) = cur.offset(dr * landing_dist, dc * landing_dist, size) {
                if path_occupant(board, origin, landing).is_some() {
                    break;
                }
                record_and_recurse(
                    board, piece, origin, cur, target, landing, consumed, steps,
                    flying_kings, out,
                );
                landing_dist += 1;
            }
        } else {
            let (Some(target), Some(landing)) =
                (cur.offset(dr, dc, size), cur.offset(2 * dr, 2 * dc, size))
            else {
                continue;
            };
            if !is_capturable(board, origin, target, piece, consumed) {
                continue;
            }
            if path_occupant(board, origin, landing).is_some() {
                continue;
            }
            record_and_recurse(
                board, piece, origin, cur, target, landing, consumed, steps,
                flying_kings, out,
            );
        }
    }
}

/// A live opponent not yet jumped on this path
#[inline]
fn is_capturable(
    board: &Board,
    origin: Position,
    target: Position,
    piece: Piece,
    consumed: &Consumed,
) -> bool {
    match path_occupant(board, origin, target) {
        Some(victim) => victim.player != piece.player && !consumed.contains(&target),
        None => false,
    }
}

#[allow(clippy::too_many_arguments)]
fn record_and_recurse(
    board: &Board,
    piece: Piece,
    origin: Position,
    cur: Position,
    target: Position,
    landing: Position,
    consumed: &Consumed,
    steps: &[MoveStep],
    flying_kings: bool,
    out: &mut Vec<Move>,
) {
    let mut next_consumed = consumed.clone();
    next_consumed.push(target);
    let mut next_steps = steps.to_vec();
    next_steps.push(MoveStep::jump(cur, landing, target));

    // A chain that circles back onto its own origin cannot be expressed as a
    // from/to move; it is still a valid waypoint for further jumps.
    if landing != origin {
        let captures: Vec<Position> = next_consumed.iter().copied().collect();
        out.push(Move::jump(origin, landing, captures).with_steps(next_steps.clone()));
    }

    extend(
        board,
        piece,
        origin,
        landing,
        &next_consumed,
        &next_steps,
        flying_kings,
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Player};

    fn board_with(pieces: &[(Position, Player)]) -> Board {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut board = Board::new(8).unwrap();
        for (id, &(pos, player)) in pieces.iter().enumerate() {
            board = board
                .set_piece(pos, Piece::new(id as u32, player, PieceKind::Regular))
                .unwrap();
        }
        board
    }

    fn red_regular() -> Piece {
        Piece::new(100, Player::Red, PieceKind::Regular)
    }

    #[test]
    fn test_single_jump() {
        // red at (3,3), black at (4,4), (5,5) empty
        let board = board_with(&[
            (Position::new(3, 3), Player::Red),
            (Position::new(4, 4), Player::Black),
        ]);
        let piece = board.get(Position::new(3, 3)).unwrap();
        let moves = capture_sequences(&board, piece, Position::new(3, 3), false);

        assert_eq!(moves.len(), 1);
        let mv = &moves[0];
        assert_eq!(mv.from(), Position::new(3, 3));
        assert_eq!(mv.to(), Position::new(5, 5));
        assert_eq!(mv.captures(), &[Position::new(4, 4)]);
        assert_eq!(mv.steps().len(), 1);
    }

    #[test]
    fn test_backward_jump_for_regular_piece() {
        // Regular pieces capture in all four directions; red jumps backward.
        let board = board_with(&[
            (Position::new(5, 2), Player::Red),
            (Position::new(4, 3), Player::Black),
        ]);
        let piece = board.get(Position::new(5, 2)).unwrap();
        let moves = capture_sequences(&board, piece, Position::new(5, 2), false);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), Position::new(3, 4));
    }

    #[test]
    fn test_chain_records_every_prefix() {
        // red at (5,2); black at (4,3) and (2,5); both landings empty
        let board = board_with(&[
            (Position::new(5, 2), Player::Red),
            (Position::new(4, 3), Player::Black),
            (Position::new(2, 5), Player::Black),
        ]);
        let piece = board.get(Position::new(5, 2)).unwrap();
        let moves = capture_sequences(&board, piece, Position::new(5, 2), false);

        // The single-jump prefix and the full two-capture chain.
        assert_eq!(moves.len(), 2);
        let prefix = Move::jump(
            Position::new(5, 2),
            Position::new(3, 4),
            vec![Position::new(4, 3)],
        );
        let full = Move::jump(
            Position::new(5, 2),
            Position::new(1, 6),
            vec![Position::new(4, 3), Position::new(2, 5)],
        );
        assert!(moves.contains(&prefix));
        assert!(moves.contains(&full));
    }

    #[test]
    fn test_long_chain_completeness() {
        // Three capturable men in a line, each followed by an empty square.
        let board = board_with(&[
            (Position::new(0, 0), Player::Red),
            (Position::new(1, 1), Player::Black),
            (Position::new(3, 3), Player::Black),
            (Position::new(5, 5), Player::Black),
        ]);
        let piece = board.get(Position::new(0, 0)).unwrap();
        let moves = capture_sequences(&board, piece, Position::new(0, 0), false);

        assert_eq!(moves.len(), 3);
        let max = moves.iter().map(Move::capture_count).max().unwrap();
        assert_eq!(max, 3);
        let counts: Vec<usize> = {
            let mut c: Vec<usize> = moves.iter().map(Move::capture_count).collect();
            c.sort();
            c
        };
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_branches_do_not_share_consumed_state() {
        // From (2,3) red can jump (3,4) to land on (4,5), or jump (3,2) to
        // land on (4,1). Each branch then has its own continuation; neither
        // must see the other's consumed captures.
        let board = board_with(&[
            (Position::new(2, 3), Player::Red),
            (Position::new(3, 4), Player::Black),
            (Position::new(3, 2), Player::Black),
            (Position::new(5, 6), Player::Black),
            (Position::new(5, 0), Player::Black),
        ]);
        let piece = board.get(Position::new(2, 3)).unwrap();
        let moves = capture_sequences(&board, piece, Position::new(2, 3), false);

        let right = Move::jump(
            Position::new(2, 3),
            Position::new(6, 7),
            vec![Position::new(3, 4), Position::new(5, 6)],
        );
        assert!(moves.contains(&right));
        // The left continuation over (5,0) would land off the board, so only
        // the left prefix exists.
        assert!(moves.contains(&Move::jump(
            Position::new(2, 3),
            Position::new(4, 1),
            vec![Position::new(3, 2)],
        )));
        // Two 1-jump prefixes plus the completed right chain.
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_circular_chain_never_recaptures() {
        // A diamond of black men lets the path circle back to its origin:
        // (0,2) x(1,3) (2,4) x(3,3) (4,2) x(3,1) (2,0) x(1,1) back to (0,2).
        // The consumed list must terminate the search instead of looping, and
        // the final hop, landing on the vacated origin, cannot be recorded as
        // a from/to move.
        let board = board_with(&[
            (Position::new(0, 2), Player::Red),
            (Position::new(1, 3), Player::Black),
            (Position::new(3, 3), Player::Black),
            (Position::new(3, 1), Player::Black),
            (Position::new(1, 1), Player::Black),
        ]);
        let piece = board.get(Position::new(0, 2)).unwrap();
        let moves = capture_sequences(&board, piece, Position::new(0, 2), false);

        // No sequence lists a square twice.
        for mv in &moves {
            let mut seen = mv.captures().to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), mv.capture_count());
            assert_ne!(mv.from(), mv.to());
        }
        // The longest expressible chain stops one hop short of the origin.
        let max = moves.iter().map(Move::capture_count).max().unwrap();
        assert_eq!(max, 3);
    }

    #[test]
    fn test_blocked_landing_stops_chain() {
        let board = board_with(&[
            (Position::new(3, 3), Player::Red),
            (Position::new(4, 4), Player::Black),
            (Position::new(5, 5), Player::Black), // landing occupied
        ]);
        let piece = board.get(Position::new(3, 3)).unwrap();
        let moves = capture_sequences(&board, piece, Position::new(3, 3), false);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_flying_king_distant_capture() {
        let mut board = board_with(&[(Position::new(7, 7), Player::Black)]);
        let king = Piece::new(50, Player::Red, PieceKind::King);
        board = board.set_piece(Position::new(1, 1), king).unwrap();

        let moves = capture_sequences(&board, king, Position::new(1, 1), true);
        // No landing square beyond (7,7) exists.
        assert!(moves.is_empty());

        let mut board = board_with(&[(Position::new(5, 5), Player::Black)]);
        board = board.set_piece(Position::new(1, 1), king).unwrap();
        let moves = capture_sequences(&board, king, Position::new(1, 1), true);
        // Landings (6,6) and (7,7) both available.
        assert_eq!(moves.len(), 2);
        assert!(moves
            .iter()
            .all(|mv| mv.captures() == [Position::new(5, 5)]));
    }

    #[test]
    fn test_flying_king_cannot_jump_own_piece() {
        let king = Piece::new(50, Player::Red, PieceKind::King);
        let board = board_with(&[(Position::new(4, 4), Player::Red)])
            .set_piece(Position::new(1, 1), king)
            .unwrap();
        let moves = capture_sequences(&board, king, Position::new(1, 1), true);
        assert!(moves.is_empty());
    }
}
