//! Board representation for checkers/draughts
//!
//! The board is indexed by [`Position`] (row, col) and holds optional
//! [`Piece`] values. Every mutating operation returns a brand new [`Board`];
//! move generation explores many hypothetical positions before a move is
//! committed, and immutability keeps those explorations independent.

pub mod board;


// Re-exports
pub use board::Board;

/// The two players.
///
/// Red starts on the low rows and moves toward `size - 1`; Black starts on
/// the high rows and moves toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// Get the opposing player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Forward row direction: +1 for Red, -1 for Black
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Player::Red => 1,
            Player::Black => -1,
        }
    }

    /// The promotion rank on a board of the given size
    #[inline]
    pub fn far_rank(self, size: u8) -> u8 {
        match self {
            Player::Red => size - 1,
            Player::Black => 0,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Movement capability of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    /// Slides forward only; captures in any diagonal direction
    Regular,
    /// Slides and captures in any diagonal direction
    King,
}

/// A player-owned token on the board.
///
/// The `id` is stable for the lifetime of a game: promotion produces a new
/// `Piece` with the `King` kind but the same id, which is what makes
/// captured-piece reporting and undo verifiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: u32,
    pub player: Player,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub fn new(id: u32, player: Player, kind: PieceKind) -> Self {
        Self { id, player, kind }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    /// The same piece with the King kind. Id and owner are preserved.
    #[inline]
    pub fn promoted(self) -> Piece {
        Piece {
            kind: PieceKind::King,
            ..self
        }
    }
}

/// A coordinate on the board.
///
/// `Position` itself carries no board size; whether it is in range depends on
/// the board it is used with. The diagonal helpers below are the geometric
/// core of capture search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check signed coordinates against a board size
    #[inline]
    pub fn is_valid(row: i32, col: i32, size: u8) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    #[inline]
    pub fn in_bounds(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Dark squares are the playable cells in standard variants
    #[inline]
    pub fn is_dark(self) -> bool {
        // Parity comparison; row + col could overflow u8 on large boards.
        self.row % 2 != self.col % 2
    }

    #[inline]
    pub fn is_diagonal_to(self, other: Position) -> bool {
        self.diagonal_distance(other).is_some()
    }

    /// Number of diagonal steps to `other`, or `None` if the two positions
    /// do not share a diagonal (or are equal).
    #[inline]
    pub fn diagonal_distance(self, other: Position) -> Option<u8> {
        let dr = (self.row as i32 - other.row as i32).abs();
        let dc = (self.col as i32 - other.col as i32).abs();
        if dr == dc && dr > 0 {
            Some(dr as u8)
        } else {
            None
        }
    }

    /// Unit diagonal step from `self` toward `other`, if they share a diagonal
    #[inline]
    pub fn direction_to(self, other: Position) -> Option<(i32, i32)> {
        self.diagonal_distance(other)?;
        Some((
            (other.row as i32 - self.row as i32).signum(),
            (other.col as i32 - self.col as i32).signum(),
        ))
    }

    /// Positions strictly between `self` and `other` along their shared
    /// diagonal. Empty when the positions are not diagonal to each other.
    pub fn between(self, other: Position) -> Vec<Position> {
        let Some(dist) = self.diagonal_distance(other) else {
            return Vec::new();
        };
        let (dr, dc) = match self.direction_to(other) {
            Some(dir) => dir,
            None => return Vec::new(),
        };
        (1..dist as i32)
            .map(|step| {
                Position::new(
                    (self.row as i32 + dr * step) as u8,
                    (self.col as i32 + dc * step) as u8,
                )
            })
            .collect()
    }

    /// Offset by a signed delta, `None` if the result leaves the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, size: u8) -> Option<Position> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if Position::is_valid(row, col, size) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Position {
    /// Algebraic form: column letter then 1-based row, e.g. `b6`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}
