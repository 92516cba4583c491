//! Move description: endpoints, ordered captures, promotion, atomic steps

use std::hash::{Hash, Hasher};

use crate::board::Position;

/// One atomic piece of a move: a single slide or a single jump.
///
/// Multi-jump sequences are decomposed into steps so they can be replayed
/// deterministically (animation, notation, validation of the capture path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveStep {
    pub from: Position,
    pub to: Position,
    /// The jumped square, `None` for a slide
    pub capture: Option<Position>,
}

impl MoveStep {
    #[inline]
    pub fn slide(from: Position, to: Position) -> Self {
        Self { from, to, capture: None }
    }

    #[inline]
    pub fn jump(from: Position, to: Position, capture: Position) -> Self {
        Self { from, to, capture: Some(capture) }
    }
}

/// An immutable from/to transition with an ordered capture list.
///
/// Equality and hashing cover the endpoints, the ordered captures and the
/// promotion flag; the optional step decomposition is carried for replay but
/// deliberately ignored, so a caller-built move compares equal to the
/// engine-generated one it names.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    from: Position,
    to: Position,
    captures: Vec<Position>,
    promotion: bool,
    steps: Vec<MoveStep>,
}

impl Move {
    /// A plain non-capture move
    pub fn slide(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captures: Vec::new(),
            promotion: false,
            steps: Vec::new(),
        }
    }

    /// A capture move; `captures` lists the jumped squares in jump order
    pub fn jump(from: Position, to: Position, captures: Vec<Position>) -> Self {
        debug_assert!(!captures.is_empty(), "a jump must capture at least one piece");
        Self {
            from,
            to,
            captures,
            promotion: false,
            steps: Vec::new(),
        }
    }

    pub fn with_promotion(mut self, promotion: bool) -> Self {
        self.promotion = promotion;
        self
    }

    /// Attach the atomic step decomposition.
    ///
    /// Invariant: the listed captures are exactly the step captures, in order.
    pub fn with_steps(mut self, steps: Vec<MoveStep>) -> Self {
        debug_assert_eq!(
            steps.iter().filter_map(|s| s.capture).collect::<Vec<_>>(),
            self.captures,
            "captures must lie on the step path"
        );
        self.steps = steps;
        self
    }

    #[inline]
    pub fn from(&self) -> Position {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Position {
        self.to
    }

    #[inline]
    pub fn captures(&self) -> &[Position] {
        &self.captures
    }

    #[inline]
    pub fn steps(&self) -> &[MoveStep] {
        &self.steps
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.captures == other.captures
            && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.captures.hash(state);
        self.promotion.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash(mv: &Move) -> u64 {
        let mut hasher = DefaultHasher::new();
        mv.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_ignores_steps() {
        let bare = Move::jump(
            Position::new(3, 3),
            Position::new(5, 5),
            vec![Position::new(4, 4)],
        );
        let detailed = bare.clone().with_steps(vec![MoveStep::jump(
            Position::new(3, 3),
            Position::new(5, 5),
            Position::new(4, 4),
        )]);
        assert_eq!(bare, detailed);
        assert_eq!(hash(&bare), hash(&detailed));
    }

    #[test]
    fn test_equality_covers_promotion() {
        let plain = Move::slide(Position::new(6, 1), Position::new(7, 2));
        let promoting = plain.clone().with_promotion(true);
        assert_ne!(plain, promoting);
        assert_ne!(hash(&plain), hash(&promoting));
    }

    #[test]
    fn test_equality_covers_capture_order() {
        let a = Move::jump(
            Position::new(5, 2),
            Position::new(1, 6),
            vec![Position::new(4, 3), Position::new(2, 5)],
        );
        let b = Move::jump(
            Position::new(5, 2),
            Position::new(1, 6),
            vec![Position::new(2, 5), Position::new(4, 3)],
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_accessors() {
        let mv = Move::jump(
            Position::new(5, 2),
            Position::new(1, 6),
            vec![Position::new(4, 3), Position::new(2, 5)],
        );
        assert!(mv.is_capture());
        assert_eq!(mv.capture_count(), 2);
        assert!(!mv.is_promotion());
        assert_eq!(mv.from(), Position::new(5, 2));
        assert_eq!(mv.to(), Position::new(1, 6));

        let slide = Move::slide(Position::new(2, 1), Position::new(3, 2));
        assert!(!slide.is_capture());
        assert_eq!(slide.capture_count(), 0);
    }
}
