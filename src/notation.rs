//! Textual move notation
//!
//! Moves print as `<from>-<to>` for slides and `<from>x<to>` for captures,
//! with positions in algebraic form (column letter, 1-based row). Multi
//! capture moves append `(xN)` with the number of victims, and promoting
//! moves append `=K`:
//!
//! ```text
//! b3-a4        slide
//! b3xd5        single capture
//! c4xg8(x2)=K  double capture ending in a promotion
//! ```

use std::fmt;

use crate::board::Position;
use crate::error::{Error, Result};
use crate::moves::Move;

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from(), sep, self.to())?;
        if self.capture_count() >= 2 {
            write!(f, "(x{})", self.capture_count())?;
        }
        if self.is_promotion() {
            write!(f, "=K")?;
        }
        Ok(())
    }
}

fn invalid(text: &str, why: &str) -> Error {
    Error::InvalidMove {
        reason: format!("cannot parse '{text}': {why}"),
    }
}

/// Parse one position token, e.g. `b6`, returning it and the rest of the input
fn parse_position<'a>(text: &str, input: &'a str) -> Result<(Position, &'a str)> {
    let mut chars = input.char_indices();
    let col = match chars.next() {
        Some((_, c)) if c.is_ascii_lowercase() => c as u8 - b'a',
        _ => return Err(invalid(text, "expected a column letter")),
    };
    let digits_end = input[1..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(input.len(), |i| i + 1);
    let digits = &input[1..digits_end];
    let rank: u8 = digits
        .parse()
        .map_err(|_| invalid(text, "expected a row number"))?;
    if rank == 0 {
        return Err(invalid(text, "rows start at 1"));
    }
    Ok((Position::new(rank - 1, col), &input[digits_end..]))
}

/// Parse a move written in the [`Display`] notation for a board of the
/// given size; positions outside it are rejected.
///
/// Captures are reconstructed from the endpoints, so only single jumps (a
/// distance of exactly two squares, victim on the midpoint) round-trip;
/// multi-jump strings are rejected because the intermediate landings are
/// not part of the notation.
pub fn parse_move(text: &str, board_size: u8) -> Result<Move> {
    let mut rest = text.trim();
    if rest.is_empty() {
        return Err(invalid(text, "empty string"));
    }

    let promotion = if let Some(stripped) = rest.strip_suffix("=K") {
        rest = stripped;
        true
    } else {
        false
    };

    let mut declared_captures = None;
    if let Some(stripped) = rest.strip_suffix(')') {
        let open = stripped
            .rfind("(x")
            .ok_or_else(|| invalid(text, "unmatched ')'"))?;
        let count: usize = stripped[open + 2..]
            .parse()
            .map_err(|_| invalid(text, "bad capture count"))?;
        declared_captures = Some(count);
        rest = &stripped[..open];
    }

    let (from, after_from) = parse_position(text, rest)?;
    let mut sep_chars = after_from.chars();
    let sep = sep_chars
        .next()
        .ok_or_else(|| invalid(text, "missing separator"))?;
    let (to, trailing) = parse_position(text, sep_chars.as_str())?;
    if !trailing.is_empty() {
        return Err(invalid(text, "trailing characters"));
    }
    for pos in [from, to] {
        if !pos.in_bounds(board_size) {
            return Err(Error::InvalidMove {
                reason: format!(
                    "cannot parse '{text}': {pos} is outside a {board_size}x{board_size} board"
                ),
            });
        }
    }

    let mv = match sep {
        '-' => {
            if declared_captures.is_some() {
                return Err(invalid(text, "capture count on a slide"));
            }
            Move::slide(from, to)
        }
        'x' => {
            if from.diagonal_distance(to) != Some(2) {
                return Err(invalid(
                    text,
                    "only single jumps can be reconstructed from endpoints",
                ));
            }
            if declared_captures.is_some_and(|n| n != 1) {
                return Err(invalid(text, "capture count does not match endpoints"));
            }
            Move::jump(from, to, from.between(to))
        }
        _ => return Err(invalid(text, "expected '-' or 'x' separator")),
    };

    Ok(mv.with_promotion(promotion))
}
