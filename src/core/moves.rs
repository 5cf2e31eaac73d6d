//! Move representation.
//!
//! An Amazons move is a ternary action: slide a queen, then shoot a
//! stone from the queen's landing square.

/// A cell index in `0..100`, row-major (`pos = row * 10 + col`).
pub type Pos = u8;

/// A complete move: queen source, queen destination, stone destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAction {
    pub from: Pos,
    pub to: Pos,
    pub stone: Pos,
}

impl MoveAction {
    #[inline]
    pub fn new(from: Pos, to: Pos, stone: Pos) -> Self {
        MoveAction { from, to, stone }
    }
}

/// A move paired with the static evaluation of the position it produces.
/// Candidate lists are sorted descending by value before consumption.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub action: MoveAction,
    pub value: f64,
}
