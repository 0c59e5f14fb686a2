use parse_display::Display;
use serde::{Deserialize, Serialize};

/// Location of an item in a sectioned list, like an index path.
///
/// Ordered by section first, then by item.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
#[display("{section}.{item}")]
pub struct Position {
    pub section: usize,
    pub item: usize,
}

impl Position {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// A single move of one item.
///
/// `from` is a position in the old state and `to` is a position in the new state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("{from} -> {to}")]
pub struct MoveOp {
    pub from: Position,
    pub to: Position,
}

impl MoveOp {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Position::new(0, 3).to_string(), "0.3");
        let m = MoveOp::new(Position::new(1, 2), Position::new(1, 0));
        assert_eq!(m.to_string(), "1.2 -> 1.0");
    }

    #[test]
    fn order_by_section_then_item() {
        let mut ps = vec![
            Position::new(1, 0),
            Position::new(0, 5),
            Position::new(0, 1),
        ];
        ps.sort();
        assert_eq!(
            ps,
            vec![
                Position::new(0, 1),
                Position::new(0, 5),
                Position::new(1, 0)
            ]
        );
    }
}
