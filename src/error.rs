use parse_display::Display;
use thiserror::Error;

use crate::Category;

/// Which enumeration of a partition a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(style = "snake_case")]
pub enum Side {
    Old,
    New,
}

/// A change set that cannot be turned into positions.
///
/// Always a bug in whatever produced the change set.
/// `ordinal` is the index of the offending entry inside its category's list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Element not present in the enumeration it must be looked up in.
    #[error("{category} #{ordinal} is not in the {side} enumeration of section {section}")]
    MissingElement {
        category: Category,
        ordinal: usize,
        side: Side,
        section: usize,
    },

    /// Element present more than once, so its position is not well defined.
    #[error("{category} #{ordinal} matches more than one item in the {side} enumeration of section {section}")]
    AmbiguousElement {
        category: Category,
        ordinal: usize,
        side: Side,
        section: usize,
    },

    /// Same identity listed twice, in one category or across categories.
    #[error("{category} #{ordinal} was already listed as {previous} #{previous_ordinal}")]
    Conflict {
        category: Category,
        ordinal: usize,
        previous: Category,
        previous_ordinal: usize,
    },
}
