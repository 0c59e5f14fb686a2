use std::{
    collections::{hash_map::Entry, BTreeSet, HashMap},
    hash::Hash,
};

use derive_ex::derive_ex;
use tracing::trace;

use crate::{Category, ChangeSet, MoveOp, Position, ResolutionError, Side};


/// One section of a list, seen before and after a change.
///
/// Every position resolved against a partition carries its section.
#[derive(Debug)]
#[derive_ex(Clone, Copy, bound())]
pub struct Partition<'a, T> {
    section: usize,
    old: &'a [T],
    new: &'a [T],
}

impl<'a, T> Partition<'a, T> {
    /// Section 0 with the given old and new enumerations.
    pub fn new(old: &'a [T], new: &'a [T]) -> Self {
        Self {
            section: 0,
            old,
            new,
        }
    }
    pub fn with_section(self, section: usize) -> Self {
        Self { section, ..self }
    }
    pub fn section(&self) -> usize {
        self.section
    }
    pub fn old(&self) -> &'a [T] {
        self.old
    }
    pub fn new_items(&self) -> &'a [T] {
        self.new
    }
}

/// Position-keyed operations for one batch update.
///
/// `deletions` and the `from` side of `moves` are positions in the old state.
/// `insertions`, `reloads` and the `to` side of `moves` are positions in the new state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OperationSet {
    pub deletions: BTreeSet<Position>,
    pub insertions: BTreeSet<Position>,
    pub moves: BTreeSet<MoveOp>,
    pub reloads: BTreeSet<Position>,
}

impl OperationSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn is_empty(&self) -> bool {
        !self.has_structural_changes() && self.reloads.is_empty()
    }
    /// Returns true if the batch body would issue at least one call.
    pub fn has_structural_changes(&self) -> bool {
        !self.deletions.is_empty() || !self.insertions.is_empty() || !self.moves.is_empty()
    }
}

/// Converts identity-keyed changes into positions within `partition`.
///
/// Deleted elements and the old side of moves are looked up in the old enumeration,
/// everything else in the new one. Fails without side effects if an element is
/// missing, ambiguous, or listed more than once.
pub fn resolve<T: Eq + Hash>(
    changes: &ChangeSet<T>,
    partition: &Partition<T>,
) -> Result<OperationSet, ResolutionError> {
    check_conflicts(changes)?;

    let section = partition.section;
    let old = Enumeration::new(Side::Old, partition.old, section);
    let new = Enumeration::new(Side::New, partition.new, section);
    let mut ops = OperationSet::new();

    for (ordinal, value) in changes.deleted.iter().enumerate() {
        ops.deletions
            .insert(old.position_of(value, Category::Delete, ordinal)?);
    }
    for (ordinal, value) in changes.inserted.iter().enumerate() {
        ops.insertions
            .insert(new.position_of(value, Category::Insert, ordinal)?);
    }
    for (ordinal, m) in changes.moved.iter().enumerate() {
        let from = old.position_of(&m.old, Category::Move, ordinal)?;
        let to = new.position_of(&m.new, Category::Move, ordinal)?;
        ops.moves.insert(MoveOp::new(from, to));
    }
    for (ordinal, value) in changes.reloaded.iter().enumerate() {
        ops.reloads
            .insert(new.position_of(value, Category::Reload, ordinal)?);
    }

    trace!(
        section,
        deletions = ops.deletions.len(),
        insertions = ops.insertions.len(),
        moves = ops.moves.len(),
        reloads = ops.reloads.len(),
        "resolved change set"
    );
    Ok(ops)
}

fn check_conflicts<T: Eq + Hash>(changes: &ChangeSet<T>) -> Result<(), ResolutionError> {
    let mut seen = HashMap::<&T, (Category, usize)>::with_capacity(changes.len());
    let mut claim = |value, category, ordinal| match seen.entry(value) {
        Entry::Vacant(e) => {
            e.insert((category, ordinal));
            Ok(())
        }
        Entry::Occupied(e) => {
            let (previous, previous_ordinal) = *e.get();
            Err(ResolutionError::Conflict {
                category,
                ordinal,
                previous,
                previous_ordinal,
            })
        }
    };
    for (ordinal, value) in changes.deleted.iter().enumerate() {
        claim(value, Category::Delete, ordinal)?;
    }
    for (ordinal, value) in changes.inserted.iter().enumerate() {
        claim(value, Category::Insert, ordinal)?;
    }
    for (ordinal, m) in changes.moved.iter().enumerate() {
        claim(&m.old, Category::Move, ordinal)?;
        if m.new != m.old {
            claim(&m.new, Category::Move, ordinal)?;
        }
    }
    for (ordinal, value) in changes.reloaded.iter().enumerate() {
        claim(value, Category::Reload, ordinal)?;
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Slot {
    Unique(usize),
    Ambiguous,
}

struct Enumeration<'a, T> {
    side: Side,
    section: usize,
    index: HashMap<&'a T, Slot>,
}

impl<'a, T: Eq + Hash> Enumeration<'a, T> {
    fn new(side: Side, items: &'a [T], section: usize) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (i, value) in items.iter().enumerate() {
            index
                .entry(value)
                .and_modify(|slot| *slot = Slot::Ambiguous)
                .or_insert(Slot::Unique(i));
        }
        Self {
            side,
            section,
            index,
        }
    }

    fn position_of(
        &self,
        value: &T,
        category: Category,
        ordinal: usize,
    ) -> Result<Position, ResolutionError> {
        match self.index.get(value) {
            Some(&Slot::Unique(item)) => Ok(Position::new(self.section, item)),
            Some(Slot::Ambiguous) => Err(ResolutionError::AmbiguousElement {
                category,
                ordinal,
                side: self.side,
                section: self.section,
            }),
            None => Err(ResolutionError::MissingElement {
                category,
                ordinal,
                side: self.side,
                section: self.section,
            }),
        }
    }
}
