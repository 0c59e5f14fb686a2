use parse_display::Display;


/// Kind of change an element went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(style = "snake_case")]
pub enum Category {
    Insert,
    Delete,
    Move,
    Reload,
}

/// An element that changed position between the old and the new state.
///
/// `old` is looked up in the old enumeration and `new` in the new one.
/// For most element types both are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Moved<T> {
    pub old: T,
    pub new: T,
}

impl<T: Clone> Moved<T> {
    pub fn same(value: T) -> Self {
        Self {
            old: value.clone(),
            new: value,
        }
    }
}

/// A single identity-keyed change, as produced by a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<T> {
    Insert(T),
    Delete(T),
    Move { old: T, new: T },
    Reload(T),
}

impl<T> Change<T> {
    pub fn category(&self) -> Category {
        match self {
            Change::Insert(_) => Category::Insert,
            Change::Delete(_) => Category::Delete,
            Change::Move { .. } => Category::Move,
            Change::Reload(_) => Category::Reload,
        }
    }
}

/// Changes between two states of one section, keyed by element identity.
///
/// The order of elements inside each collection carries no meaning.
/// Each identity may appear only once across all four collections;
/// [`resolve`](crate::resolve) rejects change sets that break this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet<T> {
    pub inserted: Vec<T>,
    pub deleted: Vec<T>,
    pub moved: Vec<Moved<T>>,
    pub reloaded: Vec<T>,
}

impl<T> ChangeSet<T> {
    pub fn new() -> Self {
        Self {
            inserted: Vec::new(),
            deleted: Vec::new(),
            moved: Vec::new(),
            reloaded: Vec::new(),
        }
    }

    pub fn insert(mut self, value: T) -> Self {
        self.inserted.push(value);
        self
    }
    pub fn delete(mut self, value: T) -> Self {
        self.deleted.push(value);
        self
    }
    pub fn move_item(mut self, old: T, new: T) -> Self {
        self.moved.push(Moved { old, new });
        self
    }
    pub fn reload(mut self, value: T) -> Self {
        self.reloaded.push(value);
        self
    }

    pub fn push(&mut self, change: Change<T>) {
        match change {
            Change::Insert(value) => self.inserted.push(value),
            Change::Delete(value) => self.deleted.push(value),
            Change::Move { old, new } => self.moved.push(Moved { old, new }),
            Change::Reload(value) => self.reloaded.push(value),
        }
    }

    /// Total number of changes across all categories.
    pub fn len(&self) -> usize {
        self.inserted.len() + self.deleted.len() + self.moved.len() + self.reloaded.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for ChangeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Change<T>> for ChangeSet<T> {
    fn extend<I: IntoIterator<Item = Change<T>>>(&mut self, iter: I) {
        for change in iter {
            self.push(change);
        }
    }
}

impl<T> FromIterator<Change<T>> for ChangeSet<T> {
    fn from_iter<I: IntoIterator<Item = Change<T>>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}
