//! Turns identity-keyed diffs into animated batch updates for list and grid views.
//!
//! A diff describes *which* elements were inserted, deleted, moved or reloaded.
//! A view needs *where*: positions in the old state for deletions,
//! positions in the new state for insertions, and a strict call order so that
//! its item count stays consistent with the data at every step.
//!
//! - [`resolve`] maps a [`ChangeSet`] onto a [`Partition`] and produces an [`OperationSet`].
//! - [`BatchApplier`] runs an [`OperationSet`] against an [`AnimatableListSurface`].
//! - [`ReloadExt::reload`] does both.

mod applier;
mod change_set;
mod completion;
mod error;
mod position;
mod reload_ext;
mod resolver;
mod surface;

#[cfg(test)]
mod test_helpers;

pub use applier::BatchApplier;
pub use change_set::{Category, Change, ChangeSet, Moved};
pub use completion::Completion;
pub use error::{ResolutionError, Side};
pub use position::{MoveOp, Position};
pub use reload_ext::{BatchFinished, ReloadExt};
pub use resolver::{resolve, OperationSet, Partition};
pub use surface::{AnimatableListSurface, AnimationConfig, BatchUpdates};
