use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::{AnimatableListSurface, AnimationConfig, BatchUpdates, Completion, OperationSet};


/// Applies resolved operations to a surface.
///
/// Deletions, insertions and moves run inside one animated batch, in that order.
/// Reloads run after the surface signals that the batch has finished.
///
/// Only one batch may be in flight per surface.
/// The data backing the surface must not change until the completion fires.
pub struct BatchApplier<S: ?Sized> {
    surface: Rc<S>,
    config: AnimationConfig,
}

impl<S> BatchApplier<S>
where
    S: AnimatableListSurface + ?Sized + 'static,
{
    /// Uses the surface's own animation settings.
    pub fn new(surface: Rc<S>) -> Self {
        let config = surface.animation_config();
        Self::with_config(surface, config)
    }
    pub fn with_config(surface: Rc<S>, config: AnimationConfig) -> Self {
        Self { surface, config }
    }
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn apply(&self, ops: OperationSet, on_complete: impl Into<Completion>) {
        let on_complete = on_complete.into();
        let OperationSet {
            deletions,
            insertions,
            moves,
            reloads,
        } = ops;
        debug!(
            deletions = deletions.len(),
            insertions = insertions.len(),
            moves = moves.len(),
            reloads = reloads.len(),
            duration = ?self.config.duration,
            "begin batch updates"
        );

        let updates = move |batch: &mut dyn BatchUpdates| {
            if !deletions.is_empty() {
                trace!(count = deletions.len(), "delete items");
                batch.delete_items(&deletions);
            }
            if !insertions.is_empty() {
                trace!(count = insertions.len(), "insert items");
                batch.insert_items(&insertions);
            }
            for m in &moves {
                trace!(%m, "move item");
                batch.move_item(m.from, m.to);
            }
        };

        let surface = self.surface.clone();
        let completion = move |finished: bool| {
            if !finished {
                warn!("batch updates did not finish, view may be out of sync with data");
            }
            if !reloads.is_empty() {
                trace!(count = reloads.len(), "reload items");
                surface.reload_items(&reloads);
            }
            debug!(finished, "batch updates done");
            on_complete.complete(finished);
        };

        self.surface
            .perform_batch_updates(&self.config, Box::new(updates), Box::new(completion));
    }
}
