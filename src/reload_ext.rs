use std::{
    future::Future,
    hash::Hash,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use futures::channel::oneshot;

use crate::{
    resolve, AnimatableListSurface, BatchApplier, ChangeSet, Completion, Partition,
    ResolutionError,
};


/// Animated reloading of a surface from identity-keyed changes.
///
/// Implemented for every [`AnimatableListSurface`].
pub trait ReloadExt: AnimatableListSurface + 'static {
    /// Animates `changes` on `partition` as one batch update.
    ///
    /// Positions are resolved before the surface is touched, so an error leaves the surface unchanged.
    /// `on_complete` receives `false` if the surface could not finish the batch;
    /// in that case the caller should fall back to a full reload.
    fn reload<T: Eq + Hash>(
        self: &Rc<Self>,
        changes: &ChangeSet<T>,
        partition: &Partition<T>,
        on_complete: impl Into<Completion>,
    ) -> Result<(), ResolutionError> {
        let ops = resolve(changes, partition)?;
        BatchApplier::new(self.clone()).apply(ops, on_complete);
        Ok(())
    }

    /// Same as [`reload`](Self::reload), returning a future that resolves when the batch is done.
    fn reload_async<T: Eq + Hash>(
        self: &Rc<Self>,
        changes: &ChangeSet<T>,
        partition: &Partition<T>,
    ) -> Result<BatchFinished, ResolutionError> {
        let (sender, receiver) = oneshot::channel();
        self.reload(changes, partition, move |finished: bool| {
            let _ = sender.send(finished);
        })?;
        Ok(BatchFinished(receiver))
    }
}
impl<S: AnimatableListSurface + ?Sized + 'static> ReloadExt for S {}

/// Future returned by [`ReloadExt::reload_async`].
///
/// Resolves to `true` if the surface finished the batch.
#[must_use]
pub struct BatchFinished(oneshot::Receiver<bool>);

impl Future for BatchFinished {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx).map(|r| r.unwrap_or(false))
    }
}
