use std::mem::take;

use tracing::warn;

#[cfg(test)]
mod tests;

/// Callback invoked once a batch update has finished.
///
/// The argument is `true` if the surface completed the animated batch.
/// If a `Completion` is dropped without being completed, the callback is invoked with `false`.
#[derive(Default)]
pub struct Completion(RawCompletion);

impl Completion {
    pub fn none() -> Self {
        Completion(RawCompletion::Empty)
    }
    pub fn from_fn(f: impl FnOnce(bool) + 'static) -> Self {
        Completion(RawCompletion::Fn(Box::new(f)))
    }
    pub fn from_option(f: Option<impl FnOnce(bool) + 'static>) -> Self {
        f.map_or_else(Self::none, Self::from_fn)
    }
    pub fn is_none(&self) -> bool {
        matches!(self.0, RawCompletion::Empty)
    }

    pub fn complete(mut self, finished: bool) {
        self.fire(finished);
    }
    fn fire(&mut self, finished: bool) {
        match take(&mut self.0) {
            RawCompletion::Empty => {}
            RawCompletion::Fn(f) => f(finished),
        }
    }
}
impl Drop for Completion {
    fn drop(&mut self) {
        if !self.is_none() {
            warn!("batch completion dropped before it was signaled");
            self.fire(false);
        }
    }
}

impl<F: FnOnce(bool) + 'static> From<F> for Completion {
    fn from(f: F) -> Self {
        Self::from_fn(f)
    }
}

#[derive(Default)]
enum RawCompletion {
    #[default]
    Empty,
    Fn(Box<dyn FnOnce(bool) + 'static>),
}
