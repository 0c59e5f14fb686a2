use std::{collections::BTreeSet, time::Duration};

use serde::{Deserialize, Serialize};

use crate::Position;

/// Animation settings applied to a whole batch update.
///
/// Deserializes from `{ "duration": <seconds> }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    #[serde(with = "secs_f64")]
    pub duration: Duration,
}
impl AnimationConfig {
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(1);

    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }
}
impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

mod secs_f64 {
    use std::time::Duration;

    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(value.as_secs_f64())
    }
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}

/// Structural mutations of a list surface.
///
/// Only reachable from inside [`AnimatableListSurface::perform_batch_updates`].
/// Callers never pass empty sets.
pub trait BatchUpdates {
    /// Removes items at positions in the old state.
    fn delete_items(&mut self, positions: &BTreeSet<Position>);

    /// Adds items at positions in the new state.
    fn insert_items(&mut self, positions: &BTreeSet<Position>);

    /// Moves one item from a position in the old state to a position in the new state.
    fn move_item(&mut self, from: Position, to: Position);
}

/// A list or grid view that can animate batched structural updates.
///
/// All methods are called on the thread that owns the surface.
pub trait AnimatableListSurface {
    /// Runs `updates` as one atomic animated transaction.
    ///
    /// `updates` must be called exactly once, before this method returns or later from the
    /// surface's event loop. `completion` must be called exactly once after the transaction
    /// has been committed, with `false` if the animation could not finish
    /// (e.g. the surface was detached). It must not be called from inside `updates`.
    fn perform_batch_updates(
        &self,
        config: &AnimationConfig,
        updates: Box<dyn FnOnce(&mut dyn BatchUpdates)>,
        completion: Box<dyn FnOnce(bool)>,
    );

    /// Refreshes the content of items at positions in the current state, without animation.
    fn reload_items(&self, positions: &BTreeSet<Position>);

    fn animation_config(&self) -> AnimationConfig {
        AnimationConfig::default()
    }
}
