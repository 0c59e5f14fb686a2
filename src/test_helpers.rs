use std::{cell::RefCell, collections::BTreeSet, fmt::Write};

use assert_call::call;

use crate::{AnimatableListSurface, AnimationConfig, BatchUpdates, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    Immediately(bool),
    Deferred,
    Never,
}

/// Surface that reports every call through `call!`.
pub struct RecordingSurface {
    finish: Finish,
    config: AnimationConfig,
    pending: RefCell<Option<Box<dyn FnOnce(bool)>>>,
}

impl RecordingSurface {
    pub fn new(finish: Finish) -> Self {
        Self {
            finish,
            config: AnimationConfig::default(),
            pending: RefCell::new(None),
        }
    }
    pub fn with_config(self, config: AnimationConfig) -> Self {
        Self { config, ..self }
    }

    /// Signals a deferred batch completion, as the host's event loop would.
    pub fn finish_pending(&self, finished: bool) {
        let completion = self.pending.borrow_mut().take();
        call!("signal {finished}");
        completion.expect("no pending batch")(finished);
    }
}

impl AnimatableListSurface for RecordingSurface {
    fn perform_batch_updates(
        &self,
        config: &AnimationConfig,
        updates: Box<dyn FnOnce(&mut dyn BatchUpdates)>,
        completion: Box<dyn FnOnce(bool)>,
    ) {
        call!("begin {:?}", config.duration);
        updates(&mut Recorder);
        call!("commit");
        match self.finish {
            Finish::Immediately(finished) => {
                call!("signal {finished}");
                completion(finished);
            }
            Finish::Deferred => *self.pending.borrow_mut() = Some(completion),
            Finish::Never => drop(completion),
        }
    }

    fn reload_items(&self, positions: &BTreeSet<Position>) {
        call!("reload {}", fmt_positions(positions));
    }

    fn animation_config(&self) -> AnimationConfig {
        self.config
    }
}

struct Recorder;

impl BatchUpdates for Recorder {
    fn delete_items(&mut self, positions: &BTreeSet<Position>) {
        call!("delete {}", fmt_positions(positions));
    }
    fn insert_items(&mut self, positions: &BTreeSet<Position>) {
        call!("insert {}", fmt_positions(positions));
    }
    fn move_item(&mut self, from: Position, to: Position) {
        call!("move {from} -> {to}");
    }
}

pub fn fmt_positions(positions: &BTreeSet<Position>) -> String {
    let mut s = String::from("[");
    for (i, p) in positions.iter().enumerate() {
        if i != 0 {
            s.push_str(", ");
        }
        write!(s, "{p}").unwrap();
    }
    s.push(']');
    s
}
