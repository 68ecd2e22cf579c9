//! Shared countdown state for the stateful transducers.

use std::cell::Cell;
use std::rc::Rc;

/// A decrement-only counter shared between a stateful transducer and
/// every reducing step built from it.
///
/// One `Countdown` is allocated per `take(n)`/`drop(n)` call. Clones
/// share the same cell, so the quota is spent across everything built
/// from the same transducer value. The count never increases and is
/// never reset.
#[derive(Clone, Debug)]
pub(super) struct Countdown {
    remaining: Rc<Cell<usize>>,
}

impl Countdown {
    pub(super) fn new(count: usize) -> Self {
        Self {
            remaining: Rc::new(Cell::new(count)),
        }
    }

    pub(super) fn remaining(&self) -> usize {
        self.remaining.get()
    }

    pub(super) fn is_exhausted(&self) -> bool {
        self.remaining.get() == 0
    }

    /// Spends one count. Callers must check `is_exhausted` first.
    pub(super) fn spend(&self) {
        self.remaining.set(self.remaining.get() - 1);
    }
}
