//! The shared action source.

use lift_core::Floor;

/// A drain-once cursor over a candidate's floor targets.
///
/// One queue exists per run.  Every car borrows it mutably during its step,
/// so a target taken by one car is gone for all others.
#[derive(Clone, Debug)]
pub struct ActionQueue<'a> {
    actions: &'a [Floor],
    cursor:  usize,
}

impl<'a> ActionQueue<'a> {
    pub fn new(actions: &'a [Floor]) -> Self {
        Self { actions, cursor: 0 }
    }

    /// Take the next floor target, if any remain.
    #[inline]
    pub fn next_target(&mut self) -> Option<Floor> {
        let target = self.actions.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(target)
    }

    /// Targets not yet taken.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.actions.len() - self.cursor
    }

    /// Targets taken so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
