#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Token identifying one restoration pass, handed out by
/// [`ScrollLock::begin_unlock`] and checked by [`ScrollLock::finish_unlock`].
pub type RestoreToken = u64;

/// Where the machine is in the capture/restore lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Phase {
    /// No capture is live; the page scrolls normally.
    #[default]
    Unlocked,
    /// A modal is open and the pre-open offset is held.
    Locked { offset: f64 },
    /// The modal closed and the offset has been re-applied; waiting out the
    /// browser's layout settle before smooth scrolling is re-enabled.
    Restoring { offset: f64 },
}

/// Scroll-position preservation across a modal's open/close lifecycle.
///
/// Pure state machine: the DOM side effects (CSS custom property,
/// `scroll-behavior`, the actual jumps) live in
/// [`crate::util::scroll::ScrollLockCoordinator`]. At most one capture is
/// live at a time; a new lock overwrites a prior one. The generation counter
/// makes a restoration timer that fires after the state has moved on a
/// detectable no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollLock {
    phase: Phase,
    generation: u64,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The captured vertical offset, while one is live.
    pub fn offset(&self) -> Option<f64> {
        match self.phase {
            Phase::Unlocked => None,
            Phase::Locked { offset } | Phase::Restoring { offset } => Some(offset),
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Locked { .. })
    }

    /// Captures the current offset on a modal-opened signal. A capture that
    /// is already live (including one mid-restoration) is overwritten.
    pub fn lock(&mut self, offset: f64) {
        self.phase = Phase::Locked { offset };
        self.generation += 1;
    }

    /// Starts restoration on a modal-closed signal.
    ///
    /// Returns the offset to re-apply plus the token the settle timer must
    /// present to [`ScrollLock::finish_unlock`]. Returns `None` when no
    /// capture is live, so a stray closed signal does nothing.
    pub fn begin_unlock(&mut self) -> Option<(f64, RestoreToken)> {
        match self.phase {
            Phase::Locked { offset } => {
                self.phase = Phase::Restoring { offset };
                self.generation += 1;
                Some((offset, self.generation))
            }
            Phase::Unlocked | Phase::Restoring { .. } => None,
        }
    }

    /// Completes restoration when the settle timer fires.
    ///
    /// Only transitions (and returns `true`) if the machine is still in the
    /// restoration the token came from; a timer firing after a re-lock or a
    /// second close leaves the state alone.
    pub fn finish_unlock(&mut self, token: RestoreToken) -> bool {
        if self.generation == token && matches!(self.phase, Phase::Restoring { .. }) {
            self.phase = Phase::Unlocked;
            true
        } else {
            false
        }
    }
}
