//! Animation loop lifecycle
//!
//! Tracks whether a loop is running and which frame request is outstanding,
//! independent of the host's scheduling primitive. After `stop` returns, no
//! frame that was already requested is allowed to run its body.

/// Loop lifecycle, generic over the host's request handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState<H> {
    #[default]
    Stopped,
    Running {
        /// Outstanding frame request, if one has been made
        pending: Option<H>,
    },
}

impl<H: Copy> LoopState<H> {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running { .. })
    }

    pub fn pending(&self) -> Option<H> {
        match self {
            LoopState::Running { pending } => *pending,
            LoopState::Stopped => None,
        }
    }

    /// Returns true when the caller should request the first frame
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        *self = LoopState::Running { pending: None };
        true
    }

    /// Record the handle of a frame request just made
    pub fn scheduled(&mut self, handle: H) {
        if let LoopState::Running { pending } = self {
            *pending = Some(handle);
        }
    }

    /// A requested frame has fired. Returns whether its body should run.
    pub fn frame_fired(&mut self) -> bool {
        match self {
            LoopState::Running { pending } => {
                *pending = None;
                true
            }
            LoopState::Stopped => false,
        }
    }

    /// Stop the loop. Returns the outstanding request to cancel, if any.
    pub fn stop(&mut self) -> Option<H> {
        let pending = self.pending();
        *self = LoopState::Stopped;
        pending
    }
}
