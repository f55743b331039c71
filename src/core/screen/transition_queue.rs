//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for screen stack transitions.
//
// Screens queue transitions here during their callbacks. The application
// applies this queue once the callback has returned, so no screen ever
// observes a half-applied stack mutation.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::Screen;

//=== Transition ==========================================================

/// A requested stack operation.
///
/// Screens are moved into the request; the stack takes exclusive ownership
/// when it is applied.
pub enum Transition {
    /// Pauses the active screen and makes a new one active on top of it.
    Push(Box<dyn Screen>),

    /// Destroys the active screen and resumes the one beneath it.
    Pop,

    /// Destroys the active screen and activates a new one in its place.
    Replace(Box<dyn Screen>),
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(screen) => write!(f, "Push({})", screen.name()),
            Self::Pop => write!(f, "Pop"),
            Self::Replace(screen) => write!(f, "Replace({})", screen.name()),
        }
    }
}

//=== Transition Queue ====================================================

/// FIFO of pending transitions.
pub struct TransitionQueue {
    queue: Vec<Transition>,
}

impl TransitionQueue {
    /// Creates a new empty transition queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition to be applied after the current callback.
    pub fn push(&mut self, transition: Transition) {
        self.queue.push(transition);
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued transitions.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.queue)
    }
}

impl Default for TransitionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransitionQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.queue.iter()).finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
