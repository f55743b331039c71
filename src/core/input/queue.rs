//=========================================================================
// Event Queue
//=========================================================================
//
// FIFO between the platform layer and the active screen.
//
// Architecture:
//   Platform ──EventSender::send()──> channel ──EventQueue::poll_event()──> Screen
//
// Both ends live on the main thread; the channel is used as an unbounded
// queue, not for cross-thread handoff. Nothing is ever dropped while the
// receiver is alive, so `Closed` and `Resized` survive stretches where no
// frame runs. Draining stops as soon as the queue is empty, so a
// `handle_input` pass always terminates.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::event::Event;

//=== EventSource =========================================================

/// Anything screens can poll for pending events.
pub trait EventSource {
    /// Returns the oldest pending event, or `None` once the queue is empty.
    fn poll_event(&mut self) -> Option<Event>;
}

impl EventSource for VecDeque<Event> {
    fn poll_event(&mut self) -> Option<Event> {
        self.pop_front()
    }
}

//=== Channel =============================================================

/// Creates an unbounded event channel.
pub fn event_channel() -> (EventSender, EventQueue) {
    let (tx, rx) = unbounded();
    (EventSender { sender: tx }, EventQueue { receiver: rx })
}

//=== EventSender =========================================================

/// Producer side, held by the platform layer (and by tests).
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<Event>,
}

impl EventSender {
    /// Enqueues an event. Returns `false` only once the application side
    /// has been dropped.
    pub fn send(&self, event: Event) -> bool {
        match self.sender.send(event) {
            Ok(()) => true,
            Err(err) => {
                warn!(target: "input", "Event queue disconnected, dropping {:?}", err.0);
                false
            }
        }
    }
}

//=== EventQueue ==========================================================

/// Consumer side, owned by the application context.
#[derive(Debug)]
pub struct EventQueue {
    receiver: Receiver<Event>,
}

impl EventQueue {
    /// Number of events waiting.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl EventSource for EventQueue {
    fn poll_event(&mut self) -> Option<Event> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
