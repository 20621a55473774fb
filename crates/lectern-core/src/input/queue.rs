use heapless::Deque;
use log::warn;

use super::{InputEvent, InputProvider};

/// Bounded FIFO for push-based hosts: event listeners push, the tick loop
/// drains.
#[derive(Default)]
pub struct QueuedInput<const N: usize> {
    events: Deque<InputEvent, N>,
}

impl<const N: usize> QueuedInput<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Enqueue one normalized event. When the queue is full the event is
    /// dropped; input sources re-issue on the next discrete user action.
    pub fn push(&mut self, event: InputEvent) {
        if self.events.push_back(event).is_err() {
            warn!("input: queue full, dropped {:?}", event);
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<const N: usize> InputProvider for QueuedInput<N> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
