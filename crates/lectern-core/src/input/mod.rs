//! Input abstraction layer.
//!
//! Adapters translate raw platform events into exactly one normalized
//! [`InputEvent`]; the navigator decides whether the transition is legal.

pub mod keyboard;
pub mod pointer;
pub mod swipe;

mod mock;
mod queue;

pub use mock::MockInput;
pub use queue::QueuedInput;

/// Normalized navigation intents, independent of input source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Next,
    Previous,
    First,
    Last,
    /// Direct jump to a 1-based slide position.
    GoTo(u16),
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
