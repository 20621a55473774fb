//! Navigation state machine for a fixed-length slide deck.
//!
//! One authority owns the current position and the transition lock; every
//! intent source goes through the same guard. Requests that cannot commit
//! are dropped silently (logged at debug level only): mid-transition and
//! out-of-range attempts are expected and frequent, not exceptional.

use log::{debug, warn};

use crate::{
    deck::SlideDeck,
    input::{InputEvent, InputProvider},
    observe::NavigationObserver,
    render::{AnimationFrame, AnimationKind, AnimationSpec, SlideView},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Why a navigation request was dropped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoreReason {
    /// A transition settle window is still open.
    Busy,
    /// Target position outside the deck.
    OutOfRange,
    /// Target equals the current position.
    AlreadyCurrent,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestOutcome {
    Committed,
    Ignored(IgnoreReason),
}

impl RequestOutcome {
    pub fn is_committed(self) -> bool {
        matches!(self, Self::Committed)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigatorConfig {
    /// Lock window after a committed transition, matching the visual
    /// transition duration.
    pub settle_ms: u16,
    /// 1-based position shown at startup.
    pub start_position: u16,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            settle_ms: 300,
            start_position: 1,
        }
    }
}

pub struct PresenterApp<D, IN, OBS>
where
    D: SlideDeck,
    IN: InputProvider,
    OBS: NavigationObserver,
{
    deck: D,
    input: IN,
    observers: OBS,
    config: NavigatorConfig,
    position: u16,
    settle_deadline_ms: Option<u64>,
    transition: Option<AnimationSpec>,
    pending_redraw: bool,
    session_start_ms: Option<u64>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
