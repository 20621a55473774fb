//! Pointer adapter: slide click zones.

use super::InputEvent;

/// What a pointer press inside the slide area resolves to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClickAction {
    Navigate(InputEvent),
    /// Press landed on a reference annotation; informational, never a
    /// navigation intent.
    ReferenceLookup,
}

/// Classify a press at `x` (relative to the slide's left edge) inside a
/// slide of width `width`. The right half advances, the left half retreats;
/// a press over a reference annotation short-circuits to a lookup.
pub fn classify_click(x: f32, width: f32, over_reference: bool) -> ClickAction {
    if over_reference {
        return ClickAction::ReferenceLookup;
    }

    if x > width / 2.0 {
        ClickAction::Navigate(InputEvent::Next)
    } else {
        ClickAction::Navigate(InputEvent::Previous)
    }
}
