//! Keyboard adapter: fixed key table to navigation intents.

use super::InputEvent;

/// Map a key name (DOM `KeyboardEvent.key`) to a navigation intent.
///
/// Advance: ArrowRight, Space, PageDown. Retreat: ArrowLeft, Backspace,
/// PageUp. Home/End reach the first/last slide, digits 1..=9 jump
/// directly. Unrecognized keys produce no intent.
pub fn classify_key(key: &str) -> Option<InputEvent> {
    match key {
        "ArrowRight" | " " | "PageDown" => Some(InputEvent::Next),
        "ArrowLeft" | "Backspace" | "PageUp" => Some(InputEvent::Previous),
        "Home" => Some(InputEvent::First),
        "End" => Some(InputEvent::Last),
        other => classify_digit(other),
    }
}

fn classify_digit(key: &str) -> Option<InputEvent> {
    let mut chars = key.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    match first.to_digit(10) {
        Some(n) if n >= 1 => Some(InputEvent::GoTo(n as u16)),
        _ => None,
    }
}
