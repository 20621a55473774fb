//! View models and animation metadata for display collaborators.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Derived display state for the current slide, consumed by render
/// collaborators (counter, progress bar, buttons, title, accessibility).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideView<'a> {
    /// 1-based position of the shown slide.
    pub position: u16,
    pub slide_total: u16,
    pub title: &'a str,
    pub category: &'a str,
    /// 0..=100
    pub progress_pct: u8,
    pub can_retreat: bool,
    pub can_advance: bool,
    /// True while a transition settle window is open.
    pub locked: bool,
    pub animation: Option<AnimationFrame>,
}
