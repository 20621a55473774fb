impl<D, IN, OBS> PresenterApp<D, IN, OBS>
where
    D: SlideDeck,
    IN: InputProvider,
    OBS: NavigationObserver,
{
    /// Releases the lock once its own deadline passes. No other path
    /// clears `settle_deadline_ms`.
    fn tick_settle(&mut self, now_ms: u64) {
        let Some(deadline) = self.settle_deadline_ms else {
            return;
        };

        if now_ms < deadline {
            return;
        }

        self.settle_deadline_ms = None;
        debug!("nav: settled position={}", self.position);
        self.observers.on_transition_settled(self.position);
        self.pending_redraw = true;
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, self.config.settle_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }
}
