impl<D, IN, OBS> PresenterApp<D, IN, OBS>
where
    D: SlideDeck,
    IN: InputProvider,
    OBS: NavigationObserver,
{
    pub fn request_next(&mut self, now_ms: u64) -> RequestOutcome {
        let target = self.position.saturating_add(1);
        self.apply_request(target, AnimationKind::SlideLeft, now_ms)
    }

    pub fn request_previous(&mut self, now_ms: u64) -> RequestOutcome {
        let target = self.position.saturating_sub(1);
        self.apply_request(target, AnimationKind::SlideRight, now_ms)
    }

    pub fn request_go_to(&mut self, target: u16, now_ms: u64) -> RequestOutcome {
        let kind = if target >= self.position {
            AnimationKind::SlideLeft
        } else {
            AnimationKind::SlideRight
        };
        self.apply_request(target, kind, now_ms)
    }

    pub fn request_first(&mut self, now_ms: u64) -> RequestOutcome {
        self.request_go_to(1, now_ms)
    }

    pub fn request_last(&mut self, now_ms: u64) -> RequestOutcome {
        let last = self.slide_total();
        self.request_go_to(last, now_ms)
    }

    /// Resolve a category tag to its first slide, then behave as a direct
    /// jump. An unknown tag is dropped like any other invalid target.
    pub fn request_jump_to_category(&mut self, category: &str, now_ms: u64) -> RequestOutcome {
        match self.deck.first_with_category(category) {
            Some(target) => self.request_go_to(target, now_ms),
            None => {
                debug!("nav: no slide with category {:?}", category);
                RequestOutcome::Ignored(IgnoreReason::OutOfRange)
            }
        }
    }

    fn apply_request(&mut self, target: u16, kind: AnimationKind, now_ms: u64) -> RequestOutcome {
        if self.settle_deadline_ms.is_some() {
            debug!("nav: busy, dropped request target={}", target);
            return RequestOutcome::Ignored(IgnoreReason::Busy);
        }

        let total = self.slide_total();
        if target < 1 || target > total {
            debug!("nav: target {} outside 1..={}", target, total);
            return RequestOutcome::Ignored(IgnoreReason::OutOfRange);
        }

        if target == self.position {
            return RequestOutcome::Ignored(IgnoreReason::AlreadyCurrent);
        }

        let from = self.position;

        // The lock is taken before the notification and before any
        // scheduling so a second request from the same burst observes it.
        self.settle_deadline_ms = Some(now_ms.saturating_add(self.config.settle_ms as u64));
        self.position = target;
        self.start_transition(kind, now_ms);
        self.pending_redraw = true;
        debug!("nav: slide {} -> {} of {}", from, target, total);
        self.observers.on_slide_changed(target);

        RequestOutcome::Committed
    }
}
