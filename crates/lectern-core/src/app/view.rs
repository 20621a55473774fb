impl<D, IN, OBS> PresenterApp<D, IN, OBS>
where
    D: SlideDeck,
    IN: InputProvider,
    OBS: NavigationObserver,
{
    pub fn new(deck: D, input: IN, observers: OBS, mut config: NavigatorConfig) -> Self {
        let total = deck.slide_count().max(1);
        config.settle_ms = config.settle_ms.max(1);
        config.start_position = config.start_position.clamp(1, total);

        Self {
            deck,
            input,
            observers,
            position: config.start_position,
            config,
            settle_deadline_ms: None,
            transition: None,
            pending_redraw: true,
            session_start_ms: None,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.session_start_ms.is_none() {
            self.session_start_ms = Some(now_ms);
        }

        self.process_inputs(now_ms);
        self.tick_settle(now_ms);

        let rendered = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    pub fn with_view<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(SlideView<'_>),
    {
        let total = self.slide_total();
        let (title, category) = match self.deck.slide_at(self.position) {
            Some(slide) => (slide.title, slide.category),
            None => ("Untitled", ""),
        };

        f(SlideView {
            position: self.position,
            slide_total: total,
            title,
            category,
            progress_pct: ((self.position as u32 * 100) / total as u32) as u8,
            can_retreat: self.position > 1,
            can_advance: self.position < total,
            locked: self.is_locked(),
            animation: self.transition_frame(now_ms),
        });
    }

    /// 1-based position of the shown slide.
    pub fn position(&self) -> u16 {
        self.position
    }

    pub fn slide_total(&self) -> u16 {
        self.deck.slide_count().max(1)
    }

    /// True while a transition settle window is open.
    pub fn is_locked(&self) -> bool {
        self.settle_deadline_ms.is_some()
    }

    pub fn deck(&self) -> &D {
        &self.deck
    }

    pub fn session_elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.session_start_ms.unwrap_or(now_ms))
    }

    pub fn with_observers<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut OBS) -> R,
    {
        f(&mut self.observers)
    }
}
