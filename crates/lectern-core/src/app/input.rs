impl<D, IN, OBS> PresenterApp<D, IN, OBS>
where
    D: SlideDeck,
    IN: InputProvider,
    OBS: NavigationObserver,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error, drain stopped for this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        let _ = match event {
            InputEvent::Next => self.request_next(now_ms),
            InputEvent::Previous => self.request_previous(now_ms),
            InputEvent::First => self.request_first(now_ms),
            InputEvent::Last => self.request_last(now_ms),
            InputEvent::GoTo(position) => self.request_go_to(position, now_ms),
        };
    }
}
