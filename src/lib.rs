//! Browser frontend for the lectern slide navigator.
//!
//! The page owns the slide markup and styling; this crate owns navigation.
//! DOM adapters normalize raw events into intents, a frame loop drives the
//! core state machine with `performance.now()`, and the derived indicators
//! (counter, progress bar, buttons, title, accessibility attributes) are
//! written back to the page whenever a tick requests a render.

mod deck;
mod dom;
mod events;
mod logger;
mod runtime;

use std::cell::RefCell;
use std::rc::Rc;

use lectern_core::{
    app::{NavigatorConfig, PresenterApp, TickResult},
    deck::{SlideDeck, StaticDeck},
    input::{InputEvent, QueuedInput},
    observe::NavigationObserver,
};
use log::{LevelFilter, debug, info};
use wasm_bindgen::prelude::*;

use crate::dom::DomPresenter;
use crate::events::SharedInput;

pub(crate) const INPUT_QUEUE_DEPTH: usize = 16;

pub(crate) type App = PresenterApp<StaticDeck, SharedInput, NavigationLog>;

/// Study-tracking observer: mirrors the navigation trail into the console.
pub(crate) struct NavigationLog;

impl NavigationObserver for NavigationLog {
    fn on_slide_changed(&mut self, position: u16) {
        let deck = deck::presentation_deck();
        let title = deck
            .slide_at(position)
            .map(|slide| slide.title)
            .unwrap_or("?");
        info!("nav: slide {position}: {title}");
    }

    fn on_transition_settled(&mut self, position: u16) {
        debug!("nav: transition settled on slide {position}");
    }
}

/// Shared handles wiring the adapters, the state machine, and the page.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub app: Rc<RefCell<App>>,
    pub queue: Rc<RefCell<QueuedInput<INPUT_QUEUE_DEPTH>>>,
    pub presenter: Rc<RefCell<DomPresenter>>,
}

impl AppContext {
    /// Drain pending input, advance the state machine, render if requested.
    pub fn drive(&self) {
        let now = runtime::now_ms();
        let rendered = self.app.borrow_mut().tick(now);
        if rendered == TickResult::RenderRequested {
            let app = self.app.borrow();
            app.with_view(now, |view| self.presenter.borrow_mut().apply(&view));
        }
    }

    /// Enqueue one normalized intent and process it immediately.
    pub fn push(&self, event: InputEvent) {
        self.queue.borrow_mut().push(event);
        self.drive();
    }
}

thread_local! {
    static CONTEXT: RefCell<Option<AppContext>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Debug);

    let queue = Rc::new(RefCell::new(QueuedInput::new()));
    let app = PresenterApp::new(
        deck::presentation_deck(),
        SharedInput::new(queue.clone()),
        NavigationLog,
        NavigatorConfig::default(),
    );

    let presenter = DomPresenter::mount()?;
    let ctx = AppContext {
        app: Rc::new(RefCell::new(app)),
        queue,
        presenter: Rc::new(RefCell::new(presenter)),
    };

    events::bind(&ctx)?;
    runtime::start_frame_loop(ctx.clone())?;

    let total = ctx.app.borrow().slide_total();
    CONTEXT.with(|slot| *slot.borrow_mut() = Some(ctx));
    info!("lectern: presentation ready ({total} slides)");
    Ok(())
}

/// Jump to the first slide tagged with `category`. Part of the page API.
#[wasm_bindgen]
pub fn jump_to_category(category: &str) {
    let _ = with_context(|ctx| {
        let now = runtime::now_ms();
        let _ = ctx.app.borrow_mut().request_jump_to_category(category, now);
        ctx.drive();
    });
}

/// 1-based position of the shown slide, `0` before startup.
#[wasm_bindgen]
pub fn current_position() -> u16 {
    with_context(|ctx| ctx.app.borrow().position()).unwrap_or(0)
}

/// Fixed slide count of the deck, `0` before startup.
#[wasm_bindgen]
pub fn slide_total() -> u16 {
    with_context(|ctx| ctx.app.borrow().slide_total()).unwrap_or(0)
}

fn with_context<R>(f: impl FnOnce(&AppContext) -> R) -> Option<R> {
    CONTEXT.with(|slot| slot.borrow().as_ref().map(f))
}
