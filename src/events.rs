//! DOM event adapters.
//!
//! Each raw event becomes at most one normalized intent pushed into the
//! shared queue; classification lives in the core so every adapter here is
//! wiring only.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use lectern_core::deck::ReferenceLibrary;
use lectern_core::input::{
    InputEvent, InputProvider, QueuedInput,
    keyboard::classify_key,
    pointer::{ClickAction, classify_click},
    swipe::{SwipeConfig, TouchTrace, classify_swipe},
};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

use crate::{AppContext, INPUT_QUEUE_DEPTH, runtime};

const REFERENCE_SELECTOR: &str = ".corner-section-ref";

/// Clonable handle over the app's input queue, owned by the navigator and
/// fed by the listeners below.
pub struct SharedInput {
    queue: Rc<RefCell<QueuedInput<INPUT_QUEUE_DEPTH>>>,
}

impl SharedInput {
    pub fn new(queue: Rc<RefCell<QueuedInput<INPUT_QUEUE_DEPTH>>>) -> Self {
        Self { queue }
    }
}

impl InputProvider for SharedInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        self.queue.borrow_mut().poll_event()
    }
}

/// Register every input adapter on the page.
pub fn bind(ctx: &AppContext) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    bind_keyboard(ctx, &document)?;
    bind_button(ctx, &document, "prevBtn", InputEvent::Previous)?;
    bind_button(ctx, &document, "nextBtn", InputEvent::Next)?;
    bind_slide_clicks(ctx, &document)?;
    bind_touch(ctx, &document)?;
    Ok(())
}

fn bind_keyboard(ctx: &AppContext, document: &Document) -> Result<(), JsValue> {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if let Some(intent) = classify_key(&event.key()) {
            event.prevent_default();
            ctx.push(intent);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bind_button(
    ctx: &AppContext,
    document: &Document,
    id: &str,
    intent: InputEvent,
) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id(id) else {
        warn!("events: #{id} not found, button navigation disabled");
        return Ok(());
    };

    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        event.prevent_default();
        event.stop_propagation();
        ctx.push(intent);
    }) as Box<dyn FnMut(MouseEvent)>);

    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bind_slide_clicks(ctx: &AppContext, document: &Document) -> Result<(), JsValue> {
    let Ok(list) = document.query_selector_all(".slide") else {
        return Ok(());
    };

    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        let Ok(slide) = node.dyn_into::<HtmlElement>() else {
            continue;
        };

        let ctx = ctx.clone();
        let clicked_slide = slide.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handle_slide_click(&ctx, &clicked_slide, &event);
        }) as Box<dyn FnMut(MouseEvent)>);

        slide.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn handle_slide_click(ctx: &AppContext, slide: &HtmlElement, event: &MouseEvent) {
    let over_reference = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(REFERENCE_SELECTOR).ok().flatten())
        .is_some();

    let rect = slide.get_bounding_client_rect();
    let x = event.client_x() as f32 - rect.left() as f32;

    match classify_click(x, rect.width() as f32, over_reference) {
        ClickAction::Navigate(intent) => ctx.push(intent),
        ClickAction::ReferenceLookup => show_reference(ctx, event),
    }
}

fn show_reference(ctx: &AppContext, event: &MouseEvent) {
    let Some(annotation) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };

    let text = annotation.text_content().unwrap_or_default();
    let key = text.trim();

    let app = ctx.app.borrow();
    let deck = app.deck();
    let Some(detail) = deck
        .section_reference(key)
        .or_else(|| deck.case_reference(key))
    else {
        debug!("events: no reference entry for {key:?}");
        return;
    };

    ctx.presenter.borrow().show_reference_notice(key, detail);
}

fn bind_touch(ctx: &AppContext, document: &Document) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id("slidesContainer") else {
        warn!("events: #slidesContainer not found, swipe navigation disabled");
        return Ok(());
    };

    // Start point and timestamp of the gesture in flight.
    let pending: Rc<RefCell<Option<(f32, f32, u64)>>> = Rc::new(RefCell::new(None));

    let start_state = pending.clone();
    let on_start = Closure::wrap(Box::new(move |event: TouchEvent| {
        if let Some(touch) = event.touches().item(0) {
            *start_state.borrow_mut() = Some((
                touch.client_x() as f32,
                touch.client_y() as f32,
                runtime::now_ms(),
            ));
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    container.add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref())?;
    on_start.forget();

    let ctx = ctx.clone();
    let end_state = pending;
    let on_end = Closure::wrap(Box::new(move |event: TouchEvent| {
        let Some((start_x, start_y, started_ms)) = end_state.borrow_mut().take() else {
            return;
        };
        let Some(touch) = event.changed_touches().item(0) else {
            return;
        };

        let trace = TouchTrace {
            start_x,
            start_y,
            end_x: touch.client_x() as f32,
            end_y: touch.client_y() as f32,
            duration_ms: runtime::now_ms().saturating_sub(started_ms) as u32,
        };

        if let Some(intent) = classify_swipe(&trace, SwipeConfig::default()) {
            ctx.push(intent);
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    container.add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref())?;
    on_end.forget();

    Ok(())
}
