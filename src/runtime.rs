//! Frame loop and clock, the browser stand-ins for a firmware main loop.

use std::cell::RefCell;
use std::rc::Rc;

use lectern_core::labels;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::AppContext;

/// Monotonic milliseconds from `performance.now()`, falling back to the
/// wall clock in contexts without a performance timeline.
pub fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() as u64)
        .unwrap_or_else(|| js_sys::Date::now() as u64)
}

/// Drive the app once per animation frame: input drain, settle checks,
/// transition frames, and the once-per-second timer display.
pub fn start_frame_loop(ctx: AppContext) -> Result<(), JsValue> {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = handle.clone();
    let mut shown_second = u64::MAX;

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.drive();

        let now = now_ms();
        let second = ctx.app.borrow().session_elapsed_ms(now) / 1_000;
        if second != shown_second {
            shown_second = second;
            let mut buf = [0u8; 5];
            let label = labels::elapsed_label(second.saturating_mul(1_000), &mut buf);
            ctx.presenter.borrow().update_timer(label);
        }

        if let Some(callback) = next_frame.borrow().as_ref() {
            request_frame(callback);
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = handle.borrow().as_ref() {
        request_frame(callback);
    }
    Ok(())
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
