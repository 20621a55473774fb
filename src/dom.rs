//! Page bindings: element lookup at mount, display refresh from the view.

use lectern_core::{labels, render::SlideView};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use crate::deck::DECK_TITLE;

const ARIA_LABEL_BYTES: usize = 96;

/// Writes derived navigation indicators back to the page.
///
/// Every collaborator element is resolved once at mount; a missing element
/// is logged and its indicator stays dark, navigation is unaffected.
pub struct DomPresenter {
    document: Document,
    slides: Vec<HtmlElement>,
    prev_button: Option<HtmlButtonElement>,
    next_button: Option<HtmlButtonElement>,
    counter: Option<Element>,
    progress_fill: Option<HtmlElement>,
    timer_display: Option<Element>,
    reference_notice: Option<HtmlElement>,
    last_position: Option<u16>,
}

impl DomPresenter {
    pub fn mount() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let slides = collect_slides(&document);
        if slides.is_empty() {
            warn!("dom: no .slide elements found");
        }

        Ok(Self {
            slides,
            prev_button: lookup(&document, "prevBtn"),
            next_button: lookup(&document, "nextBtn"),
            counter: lookup(&document, "slideCounter"),
            progress_fill: query(&document, ".progress-fill"),
            timer_display: lookup(&document, "presentationTimer"),
            reference_notice: lookup(&document, "referenceNotice"),
            last_position: None,
            document,
        })
    }

    /// Full display refresh from one view snapshot.
    pub fn apply(&mut self, view: &SlideView<'_>) {
        if self.last_position != Some(view.position) {
            self.last_position = Some(view.position);
            self.hide_reference_notice();
        }

        self.apply_slides(view);
        self.apply_counter(view);
        self.apply_progress(view);
        self.apply_buttons(view);
        self.document
            .set_title(&format!("{} - {}", view.title, DECK_TITLE));
    }

    fn apply_slides(&self, view: &SlideView<'_>) {
        let mut aria_buf = [0u8; ARIA_LABEL_BYTES];
        let aria = labels::slide_aria_label(view.position, view.slide_total, view.title, &mut aria_buf);

        for (index, slide) in self.slides.iter().enumerate() {
            let position = index as u16 + 1;
            let classes = slide.class_list();
            if position == view.position {
                let _ = classes.add_1("active");
                // Entrance effects run only once the transition settles.
                if view.locked {
                    let _ = classes.remove_1("settled");
                } else {
                    let _ = classes.add_1("settled");
                }
                let _ = slide.set_attribute("aria-current", "step");
                let _ = slide.set_attribute("aria-label", aria);
            } else {
                let _ = classes.remove_2("active", "settled");
                let _ = slide.remove_attribute("aria-current");
            }
        }
    }

    fn apply_counter(&self, view: &SlideView<'_>) {
        let Some(counter) = &self.counter else {
            return;
        };
        let mut buf = [0u8; 12];
        counter.set_text_content(Some(labels::slide_counter_label(
            view.position,
            view.slide_total,
            &mut buf,
        )));
    }

    fn apply_progress(&self, view: &SlideView<'_>) {
        let Some(fill) = &self.progress_fill else {
            return;
        };
        let _ = fill
            .style()
            .set_property("width", &format!("{}%", view.progress_pct));
    }

    fn apply_buttons(&self, view: &SlideView<'_>) {
        if let Some(prev) = &self.prev_button {
            prev.set_disabled(!view.can_retreat);
        }
        if let Some(next) = &self.next_button {
            next.set_disabled(!view.can_advance);
        }
    }

    /// Elapsed-time display, refreshed by the frame loop once per second.
    pub fn update_timer(&self, label: &str) {
        if let Some(timer) = &self.timer_display {
            timer.set_text_content(Some(label));
        }
    }

    /// Informational lookup triggered by a reference annotation click.
    pub fn show_reference_notice(&self, key: &str, detail: &str) {
        let Some(notice) = &self.reference_notice else {
            return;
        };
        notice.set_text_content(Some(&format!("{key}: {detail}")));
        let _ = notice.class_list().add_1("visible");
    }

    fn hide_reference_notice(&self) {
        if let Some(notice) = &self.reference_notice {
            let _ = notice.class_list().remove_1("visible");
        }
    }
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(element) = document.get_element_by_id(id) else {
        warn!("dom: #{id} not found, indicator disabled");
        return None;
    };

    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => {
            warn!("dom: #{id} has an unexpected element type");
            None
        }
    }
}

fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    let found = document.query_selector(selector).ok().flatten();
    let Some(element) = found else {
        warn!("dom: {selector} not found, indicator disabled");
        return None;
    };

    element.dyn_into::<T>().ok()
}

fn collect_slides(document: &Document) -> Vec<HtmlElement> {
    let mut slides = Vec::new();
    if let Ok(list) = document.query_selector_all(".slide") {
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(element) = node.dyn_into::<HtmlElement>() {
                    slides.push(element);
                }
            }
        }
    }
    slides
}
