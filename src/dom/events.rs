// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners registered while a view renders are collected here. The App takes
// them after each render and drops the previous set, which removes those
// listeners and frees their closures.
// ============================================================================

use std::cell::RefCell;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

thread_local! {
    static RENDERED: RefCell<Vec<EventListener>> = const { RefCell::new(Vec::new()) };
}

fn keep(listener: EventListener) {
    RENDERED.with(|listeners| listeners.borrow_mut().push(listener));
}

/// Listeners registered since the last call
pub fn take_rendered_listeners() -> Vec<EventListener> {
    RENDERED.with(|listeners| std::mem::take(&mut *listeners.borrow_mut()))
}

pub fn on_click<F>(element: &Element, mut handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    keep(EventListener::new(element, "click", move |event| {
        handler(event.clone().unchecked_into())
    }));
}

/// Fires on every keystroke of an `<input>` or `<textarea>`
pub fn on_input<F>(element: &Element, mut handler: F)
where
    F: FnMut(Event) + 'static,
{
    keep(EventListener::new(element, "input", move |event| handler(event.clone())));
}

/// Checkbox toggles
pub fn on_change<F>(element: &Element, mut handler: F)
where
    F: FnMut(Event) + 'static,
{
    keep(EventListener::new(element, "change", move |event| handler(event.clone())));
}

/// Form submission with the browser's page reload suppressed
pub fn on_submit<F>(element: &Element, mut handler: F)
where
    F: FnMut() + 'static,
{
    let options = EventListenerOptions::enable_prevent_default();
    keep(EventListener::new_with_options(element, "submit", options, move |event| {
        event.prevent_default();
        handler();
    }));
}
