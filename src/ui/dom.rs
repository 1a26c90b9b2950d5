//! Browser plumbing shared by the interactive components
//!
//! Every subscription here is a value: dropping it unsubscribes. Components
//! park these values with [`hold`] so they live exactly as long as the
//! component's reactive owner.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Keep `value` alive until the current owner is cleaned up, then drop it
pub fn hold<T: 'static>(value: T) {
    let stored = StoredValue::new_local(Some(value));
    on_cleanup(move || {
        let _ = stored.try_set_value(None);
    });
}

/// A window event listener removed on drop
pub struct Listener(Option<WindowListenerHandle>);

impl Listener {
    pub fn new(handle: WindowListenerHandle) -> Self {
        Self(Some(handle))
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

/// Repeating `requestAnimationFrame` callback.
///
/// The callback receives the frame timestamp in milliseconds. The loop runs
/// until [`FrameLoop::stop`] is called or the value is dropped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let next_frame = callback.clone();
        let still_running = running.clone();
        let next_pending = pending.clone();
        *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
            if !still_running.get() {
                return;
            }
            tick(time);
            if let Some(closure) = next_frame.borrow().as_ref() {
                next_pending.set(request_frame(closure));
            }
        }));

        if let Some(closure) = callback.borrow().as_ref() {
            pending.set(request_frame(closure));
        }

        Self {
            running,
            pending,
            callback,
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's reference to itself
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

/// Live `matchMedia` subscription
pub struct MediaWatch {
    query: web_sys::MediaQueryList,
    handler: Closure<dyn Fn(web_sys::MediaQueryListEvent)>,
}

impl MediaWatch {
    /// Calls `on_change` with the current match state right away and on
    /// every change. `None` when the query can't be evaluated.
    pub fn new(query: &str, on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let query = web_sys::window()?.match_media(query).ok()??;
        on_change(query.matches());

        let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
            move |e: web_sys::MediaQueryListEvent| on_change(e.matches()),
        );
        query
            .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { query, handler })
    }
}

impl Drop for MediaWatch {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.handler.as_ref().unchecked_ref());
    }
}

/// Full page load of `href`
pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(href) {
            leptos::logging::warn!("navigation to {} failed: {:?}", href, err);
        }
    }
}

/// Fade the body out over `fade`, then load `href`
pub fn navigate_with_fade(href: String, fade: Duration) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());

    let Some(body) = body else {
        navigate(&href);
        return;
    };

    let style = body.style();
    let _ = style.set_property("transition", &format!("opacity {}ms ease", fade.as_millis()));
    let _ = style.set_property("opacity", "0");

    // The page is going away; nothing needs to cancel this
    gloo_timers::callback::Timeout::new(fade.as_millis() as u32, move || navigate(&href)).forget();
}

pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}
