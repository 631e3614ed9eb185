use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use super::guard::{Release, ScopedWatch};

/// Vertical offset past which the page counts as scrolled. Strictly greater
/// than, recomputed from scratch on every event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold {
    offset_px: f64,
}

impl ScrollThreshold {
    pub const fn new(offset_px: f64) -> Self {
        Self { offset_px }
    }

    pub fn is_past(&self, scroll_y: f64) -> bool {
        scroll_y > self.offset_px
    }
}

pub struct ListenerRegistration {
    target: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Release for ListenerRegistration {
    fn release(&self) {
        debug!("removing window {} listener", self.event);
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to remove window {} listener: {:?}", self.event, err);
        }
    }
}

pub type WindowListener = ScopedWatch<ListenerRegistration>;

/// Attaches `handler` to a window event. The listener lives until the
/// returned handle is released or dropped. `None` when there is no window
/// or the browser refuses the registration.
pub fn listen_window<F>(event: &'static str, handler: F) -> Option<WindowListener>
where
    F: FnMut() + 'static,
{
    let Some(target) = web_sys::window() else {
        warn!("no window available, {} listener not attached", event);
        return None;
    };
    let callback = Closure::<dyn FnMut()>::new(handler);

    if let Err(err) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        warn!("failed to attach window {} listener: {:?}", event, err);
        return None;
    }
    debug!("attached window {} listener", event);

    Some(ScopedWatch::new(ListenerRegistration {
        target,
        event,
        callback,
    }))
}

/// `true` while the window is scrolled past `threshold`. One scroll listener
/// per mounted caller, removed on unmount.
#[hook]
pub fn use_scrolled(threshold: ScrollThreshold) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = listen_window("scroll", move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    if let Ok(scroll_y) = window.scroll_y() {
                        scrolled.set(threshold.is_past(scroll_y));
                    }
                });

                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::ScrollThreshold;

    const HEADER: ScrollThreshold = ScrollThreshold::new(40.0);

    #[test]
    fn strictly_greater_than_offset() {
        assert!(!HEADER.is_past(0.0));
        assert!(!HEADER.is_past(40.0));
        assert!(HEADER.is_past(40.5));
        assert!(HEADER.is_past(41.0));
    }

    #[test]
    fn toggles_both_ways_without_hysteresis() {
        let seen: Vec<bool> = [41.0, 40.0, 41.0, 39.0]
            .into_iter()
            .map(|y| HEADER.is_past(y))
            .collect();
        assert_eq!(seen, vec![true, false, true, false]);
    }

    #[test]
    fn matches_comparison_for_a_sweep_of_offsets() {
        for px in 0..200 {
            let y = f64::from(px);
            assert_eq!(HEADER.is_past(y), y > 40.0, "offset {px}");
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::listen_window;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    fn dispatch(name: &str) {
        let window = web_sys::window().unwrap();
        let event = Event::new(name).unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn dropped_listener_stops_receiving_events() {
        let hits = Rc::new(Cell::new(0u32));
        let listener = {
            let hits = Rc::clone(&hits);
            listen_window("scroll", move || hits.set(hits.get() + 1)).unwrap()
        };

        dispatch("scroll");
        assert_eq!(hits.get(), 1);

        drop(listener);
        dispatch("scroll");
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn explicit_release_detaches_before_drop() {
        let hits = Rc::new(Cell::new(0u32));
        let listener = {
            let hits = Rc::clone(&hits);
            listen_window("scroll", move || hits.set(hits.get() + 1)).unwrap()
        };

        assert!(listener.release());
        dispatch("scroll");
        assert_eq!(hits.get(), 0);
        assert!(!listener.release());
    }
}
