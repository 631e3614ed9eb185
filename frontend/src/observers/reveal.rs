use std::cell::OnceCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::guard::{Release, ScopedWatch};

/// One-way latch over visible-fraction samples. Flips to revealed the first
/// time a sample reaches the threshold and ignores everything afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    /// Feeds one sample. Returns `true` only for the sample that flips the
    /// latch.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.revealed || !(visible_fraction >= self.threshold) {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Release for IntersectionObserver {
    fn release(&self) {
        debug!("disconnecting reveal observer");
        self.disconnect();
    }
}

/// Live intersection watch for one element. Disconnects after the first
/// reveal or when dropped, never twice.
pub struct RevealWatcher {
    watch: Rc<OnceCell<ScopedWatch<IntersectionObserver>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        // The callback holds a second reference, release before it goes away.
        if let Some(watch) = self.watch.get() {
            watch.release();
        }
    }
}

/// Starts watching the element behind `node_ref` and calls `on_reveal` once,
/// the first time its visible fraction reaches `threshold`.
///
/// Returns `None` when nothing is attached to `node_ref` or the browser has
/// no intersection observation. Both leave the caller permanently hidden.
pub fn watch_first_intersection<F>(
    node_ref: &NodeRef,
    threshold: f64,
    on_reveal: F,
) -> Option<RevealWatcher>
where
    F: FnOnce() + 'static,
{
    let Some(element) = node_ref.cast::<Element>() else {
        debug!("reveal target not attached, nothing to watch");
        return None;
    };

    let mut latch = RevealLatch::new(threshold);
    let threshold = latch.threshold();
    let watch: Rc<OnceCell<ScopedWatch<IntersectionObserver>>> = Rc::new(OnceCell::new());
    let mut on_reveal = Some(on_reveal);

    let callback = {
        let watch = Rc::clone(&watch);
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                if latch.is_revealed() {
                    return;
                }
                let crossed = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting() && latch.observe(entry.intersection_ratio()));
                if !crossed {
                    return;
                }
                if let Some(watch) = watch.get() {
                    watch.release();
                }
                if let Some(on_reveal) = on_reveal.take() {
                    on_reveal();
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("intersection observation unavailable, section stays hidden: {:?}", err);
            return None;
        }
    };
    observer.observe(&element);
    debug!("watching section for reveal at threshold {}", threshold);

    let _ = watch.set(ScopedWatch::new(observer));

    Some(RevealWatcher {
        watch,
        _callback: callback,
    })
}

/// `false` until the element behind `node_ref` first shows at least
/// `threshold` of its area, `true` from then on.
#[hook]
pub fn use_reveal(node_ref: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node_ref, threshold)| {
                let watcher =
                    watch_first_intersection(node_ref, *threshold, move || revealed.set(true));
                move || drop(watcher)
            },
            (node_ref, threshold),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::RevealLatch;

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::new(0.15);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut latch = RevealLatch::new(0.15);
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.149));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn reaching_threshold_reveals() {
        let mut latch = RevealLatch::new(0.15);
        assert!(latch.observe(0.15));
        assert!(latch.is_revealed());
    }

    #[test]
    fn flips_exactly_once() {
        let mut latch = RevealLatch::new(0.15);
        let transitions = [0.1, 0.5, 1.0, 0.0, 0.9, 0.2]
            .into_iter()
            .filter(|fraction| latch.observe(*fraction))
            .count();
        assert_eq!(transitions, 1);
        assert!(latch.is_revealed());
    }

    #[test]
    fn never_returns_to_hidden() {
        let mut latch = RevealLatch::new(0.15);
        latch.observe(0.6);
        for fraction in [0.0, 0.01, 0.14] {
            latch.observe(fraction);
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealLatch::new(3.0).threshold(), 1.0);
        assert_eq!(RevealLatch::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn nan_sample_does_not_reveal() {
        let mut latch = RevealLatch::new(0.15);
        assert!(!latch.observe(f64::NAN));
        assert!(!latch.is_revealed());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::watch_first_intersection;
    use wasm_bindgen_test::*;
    use yew::NodeRef;

    #[wasm_bindgen_test]
    fn detached_ref_is_inert() {
        let watcher = watch_first_intersection(&NodeRef::default(), 0.15, || {
            panic!("detached element must never reveal")
        });
        assert!(watcher.is_none());
    }
}
