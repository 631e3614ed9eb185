use std::cell::Cell;

/// A browser registration that can be torn down.
pub trait Release {
    fn release(&self);
}

/// Owns a registration and tears it down at most once: either through an
/// explicit `release()` or when the handle is dropped, whichever comes first.
pub struct ScopedWatch<R: Release> {
    inner: R,
    released: Cell<bool>,
}

impl<R: Release> ScopedWatch<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            released: Cell::new(false),
        }
    }

    /// Returns `true` if this call performed the teardown.
    pub fn release(&self) -> bool {
        if self.released.replace(true) {
            return false;
        }
        self.inner.release();
        true
    }
}

impl<R: Release> Drop for ScopedWatch<R> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::{Release, ScopedWatch};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counting(Rc<Cell<u32>>);

    impl Release for Counting {
        fn release(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn drop_releases_active_watch() {
        let counter = Counting::default();
        {
            let _watch = ScopedWatch::new(counter.clone());
            assert_eq!(counter.0.get(), 0);
        }
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn release_then_drop_releases_once() {
        let counter = Counting::default();
        let watch = ScopedWatch::new(counter.clone());
        assert!(watch.release());
        drop(watch);
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn repeated_release_is_a_no_op() {
        let counter = Counting::default();
        let watch = ScopedWatch::new(counter.clone());
        assert!(watch.release());
        assert!(!watch.release());
        assert!(!watch.release());
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn shared_handle_releases_once_across_owners() {
        let counter = Counting::default();
        let watch = Rc::new(ScopedWatch::new(counter.clone()));
        let from_callback = Rc::clone(&watch);
        assert!(from_callback.release());
        drop(from_callback);
        drop(watch);
        assert_eq!(counter.0.get(), 1);
    }
}
