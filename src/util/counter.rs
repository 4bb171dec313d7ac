use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A shared call counter. Clones refer to the same count, so a clone can be moved into a stage
/// closure (including one running on another task) while the test keeps the original.
#[derive(Debug, Default, Clone)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> CallCounter {
        CallCounter::default()
    }

    /// Records one call.
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Wraps `f` so every invocation is counted before `f` runs.
    pub fn wrap<T, U, F>(&self, f: F) -> impl Fn(T) -> U + Send + Sync + use<T, U, F>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let counter = self.clone();
        move |v| {
            counter.hit();
            f(v)
        }
    }
}
