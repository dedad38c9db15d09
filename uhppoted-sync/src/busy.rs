use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reference count of outstanding requests, gating a loading indicator.
///
/// Every request holds a [`BusyGuard`] for its lifetime, so the count is
/// decremented exactly once however the request settles.
#[derive(Debug, Clone, Default)]
pub struct BusyCounter {
    count: Arc<AtomicUsize>,
}

impl BusyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&self) -> BusyGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            count: Arc::clone(&self.count),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.count() > 0
    }
}

#[must_use = "the request is only counted while the guard is held"]
#[derive(Debug)]
pub struct BusyGuard {
    count: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}
