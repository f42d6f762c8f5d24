//! Locking primitives that work with and without `std`.

use alloc::sync::Arc;

/// A mutex whose `lock` never fails.
///
/// A poisoned lock is recovered: every game operation leaves its state
/// consistent before it can panic.
#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;

/// A value shared between callers, serialized by its own lock.
pub type Shared<T> = Arc<Mutex<T>>;

/// Wraps `value` for sharing.
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}
