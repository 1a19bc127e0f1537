//! Shared test helpers for workspace crates.
//!
//! Instrumented deferred cells built on [`std::sync::LazyLock`]: each cell
//! materializes exactly once on first access, and the instrumentation
//! records whether and how often that happened.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

/// Shared materialization counter.
pub type Counter = Arc<AtomicUsize>;

/// Boxed deferred computation.
pub type Thunk<T> = Box<dyn FnOnce() -> T + Send>;

/// Deferred memoized cell with an opaque boxed initializer.
pub type TestCell<T> = LazyLock<T, Thunk<T>>;

/// Create a fresh shared counter starting at zero.
pub fn counter() -> Counter {
	Arc::new(AtomicUsize::new(0))
}

/// Read a counter.
pub fn count(counter: &Counter) -> usize {
	counter.load(Ordering::SeqCst)
}

/// Cell yielding `value`, incrementing `counter` on first materialization.
pub fn counting_cell<T: Send + 'static>(counter: &Counter, value: T) -> TestCell<T> {
	let counter = Arc::clone(counter);
	LazyLock::new(Box::new(move || {
		counter.fetch_add(1, Ordering::SeqCst);
		value
	}))
}

/// Cell that panics if it is ever materialized.
pub fn trap_cell<T: Send + 'static>(label: &'static str) -> TestCell<T> {
	LazyLock::new(Box::new(move || panic!("trap cell materialized: {label}")))
}

/// Cell that panics with exactly `message` as the payload when materialized.
///
/// The payload is the `&'static str` itself, so callers can assert it
/// arrived unaltered after [`std::panic::catch_unwind`].
pub fn failing_cell<T: Send + 'static>(message: &'static str) -> TestCell<T> {
	LazyLock::new(Box::new(move || std::panic::panic_any(message)))
}
