use std::cell::{LazyCell, OnceCell};
use std::sync::{LazyLock, OnceLock};

use crate::protocol::{ForceDeep, Forced};

// Collaboration boundary with the host evaluation runtime: triggering a
// cell invokes the runtime's own compute-to-canonical-form step, then the
// traversal recurses into the materialized result. The computation itself
// is never implemented here, and a failure inside it unwinds unchanged.

impl<T: ForceDeep, F: FnOnce() -> T> ForceDeep for LazyCell<T, F> {
	fn force_deep(&self) -> Forced {
		LazyCell::force(self).force_deep()
	}
}

impl<T: ForceDeep, F: FnOnce() -> T> ForceDeep for LazyLock<T, F> {
	fn force_deep(&self) -> Forced {
		LazyLock::force(self).force_deep()
	}
}

impl<T: ForceDeep> ForceDeep for OnceCell<T> {
	// An unset cell carries no pending computation, so nothing is
	// reachable; a set cell forces its stored value.
	fn force_deep(&self) -> Forced {
		if let Some(value) = self.get() {
			value.force_deep();
		}
		Forced
	}
}

impl<T: ForceDeep> ForceDeep for OnceLock<T> {
	fn force_deep(&self) -> Forced {
		if let Some(value) = self.get() {
			value.force_deep();
		}
		Forced
	}
}
