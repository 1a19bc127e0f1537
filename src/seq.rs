use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

use crate::protocol::{ForceDeep, Forced};

// Sequence impls walk the complete backbone before returning: a partially
// visited collection violates completeness even when every visited element
// was forced.

impl<T: ForceDeep> ForceDeep for [T] {
	fn force_deep(&self) -> Forced {
		for item in self {
			item.force_deep();
		}
		Forced
	}
}

impl<T: ForceDeep, const N: usize> ForceDeep for [T; N] {
	// The index range is the const `N` carried in the type; only the
	// stored elements remain to force.
	fn force_deep(&self) -> Forced {
		self.as_slice().force_deep()
	}
}

impl<T: ForceDeep> ForceDeep for Vec<T> {
	fn force_deep(&self) -> Forced {
		self.as_slice().force_deep()
	}
}

impl<T: ForceDeep> ForceDeep for VecDeque<T> {
	fn force_deep(&self) -> Forced {
		for item in self {
			item.force_deep();
		}
		Forced
	}
}

impl<T: ForceDeep> ForceDeep for LinkedList<T> {
	fn force_deep(&self) -> Forced {
		for item in self {
			item.force_deep();
		}
		Forced
	}
}

impl<T: ForceDeep> ForceDeep for BinaryHeap<T> {
	fn force_deep(&self) -> Forced {
		for item in self {
			item.force_deep();
		}
		Forced
	}
}

impl<K: ForceDeep, V: ForceDeep> ForceDeep for BTreeMap<K, V> {
	fn force_deep(&self) -> Forced {
		for (key, value) in self {
			key.force_deep();
			value.force_deep();
		}
		Forced
	}
}

impl<T: ForceDeep> ForceDeep for BTreeSet<T> {
	fn force_deep(&self) -> Forced {
		for item in self {
			item.force_deep();
		}
		Forced
	}
}

impl<K: ForceDeep, V: ForceDeep, S> ForceDeep for HashMap<K, V, S> {
	fn force_deep(&self) -> Forced {
		for (key, value) in self {
			key.force_deep();
			value.force_deep();
		}
		Forced
	}
}

impl<T: ForceDeep, S> ForceDeep for HashSet<T, S> {
	fn force_deep(&self) -> Forced {
		for item in self {
			item.force_deep();
		}
		Forced
	}
}
