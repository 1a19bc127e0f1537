/// Marker returned when deep forcing has completed.
///
/// Carries no information beyond "every reachable sub-value is now
/// materialized".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Forced;

/// Deep-forcing traversal protocol.
///
/// An implementation must materialize every sub-value reachable through
/// the receiver's declared structure before returning, bottoming out at
/// atomic types whose own representation is the only thing to check.
pub trait ForceDeep {
	/// Force every reachable sub-value, then return [`Forced`].
	///
	/// Idempotent: re-forcing an already-forced value re-verifies and
	/// never re-computes. For tagged unions, only the populated
	/// alternative is forced. A failure raised while materializing a
	/// sub-value unwinds to the caller unchanged; no implementation may
	/// catch, wrap, or translate it. Relative ordering among sibling
	/// fields and elements is unspecified.
	fn force_deep(&self) -> Forced;
}

/// Fully force `a`, then hand back `b` untouched.
///
/// `a` is completely forced before `b` is returned; `b` itself is left
/// unforced, and no ordering is guaranteed inside `a`'s own traversal.
pub fn force_then<A: ForceDeep + ?Sized, B>(a: &A, b: B) -> B {
	a.force_deep();
	b
}

/// Fully force `x`, then apply `f` to it.
///
/// The application result itself is not forced.
pub fn strict_apply<A: ForceDeep, R, F: FnOnce(A) -> R>(f: F, x: A) -> R {
	x.force_deep();
	f(x)
}

/// Force `x` and return the same reference, no copy.
///
/// Useful in expressions that need both the forcing effect and the value.
pub fn force_ref<T: ForceDeep + ?Sized>(x: &T) -> &T {
	x.force_deep();
	x
}
