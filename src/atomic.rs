use std::any::TypeId;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::ffi::{CStr, CString, OsStr, OsString};
use std::marker::PhantomData;
use std::num::{
	NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64,
	NonZeroU128, NonZeroUsize,
};
use std::path::{Path, PathBuf};
use std::thread::ThreadId;
use std::time::{Duration, Instant, SystemTime};

use crate::protocol::{ForceDeep, Forced};

/// Single-step force for types with no further structure to traverse.
macro_rules! atomic {
	($($ty:ty),+ $(,)?) => {
		$(
			impl ForceDeep for $ty {
				fn force_deep(&self) -> Forced {
					Forced
				}
			}
		)+
	};
}

atomic!(i8, i16, i32, i64, i128, isize);
atomic!(u8, u16, u32, u64, u128, usize);
atomic!(f32, f64, bool, char, ());

// The libc-style scalar aliases (c_char, c_short, c_int, c_long, c_size_t,
// ptrdiff_t, wchar_t, sig_atomic_t, time_t, clock_t, ...) are type aliases
// of the fixed widths above, so the impls above already cover them.

atomic!(
	NonZeroI8,
	NonZeroI16,
	NonZeroI32,
	NonZeroI64,
	NonZeroI128,
	NonZeroIsize,
	NonZeroU8,
	NonZeroU16,
	NonZeroU32,
	NonZeroU64,
	NonZeroU128,
	NonZeroUsize,
);

// Opaque identity-only handles and instants: comparable or hashable, but
// with no decomposable content visible to a traversal.
atomic!(Ordering, ThreadId, TypeId, Duration, Instant, SystemTime);

// String-like leaves: the payload bytes are always materialized, so a
// single representation check suffices.
atomic!(str, String, CStr, CString, OsStr, OsString, Path, PathBuf);

impl ForceDeep for Infallible {
	fn force_deep(&self) -> Forced {
		match *self {}
	}
}

impl<T: ?Sized> ForceDeep for PhantomData<T> {
	fn force_deep(&self) -> Forced {
		Forced
	}
}

/// Function values are atomic: forcing checks only the function value
/// itself and never enters its body or captured environment.
macro_rules! atomic_fn {
	($($arg:ident),*) => {
		impl<R, $($arg),*> ForceDeep for fn($($arg),*) -> R {
			fn force_deep(&self) -> Forced {
				Forced
			}
		}
	};
}

atomic_fn!();
atomic_fn!(A);
atomic_fn!(A, B);
atomic_fn!(A, B, C);
atomic_fn!(A, B, C, D);
atomic_fn!(A, B, C, D, E);
atomic_fn!(A, B, C, D, E, F);
atomic_fn!(A, B, C, D, E, F, G);
atomic_fn!(A, B, C, D, E, F, G, H);
atomic_fn!(A, B, C, D, E, F, G, H, I);
