use std::borrow::Cow;
use std::cmp::Reverse;
use std::num::{Saturating, Wrapping};
use std::rc::Rc;
use std::sync::Arc;

use crate::protocol::{ForceDeep, Forced};

impl<T: ForceDeep + ?Sized> ForceDeep for &T {
	fn force_deep(&self) -> Forced {
		(**self).force_deep()
	}
}

impl<T: ForceDeep + ?Sized> ForceDeep for &mut T {
	fn force_deep(&self) -> Forced {
		(**self).force_deep()
	}
}

impl<T: ForceDeep + ?Sized> ForceDeep for Box<T> {
	fn force_deep(&self) -> Forced {
		(**self).force_deep()
	}
}

impl<T: ForceDeep + ?Sized> ForceDeep for Rc<T> {
	fn force_deep(&self) -> Forced {
		(**self).force_deep()
	}
}

impl<T: ForceDeep + ?Sized> ForceDeep for Arc<T> {
	fn force_deep(&self) -> Forced {
		(**self).force_deep()
	}
}

impl<B> ForceDeep for Cow<'_, B>
where
	B: ToOwned + ForceDeep + ?Sized,
	B::Owned: ForceDeep,
{
	fn force_deep(&self) -> Forced {
		match self {
			Cow::Borrowed(value) => value.force_deep(),
			Cow::Owned(value) => value.force_deep(),
		}
	}
}

impl<T: ForceDeep> ForceDeep for Wrapping<T> {
	fn force_deep(&self) -> Forced {
		self.0.force_deep()
	}
}

impl<T: ForceDeep> ForceDeep for Saturating<T> {
	fn force_deep(&self) -> Forced {
		self.0.force_deep()
	}
}

impl<T: ForceDeep> ForceDeep for Reverse<T> {
	fn force_deep(&self) -> Forced {
		self.0.force_deep()
	}
}
