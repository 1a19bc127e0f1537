use crate::protocol::{ForceDeep, Forced};

impl<T: ForceDeep> ForceDeep for Option<T> {
	fn force_deep(&self) -> Forced {
		if let Some(value) = self {
			value.force_deep();
		}
		Forced
	}
}

impl<T: ForceDeep, E: ForceDeep> ForceDeep for Result<T, E> {
	fn force_deep(&self) -> Forced {
		match self {
			Ok(value) => value.force_deep(),
			Err(error) => error.force_deep(),
		}
	}
}

#[cfg(test)]
mod tests;
