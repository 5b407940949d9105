use crate::field::Omit;

/// Field types that can report whether they should be written at all.
///
/// Engines query this before emitting a key, in place of any "omit if zero"
/// heuristic based on the payload's own default.
pub trait Presence {
	/// Whether the field was explicitly set.
	fn is_present(&self) -> bool;
}

impl<T> Presence for Omit<T> {
	fn is_present(&self) -> bool {
		Omit::is_present(self)
	}
}

/// `None` counts as absent.
impl<T> Presence for Option<T> {
	fn is_present(&self) -> bool {
		self.is_some()
	}
}

impl<P: Presence + ?Sized> Presence for &P {
	fn is_present(&self) -> bool {
		P::is_present(self)
	}
}

/// Whether `field` must be left out of the output.
///
/// Usable as `#[serde(skip_serializing_if = "omit::field::is_omitted")]`.
pub fn is_omitted<P: Presence + ?Sized>(field: &P) -> bool {
	!field.is_present()
}

#[cfg(test)]
mod tests;
