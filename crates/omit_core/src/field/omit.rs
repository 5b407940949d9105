use std::any::type_name;
use std::fmt;

use crate::field::{Capabilities, Capability, OmitError, Result};

/// Rendering of an unset [`Omit`].
pub const OMITTED: &str = "<omitted>";

/// Value that may or may not be set, with "set to null" kept apart from "not set".
///
/// Use it for fields that must round-trip through JSON-like formats where
/// an omitted key and an explicit `null` mean different things:
///
/// ```
/// use omit::field::{Omit, is_omitted};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct User {
/// 	#[serde(default, skip_serializing_if = "is_omitted")]
/// 	id: Omit<i64>,
/// 	#[serde(default, skip_serializing_if = "is_omitted")]
/// 	name: Omit<Option<Box<String>>>,
/// }
///
/// let user = User { id: Omit::unset(), name: Omit::nil_ptr() };
/// assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"name":null}"#);
/// ```
///
/// The default value is unset. While unset, the payload is always
/// `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Omit<T> {
	value: T,
	present: bool,
}

impl<T> Omit<T> {
	/// Create a set value.
	pub fn new(value: T) -> Self {
		Self { value, present: true }
	}

	/// Create an unset value holding `T::default()`.
	pub fn unset() -> Self
	where
		T: Default,
	{
		Self::default()
	}

	/// Map `None` to unset and `Some` to set.
	pub fn from_option(value: Option<T>) -> Self
	where
		T: Default,
	{
		value.map_or_else(Self::unset, Self::new)
	}

	/// Whether the value was explicitly set.
	pub fn is_present(&self) -> bool {
		self.present
	}

	/// Whether the value was never set.
	pub fn is_unset(&self) -> bool {
		!self.present
	}

	/// Payload reference. Equals `T::default()` while unset.
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Consume and return the payload. Equals `T::default()` while unset.
	pub fn into_value(self) -> T {
		self.value
	}

	/// Return the payload when set, otherwise `fallback`.
	pub fn value_or(self, fallback: T) -> T {
		if self.present { self.value } else { fallback }
	}

	/// Return the payload when set, otherwise `T::default()`.
	pub fn value_or_default(self) -> T {
		self.value
	}

	/// Borrow the payload when set.
	pub fn as_option(&self) -> Option<&T> {
		self.present.then_some(&self.value)
	}

	/// Consume into `Some(payload)` when set.
	pub fn into_option(self) -> Option<T> {
		self.present.then_some(self.value)
	}

	/// Transform a set payload; unset stays unset.
	pub fn map<U: Default>(self, f: impl FnOnce(T) -> U) -> Omit<U> {
		if self.present { Omit::new(f(self.value)) } else { Omit::unset() }
	}

	/// Render a set payload with `render`, or [`OMITTED`] when unset.
	pub fn render<D: fmt::Display>(&self, render: impl FnOnce(&T) -> D) -> String {
		if self.present { render(&self.value).to_string() } else { OMITTED.to_owned() }
	}

	/// Encode the payload with its text capability.
	pub fn encode_text(&self) -> Result<Vec<u8>>
	where
		T: Capabilities,
	{
		self.value.as_marshal_text().ok_or_else(unsupported::<T>(Capability::MarshalText))?.marshal_text()
	}

	/// Decode text into the payload and mark it set.
	///
	/// On failure presence is unchanged; an unset payload is restored to
	/// `T::default()`, a set payload may be partially overwritten.
	pub fn decode_text(&mut self, data: &[u8]) -> Result<()>
	where
		T: Capabilities + Default,
	{
		let Some(target) = self.value.as_unmarshal_text() else {
			return Err(unsupported::<T>(Capability::UnmarshalText)());
		};
		let decoded = target.unmarshal_text(data);
		self.settle(decoded)
	}

	/// Encode the payload with its binary capability.
	pub fn encode_binary(&self) -> Result<Vec<u8>>
	where
		T: Capabilities,
	{
		self.value.as_marshal_binary().ok_or_else(unsupported::<T>(Capability::MarshalBinary))?.marshal_binary()
	}

	/// Decode binary into the payload and mark it set.
	///
	/// Failure handling matches [`Omit::decode_text`].
	pub fn decode_binary(&mut self, data: &[u8]) -> Result<()>
	where
		T: Capabilities + Default,
	{
		let Some(target) = self.value.as_unmarshal_binary() else {
			return Err(unsupported::<T>(Capability::UnmarshalBinary)());
		};
		let decoded = target.unmarshal_binary(data);
		self.settle(decoded)
	}

	pub(crate) fn store(&mut self, value: T) {
		self.value = value;
		self.present = true;
	}

	fn settle(&mut self, decoded: Result<()>) -> Result<()>
	where
		T: Default,
	{
		match decoded {
			Ok(()) => {
				self.present = true;
				Ok(())
			}
			Err(err) => {
				if !self.present {
					self.value = T::default();
				}
				Err(err)
			}
		}
	}
}

impl<T> Omit<Option<Box<T>>> {
	/// Create a set pointer payload owning `value`.
	pub fn from_ptr_value(value: T) -> Self {
		Self::new(Some(Box::new(value)))
	}

	/// Create a set pointer payload that is explicitly null.
	pub fn nil_ptr() -> Self {
		Self::new(None)
	}
}

/// Allocate `value` as a pointer payload.
pub fn ptr<T>(value: T) -> Option<Box<T>> {
	Some(Box::new(value))
}

impl<T: fmt::Display> fmt::Display for Omit<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.present { fmt::Display::fmt(&self.value, f) } else { f.write_str(OMITTED) }
	}
}

impl<T> From<Omit<T>> for Option<T> {
	fn from(value: Omit<T>) -> Self {
		value.into_option()
	}
}

fn unsupported<T>(capability: Capability) -> impl FnOnce() -> OmitError {
	move || OmitError::Unsupported {
		capability,
		type_name: type_name::<T>(),
	}
}

#[cfg(test)]
mod tests;
