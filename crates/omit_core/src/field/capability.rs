use std::any::type_name;
use std::fmt;

use crate::field::{OmitError, Result};

/// Optional text/binary contract a payload type may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
	/// Payload can render itself as text bytes.
	MarshalText,
	/// Payload can parse itself from text bytes.
	UnmarshalText,
	/// Payload can render itself as binary bytes.
	MarshalBinary,
	/// Payload can parse itself from binary bytes.
	UnmarshalBinary,
}

impl Capability {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::MarshalText => "marshal-text",
			Self::UnmarshalText => "unmarshal-text",
			Self::MarshalBinary => "marshal-binary",
			Self::UnmarshalBinary => "unmarshal-binary",
		}
	}
}

impl fmt::Display for Capability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Render a value as text bytes.
pub trait MarshalText {
	/// Encode `self` as text.
	fn marshal_text(&self) -> Result<Vec<u8>>;
}

/// Parse a value from text bytes in place.
pub trait UnmarshalText {
	/// Decode `data` into `self`.
	fn unmarshal_text(&mut self, data: &[u8]) -> Result<()>;
}

/// Render a value as binary bytes.
pub trait MarshalBinary {
	/// Encode `self` as binary.
	fn marshal_binary(&self) -> Result<Vec<u8>>;
}

/// Parse a value from binary bytes in place.
pub trait UnmarshalBinary {
	/// Decode `data` into `self`.
	fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()>;
}

/// Runtime probe for the optional text/binary capabilities of a payload.
///
/// Every probe answers `None` by default. A payload type opts into a
/// capability by implementing the matching trait and returning `Some(self)`
/// from the probe; an empty impl declares a payload with no text/binary
/// support, for which the hooks on [`crate::field::Omit`] report
/// [`OmitError::Unsupported`].
pub trait Capabilities {
	/// Probe for [`MarshalText`].
	fn as_marshal_text(&self) -> Option<&dyn MarshalText> {
		None
	}

	/// Probe for [`UnmarshalText`].
	fn as_unmarshal_text(&mut self) -> Option<&mut dyn UnmarshalText> {
		None
	}

	/// Probe for [`MarshalBinary`].
	fn as_marshal_binary(&self) -> Option<&dyn MarshalBinary> {
		None
	}

	/// Probe for [`UnmarshalBinary`].
	fn as_unmarshal_binary(&mut self) -> Option<&mut dyn UnmarshalBinary> {
		None
	}
}

macro_rules! text_via_str {
	($($ty:ty),* $(,)?) => {$(
		impl MarshalText for $ty {
			fn marshal_text(&self) -> Result<Vec<u8>> {
				Ok(self.to_string().into_bytes())
			}
		}

		impl UnmarshalText for $ty {
			fn unmarshal_text(&mut self, data: &[u8]) -> Result<()> {
				let text = std::str::from_utf8(data)?;
				*self = text.parse().map_err(|_| OmitError::InvalidText {
					type_name: type_name::<$ty>(),
					input: text.to_owned(),
				})?;
				Ok(())
			}
		}
	)*};
}

macro_rules! binary_le {
	($($ty:ty),* $(,)?) => {$(
		impl MarshalBinary for $ty {
			fn marshal_binary(&self) -> Result<Vec<u8>> {
				Ok(self.to_le_bytes().to_vec())
			}
		}

		impl UnmarshalBinary for $ty {
			fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
				let raw: [u8; size_of::<$ty>()] = data.try_into().map_err(|_| OmitError::InvalidBinaryLength {
					type_name: type_name::<$ty>(),
					need: size_of::<$ty>(),
					have: data.len(),
				})?;
				*self = <$ty>::from_le_bytes(raw);
				Ok(())
			}
		}
	)*};
}

macro_rules! text_and_binary {
	($($ty:ty),* $(,)?) => {$(
		impl Capabilities for $ty {
			fn as_marshal_text(&self) -> Option<&dyn MarshalText> {
				Some(self)
			}

			fn as_unmarshal_text(&mut self) -> Option<&mut dyn UnmarshalText> {
				Some(self)
			}

			fn as_marshal_binary(&self) -> Option<&dyn MarshalBinary> {
				Some(self)
			}

			fn as_unmarshal_binary(&mut self) -> Option<&mut dyn UnmarshalBinary> {
				Some(self)
			}
		}
	)*};
}

text_via_str!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String);
binary_le!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
text_and_binary!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, String);

impl MarshalBinary for bool {
	fn marshal_binary(&self) -> Result<Vec<u8>> {
		Ok(vec![u8::from(*self)])
	}
}

impl UnmarshalBinary for bool {
	fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
		*self = match data {
			[0] => false,
			[1] => true,
			[byte] => return Err(OmitError::InvalidBinaryBool { byte: *byte }),
			_ => {
				return Err(OmitError::InvalidBinaryLength {
					type_name: type_name::<bool>(),
					need: 1,
					have: data.len(),
				});
			}
		};
		Ok(())
	}
}

impl MarshalBinary for String {
	fn marshal_binary(&self) -> Result<Vec<u8>> {
		Ok(self.as_bytes().to_vec())
	}
}

impl UnmarshalBinary for String {
	fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
		let text = std::str::from_utf8(data)?;
		self.clear();
		self.push_str(text);
		Ok(())
	}
}

impl Capabilities for char {
	fn as_marshal_text(&self) -> Option<&dyn MarshalText> {
		Some(self)
	}

	fn as_unmarshal_text(&mut self) -> Option<&mut dyn UnmarshalText> {
		Some(self)
	}
}

impl MarshalBinary for Vec<u8> {
	fn marshal_binary(&self) -> Result<Vec<u8>> {
		Ok(self.clone())
	}
}

impl UnmarshalBinary for Vec<u8> {
	fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
		self.clear();
		self.extend_from_slice(data);
		Ok(())
	}
}

impl Capabilities for Vec<u8> {
	fn as_marshal_binary(&self) -> Option<&dyn MarshalBinary> {
		Some(self)
	}

	fn as_unmarshal_binary(&mut self) -> Option<&mut dyn UnmarshalBinary> {
		Some(self)
	}
}

/// Pointer payloads delegate to the pointee.
///
/// Marshalling a null pointer is unsupported. Unmarshalling into a null
/// pointer allocates `T::default()` first, but only when `T` supports the
/// capability.
impl<T: Capabilities + Default> Capabilities for Option<Box<T>> {
	fn as_marshal_text(&self) -> Option<&dyn MarshalText> {
		self.as_deref()?.as_marshal_text()
	}

	fn as_unmarshal_text(&mut self) -> Option<&mut dyn UnmarshalText> {
		if self.is_none() && T::default().as_unmarshal_text().is_none() {
			return None;
		}
		self.get_or_insert_with(Box::default).as_unmarshal_text()
	}

	fn as_marshal_binary(&self) -> Option<&dyn MarshalBinary> {
		self.as_deref()?.as_marshal_binary()
	}

	fn as_unmarshal_binary(&mut self) -> Option<&mut dyn UnmarshalBinary> {
		if self.is_none() && T::default().as_unmarshal_binary().is_none() {
			return None;
		}
		self.get_or_insert_with(Box::default).as_unmarshal_binary()
	}
}
