use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::field::{Omit, Result};

/// Serializes the payload unconditionally.
///
/// Omission is the engine's job: pair the field with
/// `skip_serializing_if = "is_omitted"` so an unset value never reaches here.
/// A null pointer payload serializes as `null`.
impl<T: Serialize> Serialize for Omit<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.value().serialize(serializer)
	}
}

/// Deserializing always yields a set value, since serde only calls this when
/// the key exists. Pair the field with `#[serde(default)]` so a missing key
/// leaves it unset.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Omit<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		T::deserialize(deserializer).map(Omit::new)
	}
}

impl<T> Omit<T> {
	/// Encode the payload as JSON, ignoring presence.
	pub fn encode_json(&self) -> Result<Vec<u8>>
	where
		T: Serialize,
	{
		Ok(serde_json::to_vec(self.value())?)
	}

	/// Decode JSON into the payload and mark it set.
	///
	/// On failure both presence and payload are left unchanged.
	pub fn decode_json(&mut self, data: &[u8]) -> Result<()>
	where
		T: DeserializeOwned,
	{
		let value = serde_json::from_slice(data)?;
		self.store(value);
		Ok(())
	}
}
