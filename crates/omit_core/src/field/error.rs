use thiserror::Error;

use crate::field::Capability;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, OmitError>;

/// Errors produced by the encode and decode hooks of [`crate::field::Omit`].
#[derive(Debug, Error)]
pub enum OmitError {
	/// JSON encoder or decoder for the payload failed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Payload type does not provide the requested text/binary capability.
	#[error("{capability} is not supported for payload type {type_name}")]
	Unsupported {
		/// Capability the hook needed.
		capability: Capability,
		/// Rust type name of the payload.
		type_name: &'static str,
	},
	/// Text input was not valid UTF-8.
	#[error("text is not valid utf-8: {0}")]
	InvalidUtf8(#[from] std::str::Utf8Error),
	/// Text input could not be parsed into the payload type.
	#[error("invalid text for {type_name}: {input:?}")]
	InvalidText {
		/// Rust type name of the payload.
		type_name: &'static str,
		/// Rejected input.
		input: String,
	},
	/// Fixed-width binary payload had the wrong length.
	#[error("invalid binary length for {type_name}: need={need}, have={have}")]
	InvalidBinaryLength {
		/// Rust type name of the payload.
		type_name: &'static str,
		/// Required number of bytes.
		need: usize,
		/// Bytes supplied.
		have: usize,
	},
	/// Binary boolean byte was neither `0` nor `1`.
	#[error("invalid binary bool byte 0x{byte:02x}")]
	InvalidBinaryBool {
		/// Offending byte.
		byte: u8,
	},
	/// Failure reported by a caller-supplied capability implementation.
	#[error("payload: {0}")]
	Payload(#[from] Box<dyn std::error::Error + Send + Sync>),
}
