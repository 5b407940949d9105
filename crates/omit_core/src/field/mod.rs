mod capability;
mod error;
mod json;
mod omit;
mod presence;

/// Text/binary payload capabilities and their runtime probe.
pub use capability::{Capabilities, Capability, MarshalBinary, MarshalText, UnmarshalBinary, UnmarshalText};
/// Error and result aliases.
pub use error::{OmitError, Result};
/// Presence-tracking wrapper and pointer payload helpers.
pub use omit::{OMITTED, Omit, ptr};
/// Field omission query used by serialization engines.
pub use presence::{Presence, is_omitted};
