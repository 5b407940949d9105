//! Presence-tracking field wrapper for serde: tells "absent" from "explicit null".

/// The `Omit` wrapper, its serde hooks, and payload capabilities.
pub mod field;
