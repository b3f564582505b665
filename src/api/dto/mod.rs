//! Data Transfer Objects for API requests and responses.
//!
//! Response field names are PascalCase to match the error envelope.

pub mod add;
pub mod resolve;
