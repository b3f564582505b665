//! Domain layer containing business entities and storage ports.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage port trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; concrete stores live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
