//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer does not know about HTTP. Repository traits are implemented
//! by the infrastructure layer and consumed by [`crate::application::services`].

pub mod entities;
pub mod repositories;
