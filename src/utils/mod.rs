//! Utility functions for path generation, destination handling, and error
//! classification.
//!
//! - [`path_generator`] - Base-62 short path generation
//! - [`redirect_url`] - Destination normalization and validation
//! - [`db_error`] - PostgreSQL error classification

pub mod db_error;
pub mod path_generator;
pub mod redirect_url;
