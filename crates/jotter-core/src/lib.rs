//! # jotter-core
//!
//! Core types, traits, and abstractions for jotter.
//!
//! This crate provides the foundational data structures and trait
//! definitions that the other jotter crates depend on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod temporal;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use temporal::relative_age;
pub use traits::*;
