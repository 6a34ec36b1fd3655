//! Domain layer for capbond
//!
//! Holds everything the rest of the workspace agrees on without knowing how
//! it is implemented: the error taxonomy and the capability port contracts
//! that concrete providers satisfy. This crate has no registry knowledge and
//! performs no I/O of its own.

/// Error handling types
pub mod error;
/// Capability port contracts and their value objects
pub mod ports;

pub use error::{Error, Result};
