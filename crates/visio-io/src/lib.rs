#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// High-level image reading and writing functions.
///
/// Decoded color images are handed out in BGR channel order, the order every visio color
/// operation expects.
pub mod functional;

pub use crate::error::IoError;
