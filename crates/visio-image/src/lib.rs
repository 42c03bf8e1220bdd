#![deny(missing_docs)]
//! Image types and traits for generating and manipulating images

/// image representation for computer vision purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// image with a channel count known at run time.
pub mod generic;

/// image operations like casting and scaling.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::generic::GenericImage;
pub use crate::image::{Image, ImageSize};
