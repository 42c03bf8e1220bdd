use visio_image::ImageError;

/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MorphologyError {
    /// The structuring element is not square, has an even side or holds values other than 0 and 1.
    #[error("Invalid structuring element: {0}")]
    InvalidStructuringElement(String),

    /// The source image has zero width or height.
    #[error("The source image is empty")]
    EmptySource,

    /// The source image holds a value other than 0 and 1.
    #[error("The source image is not binary, found value {0}")]
    NonBinarySource(u8),

    /// Error coming from the image buffers.
    #[error(transparent)]
    Image(#[from] ImageError),
}
