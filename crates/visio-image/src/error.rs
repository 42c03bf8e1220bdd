/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the channel count does not match the operation requirements.
    #[error("Invalid channel count: expected {0}, got {1}")]
    InvalidChannelCount(usize, usize),

    /// Error when no image layout exists for the channel count.
    #[error("Unsupported channel count {0}, expected 1, 3 or 4")]
    UnsupportedChannelCount(usize),

    /// Error when the image size is not valid.
    #[error("Invalid image size ({0}, {1}) mismatch ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a sample cannot be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),
}
