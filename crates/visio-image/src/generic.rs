use crate::{Image, ImageError, ImageSize};

/// An 8-bit image whose number of channels is only known at run time.
///
/// Decoders produce this type; the processing functions that need a specific layout take
/// it and fail with [`ImageError::InvalidChannelCount`] when the layout does not match.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericImage {
    /// 8-bit single channel image.
    Mono8(Image<u8, 1>),
    /// 8-bit three channel image, BGR ordered.
    Bgr8(Image<u8, 3>),
    /// 8-bit four channel image, BGRA ordered.
    Bgra8(Image<u8, 4>),
}

impl GenericImage {
    /// Create an image from raw samples and a run time channel count.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::UnsupportedChannelCount`] when `channels` is not 1, 3 or 4, and
    /// [`ImageError::InvalidChannelShape`] when the data does not fill the image.
    pub fn from_raw(size: ImageSize, channels: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        match channels {
            1 => Ok(Self::Mono8(Image::new(size, data)?)),
            3 => Ok(Self::Bgr8(Image::new(size, data)?)),
            4 => Ok(Self::Bgra8(Image::new(size, data)?)),
            n => Err(ImageError::UnsupportedChannelCount(n)),
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            Self::Mono8(img) => img.size(),
            Self::Bgr8(img) => img.size(),
            Self::Bgra8(img) => img.size(),
        }
    }

    /// Get the number of channels of the image.
    pub fn num_channels(&self) -> usize {
        match self {
            Self::Mono8(_) => 1,
            Self::Bgr8(_) => 3,
            Self::Bgra8(_) => 4,
        }
    }

    /// Get the samples as a flat slice.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Mono8(img) => img.as_slice(),
            Self::Bgr8(img) => img.as_slice(),
            Self::Bgra8(img) => img.as_slice(),
        }
    }

    /// Borrow the image as a single channel image.
    pub fn as_mono8(&self) -> Result<&Image<u8, 1>, ImageError> {
        match self {
            Self::Mono8(img) => Ok(img),
            other => Err(ImageError::InvalidChannelCount(1, other.num_channels())),
        }
    }

    /// Borrow the image as a BGR image.
    pub fn as_bgr8(&self) -> Result<&Image<u8, 3>, ImageError> {
        match self {
            Self::Bgr8(img) => Ok(img),
            other => Err(ImageError::InvalidChannelCount(3, other.num_channels())),
        }
    }
}

impl From<Image<u8, 1>> for GenericImage {
    fn from(image: Image<u8, 1>) -> Self {
        Self::Mono8(image)
    }
}

impl From<Image<u8, 3>> for GenericImage {
    fn from(image: Image<u8, 3>) -> Self {
        Self::Bgr8(image)
    }
}

impl From<Image<u8, 4>> for GenericImage {
    fn from(image: Image<u8, 4>) -> Self {
        Self::Bgra8(image)
    }
}
