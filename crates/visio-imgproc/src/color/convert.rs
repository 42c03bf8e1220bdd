use visio_image::{GenericImage, Image, ImageError};

use super::{gray_from_bgr_u8, hsv_from_bgr_u8};

/// Convert a decoded image to grayscale.
///
/// This is the run time checked counterpart of [`gray_from_bgr_u8`] for images whose number
/// of channels is only known after decoding.
///
/// # Errors
///
/// Returns [`ImageError::InvalidChannelCount`] if the image is not a 3 channel BGR image.
///
/// # Example
///
/// ```
/// use visio_image::{GenericImage, ImageError, ImageSize};
/// use visio_imgproc::color::to_grayscale;
///
/// let size = ImageSize { width: 1, height: 1 };
///
/// let bgr = GenericImage::from_raw(size, 3, vec![50, 50, 50]).unwrap();
/// assert_eq!(to_grayscale(&bgr).unwrap().as_slice(), &[50]);
///
/// let mono = GenericImage::from_raw(size, 1, vec![50]).unwrap();
/// assert_eq!(to_grayscale(&mono), Err(ImageError::InvalidChannelCount(3, 1)));
/// ```
pub fn to_grayscale(src: &GenericImage) -> Result<Image<u8, 1>, ImageError> {
    let src = src.as_bgr8()?;
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    gray_from_bgr_u8(src, &mut dst)?;
    Ok(dst)
}

/// Convert a decoded image to 8-bit HSV.
///
/// This is the run time checked counterpart of [`hsv_from_bgr_u8`].
///
/// # Errors
///
/// Returns [`ImageError::InvalidChannelCount`] if the image is not a 3 channel BGR image.
pub fn to_hsv(src: &GenericImage) -> Result<Image<u8, 3>, ImageError> {
    let src = src.as_bgr8()?;
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    hsv_from_bgr_u8(src, &mut dst)?;
    Ok(dst)
}
