use num_traits::Zero;
use std::cmp::PartialOrd;

use visio_image::{Image, ImageError};

use crate::parallel;

fn threshold_with<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    f: impl Fn(T) -> T + Send + Sync,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |src_val, dst_val| {
        *dst_val = f(*src_val);
    });

    Ok(())
}

/// Apply a binary threshold to an image.
///
/// Samples strictly greater than `threshold` become `max_value`, the rest become zero. With
/// `max_value = 1` the output is a mask accepted by the [`morphology`](crate::morphology)
/// operations.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image with the same size as `src`.
/// * `threshold` - The threshold value.
/// * `max_value` - The value written where the input is above the threshold.
///
/// # Example
///
/// ```
/// use visio_image::{Image, ImageSize};
/// use visio_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut mask = Image::<_, 1>::from_size_val(image.size(), 0).unwrap();
///
/// threshold_binary(&image, &mut mask, 100, 1).unwrap();
/// assert_eq!(mask.as_slice(), &[0, 1, 0, 1, 1, 1]);
/// ```
pub fn threshold_binary<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    threshold_with(src, dst, |v| if v > threshold { max_value } else { T::zero() })
}

/// Apply an inverse binary threshold to an image.
///
/// Samples strictly greater than `threshold` become zero, the rest become `max_value`.
///
/// Precondition: the input and output images must have the same size.
pub fn threshold_binary_inverse<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    threshold_with(src, dst, |v| if v > threshold { T::zero() } else { max_value })
}

/// Apply a truncated threshold to an image.
///
/// Samples strictly greater than `threshold` are clamped to `threshold`.
///
/// Precondition: the input and output images must have the same size.
pub fn threshold_truncate<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd,
{
    threshold_with(src, dst, |v| if v > threshold { threshold } else { v })
}

/// Apply a to-zero threshold to an image.
///
/// Samples strictly greater than `threshold` are kept, the rest become zero.
///
/// Precondition: the input and output images must have the same size.
pub fn threshold_to_zero<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    threshold_with(src, dst, |v| if v > threshold { v } else { T::zero() })
}

/// Apply an inverse to-zero threshold to an image.
///
/// Samples strictly greater than `threshold` become zero, the rest are kept.
///
/// Precondition: the input and output images must have the same size.
pub fn threshold_to_zero_inverse<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    threshold_with(src, dst, |v| if v > threshold { T::zero() } else { v })
}

#[cfg(test)]
mod tests {
    use visio_image::{Image, ImageError, ImageSize};

    fn sample() -> Result<Image<u8, 1>, ImageError> {
        Image::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![100, 200, 50, 150, 200, 250],
        )
    }

    #[test]
    fn threshold_binary() -> Result<(), ImageError> {
        let image = sample()?;
        let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0)?;

        super::threshold_binary(&image, &mut thresholded, 100, 255)?;
        assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 255, 255]);

        // the threshold itself is not above the threshold
        super::threshold_binary(&image, &mut thresholded, 150, 1)?;
        assert_eq!(thresholded.as_slice(), &[0, 1, 0, 0, 1, 1]);

        Ok(())
    }

    #[test]
    fn threshold_binary_inverse() -> Result<(), ImageError> {
        let image = sample()?;
        let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0)?;

        super::threshold_binary_inverse(&image, &mut thresholded, 100, 255)?;
        assert_eq!(thresholded.as_slice(), &[255, 0, 255, 0, 0, 0]);

        Ok(())
    }

    #[test]
    fn threshold_truncate() -> Result<(), ImageError> {
        let image = sample()?;
        let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0)?;

        super::threshold_truncate(&image, &mut thresholded, 150)?;
        assert_eq!(thresholded.as_slice(), &[100, 150, 50, 150, 150, 150]);

        Ok(())
    }

    #[test]
    fn threshold_to_zero() -> Result<(), ImageError> {
        let image = sample()?;
        let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0)?;

        super::threshold_to_zero(&image, &mut thresholded, 150)?;
        assert_eq!(thresholded.as_slice(), &[0, 200, 0, 0, 200, 250]);

        Ok(())
    }

    #[test]
    fn threshold_to_zero_inverse() -> Result<(), ImageError> {
        let image = sample()?;
        let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0)?;

        super::threshold_to_zero_inverse(&image, &mut thresholded, 150)?;
        assert_eq!(thresholded.as_slice(), &[100, 0, 50, 150, 0, 0]);

        Ok(())
    }

    #[test]
    fn threshold_float_multichannel() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.1, 0.5, 0.9, 0.6, 0.4, 0.5],
        )?;
        let mut thresholded = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;

        super::threshold_binary(&image, &mut thresholded, 0.5, 1.0)?;
        assert_eq!(thresholded.as_slice(), &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);

        Ok(())
    }

    #[test]
    fn threshold_size_mismatch() -> Result<(), ImageError> {
        let image = sample()?;
        let mut thresholded = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;

        assert_eq!(
            super::threshold_truncate(&image, &mut thresholded, 10),
            Err(ImageError::InvalidImageSize(2, 3, 3, 2))
        );

        Ok(())
    }
}
