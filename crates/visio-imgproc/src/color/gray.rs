use crate::parallel;
use visio_image::{Image, ImageError};

/// BT.601 luma weights in thousandths, applied to the B, G and R samples.
const BW: u32 = 114;
const GW: u32 = 587;
const RW: u32 = 299;
const WEIGHT_SCALE: u32 = 1000;

/// Convert a BGR8 image to grayscale using the formula:
///
/// Y = 0.114 * B + 0.587 * G + 0.299 * R
///
/// The weighted sum is evaluated exactly and truncated toward zero when narrowing to 8 bits,
/// so a pixel with B = G = R = v maps to exactly v.
///
/// # Arguments
///
/// * `src` - The input BGR8 image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use visio_image::{Image, ImageSize};
/// use visio_imgproc::color::gray_from_bgr_u8;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![10, 20, 30],
/// )
/// .unwrap();
///
/// let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// gray_from_bgr_u8(&image, &mut gray).unwrap();
/// assert_eq!(gray.as_slice(), &[21]);
/// ```
pub fn gray_from_bgr_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let b = src_pixel[0] as u32;
        let g = src_pixel[1] as u32;
        let r = src_pixel[2] as u32;
        dst_pixel[0] = ((BW * b + GW * g + RW * r) / WEIGHT_SCALE) as u8;
    });

    Ok(())
}

/// Convert a floating point BGR image to grayscale using the formula:
///
/// Y = 0.114 * B + 0.587 * G + 0.299 * R
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
pub fn gray_from_bgr<T>(src: &Image<T, 3>, dst: &mut Image<T, 1>) -> Result<(), ImageError>
where
    T: Send + Sync + num_traits::Float,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let cast_err = || ImageError::CastError(std::any::type_name::<T>().to_string());
    let scale = T::from(WEIGHT_SCALE).ok_or_else(cast_err)?;
    let bw = T::from(BW).ok_or_else(cast_err)? / scale;
    let gw = T::from(GW).ok_or_else(cast_err)? / scale;
    let rw = T::from(RW).ok_or_else(cast_err)? / scale;

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = bw * src_pixel[0] + gw * src_pixel[1] + rw * src_pixel[2];
    });

    Ok(())
}

/// Convert a grayscale image to a BGR image by replicating the value across all three channels.
///
/// Precondition: the input and output images must have the same size.
pub fn bgr_from_gray<T>(src: &Image<T, 1>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
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

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.fill(src_pixel[0]);
    });

    Ok(())
}

/// Convert an RGB image to BGR by swapping the red and blue channels.
///
/// Precondition: the input and output images must have the same size.
pub fn bgr_from_rgb<T>(src: &Image<T, 3>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
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

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel
            .iter_mut()
            .zip(src_pixel.iter().rev())
            .for_each(|(d, s)| {
                *d = *s;
            });
    });

    Ok(())
}

/// Convert a BGR image to RGB by swapping the blue and red channels.
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_bgr<T>(src: &Image<T, 3>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    // the swap is its own inverse
    bgr_from_rgb(src, dst)
}
