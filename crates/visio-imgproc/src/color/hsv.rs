use crate::parallel;
use visio_image::{Image, ImageError};

/// Convert a BGR8 image to an 8-bit HSV image.
///
/// The input image is assumed to have 3 channels in the order B, G, R.
///
/// # Arguments
///
/// * `src` - The input BGR8 image.
/// * `dst` - The output HSV image.
///
/// # Returns
///
/// The HSV image with the following channels:
///
/// * H: The hue channel in the range [0, 179] (half of the angle in degrees).
/// * S: The saturation channel in the range [0, 255].
/// * V: The value channel in the range [0, 255].
///
/// When two channels share the maximum, the hue sector is chosen with the priority
/// red, green, blue. Every channel is truncated toward zero when narrowed to 8 bits.
///
/// The truncation is applied to the exact ratio computed on the integer samples, not to a
/// floating point intermediate. Float based conversions may land one below for some colors,
/// e.g. BGR (0, 3, 2) gives a hue of exactly 40 here.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use visio_image::{Image, ImageSize};
/// use visio_imgproc::color::hsv_from_bgr_u8;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0, 0, 255, 128, 128, 128],
/// )
/// .unwrap();
///
/// let mut hsv = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// hsv_from_bgr_u8(&image, &mut hsv).unwrap();
/// assert_eq!(hsv.as_slice(), &[0, 255, 255, 0, 0, 128]);
/// ```
pub fn hsv_from_bgr_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(&hsv_pixel_u8(src_pixel[0], src_pixel[1], src_pixel[2]));
    });

    Ok(())
}

// The normalization by 255 cancels out in every ratio, so the conversion is carried out on
// the integer samples and each truncation sees the exact value.
fn hsv_pixel_u8(b: u8, g: u8, r: u8) -> [u8; 3] {
    let (b, g, r) = (b as i32, g as i32, r as i32);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // hue in degrees multiplied by delta
    let h = if delta == 0 {
        0
    } else {
        let h = if max == r {
            60 * (g - b)
        } else if max == g {
            60 * (b - r) + 120 * delta
        } else {
            60 * (r - g) + 240 * delta
        };
        let h = if h < 0 { h + 360 * delta } else { h };
        h / (2 * delta)
    };

    let s = if max == 0 { 0 } else { 255 * delta / max };

    [h as u8, s as u8, max as u8]
}

/// Convert a normalized BGR image to an HSV image.
///
/// # Arguments
///
/// * `src` - The input BGR image with samples in the range [0, 1].
/// * `dst` - The output HSV image.
///
/// # Returns
///
/// The HSV image with the following channels:
///
/// * H: The hue channel in the range [0, 360) degrees.
/// * S: The saturation channel in the range [0, 1].
/// * V: The value channel in the range [0, 1].
///
/// Precondition: the input and output images must have the same size.
pub fn hsv_from_bgr(src: &Image<f32, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let b = src_pixel[0];
        let g = src_pixel[1];
        let r = src_pixel[2];

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        // ensure h is in the range [0, 360)
        let h = if h < 0.0 { h + 360.0 } else { h };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        dst_pixel[0] = h;
        dst_pixel[1] = s;
        dst_pixel[2] = max;
    });

    Ok(())
}

/// Convert an 8-bit HSV image back to BGR8.
///
/// The input follows the layout produced by [`hsv_from_bgr_u8`]: H in [0, 179] (half of the
/// angle in degrees), S and V in [0, 255]. The dominant channel of the output is V itself;
/// the other two are truncated toward zero.
///
/// Precondition: the input and output images must have the same size.
pub fn bgr_from_hsv_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let h = src_pixel[0] as f64 * 2.0;
        let v = src_pixel[2] as f64;

        // chroma and the remaining components, all expressed on the [0, 255] scale
        let c = v * src_pixel[1] as f64 / 255.0;
        let sector = h / 60.0;
        let x = c * (1.0 - ((sector % 2.0) - 1.0).abs());
        let m = v - c;

        let max = src_pixel[2];
        let mid = (x + m) as u8;
        let min = m as u8;

        let (r, g, b) = match sector as u32 {
            0 => (max, mid, min),
            1 => (mid, max, min),
            2 => (min, max, mid),
            3 => (min, mid, max),
            4 => (mid, min, max),
            _ => (max, min, mid),
        };

        dst_pixel[0] = b;
        dst_pixel[1] = g;
        dst_pixel[2] = r;
    });

    Ok(())
}

/// Scale the saturation channel of an 8-bit HSV image.
///
/// Used to build desaturation filters: a `factor` of 0 removes all color, 1 keeps the image
/// unchanged. The scaled saturation is truncated toward zero and saturates at [0, 255].
///
/// Precondition: the input and output images must have the same size.
pub fn scale_saturation_u8(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    factor: f32,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = (src_pixel[1] as f32 * factor) as u8;
        dst_pixel[2] = src_pixel[2];
    });

    Ok(())
}
