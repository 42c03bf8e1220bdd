use visio_image::{GenericImage, Image, ImageError};

use super::{Kernel, MorphologyError};
use crate::parallel;

/// Foreground fraction, in percent, below which [`DilateStrategy::Auto`] scatters.
const SCATTER_MAX_DENSITY_PERCENT: usize = 10;

/// How [`dilate_with_strategy`] evaluates the dilation.
///
/// Every strategy produces the same output; they only differ in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DilateStrategy {
    /// Pick [`DilateStrategy::Scatter`] for sparse sources and [`DilateStrategy::Gather`]
    /// otherwise.
    #[default]
    Auto,

    /// For every output pixel, test whether any kernel offset hits a set source pixel.
    ///
    /// Output rows are independent and computed in parallel.
    Gather,

    /// For every set source pixel, OR the kernel into a zero padded canvas, then crop the
    /// canvas back to the source size.
    ///
    /// Only set pixels are visited, which pays off on sparse sources.
    Scatter,
}

/// Dilate a binary image using a [`Kernel`].
///
/// Dilation grows the set of pixels equal to 1: the output pixel at `(y, x)` is 1 if and only
/// if there is an active kernel offset `(ky, kx)` such that the source pixel at
/// `(y + ky - border, x + kx - border)` is 1, where `border` is half the kernel side. Source
/// pixels outside of the image count as 0.
///
/// # Arguments
///
/// * `src` - The source image with values 0 or 1.
/// * `dst` - The destination image (will be overwritten) with the same size as `src`.
/// * `kernel` - The morphological structuring element ([`Kernel`]).
///
/// # Errors
///
/// * [`MorphologyError::EmptySource`] if the source has zero width or height.
/// * [`MorphologyError::NonBinarySource`] if the source holds a value other than 0 or 1.
/// * [`MorphologyError::Image`] if `src` and `dst` have different sizes.
///
/// # Example
///
/// ```
/// use visio_image::{Image, ImageSize};
/// use visio_imgproc::morphology::{dilate, Kernel, KernelShape};
///
/// let mut src = Image::<u8, 1>::from_size_val(ImageSize { width: 3, height: 3 }, 0).unwrap();
/// src.set_pixel(1, 1, 0, 1).unwrap();
///
/// let kernel = Kernel::new(KernelShape::Cross { size: 3 }).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();
///
/// dilate(&src, &mut dst, &kernel).unwrap();
/// assert_eq!(dst.as_slice(), &[0, 1, 0, 1, 1, 1, 0, 1, 0]);
/// ```
pub fn dilate(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel: &Kernel,
) -> Result<(), MorphologyError> {
    dilate_with_strategy(src, dst, kernel, DilateStrategy::Auto)
}

/// Dilate a binary image using a [`Kernel`] and an explicit [`DilateStrategy`].
///
/// See [`dilate`] for the definition of the operation and the errors.
pub fn dilate_with_strategy(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel: &Kernel,
    strategy: DilateStrategy,
) -> Result<(), MorphologyError> {
    let foreground = validate_binary(src, dst)?;

    let strategy = match strategy {
        DilateStrategy::Auto => {
            let num_pixels = src.width() * src.height();
            if foreground * 100 < num_pixels * SCATTER_MAX_DENSITY_PERCENT {
                DilateStrategy::Scatter
            } else {
                DilateStrategy::Gather
            }
        }
        strategy => strategy,
    };

    log::debug!(
        "dilating {} with a {}x{} kernel, {} foreground pixels, strategy {:?}",
        src.size(),
        kernel.size(),
        kernel.size(),
        foreground,
        strategy
    );

    match strategy {
        DilateStrategy::Scatter => {
            let width = src.width();
            let set_pixels = src
                .as_slice()
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v == 1)
                .map(|(idx, _)| (idx / width, idx % width));
            dilate_scatter(src, dst, kernel, set_pixels);
        }
        _ => dilate_gather(src, dst, kernel),
    }

    Ok(())
}

/// Dilate a decoded image whose number of channels is only known at run time.
///
/// # Errors
///
/// Returns [`MorphologyError::Image`] wrapping [`ImageError::InvalidChannelCount`] if the
/// image is not single channel, plus every error of [`dilate`].
pub fn dilate_generic(
    src: &GenericImage,
    kernel: &Kernel,
) -> Result<Image<u8, 1>, MorphologyError> {
    let src = src.as_mono8()?;
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    dilate(src, &mut dst, kernel)?;
    Ok(dst)
}

/// Check the preconditions shared by the binary morphology operations.
///
/// Returns the number of source pixels equal to 1.
pub(crate) fn validate_binary(
    src: &Image<u8, 1>,
    dst: &Image<u8, 1>,
) -> Result<usize, MorphologyError> {
    if src.is_empty() {
        return Err(MorphologyError::EmptySource);
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }

    let mut foreground = 0;
    for &v in src.as_slice() {
        match v {
            0 => {}
            1 => foreground += 1,
            other => return Err(MorphologyError::NonBinarySource(other)),
        }
    }

    Ok(foreground)
}

fn dilate_gather(src: &Image<u8, 1>, dst: &mut Image<u8, 1>, kernel: &Kernel) {
    let (width, height) = (src.width(), src.height());
    let (size, border) = (kernel.size(), kernel.border());
    let src_data = src.as_slice();
    let k_data = kernel.data();

    parallel::par_fill_rows(dst, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let mut hit = false;

            'kernel: for ky in 0..size {
                // skip kernel rows that fall outside of the source
                let Some(sy) = (y + ky).checked_sub(border).filter(|&sy| sy < height) else {
                    continue;
                };
                let src_row = &src_data[sy * width..(sy + 1) * width];

                for kx in 0..size {
                    if k_data[ky * size + kx] == 0 {
                        continue;
                    }
                    let Some(sx) = (x + kx).checked_sub(border).filter(|&sx| sx < width) else {
                        continue;
                    };
                    if src_row[sx] == 1 {
                        hit = true;
                        break 'kernel;
                    }
                }
            }

            *out = hit as u8;
        }
    });
}

// The kernel is reflected through its center before being ORed into the canvas so the
// result matches the gather formulation for asymmetric kernels as well.
fn dilate_scatter(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel: &Kernel,
    set_pixels: impl IntoIterator<Item = (usize, usize)>,
) {
    let width = src.width();
    let (size, border) = (kernel.size(), kernel.border());
    let padded_width = width + 2 * border;
    let padded_height = src.height() + 2 * border;

    let reflected = kernel.data().iter().rev().copied().collect::<Vec<_>>();
    let mut canvas = vec![0u8; padded_width * padded_height];

    for (y, x) in set_pixels {
        for (ky, k_row) in reflected.chunks_exact(size).enumerate() {
            let start = (y + ky) * padded_width + x;
            canvas[start..start + size]
                .iter_mut()
                .zip(k_row)
                .for_each(|(c, k)| *c |= *k);
        }
    }

    for (y, dst_row) in dst.as_slice_mut().chunks_exact_mut(width).enumerate() {
        let start = (y + border) * padded_width + border;
        dst_row.copy_from_slice(&canvas[start..start + width]);
    }
}
