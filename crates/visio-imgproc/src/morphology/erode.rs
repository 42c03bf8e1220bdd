use visio_image::Image;

use super::dilate::{dilate, validate_binary};
use super::{Kernel, MorphologyError};
use crate::parallel;

/// Erode a binary image using a [`Kernel`].
///
/// Erosion shrinks the set of pixels equal to 1: the output pixel at `(y, x)` is 1 if and only
/// if the source pixel at `(y + ky - border, x + kx - border)` is 1 for every active kernel
/// offset `(ky, kx)`. Source pixels outside of the image count as 1, so shapes touching the
/// border are not eaten from the outside.
///
/// # Arguments
///
/// * `src` - The source image with values 0 or 1.
/// * `dst` - The destination image (will be overwritten) with the same size as `src`.
/// * `kernel` - The morphological structuring element ([`Kernel`]).
///
/// # Errors
///
/// Same as [`dilate`](super::dilate).
pub fn erode(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel: &Kernel,
) -> Result<(), MorphologyError> {
    validate_binary(src, dst)?;

    let (width, height) = (src.width(), src.height());
    let (size, border) = (kernel.size(), kernel.border());
    let src_data = src.as_slice();
    let k_data = kernel.data();

    parallel::par_fill_rows(dst, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let mut keep = true;

            'kernel: for ky in 0..size {
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
                    if src_row[sx] == 0 {
                        keep = false;
                        break 'kernel;
                    }
                }
            }

            *out = keep as u8;
        }
    });

    Ok(())
}

/// Morphological opening: an erosion followed by a dilation with the same [`Kernel`].
///
/// Removes foreground specks smaller than the kernel.
///
/// # Errors
///
/// Same as [`dilate`](super::dilate).
pub fn open(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel: &Kernel,
) -> Result<(), MorphologyError> {
    let mut eroded = Image::from_size_val(src.size(), 0u8)?;
    erode(src, &mut eroded, kernel)?;
    dilate(&eroded, dst, kernel)
}

/// Morphological closing: a dilation followed by an erosion with the same [`Kernel`].
///
/// Fills background holes smaller than the kernel.
///
/// # Errors
///
/// Same as [`dilate`](super::dilate).
pub fn close(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel: &Kernel,
) -> Result<(), MorphologyError> {
    let mut dilated = Image::from_size_val(src.size(), 0u8)?;
    dilate(src, &mut dilated, kernel)?;
    erode(&dilated, dst, kernel)
}
