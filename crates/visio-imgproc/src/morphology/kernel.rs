use visio_image::Image;

use super::MorphologyError;

/// Shapes of morphological [`Kernel`]s.
///
/// All kernels are square with an odd side and centered at their geometric center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelShape {
    /// A square box: every offset takes part in the operation.
    Box {
        /// The side length of the square kernel (size x size).
        size: usize,
    },

    /// A cross (plus) shape: only the center row and the center column are included.
    Cross {
        /// The side length of the square kernel (size x size).
        size: usize,
    },

    /// A disc inscribed in the square, rasterized row by row.
    Ellipse {
        /// The side length of the square kernel (size x size).
        size: usize,
    },
}

/// A morphological structuring element.
///
/// The kernel defines the neighborhood used by morphological operations (dilate, erode,
/// open, close). It stores a square binary mask where 1 marks the offsets included in the
/// operation. The side length is always odd so the kernel has a well defined center.
///
/// # Example
///
/// ```rust
/// use visio_imgproc::morphology::{Kernel, KernelShape};
///
/// // Create a 3x3 cross kernel
/// let kernel = Kernel::new(KernelShape::Cross { size: 3 }).unwrap();
/// assert_eq!(kernel.size(), 3);
/// assert_eq!(kernel.border(), 1);
/// assert_eq!(kernel.data(), &[0, 1, 0, 1, 1, 1, 0, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    data: Vec<u8>,
    size: usize,
}

impl Kernel {
    /// Create a morphological kernel from a shape.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidStructuringElement`] if the size is zero or even.
    pub fn new(shape: KernelShape) -> Result<Self, MorphologyError> {
        let size = match shape {
            KernelShape::Box { size }
            | KernelShape::Cross { size }
            | KernelShape::Ellipse { size } => size,
        };
        let area = check_side(size)?;

        let data = match shape {
            KernelShape::Box { .. } => vec![1u8; area],
            KernelShape::Cross { .. } => cross_data(size, area),
            KernelShape::Ellipse { .. } => ellipse_data(size, area),
        };

        Ok(Self { data, size })
    }

    /// Create a kernel from a row-major square mask.
    ///
    /// # Arguments
    ///
    /// * `size` - The side length of the kernel.
    /// * `data` - The `size * size` mask values, each 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidStructuringElement`] if the side is zero or even,
    /// the mask is not square or a value is not 0 or 1.
    pub fn from_data(size: usize, data: Vec<u8>) -> Result<Self, MorphologyError> {
        let area = check_side(size)?;

        if data.len() != area {
            return Err(MorphologyError::InvalidStructuringElement(format!(
                "expected {area} values for a {size}x{size} kernel, got {}",
                data.len()
            )));
        }

        if let Some(v) = data.iter().find(|&&v| v > 1) {
            return Err(MorphologyError::InvalidStructuringElement(format!(
                "values must be 0 or 1, found {v}"
            )));
        }

        Ok(Self { data, size })
    }

    /// Create a kernel from a single channel binary image.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidStructuringElement`] if the image is not square or
    /// violates any of the [`Kernel::from_data`] rules.
    pub fn from_image(image: &Image<u8, 1>) -> Result<Self, MorphologyError> {
        if image.width() != image.height() {
            return Err(MorphologyError::InvalidStructuringElement(format!(
                "kernel must be square, got {}x{}",
                image.width(),
                image.height()
            )));
        }

        Self::from_data(image.width(), image.as_slice().to_vec())
    }

    /// Get a reference to the kernel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the distance from the center to the kernel edge.
    pub fn border(&self) -> usize {
        self.size / 2
    }

    /// Returns true if the offset at row `ky` and column `kx` takes part in the operation.
    pub fn is_active(&self, ky: usize, kx: usize) -> bool {
        ky < self.size && kx < self.size && self.data[ky * self.size + kx] == 1
    }
}

// Returns the number of kernel cells.
fn check_side(size: usize) -> Result<usize, MorphologyError> {
    if size == 0 || size % 2 == 0 {
        return Err(MorphologyError::InvalidStructuringElement(format!(
            "side length must be odd, got {size}"
        )));
    }
    size.checked_mul(size).ok_or_else(|| {
        MorphologyError::InvalidStructuringElement(format!("side length {size} is too large"))
    })
}

fn cross_data(size: usize, area: usize) -> Vec<u8> {
    let mut data = vec![0u8; area];
    let mid = size / 2;

    // fill horizontal line
    data[mid * size..(mid + 1) * size].fill(1);

    // fill vertical line
    for i in 0..size {
        data[i * size + mid] = 1;
    }

    data
}

// Same rasterization as OpenCV's MORPH_ELLIPSE for a square kernel: for each row the
// half-width of the disc is rounded to the nearest column.
fn ellipse_data(size: usize, area: usize) -> Vec<u8> {
    let mut data = vec![0u8; area];
    let r = (size / 2) as i64;
    let inv_r2 = if r > 0 { 1.0 / (r * r) as f64 } else { 0.0 };

    for i in 0..size {
        let dy = i as i64 - r;
        let dx = (r as f64 * (((r * r - dy * dy) as f64) * inv_r2).sqrt()).round() as i64;
        let j1 = (r - dx).max(0) as usize;
        let j2 = ((r + dx + 1) as usize).min(size);
        data[i * size + j1..i * size + j2].fill(1);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use visio_image::{ImageError, ImageSize};

    #[test]
    fn box_kernel() -> Result<(), MorphologyError> {
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;
        assert_eq!(kernel.size(), 3);
        assert!(kernel.data().iter().all(|&x| x == 1));
        Ok(())
    }

    #[test]
    fn cross_kernel() -> Result<(), MorphologyError> {
        let kernel = Kernel::new(KernelShape::Cross { size: 5 })?;
        #[rustfmt::skip]
        let expected = [
            0, 0, 1, 0, 0,
            0, 0, 1, 0, 0,
            1, 1, 1, 1, 1,
            0, 0, 1, 0, 0,
            0, 0, 1, 0, 0,
        ];
        assert_eq!(kernel.data(), expected);
        assert!(kernel.is_active(2, 0));
        assert!(!kernel.is_active(0, 0));
        assert!(!kernel.is_active(5, 2));
        Ok(())
    }

    #[test]
    fn ellipse_kernel() -> Result<(), MorphologyError> {
        let kernel = Kernel::new(KernelShape::Ellipse { size: 5 })?;
        #[rustfmt::skip]
        let expected = [
            0, 0, 1, 0, 0,
            1, 1, 1, 1, 1,
            1, 1, 1, 1, 1,
            1, 1, 1, 1, 1,
            0, 0, 1, 0, 0,
        ];
        assert_eq!(kernel.data(), expected);

        let kernel = Kernel::new(KernelShape::Ellipse { size: 1 })?;
        assert_eq!(kernel.data(), &[1]);
        Ok(())
    }

    #[test]
    fn kernel_border() -> Result<(), MorphologyError> {
        let kernel = Kernel::new(KernelShape::Box { size: 5 })?;
        assert_eq!(kernel.border(), 2);
        Ok(())
    }

    #[test]
    fn even_or_empty_kernels_are_rejected() {
        for shape in [
            KernelShape::Box { size: 4 },
            KernelShape::Cross { size: 2 },
            KernelShape::Ellipse { size: 0 },
        ] {
            assert!(matches!(
                Kernel::new(shape),
                Err(MorphologyError::InvalidStructuringElement(_))
            ));
        }
    }

    #[test]
    fn oversized_kernels_are_rejected() {
        // odd, but the number of cells does not fit in usize
        let size = (1usize << (usize::BITS / 2)) + 1;
        assert!(matches!(
            Kernel::new(KernelShape::Cross { size }),
            Err(MorphologyError::InvalidStructuringElement(_))
        ));
        assert!(matches!(
            Kernel::new(KernelShape::Box { size }),
            Err(MorphologyError::InvalidStructuringElement(_))
        ));
        assert!(matches!(
            Kernel::from_data(size, vec![1]),
            Err(MorphologyError::InvalidStructuringElement(_))
        ));
    }

    #[test]
    fn kernel_from_data() -> Result<(), MorphologyError> {
        let kernel = Kernel::from_data(3, vec![0, 0, 0, 0, 1, 0, 0, 0, 0])?;
        assert!(kernel.is_active(1, 1));

        assert!(matches!(
            Kernel::from_data(3, vec![0, 2, 0, 0, 1, 0, 0, 0, 0]),
            Err(MorphologyError::InvalidStructuringElement(_))
        ));
        assert!(matches!(
            Kernel::from_data(3, vec![1; 8]),
            Err(MorphologyError::InvalidStructuringElement(_))
        ));
        Ok(())
    }

    #[test]
    fn kernel_from_image() -> Result<(), Box<dyn std::error::Error>> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![1, 0, 1, 0, 1, 0, 1, 0, 1],
        )?;
        let kernel = Kernel::from_image(&image)?;
        assert_eq!(kernel.data(), image.as_slice());

        let not_square = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 1,
            },
            1,
        )?;
        assert!(matches!(
            Kernel::from_image(&not_square),
            Err(MorphologyError::InvalidStructuringElement(_))
        ));
        Ok(())
    }

    #[test]
    fn image_error_converts() {
        let err: MorphologyError = ImageError::InvalidChannelCount(1, 3).into();
        assert_eq!(
            err,
            MorphologyError::Image(ImageError::InvalidChannelCount(1, 3))
        );
    }
}
