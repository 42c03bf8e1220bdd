use std::path::Path;

use visio_image::{GenericImage, Image, ImageSize};

use crate::error::IoError;

// swap the first and third sample of every pixel, turning RGB(A) into BGR(A) and back
fn swap_red_blue<const C: usize>(data: &mut [u8]) {
    data.chunks_exact_mut(C).for_each(|pixel| pixel.swap(0, 2));
}

fn decode_image(file_path: &Path) -> Result<image::DynamicImage, IoError> {
    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;

    let img = image::ImageReader::new(std::io::Cursor::new(&bytes))
        .with_guessed_format()?
        .decode()
        .map_err(IoError::ImageDecodeError)?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        file_path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}

fn image_size(img: &image::DynamicImage) -> ImageSize {
    ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate. 8-bit
/// grayscale images stay single channel, 8-bit color images are returned in BGR (or BGRA)
/// channel order.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Errors
///
/// * [`IoError::FileDoesNotExist`] if there is no file at `file_path`.
/// * [`IoError::ImageDecodeError`] if the content cannot be decoded.
/// * [`IoError::UnsupportedImageFormat`] if the image is not 8-bit gray, RGB or RGBA.
///
/// # Example
///
/// ```no_run
/// use visio_image::GenericImage;
/// use visio_io::functional as F;
///
/// let image = F::read_image_any("dog.jpeg").unwrap();
///
/// if let GenericImage::Bgr8(bgr) = &image {
///     assert_eq!(bgr.num_channels(), 3);
/// }
/// ```
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let img = decode_image(file_path.as_ref())?;
    let size = image_size(&img);

    let image = match img.color() {
        image::ColorType::L8 => GenericImage::Mono8(Image::new(size, img.into_luma8().into_raw())?),
        image::ColorType::Rgb8 => {
            let mut data = img.into_rgb8().into_raw();
            swap_red_blue::<3>(&mut data);
            GenericImage::Bgr8(Image::new(size, data)?)
        }
        image::ColorType::Rgba8 => {
            let mut data = img.into_rgba8().into_raw();
            swap_red_blue::<4>(&mut data);
            GenericImage::Bgra8(Image::new(size, data)?)
        }
        color => return Err(IoError::UnsupportedImageFormat(color)),
    };

    Ok(image)
}

/// Reads an image from the given file path and converts it to an 8-bit BGR image.
///
/// Grayscale images are replicated over the three channels and alpha is dropped.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
pub fn read_image_any_bgr8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let img = decode_image(file_path.as_ref())?;
    let size = image_size(&img);

    let mut data = img.into_rgb8().into_raw();
    swap_red_blue::<3>(&mut data);

    Ok(Image::new(size, data)?)
}

/// Writes a grayscale image to a PNG file.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The 8-bit single channel image.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
) -> Result<(), IoError> {
    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::L8,
        image::ImageFormat::Png,
    )
    .map_err(IoError::ImageEncodeError)
}

/// Writes a BGR image to a PNG file.
///
/// The samples are stored in RGB order, as PNG requires.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The 8-bit BGR image.
pub fn write_image_png_bgr8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    let mut data = image.as_slice().to_vec();
    swap_red_blue::<3>(&mut data);

    image::save_buffer_with_format(
        file_path,
        &data,
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(IoError::ImageEncodeError)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: usize, height: usize) -> ImageSize {
        ImageSize { width, height }
    }

    #[test]
    fn read_missing_file() {
        let result = read_image_any("does/not/exist.png");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_write_gray8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        let image = Image::<u8, 1>::new(size(3, 2), vec![0, 1, 2, 127, 128, 255])?;
        write_image_png_gray8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_any(&file_path)?;
        assert_eq!(image_back, GenericImage::Mono8(image));

        Ok(())
    }

    #[test]
    fn read_write_bgr8() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("bgr.png");

        // pure blue, then pure red
        let image = Image::<u8, 3>::new(size(2, 1), vec![255, 0, 0, 0, 0, 255])?;
        write_image_png_bgr8(&file_path, &image)?;

        // stored as RGB on disk
        let on_disk = image::open(&file_path)?.to_rgb8();
        assert_eq!(on_disk.get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(on_disk.get_pixel(1, 0).0, [255, 0, 0]);

        assert_eq!(read_image_any(&file_path)?, GenericImage::Bgr8(image.clone()));
        assert_eq!(read_image_any_bgr8(&file_path)?, image);

        Ok(())
    }

    #[test]
    fn read_rgba8_as_bgra8() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgba.png");

        image::save_buffer(
            &file_path,
            &[10, 20, 30, 40],
            1,
            1,
            image::ExtendedColorType::Rgba8,
        )?;

        let image = read_image_any(&file_path)?;
        assert_eq!(image.num_channels(), 4);
        assert_eq!(image.as_slice(), &[30, 20, 10, 40]);

        // alpha is dropped by the bgr reader
        assert_eq!(read_image_any_bgr8(&file_path)?.as_slice(), &[30, 20, 10]);

        Ok(())
    }

    #[test]
    fn read_gray_as_bgr8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        let image = Image::<u8, 1>::new(size(2, 1), vec![7, 200])?;
        write_image_png_gray8(&file_path, &image)?;

        let bgr = read_image_any_bgr8(&file_path)?;
        assert_eq!(bgr.as_slice(), &[7, 7, 7, 200, 200, 200]);

        Ok(())
    }

    #[test]
    fn read_unsupported_depth() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray16.png");

        image::save_buffer(&file_path, &[0u8; 8], 2, 2, image::ExtendedColorType::L16)?;

        assert!(matches!(
            read_image_any(&file_path),
            Err(IoError::UnsupportedImageFormat(image::ColorType::L16))
        ));

        Ok(())
    }

    #[test]
    fn read_garbage() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("garbage.png");
        std::fs::write(&file_path, b"definitely not an image")?;

        assert!(matches!(
            read_image_any(&file_path),
            Err(IoError::ImageDecodeError(_))
        ));

        Ok(())
    }
}
