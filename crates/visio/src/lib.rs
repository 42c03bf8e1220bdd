//! Color space conversion and binary morphology on 8-bit images.
//!
//! ```no_run
//! use visio::image::Image;
//! use visio::imgproc::{color, morphology, threshold};
//!
//! let bgr = visio::io::functional::read_image_any_bgr8("dog.png").unwrap();
//!
//! let mut gray = Image::<u8, 1>::from_size_val(bgr.size(), 0).unwrap();
//! color::gray_from_bgr_u8(&bgr, &mut gray).unwrap();
//!
//! let mut mask = Image::<u8, 1>::from_size_val(bgr.size(), 0).unwrap();
//! threshold::threshold_binary(&gray, &mut mask, 127, 1).unwrap();
//!
//! let kernel = morphology::Kernel::new(morphology::KernelShape::Cross { size: 3 }).unwrap();
//! let mut dilated = Image::<u8, 1>::from_size_val(bgr.size(), 0).unwrap();
//! morphology::dilate(&mask, &mut dilated, &kernel).unwrap();
//! ```

#[doc(inline)]
pub use visio_image as image;

#[doc(inline)]
pub use visio_imgproc as imgproc;

#[doc(inline)]
pub use visio_io as io;
