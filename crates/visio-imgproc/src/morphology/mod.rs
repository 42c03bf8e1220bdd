//! Binary morphology on single channel images holding 0 and 1.
//!
//! The operations follow the OpenCV conventions: a kernel offset `(ky, kx)` samples the source
//! at `(y + ky - border, x + kx - border)`. Pixels outside of the image count as 0 for
//! [`dilate`] and as 1 for [`erode`].

mod dilate;
mod erode;
mod error;
mod kernel;

pub use dilate::{dilate, dilate_generic, dilate_with_strategy, DilateStrategy};
pub use erode::{close, erode, open};
pub use error::MorphologyError;
pub use kernel::{Kernel, KernelShape};
