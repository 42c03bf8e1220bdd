mod convert;
mod gray;
mod hsv;

pub use convert::{to_grayscale, to_hsv};
pub use gray::{bgr_from_gray, bgr_from_rgb, gray_from_bgr, gray_from_bgr_u8, rgb_from_bgr};
pub use hsv::{bgr_from_hsv_u8, hsv_from_bgr, hsv_from_bgr_u8, scale_saturation_u8};
