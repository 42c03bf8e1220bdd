use argh::FromArgs;
use std::path::PathBuf;

use visio::{
    image::Image,
    imgproc::color,
    io::functional as F,
};

#[derive(FromArgs)]
/// Convert an image to grayscale and HSV with the hand-written color conversions
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory where the results are written (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// factor applied to the saturation of the desaturated output (default: 0.5)
    #[argh(option, default = "0.5")]
    saturation_scale: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image in bgr order
    let bgr = F::read_image_any_bgr8(&args.image_path)?;
    log::info!("read {} ({})", args.image_path.display(), bgr.size());

    std::fs::create_dir_all(&args.output_dir)?;

    // bgr to grayscale
    let mut gray = Image::<u8, 1>::from_size_val(bgr.size(), 0)?;
    color::gray_from_bgr_u8(&bgr, &mut gray)?;

    // bgr to hsv
    let mut hsv = Image::<u8, 3>::from_size_val(bgr.size(), 0)?;
    color::hsv_from_bgr_u8(&bgr, &mut hsv)?;

    // scale the saturation and go back to bgr
    let mut hsv_scaled = Image::<u8, 3>::from_size_val(bgr.size(), 0)?;
    color::scale_saturation_u8(&hsv, &mut hsv_scaled, args.saturation_scale)?;

    let mut desaturated = Image::<u8, 3>::from_size_val(bgr.size(), 0)?;
    color::bgr_from_hsv_u8(&hsv_scaled, &mut desaturated)?;

    F::write_image_png_gray8(args.output_dir.join("gray.png"), &gray)?;
    // the raw H, S, V planes are stored as if they were B, G, R
    F::write_image_png_bgr8(args.output_dir.join("hsv.png"), &hsv)?;
    // and each plane on its own
    for (i, name) in ["hue", "saturation", "value"].iter().enumerate() {
        F::write_image_png_gray8(args.output_dir.join(format!("{name}.png")), &hsv.channel(i)?)?;
    }
    F::write_image_png_bgr8(args.output_dir.join("desaturated.png"), &desaturated)?;

    log::info!("results written to {}", args.output_dir.display());

    Ok(())
}
