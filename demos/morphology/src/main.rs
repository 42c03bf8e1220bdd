use argh::FromArgs;
use std::path::PathBuf;

use visio::{
    image::{ops, GenericImage, Image},
    imgproc::{color, morphology, threshold},
    io::functional as F,
};

#[derive(FromArgs)]
/// Apply binary morphological operations (dilate, erode, open, close) to an image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory where the results are written (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// odd kernel size (default: 3)
    #[argh(option, short = 's', default = "3")]
    kernel_size: usize,

    /// kernel shape: box, cross, ellipse (default: box)
    #[argh(option, short = 'k', default = "String::from(\"box\")")]
    kernel_shape: String,

    /// gray level above which a pixel belongs to the foreground (default: 127)
    #[argh(option, short = 't', default = "127")]
    threshold: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image and bring it to grayscale
    let image = F::read_image_any(&args.image_path)?;
    let gray = match &image {
        GenericImage::Mono8(gray) => gray.clone(),
        _ => color::to_grayscale(&image)?,
    };
    let size = gray.size();
    log::info!("read {} ({size})", args.image_path.display());

    // apply threshold to create a 0/1 mask
    let mut binary = Image::<u8, 1>::from_size_val(size, 0)?;
    threshold::threshold_binary(&gray, &mut binary, args.threshold, 1)?;

    let kernel_shape = match args.kernel_shape.as_str() {
        "cross" => morphology::KernelShape::Cross {
            size: args.kernel_size,
        },
        "ellipse" => morphology::KernelShape::Ellipse {
            size: args.kernel_size,
        },
        "box" => morphology::KernelShape::Box {
            size: args.kernel_size,
        },
        other => return Err(format!("unknown kernel shape: {other}").into()),
    };
    let kernel = morphology::Kernel::new(kernel_shape)?;

    let mut dilated = Image::<u8, 1>::from_size_val(size, 0)?;
    let mut eroded = Image::<u8, 1>::from_size_val(size, 0)?;
    let mut opened = Image::<u8, 1>::from_size_val(size, 0)?;
    let mut closed = Image::<u8, 1>::from_size_val(size, 0)?;

    // apply all morphological operations
    morphology::dilate(&binary, &mut dilated, &kernel)?;
    morphology::erode(&binary, &mut eroded, &kernel)?;
    morphology::open(&binary, &mut opened, &kernel)?;
    morphology::close(&binary, &mut closed, &kernel)?;

    std::fs::create_dir_all(&args.output_dir)?;

    // scale the masks to 0/255 to make them visible
    let mut visible = Image::<u8, 1>::from_size_val(size, 0)?;
    for (name, mask) in [
        ("dilated", &dilated),
        ("eroded", &eroded),
        ("opened", &opened),
        ("closed", &closed),
    ] {
        ops::cast_and_scale(mask, &mut visible, 255u8)?;
        F::write_image_png_gray8(args.output_dir.join(format!("{name}.png")), &visible)?;
    }

    log::info!("results written to {}", args.output_dir.display());

    Ok(())
}
