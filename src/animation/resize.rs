use anyhow::Result;
use fast_image_resize::{
    images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer,
};
use image::{ImageBuffer, RgbImage};
use std::num::NonZeroU32;

use super::error::AnimationError;

/// Bring every frame to the dimensions of the first one.
///
/// The first frame is the reference and is never touched. Mismatched frames
/// are stretched to the exact reference size; aspect distortion is accepted
/// rather than letterboxing or cropping. Returns the frames together with
/// the number that needed resizing.
pub fn normalize_dimensions(
    frames: Vec<RgbImage>,
) -> Result<(Vec<RgbImage>, usize), AnimationError> {
    let mut iter = frames.into_iter();
    let reference = match iter.next() {
        Some(frame) => frame,
        None => return Ok((Vec::new(), 0)),
    };
    let (width, height) = reference.dimensions();

    let mut normalized = vec![reference];
    let mut resized = 0;

    for (index, frame) in iter.enumerate() {
        if frame.dimensions() == (width, height) {
            normalized.push(frame);
        } else {
            let stretched =
                stretch_to(&frame, width, height).map_err(|source| AnimationError::Resize {
                    // index 0 is the reference frame
                    index: index + 1,
                    width,
                    height,
                    source,
                })?;
            normalized.push(stretched);
            resized += 1;
        }
    }

    Ok((normalized, resized))
}

/// Resize an image to exact dimensions using Lanczos3 resampling
fn stretch_to(img: &RgbImage, width: u32, height: u32) -> Result<RgbImage> {
    let (src_width, src_height) = img.dimensions();

    if src_width == width && src_height == height {
        return Ok(img.clone());
    }

    let src_width = NonZeroU32::new(src_width)
        .ok_or_else(|| anyhow::anyhow!("Source width is zero"))?;
    let src_height = NonZeroU32::new(src_height)
        .ok_or_else(|| anyhow::anyhow!("Source height is zero"))?;
    let dst_width =
        NonZeroU32::new(width).ok_or_else(|| anyhow::anyhow!("Target width is zero"))?;
    let dst_height =
        NonZeroU32::new(height).ok_or_else(|| anyhow::anyhow!("Target height is zero"))?;

    let src_image = Image::from_vec_u8(
        src_width.into(),
        src_height.into(),
        img.as_raw().clone(),
        PixelType::U8x3,
    )?;

    let mut dst_image = Image::new(dst_width.into(), dst_height.into(), PixelType::U8x3);

    let mut resizer = Resizer::new();
    let options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer.resize(&src_image, &mut dst_image, Some(&options))?;

    let output: RgbImage = ImageBuffer::from_raw(width, height, dst_image.buffer().to_vec())
        .ok_or_else(|| anyhow::anyhow!("Resized buffer has unexpected length"))?;

    Ok(output)
}
