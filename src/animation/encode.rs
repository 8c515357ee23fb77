use anyhow::Context;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};

use super::error::AnimationError;
use super::AnimationConfig;

/// Quantization speed passed to the GIF encoder (1 = best quality, 30 =
/// fastest). 10 keeps palettes close to lossless for typical photo batches.
const ENCODER_SPEED: i32 = 10;

/// Encode the normalized frames as a single animated GIF.
///
/// Every frame gets the same display duration; the loop count is written as
/// the standard Netscape application extension (0 = infinite). The whole
/// file is assembled in memory and written at once, so a failed run leaves
/// no half-written output behind.
pub fn write_gif(frames: Vec<RgbImage>, config: &AnimationConfig) -> Result<(), AnimationError> {
    encode_frames(frames, config)
        .and_then(|bytes| {
            std::fs::write(&config.output, bytes)
                .with_context(|| format!("Failed to write {}", config.output.display()))
        })
        .map_err(|source| AnimationError::Encode {
            path: config.output.clone(),
            source,
        })
}

fn encode_frames(frames: Vec<RgbImage>, config: &AnimationConfig) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut encoder = GifEncoder::new_with_speed(&mut buffer, ENCODER_SPEED);

    let repeat = if config.loop_count == 0 {
        Repeat::Infinite
    } else {
        Repeat::Finite(config.loop_count)
    };
    encoder
        .set_repeat(repeat)
        .context("Failed to set GIF loop count")?;

    let delay = Delay::from_numer_denom_ms(config.frame_duration_ms, 1);

    for (index, rgb) in frames.into_iter().enumerate() {
        // GIF frames carry RGBA internally; the encoder quantizes from there
        let rgba = DynamicImage::ImageRgb8(rgb).into_rgba8();
        let frame = Frame::from_parts(rgba, 0, 0, delay);
        encoder
            .encode_frame(frame)
            .with_context(|| format!("Failed to encode frame {}", index))?;
    }

    drop(encoder);
    Ok(buffer)
}
