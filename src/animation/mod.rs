pub mod discover;
pub mod encode;
pub mod error;
pub mod loader;
pub mod orientation;
pub mod resize;

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

pub use error::AnimationError;
pub use loader::SkippedFile;

/// Settings for one animation run, built once from parsed arguments
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Display duration of every frame, in milliseconds
    pub frame_duration_ms: u32,
    /// Number of times the animation replays; 0 = infinite
    pub loop_count: u16,
    /// Path of the GIF to write
    pub output: PathBuf,
    pub verbose: bool,
}

/// What a finished run produced, for the CLI summary
#[derive(Debug)]
pub struct AnimationSummary {
    pub frame_count: usize,
    /// Frames that had to be stretched to the reference dimensions
    pub resized_count: usize,
    pub width: u32,
    pub height: u32,
    pub skipped: Vec<SkippedFile>,
    /// Size of the written GIF in bytes
    pub output_bytes: u64,
}

/// Run the full pipeline against a folder: discovery, load, normalize,
/// encode. This is the library entry point; the binary drives discovery
/// itself so it can list the files it found first.
pub fn create_animation(
    folder: &Path,
    config: &AnimationConfig,
    progress: &ProgressBar,
) -> Result<AnimationSummary, AnimationError> {
    let files = discover::find_images(folder)?;
    if files.is_empty() {
        return Err(AnimationError::NoImagesFound {
            folder: folder.to_path_buf(),
        });
    }
    progress.set_length(files.len() as u64);
    assemble_gif(&files, config, progress)
}

/// Load the given files, normalize their dimensions and encode the GIF
pub fn assemble_gif(
    files: &[PathBuf],
    config: &AnimationConfig,
    progress: &ProgressBar,
) -> Result<AnimationSummary, AnimationError> {
    let (frames, skipped) = loader::load_frames(files, config.verbose, progress);

    if frames.is_empty() {
        return Err(AnimationError::NoValidImages {
            candidates: files.len(),
        });
    }

    let (frames, resized_count) = resize::normalize_dimensions(frames)?;
    let (width, height) = frames[0].dimensions();
    let frame_count = frames.len();

    encode::write_gif(frames, config)?;

    let output_bytes = std::fs::metadata(&config.output)
        .map(|m| m.len())
        .unwrap_or(0);

    Ok(AnimationSummary {
        frame_count,
        resized_count,
        width,
        height,
        skipped,
        output_bytes,
    })
}
