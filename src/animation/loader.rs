use anyhow::{Context, Result};
use image::RgbImage;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

use super::orientation;
use crate::utils::verbose_println;

/// A file that could not be decoded, with the reason it was skipped
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Decode every file in order, skipping failures.
///
/// Each successfully decoded image is orientation-corrected and converted to
/// RGB. Decode failures never abort the run; they are collected so the caller
/// can report them. The progress bar ticks once per candidate file.
pub fn load_frames(
    paths: &[PathBuf],
    verbose: bool,
    progress: &ProgressBar,
) -> (Vec<RgbImage>, Vec<SkippedFile>) {
    let mut frames = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();

    for path in paths {
        if let Some(filename) = path.file_name().and_then(|f| f.to_str()) {
            progress.set_message(filename.to_string());
        }

        match load_single(path, verbose) {
            Ok(img) => frames.push(img),
            Err(e) => {
                verbose_println(verbose, &format!("Skipping {}: {:#}", path.display(), e));
                skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: format!("{:#}", e),
                });
            }
        }

        progress.inc(1);
    }

    (frames, skipped)
}

/// Decode one file into an orientation-corrected RGB frame
fn load_single(path: &Path, verbose: bool) -> Result<RgbImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?;

    // Drop alpha; the codec library defines the fill for transparent pixels
    let rgb_img = img.to_rgb8();

    // Orientation correction is best-effort: files without EXIF data (or with
    // unreadable metadata) keep their decoded pixel orientation
    match orientation::read_orientation(path) {
        Ok(exif_orientation) => Ok(orientation::apply_rotation(rgb_img, exif_orientation)),
        Err(e) => {
            verbose_println(
                verbose,
                &format!("No EXIF orientation for {}: {:#}", path.display(), e),
            );
            Ok(rgb_img)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::fs;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img: RgbImage = ImageBuffer::from_pixel(width, height, Rgb([120, 40, 200]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_frames_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_png(dir.path(), "a.png", 8, 4);
        let b = write_png(dir.path(), "b.png", 6, 6);

        let pb = ProgressBar::hidden();
        let (frames, skipped) = load_frames(&[a, b], false, &pb);
        assert_eq!(frames.len(), 2);
        assert!(skipped.is_empty());
        assert_eq!(frames[0].dimensions(), (8, 4));
        assert_eq!(frames[1].dimensions(), (6, 6));
    }

    #[test]
    fn test_corrupt_file_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_png(dir.path(), "good.png", 4, 4);
        let bad = dir.path().join("bad.jpg");
        fs::write(&bad, b"this is not a jpeg").unwrap();

        let pb = ProgressBar::hidden();
        let (frames, skipped) = load_frames(&[bad.clone(), good], false, &pb);
        assert_eq!(frames.len(), 1);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].path, bad);
        assert!(!skipped[0].reason.is_empty());
    }

    #[test]
    fn test_rgba_png_converts_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        let img = ImageBuffer::from_pixel(5, 5, image::Rgba([10u8, 20, 30, 128]));
        img.save(&path).unwrap();

        let pb = ProgressBar::hidden();
        let (frames, skipped) = load_frames(&[path], false, &pb);
        assert!(skipped.is_empty());
        assert_eq!(frames[0].dimensions(), (5, 5));
        // Alpha dropped, color channels preserved
        assert_eq!(*frames[0].get_pixel(0, 0), Rgb([10, 20, 30]));
    }
}
