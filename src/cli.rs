use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gifstitch",
    about = "Create animated GIFs from a folder of images",
    long_about = "
gifstitch - Animated GIF creator

Stitches all images found in a folder (png, jpg, jpeg, bmp, gif) into a single
looping animated GIF. Frames are ordered by filename, orientation-corrected
from EXIF metadata, and resized to match the dimensions of the first image.

Example Usage:
  # Default: 500ms per frame, infinite loop, writes animation.gif
  gifstitch my_photos

  # Custom output name and slower frame rate
  gifstitch my_photos -o vacation.gif -d 800

  # Play the animation exactly 3 times
  gifstitch my_photos -l 3"
)]
pub struct Args {
    /// Folder containing images (png, jpg, jpeg, bmp, gif)
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Output GIF filename
    #[arg(
        short = 'o',
        long = "output",
        default_value = "animation.gif",
        value_name = "FILE"
    )]
    pub output: PathBuf,

    /// Duration per frame in milliseconds
    #[arg(
        short = 'd',
        long = "duration",
        default_value_t = 500,
        value_name = "MS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub duration: u32,

    /// Number of loops, 0 = infinite
    #[arg(short = 'l', long = "loop", default_value_t = 0, value_name = "N")]
    pub loop_count: u16,

    /// Enable verbose output with per-file diagnostics
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gifstitch", "photos"]).unwrap();
        assert_eq!(args.folder, PathBuf::from("photos"));
        assert_eq!(args.output, PathBuf::from("animation.gif"));
        assert_eq!(args.duration, 500);
        assert_eq!(args.loop_count, 0);
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "gifstitch",
            "my_photos",
            "-o",
            "vacation.gif",
            "-d",
            "800",
            "-l",
            "3",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.folder, PathBuf::from("my_photos"));
        assert_eq!(args.output, PathBuf::from("vacation.gif"));
        assert_eq!(args.duration, 800);
        assert_eq!(args.loop_count, 3);
        assert!(args.verbose);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "gifstitch",
            "shots",
            "--output",
            "out.gif",
            "--duration",
            "120",
            "--loop",
            "1",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("out.gif"));
        assert_eq!(args.duration, 120);
        assert_eq!(args.loop_count, 1);
    }

    #[test]
    fn test_folder_is_required() {
        assert!(Args::try_parse_from(["gifstitch"]).is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(Args::try_parse_from(["gifstitch", "photos", "-d", "0"]).is_err());
    }
}
