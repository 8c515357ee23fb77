use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors. Per-file decode problems are not represented here:
/// those are recovered, counted and reported as [`crate::SkippedFile`].
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("folder '{0}' not found")]
    FolderNotFound(PathBuf),

    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to scan folder '{folder}'")]
    Scan {
        folder: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("no images found in '{folder}' (looked for .png, .jpg, .jpeg, .bmp, .gif)")]
    NoImagesFound { folder: PathBuf },

    #[error("no valid images could be loaded ({candidates} candidate files, all failed)")]
    NoValidImages { candidates: usize },

    #[error("failed to resize frame {index} to {width}x{height}")]
    Resize {
        index: usize,
        width: u32,
        height: u32,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to write GIF '{path}'")]
    Encode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
