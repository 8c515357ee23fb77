use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::AnimationError;
use crate::utils::has_valid_extension;

/// Extensions accepted as animation frame sources, matched case-insensitively.
pub const FRAME_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Discover all image files directly inside `folder`.
///
/// Returns a deduplicated, lexicographically sorted list so repeated runs on
/// an unchanged folder always produce the same frame order. An empty result
/// is not an error at this layer; the caller decides whether to abort.
pub fn find_images(folder: &Path) -> Result<Vec<PathBuf>, AnimationError> {
    if !folder.exists() {
        return Err(AnimationError::FolderNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(AnimationError::NotADirectory(folder.to_path_buf()));
    }

    let mut image_files = Vec::new();

    // Only the top directory level, mirroring a shell glob of the folder
    let walker = WalkDir::new(folder).follow_links(false).max_depth(1);

    for entry in walker {
        let entry = entry.map_err(|source| AnimationError::Scan {
            folder: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_file() && has_valid_extension(path, &FRAME_EXTENSIONS) {
            image_files.push(path.to_path_buf());
        }
    }

    // Sort for consistent frame order
    image_files.sort();
    image_files.dedup();

    Ok(image_files)
}
