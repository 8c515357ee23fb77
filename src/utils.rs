use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Create a styled progress bar
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.blue} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg} ({eta})",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb
}

/// Format duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 60 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        format!("{}m {}s", mins, secs)
    } else if total_secs > 0 {
        format!("{}.{:03}s", total_secs, millis)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Format a byte count in a human-readable way (KB below 1 MB, MB above)
pub fn format_file_size(bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

/// Get file extension in lowercase
pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a file has one of the specified extensions (case-insensitive)
pub fn has_valid_extension(path: &Path, extensions: &[&str]) -> bool {
    if let Some(ext) = get_file_extension(path) {
        extensions.contains(&ext.as_str())
    } else {
        false
    }
}

/// Print verbose information if verbose mode is enabled
pub fn verbose_println(verbose: bool, message: &str) {
    if verbose {
        println!("{} {}", style("[VERBOSE]").dim(), message);
    }
}

/// Print warning message
pub fn warn_println(message: &str) {
    println!("{} {}", style("[WARNING]").yellow().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(1)), "1.000s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "0.5 KB");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(153_600), "150.0 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(
            get_file_extension(&PathBuf::from("photo.JPG")),
            Some("jpg".to_string())
        );
        assert_eq!(
            get_file_extension(&PathBuf::from("archive.tar.gz")),
            Some("gz".to_string())
        );
        assert_eq!(get_file_extension(&PathBuf::from("noext")), None);
    }

    #[test]
    fn test_has_valid_extension() {
        let exts = ["png", "jpg", "jpeg", "bmp", "gif"];
        assert!(has_valid_extension(&PathBuf::from("a.png"), &exts));
        assert!(has_valid_extension(&PathBuf::from("a.PNG"), &exts));
        assert!(has_valid_extension(&PathBuf::from("a.Jpeg"), &exts));
        assert!(!has_valid_extension(&PathBuf::from("a.txt"), &exts));
        assert!(!has_valid_extension(&PathBuf::from("png"), &exts));
    }
}
