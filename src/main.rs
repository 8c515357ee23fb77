use anyhow::Result;
use clap::Parser;
use console::style;
use std::time::Instant;

use gifstitch::animation::{self, AnimationConfig, AnimationError};
use gifstitch::cli::Args;
use gifstitch::utils::{create_progress_bar, format_duration, format_file_size, warn_println};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();

    // Print banner
    println!("{}", style("gifstitch - Animated GIF creator").bold().blue());
    println!("  Source folder: {}", args.folder.display());
    println!("  Output file:   {}", args.output.display());
    println!();

    // Discover candidate files up front so they can be listed
    let files = animation::discover::find_images(&args.folder)?;

    if files.is_empty() {
        println!(
            "{}",
            style(format!("No images found in '{}'", args.folder.display())).red()
        );
        println!("  Make sure the folder contains .png, .jpg, .jpeg, .bmp or .gif files");
        return Err(AnimationError::NoImagesFound {
            folder: args.folder.clone(),
        }
        .into());
    }

    println!("{}", style(format!("Found {} images:", files.len())).bold());
    for path in &files {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            println!("  - {}", name);
        }
    }
    println!();

    let config = AnimationConfig {
        frame_duration_ms: args.duration,
        loop_count: args.loop_count,
        output: args.output.clone(),
        verbose: args.verbose,
    };

    // Load, normalize and encode
    let progress = create_progress_bar(files.len() as u64);
    progress.set_message("Loading images");
    let summary = animation::assemble_gif(&files, &config, &progress)?;
    progress.finish_with_message("All images loaded");
    println!();

    // Report skipped files before the summary so failures are not buried
    if !summary.skipped.is_empty() {
        warn_println(&format!(
            "{} file(s) could not be decoded and were skipped:",
            summary.skipped.len()
        ));
        for skipped in &summary.skipped {
            println!(
                "  {} - {}",
                style(skipped.path.display()).yellow(),
                skipped.reason
            );
        }
        println!();
    }

    if summary.resized_count > 0 {
        println!(
            "  Resized {} frame(s) to match the first image",
            summary.resized_count
        );
    }

    println!("{}", style("GIF created successfully!").bold().green());
    println!("  File:     {}", args.output.display());
    println!("  Size:     {}", format_file_size(summary.output_bytes));
    println!("  Frames:   {} ({}x{})", summary.frame_count, summary.width, summary.height);
    println!("  Duration: {}ms per frame", args.duration);
    if args.loop_count == 0 {
        println!("  Loop:     infinite");
    } else {
        println!("  Loop:     {} time(s)", args.loop_count);
    }
    println!();
    println!(
        "  Total time: {}",
        style(format_duration(start_time.elapsed())).dim()
    );

    Ok(())
}
