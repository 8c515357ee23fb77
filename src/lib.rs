// Library exports so the pipeline can be driven from integration tests
pub mod animation;
pub mod cli;
pub mod utils;

// Re-export commonly used types
pub use animation::{AnimationConfig, AnimationError, AnimationSummary, SkippedFile};
pub use cli::Args;
