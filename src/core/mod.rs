// Public modules
pub mod error;
pub mod host;
pub mod plan;
pub mod prompt;
pub mod scaffold;
pub mod settings;
pub mod slugify;
pub mod strategy;
pub mod template;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use host::{CliHost, Host};
pub use scaffold::{ScaffoldOptions, ScaffoldOutcome, ScaffoldReport};
