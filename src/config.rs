pub mod operations;
pub mod types;

// Re-export types
pub use types::DashConfig;

// Re-export operations
pub use operations::{apply_cli_args, cli_args, load_cfg};
