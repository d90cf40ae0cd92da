//! CLI module - Command implementations

pub mod commands;

/// Output format for CLI commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The single `Codebase Hash: <hex>` line
    #[default]
    Text,
    /// The full fingerprint report as JSON
    Json,
}
