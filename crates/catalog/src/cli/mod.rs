//! CLI command definitions.

pub mod cache;
pub mod categories;
pub mod products;

use clap::{Parser, Subcommand, ValueEnum};

/// Product catalog with a read-through cache.
#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Product management.
    Product(products::ProductsCommand),
    /// Category management.
    Category(categories::CategoriesCommand),
    /// Cache maintenance.
    Cache(cache::CacheCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["catalog", "cache", "sweep", "--format", "json", "--quiet"])
            .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Cache(_)));
    }
}
