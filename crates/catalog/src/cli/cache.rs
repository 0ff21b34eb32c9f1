//! Cache CLI commands.

use clap::{Parser, Subcommand};

/// Cache maintenance commands.
#[derive(Debug, Parser)]
pub struct CacheCommand {
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Available cache actions.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Drop every cached product list.
    Sweep,
}
