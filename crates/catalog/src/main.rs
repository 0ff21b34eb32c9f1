//! catalog CLI entry point.

mod cache;
mod catalog;
mod cli;
mod config;
mod error;
mod output;
mod state;
mod storage;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::cache::CacheAction;
use crate::cli::categories::{self, CategoriesAction};
use crate::cli::products::ProductsAction;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::CommandError;
use crate::output::{format_output, pretty};
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing subscriber (stderr, so stdout stays parseable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report();
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = Config::from_env();
    let state = AppState::new(&config).await?;
    let catalog = &state.catalog;

    match cli.command {
        Commands::Product(products_cmd) => match products_cmd.action {
            ProductsAction::Get { id } => {
                let product = catalog.get_product(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&product, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_product(&product)),
                }
            }
            ProductsAction::Sku { sku } => {
                let product = catalog.get_product_by_sku(&sku).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&product, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_product(&product)),
                }
            }
            ProductsAction::List { filters } => {
                let list = catalog.list_products(filters.into_filters()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&list, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_products(&list)),
                }
            }
            ProductsAction::Search { term, filters } => {
                let list = catalog
                    .search_products(&term, filters.into_filters())
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&list, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_products(&list)),
                }
            }
            ProductsAction::Create(args) => {
                let product = catalog.create_product(args.into_request()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&product, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_product(&product))
                    }
                }
            }
            ProductsAction::Update { id, patch } => {
                let product = catalog.update_product(id, patch.into_request()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&product, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Updated:\n{}", pretty::format_product(&product))
                    }
                }
            }
            ProductsAction::Delete { id } => {
                catalog.delete_product(id).await?;
                if !cli.quiet {
                    println!("Deleted product {}", id);
                }
            }
        },
        Commands::Category(categories_cmd) => match categories_cmd.action {
            CategoriesAction::List => {
                let list = catalog.list_categories().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&list, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_categories(&list)),
                }
            }
            CategoriesAction::Get { id } => {
                let category = catalog.get_category(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&category, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_category(&category)),
                }
            }
            CategoriesAction::Find { name } => {
                let category = catalog.get_category_by_name(&name).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&category, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_category(&category)),
                }
            }
            CategoriesAction::Create {
                name,
                description,
                parent,
            } => {
                let request = categories::create_request(name, description, parent);
                let category = catalog.create_category(request).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&category, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_category(&category))
                    }
                }
            }
            CategoriesAction::Update {
                id,
                name,
                description,
                parent,
                active,
            } => {
                let request = categories::update_request(name, description, parent, active);
                let category = catalog.update_category(id, request).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&category, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Updated:\n{}", pretty::format_category(&category))
                    }
                }
            }
            CategoriesAction::Delete { id } => {
                catalog.delete_category(id).await?;
                if !cli.quiet {
                    println!("Deleted category {}", id);
                }
            }
        },
        Commands::Cache(cache_cmd) => match cache_cmd.action {
            CacheAction::Sweep => {
                let removed = catalog.sweep_product_lists().await;
                match cli.format {
                    OutputFormat::Json => println!("{}", serde_json::json!({ "removed": removed })),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("Removed {} cached product lists", removed)
                        }
                    }
                }
            }
        },
    }

    Ok(())
}
