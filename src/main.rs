use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use folio::catalog::{Category, all_tools};
use folio::cli::{Cli, Commands};
use folio::{commands, tui};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(command) = cli.command {
        return match command {
            Commands::Tools { category, json } => commands::handle_tools(&category, json),
            Commands::Show { id } => commands::handle_show(&id),
        };
    }

    // Handle list-categories flag
    if cli.list_categories {
        println!("Available categories:");
        for category in Category::ALL {
            println!("  - {}", category.label());
        }
        return Ok(());
    }

    // Handle list-tools flag
    if cli.list_tools {
        println!("Available tools:");
        for tool in all_tools() {
            println!("  - {}", tool.title);
        }
        return Ok(());
    }

    log::info!("Starting interactive portfolio browser");
    tui::run(Duration::from_millis(cli.tick_rate))
}
