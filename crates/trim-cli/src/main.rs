//! Trim CLI Application
//!
//! Command-line interface for the Trim barbershop booking tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use trim_core::FrontDeskBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let desk = FrontDeskBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize front desk")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Trim started");

    match command {
        Some(Service { command }) => {
            Cli::new(desk, renderer)
                .handle_service_command(command)
                .await
        }
        Some(Barber { command }) => {
            Cli::new(desk, renderer)
                .handle_barber_command(command)
                .await
        }
        Some(Book(book_args)) => Cli::new(desk, renderer).book(book_args).await,
        Some(Bookings) => Cli::new(desk, renderer).list_bookings().await,
        None => Cli::new(desk, renderer).list_services(),
    }
}
