use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BarberCommands, BookArgs, ServiceCommands};

/// Main command-line interface for the Trim booking tool
///
/// Trim manages a barbershop's service catalog and barber calendars and
/// assembles multi-service bookings: pick services (repeating one counts as
/// separate occurrences), then place them into free half-hour slots on one
/// or more barbers' days, and confirm the whole visit as a single booking.
#[derive(Parser)]
#[command(version, about, name = "trim")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/trim/trim.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trim CLI
///
/// The CLI is organized into four main command categories:
/// - `service`: Manage the service catalog (add, list)
/// - `barber`: Manage barbers and inspect their open slots
/// - `book`: Assemble, price, and confirm a booking in one invocation
/// - `bookings`: List previously confirmed bookings
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the service catalog
    #[command(alias = "s")]
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },
    /// Manage barbers and their schedules
    #[command(alias = "b")]
    Barber {
        #[command(subcommand)]
        command: BarberCommands,
    },
    /// Assemble and confirm a booking
    Book(BookArgs),
    /// List confirmed bookings
    #[command(alias = "ls")]
    Bookings,
}
