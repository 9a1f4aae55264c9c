//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a clap `Args` struct with CLI-specific attributes
//! (flags, help text, value parsers) and converts into the matching
//! framework-free parameter type from `trim_core::params`. Core types stay
//! interface-agnostic and the conversion is verified at compile time.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use rust_decimal::Decimal;
use trim_core::{
    grid,
    models::{PromotionScope, ScheduleDay},
    params::{CommitAssignment, ConfirmBooking, CreateBarber, CreateService, Id},
    Appointments, AvailableSlots, BarberList, BookingRecords, CommitResult, ConfirmResult,
    FrontDesk, OperationStatus, ServiceList,
};

use crate::renderer::TerminalRenderer;

/// Parse a service duration given as minutes or as a label like "45 min".
fn parse_duration(value: &str) -> std::result::Result<u32, String> {
    grid::minutes_from_label(value)
        .ok_or_else(|| format!("'{value}' is not a duration (expected e.g. '45' or '45 min')"))
}

/// Parse one working day given as `DATE=TIME,TIME,...`,
/// e.g. `2026-09-01=09:00,09:30,14:00`.
fn parse_schedule_day(value: &str) -> std::result::Result<ScheduleDay, String> {
    let (date, slots) = value
        .split_once('=')
        .ok_or_else(|| format!("'{value}' is not a schedule day (expected DATE=TIME,TIME,...)"))?;
    let date: Date = date
        .parse()
        .map_err(|e| format!("'{date}' is not a date: {e}"))?;
    let slots: Vec<String> = slots
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    for slot in &slots {
        if grid::index_of(slot).is_none() {
            return Err(format!("'{slot}' is not a half-hour slot between 08:00 and 19:30"));
        }
    }
    Ok(ScheduleDay { date, slots })
}

/// Parse one slot placement given as `BARBER,DATE,TIME`,
/// e.g. `2,2026-09-01,09:00`.
fn parse_pick(value: &str) -> std::result::Result<CommitAssignment, String> {
    let mut parts = value.splitn(3, ',');
    let (Some(barber), Some(date), Some(time)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("'{value}' is not a placement (expected BARBER,DATE,TIME)"));
    };
    let barber_id: u64 = barber
        .parse()
        .map_err(|_| format!("'{barber}' is not a barber ID"))?;
    let date: Date = date
        .parse()
        .map_err(|e| format!("'{date}' is not a date: {e}"))?;
    if grid::index_of(time).is_none() {
        return Err(format!("'{time}' is not a half-hour slot between 08:00 and 19:30"));
    }
    Ok(CommitAssignment { barber_id, date, start_time: time.to_string() })
}

/// Command-line argument representation of promotion scopes
///
/// Converts between the user-facing `--promotion` values and the core
/// `PromotionScope` enum.
#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum PromotionArg {
    /// No promotion
    #[default]
    None,
    /// Discount applies to every occurrence
    All,
    /// Discount applies to the first occurrence only
    Vip,
}

impl std::fmt::Display for PromotionArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromotionArg::None => write!(f, "none"),
            PromotionArg::All => write!(f, "all"),
            PromotionArg::Vip => write!(f, "vip"),
        }
    }
}

impl From<PromotionArg> for PromotionScope {
    fn from(val: PromotionArg) -> Self {
        match val {
            PromotionArg::None => PromotionScope::None,
            PromotionArg::All => PromotionScope::All,
            PromotionArg::Vip => PromotionScope::Vip,
        }
    }
}

/// Add a new service to the catalog
#[derive(Args)]
pub struct AddServiceArgs {
    /// Title of the service
    pub title: String,
    /// Base price before any promotion
    #[arg(short, long, help = "Base price before any promotion, e.g. 30.00")]
    pub price: Decimal,
    /// Duration, as minutes or a label like "45 min"
    #[arg(
        short,
        long,
        default_value = "30",
        value_parser = parse_duration,
        help = "Duration as minutes or a label like '45 min' (rounded up to half-hour slots)"
    )]
    pub duration: u32,
    /// Promotion scope for the service
    #[arg(long, value_enum, default_value_t = PromotionArg::None)]
    pub promotion: PromotionArg,
    /// Discount percentage for the promotion
    #[arg(long, help = "Discount percentage applied by the promotion (0-100)")]
    pub discount: Option<u8>,
}

impl From<AddServiceArgs> for CreateService {
    fn from(val: AddServiceArgs) -> Self {
        CreateService {
            title: val.title,
            price: val.price,
            duration_minutes: val.duration,
            promotion: val.promotion.into(),
            discount_percentage: val.discount,
        }
    }
}

/// Add a new barber to the roster
#[derive(Args)]
pub struct AddBarberArgs {
    /// Display name of the barber
    pub name: String,
    /// Specialty shown to clients
    #[arg(short, long, help = "Specialty shown to clients, e.g. 'fades'")]
    pub specialty: Option<String>,
    /// Experience label shown to clients
    #[arg(short, long, help = "Experience label shown to clients, e.g. '8 years'")]
    pub experience: Option<String>,
    /// Working days, each as DATE=TIME,TIME,... (repeatable)
    #[arg(
        long = "day",
        value_parser = parse_schedule_day,
        help = "Working day as DATE=TIME,TIME,... e.g. 2026-09-01=09:00,09:30 (repeatable)"
    )]
    pub days: Vec<ScheduleDay>,
}

impl From<AddBarberArgs> for CreateBarber {
    fn from(val: AddBarberArgs) -> Self {
        CreateBarber {
            name: val.name,
            specialty: val.specialty,
            experience: val.experience,
            schedule: val.days,
        }
    }
}

/// Show details of a specific service
#[derive(Args)]
pub struct ShowServiceArgs {
    /// ID of the service to display
    #[arg(help = "Unique identifier of the service to show details for")]
    pub id: u64,
}

impl From<ShowServiceArgs> for Id {
    fn from(val: ShowServiceArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show details of a specific barber
#[derive(Args)]
pub struct ShowBarberArgs {
    /// ID of the barber to display
    #[arg(help = "Unique identifier of the barber to show details for")]
    pub id: u64,
}

impl From<ShowBarberArgs> for Id {
    fn from(val: ShowBarberArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show a barber's open slots on a date
#[derive(Args)]
pub struct AvailabilityArgs {
    /// ID of the barber to query
    #[arg(help = "Unique identifier of the barber to query")]
    pub barber_id: u64,
    /// Calendar date to query, e.g. 2026-09-01
    pub date: Date,
}

/// Assemble and confirm a booking
///
/// Services are queued in the order given; repeating an ID books that
/// service twice. Each --pick places the queue starting at the given slot:
/// consecutive free slots take the whole queue, otherwise only the first
/// service is placed and the rest wait for another --pick.
#[derive(Args)]
pub struct BookArgs {
    /// Service to book (repeatable; repeats count as separate occurrences)
    #[arg(
        short,
        long = "service",
        required = true,
        help = "Service ID to book (repeatable; repeats count as separate occurrences)"
    )]
    pub services: Vec<u64>,
    /// Slot placement as BARBER,DATE,TIME (repeatable)
    #[arg(
        short,
        long = "pick",
        value_parser = parse_pick,
        help = "Slot placement as BARBER,DATE,TIME e.g. 2,2026-09-01,09:00 (repeatable)"
    )]
    pub picks: Vec<CommitAssignment>,
    /// Confirm the booking under this client name
    #[arg(
        short,
        long,
        help = "Client name; when given and every service is placed, the booking is confirmed"
    )]
    pub client: Option<String>,
}

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Add a new service to the catalog
    #[command(alias = "a")]
    Add(AddServiceArgs),
    /// List the service catalog
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific service
    #[command(alias = "s")]
    Show(ShowServiceArgs),
}

#[derive(Subcommand)]
pub enum BarberCommands {
    /// Add a new barber to the roster
    #[command(alias = "a")]
    Add(AddBarberArgs),
    /// List the barber roster
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific barber
    #[command(alias = "s")]
    Show(ShowBarberArgs),
    /// Show a barber's open slots on a date
    #[command(alias = "av")]
    Availability(AvailabilityArgs),
}

/// Command dispatcher tying a front desk to a terminal renderer
pub struct Cli {
    desk: FrontDesk,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI dispatcher
    pub fn new(desk: FrontDesk, renderer: TerminalRenderer) -> Self {
        Self { desk, renderer }
    }

    /// Handle `service` subcommands
    pub async fn handle_service_command(mut self, command: ServiceCommands) -> Result<()> {
        match command {
            ServiceCommands::Add(args) => {
                let service = self
                    .desk
                    .add_service(&args.into())
                    .await
                    .context("Failed to create service")?;
                self.renderer.render(&format!("{service}"))
            }
            ServiceCommands::List => self.list_services(),
            ServiceCommands::Show(args) => {
                let id: Id = args.into();
                match self.desk.get_service(&id).await? {
                    Some(service) => self.renderer.render(&format!("{service}")),
                    None => self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(format!("Service {} not found", id.id))
                    )),
                }
            }
        }
    }

    /// Handle `barber` subcommands
    pub async fn handle_barber_command(mut self, command: BarberCommands) -> Result<()> {
        match command {
            BarberCommands::Add(args) => {
                let barber = self
                    .desk
                    .add_barber(&args.into())
                    .await
                    .context("Failed to create barber")?;
                self.renderer.render(&format!("{barber}"))
            }
            BarberCommands::List => {
                let barbers = BarberList(self.desk.snapshot().barbers.clone());
                self.renderer.render(&format!("{barbers}"))
            }
            BarberCommands::Show(args) => {
                let id: Id = args.into();
                match self.desk.get_barber(&id).await? {
                    Some(barber) => self.renderer.render(&format!("{barber}")),
                    None => self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(format!("Barber {} not found", id.id))
                    )),
                }
            }
            BarberCommands::Availability(args) => {
                let slots = self
                    .desk
                    .available_times_for(args.barber_id, args.date)
                    .context("Failed to resolve availability")?;
                self.renderer.render(&format!(
                    "# Open slots for barber {} on {}\n\n{}",
                    args.barber_id,
                    args.date,
                    AvailableSlots(slots)
                ))
            }
        }
    }

    /// List the service catalog
    pub fn list_services(&self) -> Result<()> {
        let services = ServiceList(self.desk.snapshot().services.clone());
        self.renderer.render(&format!("{services}"))
    }

    /// List confirmed bookings
    pub async fn list_bookings(&self) -> Result<()> {
        let records = self
            .desk
            .list_bookings()
            .await
            .context("Failed to list bookings")?;
        self.renderer.render(&format!("{}", BookingRecords(records)))
    }

    /// Run one whole booking flow: queue services, place picks, price,
    /// and optionally confirm.
    pub async fn book(&mut self, args: BookArgs) -> Result<()> {
        for id in &args.services {
            self.desk
                .add_service_occurrence(*id)
                .with_context(|| format!("Failed to queue service {id}"))?;
        }
        self.desk.begin_assignment()?;

        for pick in &args.picks {
            self.desk
                .select_barber(pick.barber_id)
                .with_context(|| format!("Failed to select barber {}", pick.barber_id))?;
            let outcome = self
                .desk
                .commit_assignment(pick)
                .with_context(|| {
                    format!("Failed to place slot {} on {}", pick.start_time, pick.date)
                })?;
            self.renderer.render(&format!("{}", CommitResult::new(outcome)))?;
        }

        self.renderer
            .render(&format!("**Total price:** {}", self.desk.total_price()))?;

        match args.client {
            Some(client_name) => {
                let record = self
                    .desk
                    .confirm(&ConfirmBooking { client_name })
                    .await
                    .context("Failed to confirm booking")?;
                self.renderer.render(&format!("{}", ConfirmResult::new(record)))
            }
            None if self.desk.is_ready_to_confirm() => {
                let committed = Appointments(self.desk.committed_appointments().to_vec());
                self.renderer.render(&format!(
                    "{committed}\n{}",
                    OperationStatus::success(
                        "Every service is placed. Re-run with --client NAME to confirm."
                            .to_string()
                    )
                ))
            }
            None => {
                let remaining = self.desk.unassigned_queue().len();
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::failure(format!(
                        "{remaining} service(s) still unassigned; nothing was saved."
                    ))
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_accepts_labels() {
        assert_eq!(parse_duration("45"), Ok(45));
        assert_eq!(parse_duration("45 min"), Ok(45));
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn test_parse_schedule_day() {
        let day = parse_schedule_day("2026-09-01=09:00,09:30").unwrap();
        assert_eq!(day.date.to_string(), "2026-09-01");
        assert_eq!(day.slots, vec!["09:00", "09:30"]);
    }

    #[test]
    fn test_parse_schedule_day_rejects_off_grid_time() {
        assert!(parse_schedule_day("2026-09-01=09:15").is_err());
        assert!(parse_schedule_day("2026-09-01").is_err());
    }

    #[test]
    fn test_parse_pick() {
        let pick = parse_pick("2,2026-09-01,09:00").unwrap();
        assert_eq!(pick.barber_id, 2);
        assert_eq!(pick.date.to_string(), "2026-09-01");
        assert_eq!(pick.start_time, "09:00");
    }

    #[test]
    fn test_parse_pick_rejects_malformed_input() {
        assert!(parse_pick("2,2026-09-01").is_err());
        assert!(parse_pick("x,2026-09-01,09:00").is_err());
        assert!(parse_pick("2,someday,09:00").is_err());
        assert!(parse_pick("2,2026-09-01,23:00").is_err());
    }
}
