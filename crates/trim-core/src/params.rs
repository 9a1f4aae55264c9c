//! Parameter structures for booking operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, other
//! front ends later) without framework-specific derives. Interface layers
//! wrap these with their own derives (clap args in the CLI) and convert via
//! `into_params`-style methods, keeping the core free of UI concerns.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PromotionScope;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a service to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateService {
    /// Title of the service
    pub title: String,
    /// Base price before any promotion
    pub price: Decimal,
    /// Duration in minutes (drives how many grid slots are booked)
    pub duration_minutes: u32,
    /// Promotion scope for the service
    pub promotion: PromotionScope,
    /// Discount percentage; ignored when the scope is `none`
    pub discount_percentage: Option<u8>,
}

/// Parameters for adding a barber to the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBarber {
    /// Display name of the barber
    pub name: String,
    /// Specialty shown to clients
    pub specialty: Option<String>,
    /// Experience label shown to clients
    pub experience: Option<String>,
    /// Per-date working slots
    pub schedule: Vec<crate::models::ScheduleDay>,
}

/// Parameters for one slot-placement event of the assignment planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAssignment {
    /// The barber receiving the appointment(s)
    pub barber_id: u64,
    /// Calendar date of the placement
    pub date: Date,
    /// Chosen start slot
    pub start_time: String,
}

/// Parameters for confirming a completed session as one booking record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmBooking {
    /// Name of the client the booking is for
    pub client_name: String,
}
