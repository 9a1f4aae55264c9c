//! Persisted booking confirmation records.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Appointment;

/// One confirmed booking as stored: the client, the total charged, and the
/// appointments the session committed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    /// Unique identifier for the booking
    pub id: u64,

    /// Name of the client the booking was made for
    pub client_name: String,

    /// Total charged price across all appointments, promotions applied
    pub total_price: Decimal,

    /// Timestamp when the booking was confirmed (UTC)
    pub created_at: Timestamp,

    /// The booked appointments
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}
