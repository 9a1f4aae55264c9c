//! Appointment models: committed session slots and persisted bookings.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One service occurrence placed on a barber's calendar.
///
/// Session-local until the whole booking is confirmed; for any fixed
/// (barber, date) the slot ranges of two appointments must never overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Identifier of the appointment within its session or booking
    pub id: u64,

    /// The service being performed
    pub service_id: u64,

    /// The barber performing it
    pub barber_id: u64,

    /// Calendar date of the appointment
    pub date: Date,

    /// Grid slot the appointment starts at
    pub start_time: String,
}

/// A previously persisted appointment, as read back from the booking store.
///
/// The date is kept as the raw stored text: a malformed date in old data is
/// an input error to be skipped during availability resolution, not a reason
/// to fail the whole feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExistingBooking {
    /// The barber whose calendar the booking occupies
    pub barber_id: u64,

    /// Raw stored date text, nominally `YYYY-MM-DD`
    pub date: String,

    /// Grid slot the booking starts at
    pub start_time: String,

    /// The booked service (determines how many slots are occupied)
    pub service_id: u64,
}
