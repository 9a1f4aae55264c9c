//! Data models for the booking system.
//!
//! This module contains the domain models the scheduling and pricing engine
//! operates on: the service catalog, the barber roster with per-date
//! schedules, persisted bookings, and session appointments. Display
//! implementations for these models live in [`crate::display::models`] to
//! keep data structures separate from presentation logic.
//!
//! The reference-data models ([`Service`], [`Barber`], [`ExistingBooking`])
//! arrive bundled in a [`Snapshot`] and are read-only to the engine; only
//! [`Appointment`] values are created by it.

pub mod appointment;
pub mod barber;
pub mod booking;
pub mod service;
pub mod snapshot;


// Re-export all public types at the models level
pub use appointment::{Appointment, ExistingBooking};
pub use barber::{Barber, ScheduleDay};
pub use booking::BookingRecord;
pub use service::{PromotionScope, Service};
pub use snapshot::Snapshot;
