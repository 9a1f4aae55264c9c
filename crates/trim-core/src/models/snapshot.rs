//! Read-only input snapshot consumed by the scheduling engine.

use serde::{Deserialize, Serialize};

use super::{Barber, ExistingBooking, Service};
use crate::error::{BookingError, Result};

/// The external data the engine schedules against: the service catalog, the
/// barber roster, and the flattened feed of already persisted bookings.
///
/// A snapshot is refreshed on demand and treated as immutable between
/// refreshes; the engine never writes to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Service catalog
    pub services: Vec<Service>,

    /// Barber roster, including per-date schedules
    pub barbers: Vec<Barber>,

    /// Appointments from previously confirmed bookings
    pub existing_bookings: Vec<ExistingBooking>,
}

impl Snapshot {
    /// Looks up a service by ID.
    pub fn service(&self, id: u64) -> Result<&Service> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .ok_or(BookingError::ServiceNotFound { id })
    }

    /// Looks up a barber by ID.
    pub fn barber(&self, id: u64) -> Result<&Barber> {
        self.barbers
            .iter()
            .find(|b| b.id == id)
            .ok_or(BookingError::BarberNotFound { id })
    }

    /// Duration of a service in minutes, or `None` for an unknown ID.
    ///
    /// Availability resolution uses this for stored bookings, where an
    /// unknown service ID is skippable bad data rather than an error.
    pub fn duration_of(&self, service_id: u64) -> Option<u32> {
        self.services
            .iter()
            .find(|s| s.id == service_id)
            .map(|s| s.duration_minutes)
    }
}
