//! Availability resolution: a barber's free grid slots on a given date.
//!
//! Availability is the barber's scheduled capacity minus every slot already
//! consumed, whether by a booking persisted in the store or by an
//! appointment committed earlier in the current session. Resolution is a
//! pure function of its inputs, so repeated calls without intervening
//! commits always agree.

use jiff::civil::Date;
use log::warn;

use crate::{
    error::Result,
    grid::{self, SLOT_MINUTES, TIME_GRID},
    models::{Appointment, Snapshot},
};

/// Returns the free slot start times for `barber_id` on `date`, in grid
/// order.
///
/// A barber with no schedule entry for the date yields an empty list; that
/// is an expected outcome, not an error. Stored bookings with malformed
/// dates or unknown services are skipped (logged, never fatal).
///
/// # Errors
///
/// Returns [`crate::BookingError::BarberNotFound`] for an unknown barber.
pub fn available_times(
    barber_id: u64,
    date: Date,
    snapshot: &Snapshot,
    session_appointments: &[Appointment],
) -> Result<Vec<String>> {
    let barber = snapshot.barber(barber_id)?;
    let scheduled = barber.scheduled_slots(date);

    let mut booked = [false; TIME_GRID.len()];

    for booking in &snapshot.existing_bookings {
        if booking.barber_id != barber_id {
            continue;
        }
        let booked_date: Date = match booking.date.parse() {
            Ok(d) => d,
            Err(_) => {
                warn!(
                    "Skipping stored booking with malformed date '{}' for barber {}",
                    booking.date, booking.barber_id
                );
                continue;
            }
        };
        if booked_date != date {
            continue;
        }
        let duration = snapshot.duration_of(booking.service_id).unwrap_or_else(|| {
            warn!(
                "Stored booking references unknown service {}; assuming one slot",
                booking.service_id
            );
            SLOT_MINUTES
        });
        mark_occupied(&mut booked, &booking.start_time, duration);
    }

    for appointment in session_appointments {
        if appointment.barber_id != barber_id || appointment.date != date {
            continue;
        }
        let duration = snapshot
            .duration_of(appointment.service_id)
            .unwrap_or(SLOT_MINUTES);
        mark_occupied(&mut booked, &appointment.start_time, duration);
    }

    Ok(TIME_GRID
        .iter()
        .enumerate()
        .filter(|(i, slot)| !booked[*i] && scheduled.iter().any(|s| s == *slot))
        .map(|(_, slot)| (*slot).to_string())
        .collect())
}

fn mark_occupied(booked: &mut [bool; TIME_GRID.len()], start_time: &str, duration_minutes: u32) {
    for slot in grid::occupied_slots(start_time, duration_minutes) {
        if let Some(i) = grid::index_of(slot) {
            booked[i] = true;
        }
    }
}
