//! Barber selection and rollback on deselection.

use super::{BookingSession, SessionPhase};
use crate::{
    error::{BookingError, Result},
    models::Snapshot,
};

impl BookingSession {
    /// Adds a barber to the session's selection.
    ///
    /// The number of selected barbers is bounded by the number of selected
    /// service occurrences; one barber cannot outnumber the work to hand
    /// out. Selecting an already selected barber is a no-op.
    ///
    /// # Errors
    ///
    /// Rejected outside the assignment phase, for an unknown barber, or
    /// when the bound would be exceeded.
    pub fn select_barber(&mut self, barber_id: u64, snapshot: &Snapshot) -> Result<()> {
        if self.phase == SessionPhase::SelectingServices {
            return Err(BookingError::invalid_input("phase")
                .with_reason("Finish selecting services before choosing barbers"));
        }
        snapshot.barber(barber_id)?;
        if self.selected_barbers.contains(&barber_id) {
            return Ok(());
        }
        if self.selected_barbers.len() >= self.selected_services.len() {
            return Err(BookingError::invalid_input("barber_id").with_reason(format!(
                "Cannot select more than {} barber(s) for {} service(s)",
                self.selected_services.len(),
                self.selected_services.len()
            )));
        }
        self.selected_barbers.push(barber_id);
        Ok(())
    }

    /// Removes a barber from the selection, rolling back their work.
    ///
    /// Any appointments committed for that barber are discarded and their
    /// service occurrences return to the unassigned queue. Deselecting a
    /// barber that was never selected is a no-op.
    pub fn deselect_barber(&mut self, barber_id: u64) {
        self.selected_barbers.retain(|&id| id != barber_id);
        self.appointments.retain(|a| a.barber_id != barber_id);
        self.refresh_phase();
    }
}
