//! Service occurrence selection and the unassigned queue.

use super::{BookingSession, SessionPhase};
use crate::{
    error::{BookingError, Result},
    models::Snapshot,
};

impl BookingSession {
    /// Adds one occurrence of a service to the session.
    ///
    /// Duplicates are allowed and represent repeat services ("haircut ×2").
    /// Only valid while selecting services.
    ///
    /// # Errors
    ///
    /// Rejected outside the selection phase or for an unknown service ID.
    pub fn add_service_occurrence(&mut self, service_id: u64, snapshot: &Snapshot) -> Result<()> {
        if self.phase != SessionPhase::SelectingServices {
            return Err(BookingError::invalid_input("phase")
                .with_reason("Services can only be added while selecting services"));
        }
        snapshot.service(service_id)?;
        self.selected_services.push(service_id);
        Ok(())
    }

    /// Removes the last-selected occurrence of a service.
    ///
    /// Removing the last occurrence keeps earlier ones in place, so the
    /// first-selected occurrence of a VIP-scoped service keeps its
    /// discounted position. Only valid while selecting services.
    ///
    /// # Errors
    ///
    /// Rejected outside the selection phase or when the service has no
    /// selected occurrence.
    pub fn remove_service_occurrence(&mut self, service_id: u64) -> Result<()> {
        if self.phase != SessionPhase::SelectingServices {
            return Err(BookingError::invalid_input("phase")
                .with_reason("Services can only be removed while selecting services"));
        }
        let position = self
            .selected_services
            .iter()
            .rposition(|&id| id == service_id)
            .ok_or_else(|| {
                BookingError::invalid_input("service_id")
                    .with_reason(format!("Service {service_id} is not selected"))
            })?;
        self.selected_services.remove(position);
        Ok(())
    }

    /// Number of selected occurrences of a service ID.
    pub fn selected_count(&self, service_id: u64) -> usize {
        self.selected_services
            .iter()
            .filter(|&&id| id == service_id)
            .count()
    }

    /// Occurrences selected but not yet mapped to a committed appointment,
    /// in original selection order.
    ///
    /// For each service ID the first `assigned_count` occurrences are
    /// considered assigned; the remainder form the queue, flattened in the
    /// multiset's first-to-last order.
    pub fn unassigned_queue(&self) -> Vec<u64> {
        let mut seen: Vec<u64> = Vec::with_capacity(self.selected_services.len());
        self.selected_services
            .iter()
            .copied()
            .filter(|&service_id| {
                let occurrence = seen.iter().filter(|&&id| id == service_id).count();
                seen.push(service_id);
                occurrence >= self.assigned_count(service_id)
            })
            .collect()
    }
}
