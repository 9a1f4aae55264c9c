//! The in-progress booking session and its scheduling operations.
//!
//! A [`BookingSession`] is the mutable client-local state of one booking
//! flow: the ordered multiset of selected service occurrences, the chosen
//! barbers, and the appointments committed so far. The session moves
//! through three phases:
//!
//! ```text
//! SelectingServices ──▶ AssigningSlots ──▶ ReadyToConfirm
//!        ▲                    │
//!        └────────────────────┘  (back: clears barbers + appointments)
//! ```
//!
//! All session operations are synchronous pure state transitions over the
//! current session plus a read-only [`Snapshot`](crate::models::Snapshot);
//! nothing here touches the store.
//!
//! ## Submodules
//!
//! - [`service_ops`]: service occurrence selection and the unassigned queue
//! - [`barber_ops`]: barber selection and rollback on deselection
//! - [`assign`]: the sequential assignment planner

use serde::{Deserialize, Serialize};

use crate::models::Appointment;

pub mod assign;
pub mod barber_ops;
pub mod service_ops;


pub use assign::CommitOutcome;

/// Phase of a booking session's lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Service occurrences are being added and removed
    #[default]
    SelectingServices,

    /// Barbers are being chosen and appointments committed
    AssigningSlots,

    /// Every occurrence has an appointment; awaiting confirmation
    ReadyToConfirm,
}

/// Mutable state of one in-progress booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingSession {
    phase: SessionPhase,
    /// Ordered multiset of selected service IDs (selection order matters
    /// for VIP pricing)
    selected_services: Vec<u64>,
    /// Chosen barbers, insertion-ordered, bounded by the occurrence count
    selected_barbers: Vec<u64>,
    /// Appointments committed so far in this session
    appointments: Vec<Appointment>,
    next_appointment_id: u64,
}

impl BookingSession {
    /// Creates an empty session in the service-selection phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The ordered multiset of selected service occurrences.
    pub fn selected_services(&self) -> &[u64] {
        &self.selected_services
    }

    /// The currently selected barbers, in selection order.
    pub fn selected_barbers(&self) -> &[u64] {
        &self.selected_barbers
    }

    /// Appointments committed so far in this session.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Whether every selected occurrence has a committed appointment.
    pub fn is_ready_to_confirm(&self) -> bool {
        self.phase == SessionPhase::ReadyToConfirm
    }

    /// Moves from service selection to slot assignment.
    ///
    /// # Errors
    ///
    /// Rejected while no service occurrence is selected, or when the
    /// session already left the selection phase.
    pub fn begin_assignment(&mut self) -> crate::Result<()> {
        if self.phase != SessionPhase::SelectingServices {
            return Err(crate::BookingError::invalid_input("phase")
                .with_reason("Session already left the service-selection phase"));
        }
        if self.selected_services.is_empty() {
            return Err(crate::BookingError::invalid_input("services")
                .with_reason("Select at least one service before assigning slots"));
        }
        self.phase = SessionPhase::AssigningSlots;
        Ok(())
    }

    /// Returns to service selection, discarding all committed appointments
    /// and barber choices. The selected services are preserved.
    pub fn back_to_services(&mut self) {
        self.appointments.clear();
        self.selected_barbers.clear();
        self.phase = SessionPhase::SelectingServices;
    }

    /// Number of committed appointments for a service ID.
    pub(crate) fn assigned_count(&self, service_id: u64) -> usize {
        self.appointments
            .iter()
            .filter(|a| a.service_id == service_id)
            .count()
    }

    /// Re-derives the assignment phase after appointments changed.
    ///
    /// Promotes to `ReadyToConfirm` when the queue drained, and demotes
    /// back to `AssigningSlots` when a rollback reopened the queue.
    pub(crate) fn refresh_phase(&mut self) {
        if self.phase == SessionPhase::SelectingServices {
            return;
        }
        self.phase = if self.appointments.len() == self.selected_services.len() {
            SessionPhase::ReadyToConfirm
        } else {
            SessionPhase::AssigningSlots
        };
    }

    /// Hands out the next session-local appointment ID.
    pub(crate) fn next_id(&mut self) -> u64 {
        self.next_appointment_id += 1;
        self.next_appointment_id
    }

    /// Appends committed appointments.
    pub(crate) fn push_appointments(&mut self, created: Vec<Appointment>) {
        self.appointments.extend(created);
        self.refresh_phase();
    }
}
