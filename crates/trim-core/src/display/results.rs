//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::BookingRecord;
use crate::session::CommitOutcome;

/// Wrapper type for displaying the result of one slot-placement event.
///
/// Shows the appointments that were created and, when the placement fell
/// back to the queue head, how many services remain to be scheduled.
pub struct CommitResult {
    pub outcome: CommitOutcome,
}

impl CommitResult {
    /// Create a new CommitResult wrapper.
    pub fn new(outcome: CommitOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for CommitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scheduled {} appointment(s):", self.outcome.appointments.len())?;
        for appointment in &self.outcome.appointments {
            writeln!(f, "- {appointment}")?;
        }
        if !self.outcome.fully_assigned() {
            writeln!(f)?;
            writeln!(
                f,
                "{} service(s) still unassigned; pick another slot to continue.",
                self.outcome.remaining
            )?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of a booking confirmation.
pub struct ConfirmResult {
    pub record: BookingRecord,
}

impl ConfirmResult {
    /// Create a new ConfirmResult wrapper.
    pub fn new(record: BookingRecord) -> Self {
        Self { record }
    }
}

impl fmt::Display for ConfirmResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confirmed booking with ID: {}", self.record.id)?;
        writeln!(f)?;
        write!(f, "{}", self.record)
    }
}
