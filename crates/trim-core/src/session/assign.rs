//! The sequential assignment planner.
//!
//! One placement event turns a (barber, date, start slot) pick into one or
//! more committed appointments for the unassigned queue. When a contiguous
//! free run long enough for the *entire* queue starts at the pick, every
//! queued occurrence is packed back-to-back in one go; otherwise only the
//! queue head is placed and the caller re-prompts for the rest. Either way
//! no appointment is ever created on an occupied or out-of-grid slot.

use super::{BookingSession, SessionPhase};
use crate::{
    availability,
    error::{BookingError, Result},
    grid,
    models::{Appointment, Snapshot},
    params::CommitAssignment,
};

/// Result of one slot-placement event.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    /// Appointments created by this placement, in queue order
    pub appointments: Vec<Appointment>,
    /// Occurrences still unassigned after the placement
    pub remaining: usize,
}

impl CommitOutcome {
    /// Whether the placement drained the whole unassigned queue.
    pub fn fully_assigned(&self) -> bool {
        self.remaining == 0
    }
}

impl BookingSession {
    /// Commits appointments for the unassigned queue at the given pick.
    ///
    /// The full queue is packed into consecutive slots starting at
    /// `start_time` when such a free run exists; otherwise only the queue
    /// head is placed there. See the module docs for the exact policy.
    ///
    /// # Errors
    ///
    /// - [`BookingError::InvalidInput`] outside the assignment phase or for
    ///   a barber that is not part of the session's selection.
    /// - [`BookingError::SlotUnavailable`] when `start_time` is not a free
    ///   scheduled slot run for even the first queued service.
    pub fn commit_assignment(
        &mut self,
        params: &CommitAssignment,
        snapshot: &Snapshot,
    ) -> Result<CommitOutcome> {
        if self.phase != SessionPhase::AssigningSlots {
            return Err(BookingError::invalid_input("phase")
                .with_reason("No unassigned services to schedule"));
        }
        if !self.selected_barbers.contains(&params.barber_id) {
            return Err(BookingError::invalid_input("barber_id").with_reason(format!(
                "Barber {} is not selected for this session",
                params.barber_id
            )));
        }

        let queue = self.unassigned_queue();
        let Some(&head_id) = queue.first() else {
            // The assignment phase guarantees a non-empty queue
            return Err(BookingError::invalid_input("phase")
                .with_reason("No unassigned services to schedule"));
        };
        let head_slots = grid::slots_required(snapshot.service(head_id)?.duration_minutes);
        let slots_per_entry: Vec<usize> = queue
            .iter()
            .map(|&id| Ok(grid::slots_required(snapshot.service(id)?.duration_minutes)))
            .collect::<Result<_>>()?;
        let required_slots: usize = slots_per_entry.iter().sum();

        let available =
            availability::available_times(params.barber_id, params.date, snapshot, &self.appointments)?;
        let start = grid::index_of(&params.start_time).ok_or_else(|| unavailable(params))?;

        let run_is_free = |len: usize| -> bool {
            start + len <= grid::TIME_GRID.len()
                && grid::TIME_GRID[start..start + len]
                    .iter()
                    .all(|slot| available.iter().any(|s| s == slot))
        };

        // Greedy contiguous packing of the whole queue, or head-only
        // fallback when no full run starts at the pick.
        let take = if run_is_free(required_slots) {
            queue.len()
        } else if run_is_free(head_slots) {
            1
        } else {
            return Err(unavailable(params));
        };

        let mut created = Vec::with_capacity(take);
        let mut cursor = start;
        for (&service_id, &slots) in queue.iter().zip(&slots_per_entry).take(take) {
            created.push(Appointment {
                id: self.next_id(),
                service_id,
                barber_id: params.barber_id,
                date: params.date,
                start_time: grid::TIME_GRID[cursor].to_string(),
            });
            cursor += slots;
        }

        self.push_appointments(created.clone());

        Ok(CommitOutcome {
            appointments: created,
            remaining: self.unassigned_queue().len(),
        })
    }
}

fn unavailable(params: &CommitAssignment) -> BookingError {
    BookingError::SlotUnavailable {
        barber_id: params.barber_id,
        date: params.date.to_string(),
        time: params.start_time.clone(),
    }
}
