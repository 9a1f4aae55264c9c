//! Session operations for the FrontDesk: the caller-facing surface of the
//! scheduling and pricing engine, plus booking confirmation.

use jiff::civil::Date;
use rust_decimal::Decimal;
use tokio::task;

use super::FrontDesk;
use crate::{
    availability,
    db::Database,
    error::{BookingError, Result},
    models::{Appointment, BookingRecord},
    params::{CommitAssignment, ConfirmBooking},
    pricing,
    session::{BookingSession, CommitOutcome},
};

impl FrontDesk {
    /// Adds one occurrence of a service to the session.
    pub fn add_service_occurrence(&mut self, service_id: u64) -> Result<()> {
        self.session.add_service_occurrence(service_id, &self.snapshot)
    }

    /// Removes the last-selected occurrence of a service from the session.
    pub fn remove_service_occurrence(&mut self, service_id: u64) -> Result<()> {
        self.session.remove_service_occurrence(service_id)
    }

    /// Moves the session from service selection to slot assignment.
    pub fn begin_assignment(&mut self) -> Result<()> {
        self.session.begin_assignment()
    }

    /// Returns the session to service selection, discarding appointments
    /// and barber choices.
    pub fn back_to_services(&mut self) {
        self.session.back_to_services();
    }

    /// Adds a barber to the session's selection.
    pub fn select_barber(&mut self, barber_id: u64) -> Result<()> {
        self.session.select_barber(barber_id, &self.snapshot)
    }

    /// Removes a barber, rolling back their committed appointments.
    pub fn deselect_barber(&mut self, barber_id: u64) {
        self.session.deselect_barber(barber_id);
    }

    /// The dates a barber has schedule entries for, in schedule order.
    pub fn available_dates_for(&self, barber_id: u64) -> Result<Vec<Date>> {
        Ok(self.snapshot.barber(barber_id)?.scheduled_dates())
    }

    /// The free slots of a barber on a date, given the store feed and the
    /// session's own appointments.
    pub fn available_times_for(&self, barber_id: u64, date: Date) -> Result<Vec<String>> {
        availability::available_times(barber_id, date, &self.snapshot, self.session.appointments())
    }

    /// Runs one slot-placement event of the assignment planner.
    pub fn commit_assignment(&mut self, params: &CommitAssignment) -> Result<CommitOutcome> {
        self.session.commit_assignment(params, &self.snapshot)
    }

    /// Occurrences selected but not yet scheduled, in selection order.
    pub fn unassigned_queue(&self) -> Vec<u64> {
        self.session.unassigned_queue()
    }

    /// Appointments committed so far in this session.
    pub fn committed_appointments(&self) -> &[Appointment] {
        self.session.appointments()
    }

    /// Whether every selected occurrence has a committed appointment.
    pub fn is_ready_to_confirm(&self) -> bool {
        self.session.is_ready_to_confirm()
    }

    /// Price of one occurrence of a service under its promotion rules.
    pub fn price_of(&self, service_id: u64, occurrence_index: usize) -> Result<Decimal> {
        let service = self.snapshot.service(service_id)?;
        Ok(pricing::price_of(service, occurrence_index))
    }

    /// Per-occurrence prices of the session's selection, in selection order.
    pub fn occurrence_prices(&self) -> Vec<Decimal> {
        pricing::occurrence_prices(&self.snapshot.services, self.session.selected_services())
    }

    /// Total charged price of the session's selection.
    pub fn total_price(&self) -> Decimal {
        pricing::total_price(&self.snapshot.services, self.session.selected_services())
    }

    /// Confirms the completed session: persists it as one booking record,
    /// resets the session, and refreshes the snapshot so the new booking
    /// appears in the feed.
    ///
    /// # Errors
    ///
    /// Rejected while any occurrence is still unassigned.
    pub async fn confirm(&mut self, params: &ConfirmBooking) -> Result<BookingRecord> {
        if !self.session.is_ready_to_confirm() {
            return Err(BookingError::invalid_input("session").with_reason(format!(
                "{} service(s) still unassigned; schedule them before confirming",
                self.unassigned_queue().len()
            )));
        }

        let db_path = self.db_path.clone();
        let client_name = params.client_name.clone();
        let total = self.total_price();
        let appointments = self.session.appointments().to_vec();

        let record = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_booking(&client_name, total, &appointments)
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        self.session = BookingSession::new();
        self.refresh().await?;
        Ok(record)
    }
}
