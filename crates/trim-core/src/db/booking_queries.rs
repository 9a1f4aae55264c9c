//! Booking confirmation persistence and the existing-bookings feed.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, Row};
use rust_decimal::Decimal;

use crate::{
    error::{BookingError, DatabaseResultExt, Result},
    models::{Appointment, BookingRecord, ExistingBooking},
};

const INSERT_BOOKING_SQL: &str =
    "INSERT INTO bookings (client_name, total_price, created_at) VALUES (?1, ?2, ?3)";
const INSERT_BOOKING_APPOINTMENT_SQL: &str = "INSERT INTO booking_appointments (booking_id, service_id, barber_id, date, start_time) VALUES (?1, ?2, ?3, ?4, ?5)";
const LIST_BOOKINGS_SQL: &str =
    "SELECT id, client_name, total_price, created_at FROM bookings ORDER BY created_at DESC";
const SELECT_BOOKING_APPOINTMENTS_SQL: &str = "SELECT id, service_id, barber_id, date, start_time FROM booking_appointments WHERE booking_id = ?1 ORDER BY date, start_time";
const FEED_SQL: &str = "SELECT barber_id, date, start_time, service_id FROM booking_appointments";

fn map_booking_row(row: &Row<'_>) -> rusqlite::Result<BookingRecord> {
    let price_text: String = row.get(2)?;
    let total_price = price_text
        .parse::<Decimal>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(BookingRecord {
        id: row.get::<_, i64>(0)? as u64,
        client_name: row.get(1)?,
        total_price,
        created_at: row
            .get::<_, String>(3)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
        appointments: Vec::new(),
    })
}

fn map_appointment_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get::<_, i64>(0)? as u64,
        service_id: row.get::<_, i64>(1)? as u64,
        barber_id: row.get::<_, i64>(2)? as u64,
        date: row
            .get::<_, String>(3)?
            .parse::<Date>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
        start_time: row.get(4)?,
    })
}

impl super::Database {
    /// Persists a confirmed session as one booking record with its
    /// appointments.
    pub fn save_booking(
        &mut self,
        client_name: &str,
        total_price: Decimal,
        appointments: &[Appointment],
    ) -> Result<BookingRecord> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_BOOKING_SQL,
            params![client_name, total_price.to_string(), now.to_string()],
        )
        .map_err(|e| BookingError::database_error("Failed to insert booking", e))?;

        let booking_id = tx.last_insert_rowid() as u64;

        for appointment in appointments {
            tx.execute(
                INSERT_BOOKING_APPOINTMENT_SQL,
                params![
                    booking_id as i64,
                    appointment.service_id as i64,
                    appointment.barber_id as i64,
                    appointment.date.to_string(),
                    appointment.start_time,
                ],
            )
            .map_err(|e| BookingError::database_error("Failed to insert booking appointment", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(BookingRecord {
            id: booking_id,
            client_name: client_name.to_string(),
            total_price,
            created_at: now,
            appointments: appointments.to_vec(),
        })
    }

    /// Lists all confirmed bookings, newest first, with their appointments
    /// eagerly loaded.
    pub fn list_bookings(&self) -> Result<Vec<BookingRecord>> {
        let mut stmt = self
            .connection
            .prepare(LIST_BOOKINGS_SQL)
            .db_context("Failed to prepare query")?;

        let mut bookings = stmt
            .query_map([], map_booking_row)
            .db_context("Failed to query bookings")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch bookings")?;

        for booking in &mut bookings {
            booking.appointments = self.booking_appointments(booking.id)?;
        }

        Ok(bookings)
    }

    /// Retrieves the appointments of one booking.
    fn booking_appointments(&self, booking_id: u64) -> Result<Vec<Appointment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BOOKING_APPOINTMENTS_SQL)
            .db_context("Failed to prepare query")?;

        let appointments = stmt
            .query_map(params![booking_id as i64], map_appointment_row)
            .db_context("Failed to query booking appointments")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch booking appointments")?;

        Ok(appointments)
    }

    /// Produces the existing-bookings feed: every appointment of every
    /// confirmed booking, flattened.
    ///
    /// Dates are returned as the raw stored text; availability resolution
    /// decides what to do with malformed ones.
    pub fn existing_bookings_feed(&self) -> Result<Vec<ExistingBooking>> {
        let mut stmt = self
            .connection
            .prepare(FEED_SQL)
            .db_context("Failed to prepare query")?;

        let feed = stmt
            .query_map([], |row| {
                Ok(ExistingBooking {
                    barber_id: row.get::<_, i64>(0)? as u64,
                    date: row.get(1)?,
                    start_time: row.get(2)?,
                    service_id: row.get::<_, i64>(3)? as u64,
                })
            })
            .db_context("Failed to query bookings feed")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch bookings feed")?;

        Ok(feed)
    }
}
