//! Catalog CRUD operations: services and barbers.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};
use rust_decimal::Decimal;

use crate::{
    error::{BookingError, DatabaseResultExt, Result},
    models::{Barber, PromotionScope, ScheduleDay, Service},
    params::{CreateBarber, CreateService},
};

// SQL queries as const strings for compile-time optimization
const INSERT_SERVICE_SQL: &str = "INSERT INTO services (title, price, duration_minutes, promotion_scope, discount_percentage, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_SERVICE_SQL: &str = "SELECT id, title, price, duration_minutes, promotion_scope, discount_percentage FROM services WHERE id = ?1";
const LIST_SERVICES_SQL: &str = "SELECT id, title, price, duration_minutes, promotion_scope, discount_percentage FROM services ORDER BY id";
const INSERT_BARBER_SQL: &str = "INSERT INTO barbers (name, specialty, experience, schedule, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_BARBER_SQL: &str =
    "SELECT id, name, specialty, experience, schedule FROM barbers WHERE id = ?1";
const LIST_BARBERS_SQL: &str =
    "SELECT id, name, specialty, experience, schedule FROM barbers ORDER BY id";

fn map_service_row(row: &Row<'_>) -> rusqlite::Result<Service> {
    let price_text: String = row.get(2)?;
    let price = price_text.parse::<Decimal>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
    })?;

    let scope_text: String = row.get(4)?;
    let promotion = scope_text.parse::<PromotionScope>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid promotion scope: {scope_text}"),
            )),
        )
    })?;

    Ok(Service {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        price,
        duration_minutes: row.get::<_, i64>(3)? as u32,
        promotion,
        discount_percentage: row.get::<_, Option<i64>>(5)?.map(|d| d as u8),
    })
}

fn map_barber_row(row: &Row<'_>) -> rusqlite::Result<Barber> {
    let schedule_json: String = row.get(4)?;
    let schedule: Vec<ScheduleDay> = serde_json::from_str(&schedule_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
    })?;

    Ok(Barber {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        specialty: row.get(2)?,
        experience: row.get(3)?,
        schedule,
    })
}

impl super::Database {
    /// Adds a service to the catalog.
    ///
    /// A discount percentage is only stored when the promotion scope is not
    /// `none`; a stray percentage on an unpromoted service is dropped.
    pub fn create_service(&mut self, params: &CreateService) -> Result<Service> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let discount = match params.promotion {
            PromotionScope::None => None,
            _ => params.discount_percentage.map(i64::from),
        };

        tx.execute(
            INSERT_SERVICE_SQL,
            rusqlite::params![
                params.title,
                params.price.to_string(),
                params.duration_minutes,
                params.promotion.as_str(),
                discount,
                &now,
            ],
        )
        .map_err(|e| BookingError::database_error("Failed to insert service", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Service {
            id,
            title: params.title.clone(),
            price: params.price,
            duration_minutes: params.duration_minutes,
            promotion: params.promotion,
            discount_percentage: discount.map(|d| d as u8),
        })
    }

    /// Retrieves a service by its ID.
    pub fn get_service(&self, id: u64) -> Result<Option<Service>> {
        self.connection
            .prepare(SELECT_SERVICE_SQL)
            .db_context("Failed to prepare query")?
            .query_row(params![id as i64], map_service_row)
            .optional()
            .db_context("Failed to query service")
    }

    /// Lists the whole service catalog.
    pub fn list_services(&self) -> Result<Vec<Service>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SERVICES_SQL)
            .db_context("Failed to prepare query")?;

        let services = stmt
            .query_map([], map_service_row)
            .db_context("Failed to query services")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch services")?;

        Ok(services)
    }

    /// Adds a barber to the roster with their per-date schedule.
    pub fn create_barber(&mut self, params: &CreateBarber) -> Result<Barber> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let schedule_json = serde_json::to_string(&params.schedule)?;

        tx.execute(
            INSERT_BARBER_SQL,
            rusqlite::params![
                params.name,
                params.specialty,
                params.experience,
                schedule_json,
                &now,
            ],
        )
        .map_err(|e| BookingError::database_error("Failed to insert barber", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Barber {
            id,
            name: params.name.clone(),
            specialty: params.specialty.clone(),
            experience: params.experience.clone(),
            schedule: params.schedule.clone(),
        })
    }

    /// Retrieves a barber by their ID.
    pub fn get_barber(&self, id: u64) -> Result<Option<Barber>> {
        self.connection
            .prepare(SELECT_BARBER_SQL)
            .db_context("Failed to prepare query")?
            .query_row(params![id as i64], map_barber_row)
            .optional()
            .db_context("Failed to query barber")
    }

    /// Lists the whole barber roster.
    pub fn list_barbers(&self) -> Result<Vec<Barber>> {
        let mut stmt = self
            .connection
            .prepare(LIST_BARBERS_SQL)
            .db_context("Failed to prepare query")?;

        let barbers = stmt
            .query_map([], map_barber_row)
            .db_context("Failed to query barbers")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch barbers")?;

        Ok(barbers)
    }
}
