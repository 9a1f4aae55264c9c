//! Store operations for the FrontDesk: catalog data entry and snapshot
//! refresh.

use tokio::task;

use super::FrontDesk;
use crate::{
    db::Database,
    error::{BookingError, Result},
    models::{Barber, BookingRecord, Service, Snapshot},
    params::{CreateBarber, CreateService, Id},
};

impl FrontDesk {
    /// Reloads the cached snapshot from the store: the service catalog,
    /// the barber roster, and the flattened existing-bookings feed.
    pub async fn refresh(&mut self) -> Result<()> {
        let db_path = self.db_path.clone();

        self.snapshot = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            Ok::<Snapshot, BookingError>(Snapshot {
                services: db.list_services()?,
                barbers: db.list_barbers()?,
                existing_bookings: db.existing_bookings_feed()?,
            })
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(())
    }

    /// Adds a service to the catalog and refreshes the snapshot.
    pub async fn add_service(&mut self, params: &CreateService) -> Result<Service> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        let service = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_service(&params)
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        self.refresh().await?;
        Ok(service)
    }

    /// Adds a barber to the roster and refreshes the snapshot.
    pub async fn add_barber(&mut self, params: &CreateBarber) -> Result<Barber> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        let barber = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_barber(&params)
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        self.refresh().await?;
        Ok(barber)
    }

    /// Retrieves a service from the store by its ID.
    pub async fn get_service(&self, params: &Id) -> Result<Option<Service>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_service(id)
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a barber from the store by their ID.
    pub async fn get_barber(&self, params: &Id) -> Result<Option<Barber>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_barber(id)
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all confirmed bookings from the store, newest first.
    pub async fn list_bookings(&self) -> Result<Vec<BookingRecord>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_bookings()
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
