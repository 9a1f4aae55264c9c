//! Builder for creating and configuring FrontDesk instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::FrontDesk;
use crate::{
    db::Database,
    error::{BookingError, Result},
};

/// Builder for creating and configuring FrontDesk instances.
#[derive(Debug, Clone)]
pub struct FrontDeskBuilder {
    database_path: Option<PathBuf>,
}

impl FrontDeskBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/trim/trim.db` or `~/.local/share/trim/trim.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured front desk instance with a freshly loaded
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::FileSystem` if the database path is invalid
    /// Returns `BookingError::Database` if database initialization fails
    pub async fn build(self) -> Result<FrontDesk> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BookingError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), BookingError>(())
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let mut desk = FrontDesk::new(db_path);
        desk.refresh().await?;
        Ok(desk)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("trim")
            .place_data_file("trim.db")
            .map_err(|e| BookingError::XdgDirectory(e.to_string()))
    }
}

impl Default for FrontDeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}
