//! Database schema initialization and migrations.

use crate::error::{BookingError, DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early store versions kept services without a promotion column
        let has_promotion_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('services') WHERE name = 'promotion_scope'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_promotion_column {
            self.connection
                .execute(
                    "ALTER TABLE services ADD COLUMN promotion_scope TEXT NOT NULL DEFAULT 'none'",
                    [],
                )
                .map_err(|e| {
                    BookingError::database_error(
                        "Failed to add promotion_scope column to services table",
                        e,
                    )
                })?;
            self.connection
                .execute(
                    "ALTER TABLE services ADD COLUMN discount_percentage INTEGER",
                    [],
                )
                .map_err(|e| {
                    BookingError::database_error(
                        "Failed to add discount_percentage column to services table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
