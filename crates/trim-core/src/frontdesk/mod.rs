//! High-level front desk API for running booking sessions.
//!
//! This module provides the main [`FrontDesk`] interface: the coordinator
//! between a caller (the CLI today), the in-memory [`BookingSession`], and
//! the SQLite booking store.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Session ops   │    │    Snapshot     │    │    Database     │
//! │ (sync, pure)    │◀──▶│ (cached feeds)  │◀───│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Scheduling engine      Read-only inputs      Persistence
//! ```
//!
//! Scheduling itself is synchronous and pure: every session operation is a
//! state transition over the session plus the cached [`Snapshot`]. Only
//! store access (catalog writes, snapshot refresh, booking confirmation)
//! is async, delegated to blocking tasks the way all database work is.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`FrontDesk`] instances
//! - [`store_ops`]: Catalog data entry, snapshot refresh, booking listing
//! - [`session_ops`]: Session pass-throughs, pricing, and confirmation

use std::path::PathBuf;

use crate::models::Snapshot;
use crate::session::BookingSession;

pub mod builder;
pub mod session_ops;
pub mod store_ops;

#[cfg(test)]
mod tests;

pub use builder::FrontDeskBuilder;

/// Main front desk interface for catalog management and booking sessions.
pub struct FrontDesk {
    pub(crate) db_path: PathBuf,
    pub(crate) snapshot: Snapshot,
    pub(crate) session: BookingSession,
}

impl FrontDesk {
    /// Creates a new front desk with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self {
            db_path,
            snapshot: Snapshot::default(),
            session: BookingSession::new(),
        }
    }

    /// The currently cached input snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The in-progress booking session.
    pub fn session(&self) -> &BookingSession {
        &self.session
    }
}
