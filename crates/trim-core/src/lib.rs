//! Core library for the Trim barbershop booking application.
//!
//! This crate provides the business logic for assembling multi-service
//! appointments and placing them into free half-hour slots on one or more
//! barbers' calendars: the time grid, per-barber availability resolution,
//! promotion-aware pricing, the sequential assignment planner, and the
//! booking session state machine, backed by a SQLite booking store.
//!
//! # Architecture
//!
//! The scheduling engine ([`grid`], [`availability`], [`pricing`],
//! [`session`]) is pure and UI-agnostic: it operates on the data model in
//! [`models`] plus a read-only [`models::Snapshot`] of the store's feeds.
//! The [`frontdesk::FrontDesk`] facade owns a session and a cached
//! snapshot and bridges to the [`db`] store for catalog entry, snapshot
//! refresh, and booking confirmation.
//!
//! # Quick Start
//!
//! ```rust
//! use trim_core::{params::CreateService, models::PromotionScope, FrontDeskBuilder};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a front desk instance
//! let mut desk = FrontDeskBuilder::new()
//!     .with_database_path(Some("shop.db"))
//!     .build()
//!     .await?;
//!
//! // Add a service to the catalog
//! let service = desk
//!     .add_service(&CreateService {
//!         title: "Haircut".to_string(),
//!         price: Decimal::new(3000, 2),
//!         duration_minutes: 30,
//!         promotion: PromotionScope::None,
//!         discount_percentage: None,
//!     })
//!     .await?;
//!
//! // Start a booking session
//! desk.add_service_occurrence(service.id)?;
//! desk.begin_assignment()?;
//! # Ok(())
//! # }
//! ```

pub mod availability;
pub mod db;
pub mod display;
pub mod error;
pub mod frontdesk;
pub mod grid;
pub mod models;
pub mod params;
pub mod pricing;
pub mod session;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Appointments, AvailableSlots, BarberList, BookingRecords, CommitResult, ConfirmResult,
    LocalDateTime, OperationStatus, ServiceList,
};
pub use error::{BookingError, Result};
pub use frontdesk::{FrontDesk, FrontDeskBuilder};
pub use models::{
    Appointment, Barber, BookingRecord, ExistingBooking, PromotionScope, ScheduleDay, Service,
    Snapshot,
};
pub use params::{CommitAssignment, ConfirmBooking, CreateBarber, CreateService, Id};
pub use session::{BookingSession, CommitOutcome, SessionPhase};
