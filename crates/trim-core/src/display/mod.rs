//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]),
//! while this module's newtype wrappers provide contextual formatting for
//! collections and operation results. All output is markdown, rendered
//! richly by the CLI's terminal renderer or printed plainly.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ServiceList, BarberList,
//!   AvailableSlots, Appointments, BookingRecords)
//! - [`results`]: Operation result types (CommitResult, ConfirmResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Appointments, AvailableSlots, BarberList, BookingRecords, ServiceList};
pub use datetime::LocalDateTime;
pub use results::{CommitResult, ConfirmResult};
pub use status::OperationStatus;
