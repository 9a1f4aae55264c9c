//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its collection with consistent structure and a
//! graceful message for the empty case.

use std::{fmt, ops::Index};

use crate::models::{Appointment, Barber, BookingRecord, Service};

/// Newtype wrapper for displaying the service catalog.
pub struct ServiceList(pub Vec<Service>);

impl ServiceList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of services in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the services.
    pub fn iter(&self) -> std::slice::Iter<'_, Service> {
        self.0.iter()
    }
}

impl fmt::Display for ServiceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No services in the catalog.")
        } else {
            for service in &self.0 {
                writeln!(f, "{service}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the barber roster.
pub struct BarberList(pub Vec<Barber>);

impl BarberList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of barbers in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the barbers.
    pub fn iter(&self) -> std::slice::Iter<'_, Barber> {
        self.0.iter()
    }
}

impl fmt::Display for BarberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No barbers on the roster.")
        } else {
            for barber in &self.0 {
                writeln!(f, "{barber}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a day's free slots.
///
/// An empty list is an expected, frequent outcome and renders as a neutral
/// message rather than an error.
pub struct AvailableSlots(pub Vec<String>);

impl AvailableSlots {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of free slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the slot start times.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for AvailableSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No slots available for this day.")
        } else {
            writeln!(f, "{}", self.0.join(", "))
        }
    }
}

/// Newtype wrapper for displaying collections of appointments.
pub struct Appointments(pub Vec<Appointment>);

impl Appointments {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of appointments in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the appointment at the given index.
    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.0.get(index)
    }

    /// Get an iterator over the appointments.
    pub fn iter(&self) -> std::slice::Iter<'_, Appointment> {
        self.0.iter()
    }
}

impl Index<usize> for Appointments {
    type Output = Appointment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Appointments {
    type Item = Appointment;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Appointments {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Appointments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No appointments committed.")
        } else {
            for appointment in &self.0 {
                writeln!(f, "- {appointment}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of confirmed bookings.
pub struct BookingRecords(pub Vec<BookingRecord>);

impl BookingRecords {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of bookings in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the bookings.
    pub fn iter(&self) -> std::slice::Iter<'_, BookingRecord> {
        self.0.iter()
    }
}

impl fmt::Display for BookingRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No bookings found.")
        } else {
            for booking in &self.0 {
                writeln!(f, "{booking}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_slots_neutral_empty_message() {
        let slots = AvailableSlots(Vec::new());
        assert_eq!(format!("{slots}"), "No slots available for this day.\n");
    }

    #[test]
    fn test_available_slots_joined_in_grid_order() {
        let slots = AvailableSlots(vec!["09:00".to_string(), "10:30".to_string()]);
        assert_eq!(format!("{slots}"), "09:00, 10:30\n");
    }

    #[test]
    fn test_empty_collections() {
        assert!(format!("{}", ServiceList(vec![])).contains("No services"));
        assert!(format!("{}", BarberList(vec![])).contains("No barbers"));
        assert!(format!("{}", Appointments(vec![])).contains("No appointments"));
        assert!(format!("{}", BookingRecords(vec![])).contains("No bookings"));
    }
}
