//! Barber model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A barber on the shop's roster, with the calendar capacity they offer.
///
/// Immutable reference data for a booking session. The schedule enumerates
/// which grid slots the barber could in principle work per date; it is
/// capacity, not booked state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Barber {
    /// Unique identifier for the barber
    pub id: u64,

    /// Display name of the barber
    pub name: String,

    /// Specialty (e.g. "fades", "classic cuts")
    pub specialty: Option<String>,

    /// Experience label shown to clients (e.g. "8 years")
    pub experience: Option<String>,

    /// Per-date working slots, in calendar order
    #[serde(default)]
    pub schedule: Vec<ScheduleDay>,
}

/// One calendar date of a barber's schedule with its workable grid slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleDay {
    /// The calendar date
    pub date: Date,

    /// Slot start times the barber works on this date, in grid order
    pub slots: Vec<String>,
}

impl Barber {
    /// The slots this barber is scheduled to work on `date`, or an empty
    /// slice when the date is not on the schedule at all.
    pub fn scheduled_slots(&self, date: Date) -> &[String] {
        self.schedule
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.slots.as_slice())
            .unwrap_or(&[])
    }

    /// The dates this barber has any schedule entry for, in schedule order.
    pub fn scheduled_dates(&self) -> Vec<Date> {
        self.schedule.iter().map(|day| day.date).collect()
    }
}
