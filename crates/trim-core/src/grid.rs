//! The half-hour time grid of a business day and duration conversion.
//!
//! Every schedulable moment is one of 24 fixed slot start times between
//! 08:00 and 19:30. Appointments occupy one or more consecutive grid slots
//! depending on the service duration.

/// Duration of a single grid slot, in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Ordered slot start times for one business day, 30 minutes apart.
pub const TIME_GRID: [&str; 24] = [
    "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30",
    "13:00", "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
    "18:00", "18:30", "19:00", "19:30",
];

/// Returns the zero-based grid position of a slot start time.
pub fn index_of(time: &str) -> Option<usize> {
    TIME_GRID.iter().position(|slot| *slot == time)
}

/// Number of consecutive grid slots a service of the given duration occupies.
///
/// Durations are rounded up to whole slots and every service takes at least
/// one slot, so a 45-minute cut books a full hour of calendar time.
pub fn slots_required(duration_minutes: u32) -> usize {
    let slots = duration_minutes.div_ceil(SLOT_MINUTES) as usize;
    slots.max(1)
}

/// The contiguous run of grid slots an appointment starting at `start_time`
/// would occupy.
///
/// The run is truncated when it would extend past the end of the grid, and
/// empty when `start_time` is not a grid slot at all. Callers must treat a
/// run shorter than [`slots_required`] as "cannot fit", never as a bookable
/// range.
pub fn occupied_slots(start_time: &str, duration_minutes: u32) -> Vec<&'static str> {
    let Some(start) = index_of(start_time) else {
        return Vec::new();
    };
    let end = (start + slots_required(duration_minutes)).min(TIME_GRID.len());
    TIME_GRID[start..end].to_vec()
}

/// Extracts the minute count from a free-text duration label.
///
/// Catalog data and CLI input describe durations as text ending in a minute
/// count, e.g. `"45 min"` or `"approx. 90 minutes"`. The last run of ASCII
/// digits in the label is taken as the minute count; labels without one are
/// rejected so the caller can skip or re-prompt.
pub fn minutes_from_label(label: &str) -> Option<u32> {
    let digits: String = label
        .chars()
        .rev()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.chars().rev().collect::<String>().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        assert_eq!(TIME_GRID.len(), 24);
        assert_eq!(TIME_GRID[0], "08:00");
        assert_eq!(TIME_GRID[23], "19:30");
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of("08:00"), Some(0));
        assert_eq!(index_of("19:30"), Some(23));
        assert_eq!(index_of("20:00"), None);
        assert_eq!(index_of("9:00"), None);
    }

    #[test]
    fn test_slots_required() {
        assert_eq!(slots_required(30), 1);
        assert_eq!(slots_required(45), 2);
        assert_eq!(slots_required(60), 2);
        assert_eq!(slots_required(61), 3);
        // Zero-duration services still consume one slot
        assert_eq!(slots_required(0), 1);
    }

    #[test]
    fn test_occupied_slots() {
        assert_eq!(occupied_slots("09:00", 45), vec!["09:00", "09:30"]);
        assert_eq!(occupied_slots("19:30", 30), vec!["19:30"]);
    }

    #[test]
    fn test_occupied_slots_truncates_at_grid_end() {
        // A 90-minute service starting on the last slot cannot fit; the run
        // is truncated rather than wrapping or padding.
        assert_eq!(occupied_slots("19:30", 90), vec!["19:30"]);
        assert_eq!(occupied_slots("19:00", 90), vec!["19:00", "19:30"]);
    }

    #[test]
    fn test_occupied_slots_unknown_start() {
        assert!(occupied_slots("07:00", 30).is_empty());
    }

    #[test]
    fn test_minutes_from_label() {
        assert_eq!(minutes_from_label("45 min"), Some(45));
        assert_eq!(minutes_from_label("approx. 90 minutes"), Some(90));
        assert_eq!(minutes_from_label("30"), Some(30));
        assert_eq!(minutes_from_label("quick trim"), None);
        assert_eq!(minutes_from_label(""), None);
    }
}
