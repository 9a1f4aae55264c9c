//! Display implementations for domain models.

use std::fmt;

use crate::display::LocalDateTime;
use crate::models::{Appointment, Barber, BookingRecord, PromotionScope, Service};

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Service {}: {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "**Price:** {}", self.price)?;
        writeln!(f, "**Duration:** {} min", self.duration_minutes)?;
        match self.promotion {
            PromotionScope::None => {}
            PromotionScope::All => {
                writeln!(f, "**Promotion:** {}% off every visit", self.discount())?;
            }
            PromotionScope::Vip => {
                writeln!(f, "**Promotion:** {}% off the first occurrence (VIP)", self.discount())?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Barber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Barber {}: {}", self.id, self.name)?;
        writeln!(f)?;
        if let Some(ref specialty) = self.specialty {
            writeln!(f, "**Specialty:** {specialty}")?;
        }
        if let Some(ref experience) = self.experience {
            writeln!(f, "**Experience:** {experience}")?;
        }
        if !self.schedule.is_empty() {
            writeln!(f, "**Schedule:**")?;
            for day in &self.schedule {
                writeln!(f, "- {}: {}", day.date, day.slots.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - service {} with barber {}",
            self.date, self.start_time, self.service_id, self.barber_id
        )
    }
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Booking {} for {}", self.id, self.client_name)?;
        writeln!(f)?;
        writeln!(f, "**Total:** {}", self.total_price)?;
        writeln!(f, "**Confirmed:** {}", LocalDateTime(&self.created_at))?;
        if !self.appointments.is_empty() {
            writeln!(f, "**Appointments:**")?;
            for appointment in &self.appointments {
                writeln!(f, "- {appointment}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use crate::models::*;

    #[test]
    fn test_service_display_mentions_promotion() {
        let service = Service {
            id: 2,
            title: "Hot Towel Shave".to_string(),
            price: Decimal::new(2000, 2),
            duration_minutes: 45,
            promotion: PromotionScope::Vip,
            discount_percentage: Some(50),
        };
        let output = format!("{service}");
        assert!(output.contains("Service 2: Hot Towel Shave"));
        assert!(output.contains("50% off the first occurrence"));
    }

    #[test]
    fn test_appointment_display() {
        let appointment = Appointment {
            id: 1,
            service_id: 2,
            barber_id: 3,
            date: date(2026, 9, 1),
            start_time: "09:30".to_string(),
        };
        assert_eq!(
            format!("{appointment}"),
            "2026-09-01 09:30 - service 2 with barber 3"
        );
    }

    #[test]
    fn test_booking_record_display() {
        let record = BookingRecord {
            id: 7,
            client_name: "Ada".to_string(),
            total_price: Decimal::new(4000, 2),
            created_at: Timestamp::UNIX_EPOCH,
            appointments: vec![],
        };
        let output = format!("{record}");
        assert!(output.contains("Booking 7 for Ada"));
        assert!(output.contains("**Total:** 40.00"));
    }
}
