//! Tests for the front desk module.

use jiff::civil::date;
use rust_decimal::Decimal;
use tempfile::TempDir;

use super::*;
use crate::{
    models::{PromotionScope, ScheduleDay},
    params::{CommitAssignment, ConfirmBooking, CreateBarber, CreateService},
};

/// Helper function to create a test front desk
async fn create_test_desk() -> (TempDir, FrontDesk) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let desk = FrontDeskBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create front desk");
    (temp_dir, desk)
}

async fn seed_catalog(desk: &mut FrontDesk) -> (u64, u64, u64) {
    let haircut = desk
        .add_service(&CreateService {
            title: "Haircut".to_string(),
            price: Decimal::new(3000, 2),
            duration_minutes: 30,
            promotion: PromotionScope::None,
            discount_percentage: None,
        })
        .await
        .expect("Failed to add haircut");

    let shave = desk
        .add_service(&CreateService {
            title: "Hot Towel Shave".to_string(),
            price: Decimal::new(2000, 2),
            duration_minutes: 45,
            promotion: PromotionScope::Vip,
            discount_percentage: Some(50),
        })
        .await
        .expect("Failed to add shave");

    let barber = desk
        .add_barber(&CreateBarber {
            name: "Marco".to_string(),
            specialty: Some("fades".to_string()),
            experience: Some("8 years".to_string()),
            schedule: vec![ScheduleDay {
                date: date(2026, 9, 1),
                slots: ["09:00", "09:30", "10:00", "10:30"]
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
            }],
        })
        .await
        .expect("Failed to add barber");

    (haircut.id, shave.id, barber.id)
}

#[tokio::test]
async fn test_catalog_entry_refreshes_snapshot() {
    let (_temp_dir, mut desk) = create_test_desk().await;
    assert!(desk.snapshot().services.is_empty());

    let (haircut, shave, barber) = seed_catalog(&mut desk).await;

    assert_eq!(desk.snapshot().services.len(), 2);
    assert_eq!(desk.snapshot().service(haircut).expect("haircut").title, "Haircut");
    assert_eq!(
        desk.snapshot().service(shave).expect("shave").promotion,
        PromotionScope::Vip
    );
    assert_eq!(desk.snapshot().barber(barber).expect("barber").name, "Marco");
}

#[tokio::test]
async fn test_discount_dropped_for_unpromoted_service() {
    let (_temp_dir, mut desk) = create_test_desk().await;

    let service = desk
        .add_service(&CreateService {
            title: "Kids Cut".to_string(),
            price: Decimal::new(1500, 2),
            duration_minutes: 30,
            promotion: PromotionScope::None,
            discount_percentage: Some(10),
        })
        .await
        .expect("Failed to add service");

    assert_eq!(service.discount_percentage, None);
}

#[tokio::test]
async fn test_full_booking_flow() {
    let (_temp_dir, mut desk) = create_test_desk().await;
    let (haircut, shave, barber) = seed_catalog(&mut desk).await;

    desk.add_service_occurrence(haircut).expect("add haircut");
    desk.add_service_occurrence(shave).expect("add shave");
    desk.begin_assignment().expect("begin");
    desk.select_barber(barber).expect("select barber");

    assert_eq!(
        desk.available_dates_for(barber).expect("dates"),
        vec![date(2026, 9, 1)]
    );

    let outcome = desk
        .commit_assignment(&CommitAssignment {
            barber_id: barber,
            date: date(2026, 9, 1),
            start_time: "09:00".to_string(),
        })
        .expect("commit");
    assert!(outcome.fully_assigned());
    assert!(desk.is_ready_to_confirm());

    // 30.00 haircut + 10.00 discounted VIP shave
    assert_eq!(desk.total_price(), Decimal::new(4000, 2));

    let record = desk
        .confirm(&ConfirmBooking {
            client_name: "Ada".to_string(),
        })
        .await
        .expect("confirm");
    assert_eq!(record.client_name, "Ada");
    assert_eq!(record.total_price, Decimal::new(4000, 2));
    assert_eq!(record.appointments.len(), 2);

    // The confirmed booking is now part of the feed: its slots are gone
    // and the session starts over
    assert!(desk.session().selected_services().is_empty());
    assert_eq!(desk.snapshot().existing_bookings.len(), 2);
    let available = desk
        .available_times_for(barber, date(2026, 9, 1))
        .expect("availability");
    assert_eq!(available, ["10:30"]);

    let bookings = desk.list_bookings().await.expect("list bookings");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].appointments.len(), 2);
}

#[tokio::test]
async fn test_confirm_rejected_while_queue_not_empty() {
    let (_temp_dir, mut desk) = create_test_desk().await;
    let (haircut, _, _) = seed_catalog(&mut desk).await;

    desk.add_service_occurrence(haircut).expect("add");
    desk.begin_assignment().expect("begin");

    let result = desk
        .confirm(&ConfirmBooking {
            client_name: "Ada".to_string(),
        })
        .await;
    assert!(result.is_err());
    assert!(desk.list_bookings().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_price_of_uses_selection_order() {
    let (_temp_dir, mut desk) = create_test_desk().await;
    let (_, shave, _) = seed_catalog(&mut desk).await;

    assert_eq!(
        desk.price_of(shave, 0).expect("first occurrence"),
        Decimal::new(1000, 2)
    );
    assert_eq!(
        desk.price_of(shave, 1).expect("second occurrence"),
        Decimal::new(2000, 2)
    );
}
