use jiff::civil::date;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;
use trim_core::{
    models::{Appointment, PromotionScope, ScheduleDay},
    params::{CreateBarber, CreateService},
    Database,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn haircut() -> CreateService {
    CreateService {
        title: "Haircut".to_string(),
        price: Decimal::new(3000, 2),
        duration_minutes: 30,
        promotion: PromotionScope::None,
        discount_percentage: None,
    }
}

fn marco() -> CreateBarber {
    CreateBarber {
        name: "Marco".to_string(),
        specialty: Some("fades".to_string()),
        experience: Some("8 years".to_string()),
        schedule: vec![ScheduleDay {
            date: date(2026, 9, 1),
            slots: vec!["09:00".to_string(), "09:30".to_string()],
        }],
    }
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    assert!(_temp_file.path().exists());
}

#[test]
fn test_create_and_get_service() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.create_service(&haircut()).expect("Failed to create service");
    assert!(created.id > 0);
    assert_eq!(created.title, "Haircut");

    let retrieved = db
        .get_service(created.id)
        .expect("Failed to get service")
        .expect("Service should exist");
    assert_eq!(retrieved, created);

    assert!(db.get_service(999).expect("query").is_none());
}

#[test]
fn test_service_price_and_promotion_roundtrip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_service(&CreateService {
            title: "Hot Towel Shave".to_string(),
            price: Decimal::new(1999, 2),
            duration_minutes: 45,
            promotion: PromotionScope::Vip,
            discount_percentage: Some(50),
        })
        .expect("Failed to create service");

    let retrieved = db
        .get_service(created.id)
        .expect("Failed to get service")
        .expect("Service should exist");
    assert_eq!(retrieved.price, Decimal::new(1999, 2));
    assert_eq!(retrieved.promotion, PromotionScope::Vip);
    assert_eq!(retrieved.discount_percentage, Some(50));
}

#[test]
fn test_list_services() {
    let (_temp_file, mut db) = create_test_db();

    db.create_service(&haircut()).expect("Failed to create service 1");
    db.create_service(&haircut()).expect("Failed to create service 2");

    let services = db.list_services().expect("Failed to list services");
    assert_eq!(services.len(), 2);
}

#[test]
fn test_create_and_get_barber_with_schedule() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.create_barber(&marco()).expect("Failed to create barber");
    assert!(created.id > 0);

    let retrieved = db
        .get_barber(created.id)
        .expect("Failed to get barber")
        .expect("Barber should exist");
    assert_eq!(retrieved, created);
    assert_eq!(retrieved.scheduled_slots(date(2026, 9, 1)), ["09:00", "09:30"]);
}

#[test]
fn test_save_booking_and_feed() {
    let (_temp_file, mut db) = create_test_db();

    let service = db.create_service(&haircut()).expect("Failed to create service");
    let barber = db.create_barber(&marco()).expect("Failed to create barber");

    let appointments = vec![
        Appointment {
            id: 1,
            service_id: service.id,
            barber_id: barber.id,
            date: date(2026, 9, 1),
            start_time: "09:00".to_string(),
        },
        Appointment {
            id: 2,
            service_id: service.id,
            barber_id: barber.id,
            date: date(2026, 9, 1),
            start_time: "09:30".to_string(),
        },
    ];

    let record = db
        .save_booking("Ada", Decimal::new(6000, 2), &appointments)
        .expect("Failed to save booking");
    assert!(record.id > 0);
    assert_eq!(record.appointments.len(), 2);

    // The feed flattens every appointment of every confirmed booking
    let feed = db.existing_bookings_feed().expect("Failed to load feed");
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].barber_id, barber.id);
    assert_eq!(feed[0].date, "2026-09-01");

    let bookings = db.list_bookings().expect("Failed to list bookings");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].client_name, "Ada");
    assert_eq!(bookings[0].total_price, Decimal::new(6000, 2));
    assert_eq!(bookings[0].appointments.len(), 2);
}

#[test]
fn test_bookings_listed_newest_first() {
    let (_temp_file, mut db) = create_test_db();

    db.save_booking("First", Decimal::ZERO, &[])
        .expect("Failed to save booking 1");
    db.save_booking("Second", Decimal::ZERO, &[])
        .expect("Failed to save booking 2");

    let bookings = db.list_bookings().expect("Failed to list bookings");
    assert_eq!(bookings.len(), 2);
}
