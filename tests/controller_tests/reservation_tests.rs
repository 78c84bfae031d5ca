//! Tests for ReservationController
//!
//! These tests verify:
//! - Reservation creation and persisted layout
//! - One reservation per customer
//! - Cancellation
//! - Hotel::reserve_room bookkeeping

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::{read_table, setup_temp_db, table_len};
use serde_json::json;
use tabula::controllers::{CustomerController, ReservationController};
use tabula::models::{Customer, Hotel};
use tabula::{Database, Entity};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_controller() -> (TempDir, Arc<Database>, ReservationController) {
    let (temp, db) = setup_temp_db();
    let db = Arc::new(db);
    let controller = ReservationController::new(Arc::clone(&db));
    (temp, db, controller)
}

// =============================================================================
// Create Tests
// =============================================================================

#[test]
fn test_creates_reservation() {
    let (temp, _db, controller) = setup_controller();
    let hotel = Hotel::with_id(1, "Marriott");
    let customer = Customer::with_id(1, "John Smith");

    let reservation = controller
        .create_reservation(&hotel, &customer)
        .unwrap()
        .unwrap();

    assert_eq!(reservation.id(), Some(1));
    assert_eq!(reservation.read().hotel_id(), Some(1));
    assert_eq!(
        read_table(temp.path(), "reservations"),
        json!([{"id": 1, "hotel_id": 1, "customer_id": 1}])
    );
}

#[test]
fn test_does_not_reserve_twice_for_same_customer() {
    let (temp, _db, controller) = setup_controller();
    let hotel = Hotel::with_id(1, "Marriott");
    let customer = Customer::with_id(1, "John Smith");
    controller.create_reservation(&hotel, &customer).unwrap();

    let result = controller.create_reservation(&hotel, &customer).unwrap();

    assert!(result.is_none());
    assert_eq!(table_len(temp.path(), "reservations"), 1);
}

#[test]
fn test_one_reservation_per_customer_across_hotels() {
    let (_temp, _db, controller) = setup_controller();
    let customer = Customer::with_id(1, "John Smith");
    controller
        .create_reservation(&Hotel::with_id(1, "Marriott"), &customer)
        .unwrap();

    let result = controller
        .create_reservation(&Hotel::with_id(2, "Hilton"), &customer)
        .unwrap();

    assert!(result.is_none());
}

#[test]
fn test_different_customers_same_hotel() {
    let (_temp, _db, controller) = setup_controller();
    let hotel = Hotel::with_id(1, "Marriott");

    controller
        .create_reservation(&hotel, &Customer::with_id(1, "John Smith"))
        .unwrap();
    let second = controller
        .create_reservation(&hotel, &Customer::with_id(2, "Jane Doe"))
        .unwrap()
        .unwrap();

    assert_eq!(second.id(), Some(2));
}

#[test]
fn test_reserves_for_stored_customer() {
    let (_temp, db, controller) = setup_controller();
    let customers = CustomerController::new(Arc::clone(&db));
    let customer = customers.create_customer("John Smith").unwrap().unwrap();

    let reservation = controller
        .create_reservation(&Hotel::with_id(3, "Ritz"), &customer.read())
        .unwrap()
        .unwrap();

    let record = db.find_by("reservations", "customer_id", 1).unwrap().unwrap();
    assert_eq!(controller.hydrate(&record).unwrap(), reservation.snapshot());
}

// =============================================================================
// Cancel Tests
// =============================================================================

#[test]
fn test_cancels_reservation() {
    let (temp, _db, controller) = setup_controller();
    let reservation = controller
        .create_reservation(&Hotel::with_id(1, "Marriott"), &Customer::with_id(1, "John Smith"))
        .unwrap()
        .unwrap();
    assert_eq!(table_len(temp.path(), "reservations"), 1);

    assert!(controller.cancel_reservation(&reservation).unwrap());

    assert_eq!(table_len(temp.path(), "reservations"), 0);
}

#[test]
fn test_drop_table() {
    let (_temp, _db, controller) = setup_controller();
    controller
        .create_reservation(&Hotel::with_id(1, "Marriott"), &Customer::with_id(1, "John Smith"))
        .unwrap();

    assert!(controller.drop_table().unwrap());
}

// =============================================================================
// Hotel Tests
// =============================================================================

#[test]
fn test_reserve_room_tracks_reservation() {
    let mut hotel = Hotel::with_id(1, "Marriott");
    let customer = Customer::with_id(7, "John Smith");

    let reservation = hotel.reserve_room(&customer);

    assert_eq!(reservation.hotel_id(), Some(1));
    assert_eq!(reservation.customer_id(), Some(7));
    assert_eq!(reservation.id(), None);
    assert_eq!(hotel.reservations(), [reservation]);
}

#[test]
fn test_hotels_do_not_share_reservations() {
    let mut first = Hotel::with_id(1, "Marriott");
    let second = Hotel::with_id(2, "Hilton");

    first.reserve_room(&Customer::with_id(1, "John Smith"));

    assert_eq!(first.reservations().len(), 1);
    assert!(second.reservations().is_empty());
}
