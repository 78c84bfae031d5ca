//! Tests for CustomerController
//!
//! These tests verify:
//! - Customer creation and persisted layout
//! - Duplicate names are refused
//! - Update and delete go through to the table file
//! - Hydration and display helpers

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::{read_table, setup_temp_db, table_len};
use serde_json::json;
use tabula::controllers::CustomerController;
use tabula::models::Customer;
use tabula::{Entity, Record};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_controller() -> (TempDir, CustomerController) {
    let (temp, db) = setup_temp_db();
    (temp, CustomerController::new(Arc::new(db)))
}

// =============================================================================
// Create Tests
// =============================================================================

#[test]
fn test_create_customer() {
    let (temp, controller) = setup_controller();

    let customer = controller
        .create_customer("Estefania Castro")
        .unwrap()
        .unwrap();

    assert_eq!(customer.id(), Some(1));
    assert_eq!(customer.read().name(), "Estefania Castro");
    assert_eq!(
        read_table(temp.path(), "customers"),
        json!([{"id": 1, "name": "Estefania Castro"}])
    );
}

#[test]
fn test_does_not_create_same_customer_twice() {
    let (temp, controller) = setup_controller();
    controller.create_customer("Estefania Castro").unwrap();

    let result = controller.create_customer("Estefania Castro").unwrap();

    assert!(result.is_none());
    assert_eq!(table_len(temp.path(), "customers"), 1);
}

#[test]
fn test_names_differing_in_case_are_distinct() {
    let (_temp, controller) = setup_controller();
    controller.create_customer("abigail").unwrap();

    let second = controller.create_customer("Abigail").unwrap().unwrap();
    assert_eq!(second.id(), Some(2));
}

// =============================================================================
// Update / Delete Tests
// =============================================================================

#[test]
fn test_modifies_a_customer() {
    let (temp, controller) = setup_controller();
    let customer = controller.create_customer("Abigail").unwrap().unwrap();

    customer.write().set_name("Belmont");
    assert!(controller.update_customer().unwrap());

    assert_eq!(read_table(temp.path(), "customers")[0]["name"], json!("Belmont"));
    assert!(controller.find_customer("Abigail").unwrap().is_none());
    assert_eq!(
        controller.find_customer("Belmont").unwrap(),
        Some(Customer::with_id(1, "Belmont"))
    );
}

#[test]
fn test_delete_customer() {
    let (temp, controller) = setup_controller();
    let customer = controller.create_customer("Estefania Castro").unwrap().unwrap();
    assert_eq!(table_len(temp.path(), "customers"), 1);

    assert!(controller.delete_customer(&customer).unwrap());

    assert_eq!(table_len(temp.path(), "customers"), 0);
    assert!(!controller.delete_customer(&customer).unwrap());
}

#[test]
fn test_name_free_after_delete() {
    let (_temp, controller) = setup_controller();
    let customer = controller.create_customer("Ada").unwrap().unwrap();
    controller.delete_customer(&customer).unwrap();

    let again = controller.create_customer("Ada").unwrap().unwrap();
    assert_eq!(again.id(), Some(1));
}

#[test]
fn test_drop_table() {
    let (_temp, controller) = setup_controller();
    assert!(!controller.drop_table().unwrap());

    controller.create_customer("Ada").unwrap();
    assert!(controller.drop_table().unwrap());
    assert!(controller.find_customer("Ada").unwrap().is_none());
}

// =============================================================================
// Hydrate / Display Tests
// =============================================================================

#[test]
fn test_hydrate() {
    let (_temp, controller) = setup_controller();
    let record: Record = serde_json::from_value(json!({"id": 4, "name": "Ada"})).unwrap();

    let customer = controller.hydrate(&record).unwrap();

    assert_eq!(customer.id(), Some(4));
    assert_eq!(customer.name(), "Ada");
}

#[test]
fn test_displays_customer_info() {
    let (_temp, controller) = setup_controller();
    let mut customer = Customer::with_id(1, "Abigail");
    customer.set_name("Abigail*");

    let result = controller.display_customer_info(&customer);

    assert_eq!(result, "\nCustomer Id: 1\nCustomer Name: Abigail*");
}

#[test]
fn test_displays_new_customer_info() {
    let (_temp, controller) = setup_controller();

    let result = controller.display_customer_info(&Customer::new("Ada"));

    assert_eq!(result, "\nCustomer Id: None\nCustomer Name: Ada");
}
