//! Customer controller
//!
//! Customer names are unique within the `customers` table.

use std::sync::Arc;

use tracing::warn;

use crate::codec::Entity;
use crate::database::Database;
use crate::error::Result;
use crate::handle::EntityHandle;
use crate::models::Customer;
use crate::record::Record;

/// Creates, updates and deletes customers
pub struct CustomerController {
    database: Arc<Database>,
}

impl CustomerController {
    pub const TABLE_NAME: &'static str = "customers";

    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Create and store a customer
    ///
    /// Returns `Ok(None)` without touching the table if a customer with
    /// exactly this name already exists.
    pub fn create_customer(&self, name: &str) -> Result<Option<EntityHandle<Customer>>> {
        if self
            .database
            .find_by(Self::TABLE_NAME, "name", name)?
            .is_some()
        {
            warn!(name = %name, "customer already exists");
            return Ok(None);
        }

        let customer = EntityHandle::new(Customer::new(name));
        self.database.create(&customer, Self::TABLE_NAME)?;
        Ok(Some(customer))
    }

    /// Write every customer's current fields to disk
    pub fn update_customer(&self) -> Result<bool> {
        self.database.update(Self::TABLE_NAME)
    }

    /// Delete a customer; `Ok(false)` if it is not stored
    pub fn delete_customer(&self, customer: &EntityHandle<Customer>) -> Result<bool> {
        let customer = customer.snapshot();
        self.database.delete(&customer, Self::TABLE_NAME)
    }

    /// Find a stored customer by name
    pub fn find_customer(&self, name: &str) -> Result<Option<Customer>> {
        self.database
            .find_by(Self::TABLE_NAME, "name", name)?
            .map(|record| self.hydrate(&record))
            .transpose()
    }

    /// Build a customer from a stored record
    pub fn hydrate(&self, record: &Record) -> Result<Customer> {
        Customer::from_record(record)
    }

    /// Two-line summary of a customer
    pub fn display_customer_info(&self, customer: &Customer) -> String {
        let id = customer
            .id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "None".to_string());

        format!("\nCustomer Id: {}\nCustomer Name: {}", id, customer.name())
    }

    /// Truncate the customers table
    pub fn drop_table(&self) -> Result<bool> {
        self.database.drop_table(Self::TABLE_NAME)
    }
}
