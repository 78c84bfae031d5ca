//! Reservation controller
//!
//! A customer holds at most one reservation in the `reservations` table.

use std::sync::Arc;

use tracing::warn;

use crate::codec::Entity;
use crate::database::Database;
use crate::error::Result;
use crate::handle::EntityHandle;
use crate::models::{Customer, Hotel, Reservation};
use crate::record::Record;

/// Creates and cancels reservations
pub struct ReservationController {
    database: Arc<Database>,
}

impl ReservationController {
    pub const TABLE_NAME: &'static str = "reservations";

    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Reserve a room at `hotel` for `customer` and store it
    ///
    /// Returns `Ok(None)` if the customer already has a reservation.
    pub fn create_reservation(
        &self,
        hotel: &Hotel,
        customer: &Customer,
    ) -> Result<Option<EntityHandle<Reservation>>> {
        if self
            .database
            .find_by(Self::TABLE_NAME, "customer_id", customer.id())?
            .is_some()
        {
            warn!(customer_id = ?customer.id(), "customer already holds a reservation");
            return Ok(None);
        }

        let reservation = EntityHandle::new(Reservation::new(hotel, customer));
        self.database.create(&reservation, Self::TABLE_NAME)?;
        Ok(Some(reservation))
    }

    /// Cancel a reservation; `Ok(false)` if it is not stored
    pub fn cancel_reservation(&self, reservation: &EntityHandle<Reservation>) -> Result<bool> {
        let reservation = reservation.snapshot();
        self.database.delete(&reservation, Self::TABLE_NAME)
    }

    /// Build a reservation from a stored record
    pub fn hydrate(&self, record: &Record) -> Result<Reservation> {
        Reservation::from_record(record)
    }

    /// Truncate the reservations table
    pub fn drop_table(&self) -> Result<bool> {
        self.database.drop_table(Self::TABLE_NAME)
    }
}
