//! Reservation entity
//!
//! Links a hotel and a customer by id. Persisted as
//! `{"id": 1, "hotel_id": 1, "customer_id": 1}`; the store does not check
//! that either referenced record exists.

use serde::{Deserialize, Serialize};

use crate::codec::Entity;
use crate::models::{Customer, Hotel};

/// A room reservation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,

    hotel_id: Option<u64>,

    customer_id: Option<u64>,
}

impl Reservation {
    /// A new reservation of `hotel` for `customer`
    pub fn new(hotel: &Hotel, customer: &Customer) -> Self {
        Self {
            id: None,
            hotel_id: hotel.id(),
            customer_id: customer.id(),
        }
    }

    pub fn hotel_id(&self) -> Option<u64> {
        self.hotel_id
    }

    pub fn set_hotel_id(&mut self, hotel_id: u64) -> &mut Self {
        self.hotel_id = Some(hotel_id);
        self
    }

    pub fn customer_id(&self) -> Option<u64> {
        self.customer_id
    }

    pub fn set_customer_id(&mut self, customer_id: u64) -> &mut Self {
        self.customer_id = Some(customer_id);
        self
    }
}

impl Entity for Reservation {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}
