//! Hotel entity

use serde::{Deserialize, Serialize};

use crate::codec::Entity;
use crate::models::{Customer, Reservation};

/// A hotel and the reservations made on it in this process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,

    name: String,

    /// Not persisted; reservations live in their own table
    #[serde(skip)]
    reservations: Vec<Reservation>,
}

impl Hotel {
    /// A new, not yet stored hotel
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            reservations: Vec::new(),
        }
    }

    /// A hotel with a known id
    pub fn with_id(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Reserve a room for `customer` and remember it on this hotel
    ///
    /// The reservation is not stored; hand it to a
    /// [`ReservationController`](crate::controllers::ReservationController) for that.
    pub fn reserve_room(&mut self, customer: &Customer) -> Reservation {
        let reservation = Reservation::new(self, customer);
        self.reservations.push(reservation.clone());
        reservation
    }

    /// Reservations made through [`Hotel::reserve_room`]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }
}

impl Entity for Hotel {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}
