//! Domain Models
//!
//! Entities of the hotel booking domain. Each one implements
//! [`Entity`](crate::codec::Entity) and round-trips through a [`Record`](crate::Record).

mod customer;
mod hotel;
mod reservation;

pub use customer::Customer;
pub use hotel::Hotel;
pub use reservation::Reservation;
