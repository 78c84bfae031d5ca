//! Controllers
//!
//! Thin policy layers over [`Database`](crate::Database): each one owns a
//! table, refuses duplicate creations by a single field, and otherwise
//! delegates to the store.

mod customer;
mod reservation;

pub use customer::CustomerController;
pub use reservation::ReservationController;
