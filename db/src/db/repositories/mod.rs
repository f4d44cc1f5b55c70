// Repository layer for database operations

pub mod fragment;
pub mod property;
pub mod queries;
pub mod reservation;
pub mod user;

pub use fragment::{SqlArg, SqlFragment};
pub use property::{PropertyFilter, PropertyRepository};
pub use reservation::ReservationRepository;
pub use user::UserRepository;
