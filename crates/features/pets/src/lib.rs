//! Pets feature slice: registers an owner together with a pet, lists the pets with their
//! owner's name and removes pets by id.
//!
//! Routes (feature `server`):
//! * `POST /api/pets`
//! * `GET /api/pets-list`
//! * `DELETE /api/pets/{id}`
//! * `GET /` (registration page)

pub mod domain;
mod error;
pub mod messages;
mod repository;
#[cfg(feature = "server")]
pub mod server;

pub use crate::error::{PetsError, PetsErrorExt};
pub use crate::repository::PetRepository;

use petreg_database::Database;
use petreg_kernel::domain::registry::InitializedSlice;

/// Pets feature state
#[petreg_derive::petreg_slice]
pub struct Pets {
    pub repository: PetRepository,
}

/// Builds the slice around the shared storage handle.
#[must_use]
pub fn init(database: &Database) -> InitializedSlice {
    let slice = Pets::new(PetsInner { repository: PetRepository::new(database.clone()) });

    tracing::info!("Pets slice initialized");

    InitializedSlice::new(slice)
}
