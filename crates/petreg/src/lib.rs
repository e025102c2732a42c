//! Facade crate of the pet registry.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and holds no business logic.
//!
//! ## Usage
//! - Depend on `petreg` with the `server` feature.
//! - Call [`init`] to build the enabled slices, then register them into the API state.

use petreg_database::Database;
pub use petreg_database as database;
pub use petreg_domain as domain;
pub use petreg_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use petreg_kernel::server::router::system_router;
        pub use petreg_pets::server::router as pets_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "pets")]
    pub use petreg_pets as pets;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "pets")]
        "pets",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds every enabled feature slice around the shared storage handle.
#[must_use]
pub fn init(database: &Database) -> Vec<domain::registry::InitializedSlice> {
    let mut slices = Vec::new();

    #[cfg(feature = "pets")]
    slices.push(features::pets::init(database));

    #[cfg(not(feature = "pets"))]
    let _ = database;

    slices
}
