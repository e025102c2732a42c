//! HTTP building blocks shared by every slice.

mod health;
pub mod response;
pub mod router;
pub mod state;
