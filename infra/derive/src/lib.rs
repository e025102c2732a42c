#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the pet registry.
//!
//! * [`petreg_error`] turns a named-field enum into a context-aware `thiserror` error.
//! * [`petreg_slice`] wraps a feature state struct into an `Arc` handle registrable in the kernel.
//! * [`api_model`] / [`api_handler`] keep DTOs and Axum handlers consistent with `OpenAPI`.
//! * [`main`] boots a Tokio runtime from a named profile of `petreg-runtime`.
//!
//! Examples are `ignore`d here; the consuming crates exercise every macro in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a synchronous `main` running on a `petreg-runtime` profile.
///
/// # Arguments
///
/// * `server` - Multi-threaded profile for the HTTP server.
/// * `default` - Worker count from `TOKIO_WORKER_THREADS` or available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[petreg_runtime::main(server)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data transfer object.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when they are not derived already, and
/// `utoipa::ToSchema` behind the `server` feature of the calling crate.
///
/// # Serde policy
///
/// * `rename_all = "camelCase"` unless overridden with `rename_all = "..."`.
/// * `deny_unknown_fields` unless disabled with `deny_unknown_fields = false`.
///
/// # Example
///
/// ```rust,ignore
/// use petreg_derive::api_model;
///
/// #[api_model]
/// pub struct CreatePetRequest {
///     pub nome_dono: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Documents an Axum handler with `utoipa::path` (behind the `server` feature).
///
/// Arguments are forwarded verbatim to `utoipa::path`.
///
/// # Example
///
/// ```rust,ignore
/// use petreg_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/api/pets-list",
///     responses((status = OK, body = Vec<PetSummary>)),
///     tag = "Pets"
/// )]
/// pub async fn list_pets() -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Declares a crate error enum.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant holding a source.
/// * `From<Source>` for every variant holding a source.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-level `format_context` helper for the `#[error(..)]` strings.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A `context` field must be typed `Option<Cow<'static, str>>`.
/// * A variant holding a source (field named `source`, or marked `#[source]`/`#[from]`)
///   must also hold a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[petreg_derive::petreg_error]
/// pub enum DatabaseError {
///     #[error("SQL error{}: {source}", format_context(.context))]
///     Sqlx { source: sqlx::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal database error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn count(pool: &AnyPool) -> Result<i64, DatabaseError> {
///     sqlx::query_scalar("SELECT COUNT(*) FROM pets")
///         .fetch_one(pool)
///         .await
///         .context("Counting pets")
/// }
/// ```
#[proc_macro_attribute]
pub fn petreg_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Declares a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a cloneable
/// `Arc` wrapper that derefs to the inner state and implements
/// `petreg_kernel::domain::registry::FeatureSlice`.
///
/// # Example
///
/// ```rust,ignore
/// #[petreg_derive::petreg_slice]
/// pub struct Pets {
///     pub repository: PetRepository,
/// }
///
/// let slice = Pets::new(PetsInner { repository });
/// ```
#[proc_macro_attribute]
pub fn petreg_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
