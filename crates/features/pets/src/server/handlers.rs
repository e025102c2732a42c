use crate::Pets;
use crate::domain::{CreatePetRequest, PetSummary};
use crate::error::PetsError;
use crate::messages;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use petreg_derive::api_handler;
use petreg_domain::constants::PETS_TAG;
use petreg_kernel::server::response::{ErrorResponse, MessageResponse};
use petreg_kernel::server::state::ApiState;
use tracing::debug;

#[api_handler(
    post,
    path = "/api/pets",
    request_body = CreatePetRequest,
    responses(
        (status = CREATED, description = "Owner and pet stored", body = MessageResponse),
        (status = BAD_REQUEST, description = "Missing owner name, pet name or species", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Nothing was stored", body = ErrorResponse),
    ),
    tag = PETS_TAG,
)]
pub(super) async fn create_pet(
    State(state): State<ApiState>,
    payload: Result<Json<CreatePetRequest>, JsonRejection>,
) -> Result<Response, PetsError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "Rejected registration body");
        PetsError::Validation { message: messages::INVALID_BODY.into(), context: None }
    })?;
    let registration = request.into_registration()?;

    let pets = state.slice::<Pets>()?;
    pets.repository.register(&registration).await?;

    Ok(MessageResponse::new(messages::CREATED).with_status(StatusCode::CREATED))
}

#[api_handler(
    get,
    path = "/api/pets-list",
    responses(
        (status = OK, description = "Pets with their owner's name, newest first", body = Vec<PetSummary>),
        (status = INTERNAL_SERVER_ERROR, body = ErrorResponse),
    ),
    tag = PETS_TAG,
)]
pub(super) async fn list_pets(
    State(state): State<ApiState>,
) -> Result<Json<Vec<PetSummary>>, PetsError> {
    let pets = state.slice::<Pets>()?;

    Ok(Json(pets.repository.list().await?))
}

#[api_handler(
    delete,
    path = "/api/pets/{id}",
    params(("id" = i64, Path, description = "Pet identifier")),
    responses(
        (status = OK, description = "Pet removed", body = MessageResponse),
        (status = BAD_REQUEST, description = "Identifier is not an integer", body = ErrorResponse),
        (status = NOT_FOUND, description = "No pet with this identifier", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, body = ErrorResponse),
    ),
    tag = PETS_TAG,
)]
pub(super) async fn delete_pet(
    State(state): State<ApiState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, PetsError> {
    let Path(id) = id.map_err(|rejection| {
        debug!(%rejection, "Rejected pet identifier");
        PetsError::Validation { message: messages::INVALID_ID.into(), context: None }
    })?;

    let pets = state.slice::<Pets>()?;
    pets.repository.delete(id).await?;

    Ok(MessageResponse::new(messages::DELETED).with_status(StatusCode::OK))
}
