use crate::Persons;
use crate::domain::{Person, PersonInput};
use crate::error::PersonsError;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_derive::{api_handler, api_model};
use roster_kernel::domain::constants::PERSONS_TAG;
use roster_kernel::server::ApiState;
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Error payload returned by persons endpoints.
#[api_model]
pub struct ErrorResponse {
    pub message: String,
}

/// Query parameters for the city search endpoint.
#[derive(Debug, Deserialize, IntoParams)]
struct SearchQuery {
    /// City to match exactly (case-sensitive).
    city: String,
}

impl IntoResponse for PersonsError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation { message, .. } => (StatusCode::BAD_REQUEST, message.into_owned()),
            Self::InvalidId { source, .. } => (StatusCode::BAD_REQUEST, source.to_string()),
            Self::Database { .. } | Self::State { .. } | Self::Internal { .. } => {
                error!(error = %self, "Persons request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

#[api_handler(
    post,
    path = "/persons",
    request_body = PersonInput,
    responses(
        (status = CREATED, description = "Person created", body = Person),
        (status = BAD_REQUEST, description = "Payload failed validation", body = ErrorResponse),
    ),
    tag = PERSONS_TAG,
)]
async fn create_handler(
    State(state): State<ApiState>,
    Json(input): Json<PersonInput>,
) -> Result<impl IntoResponse, PersonsError> {
    let persons = state.try_get_slice::<Persons>()?;
    let person = persons.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

#[api_handler(
    get,
    path = "/persons",
    responses((status = OK, description = "All persons", body = [Person])),
    tag = PERSONS_TAG,
)]
async fn list_handler(State(state): State<ApiState>) -> Result<Json<Vec<Person>>, PersonsError> {
    let persons = state.try_get_slice::<Persons>()?;
    Ok(Json(persons.service.list().await?))
}

#[api_handler(
    get,
    path = "/persons/search",
    params(SearchQuery),
    responses((status = OK, description = "Persons living in the city", body = [Person])),
    tag = PERSONS_TAG,
)]
async fn search_handler(
    State(state): State<ApiState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Person>>, PersonsError> {
    let persons = state.try_get_slice::<Persons>()?;
    Ok(Json(persons.service.find_by_city(&query.city).await?))
}

#[api_handler(
    get,
    path = "/persons/{id}",
    params(("id" = String, Path, description = "Person identifier")),
    responses(
        (status = OK, description = "Person found", body = Person),
        (status = NOT_FOUND, description = "No person with this identifier"),
        (status = BAD_REQUEST, description = "Malformed identifier", body = ErrorResponse),
    ),
    tag = PERSONS_TAG,
)]
async fn get_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Response, PersonsError> {
    let persons = state.try_get_slice::<Persons>()?;
    let found = persons.service.get(&id).await?;
    Ok(match found {
        Some(person) => Json(person).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

#[api_handler(
    put,
    path = "/persons/{id}",
    request_body = PersonInput,
    params(("id" = String, Path, description = "Person identifier")),
    responses(
        (status = OK, description = "Person updated", body = Person),
        (status = NOT_FOUND, description = "No person with this identifier"),
        (status = BAD_REQUEST, description = "Payload failed validation", body = ErrorResponse),
    ),
    tag = PERSONS_TAG,
)]
async fn update_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(input): Json<PersonInput>,
) -> Result<Response, PersonsError> {
    let persons = state.try_get_slice::<Persons>()?;
    let updated = persons.service.update(&id, input).await?;
    Ok(match updated {
        Some(person) => Json(person).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

#[api_handler(
    delete,
    path = "/persons/{id}",
    params(("id" = String, Path, description = "Person identifier")),
    responses(
        (status = NO_CONTENT, description = "Person deleted"),
        (status = NOT_FOUND, description = "No person with this identifier"),
        (status = BAD_REQUEST, description = "Malformed identifier", body = ErrorResponse),
    ),
    tag = PERSONS_TAG,
)]
async fn delete_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<StatusCode, PersonsError> {
    let persons = state.try_get_slice::<Persons>()?;
    let deleted = persons.service.delete(&id).await?;
    Ok(if deleted { StatusCode::NO_CONTENT } else { StatusCode::NOT_FOUND })
}

/// Builds the `/persons` route group.
pub fn persons_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(create_handler, list_handler))
        .routes(routes!(search_handler))
        .routes(routes!(get_handler, update_handler, delete_handler))
}
