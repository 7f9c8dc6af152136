use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    routing::MethodRouter,
    Json,
};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Forward one basket call to Pantry and build the success body
///
/// All four basket handlers go through here. Any upstream failure is
/// returned as `ApiError::Upstream`, which renders as a 500.
async fn forward<T, F>(
    state: &AppState,
    method: Method,
    basket_name: &str,
    body: Option<Bytes>,
    respond: F,
) -> Result<(StatusCode, Json<T>), ApiError>
where
    T: Serialize,
    F: FnOnce(JsonValue) -> T,
{
    let upstream = state
        .pantry_client
        .send(method.clone(), basket_name, body)
        .await
        .inspect_err(|err| {
            tracing::error!("{} basket '{}' failed: {}", method, basket_name, err);
        })?;

    tracing::info!("{} basket '{}' forwarded", method, basket_name);
    Ok((StatusCode::OK, Json(respond(upstream))))
}

/// GET /:basket_name handler - Fetch basket contents
#[utoipa::path(
    get,
    path = routes::BASKET,
    params(
        ("basket_name" = String, Path, description = "Name of the Pantry basket")
    ),
    responses(
        (status = 200, description = "Upstream basket contents, unmodified", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "basket"
)]
pub async fn get_basket(
    State(state): State<AppState>,
    Path(basket_name): Path<String>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    forward(&state, Method::GET, &basket_name, None, |upstream| upstream).await
}

/// POST /:basket_name handler - Create or append basket contents
#[utoipa::path(
    post,
    path = routes::BASKET,
    params(
        ("basket_name" = String, Path, description = "Name of the Pantry basket")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Upstream response, unmodified", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "basket"
)]
pub async fn post_basket(
    State(state): State<AppState>,
    Path(basket_name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    forward(&state, Method::POST, &basket_name, Some(body), |upstream| upstream).await
}

/// PUT /:basket_name handler - Replace basket contents
#[utoipa::path(
    put,
    path = routes::BASKET,
    params(
        ("basket_name" = String, Path, description = "Name of the Pantry basket")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Upstream response, unmodified", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "basket"
)]
pub async fn put_basket(
    State(state): State<AppState>,
    Path(basket_name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    forward(&state, Method::PUT, &basket_name, Some(body), |upstream| upstream).await
}

/// DELETE /:basket_name handler - Clear a basket
///
/// The upstream body is discarded; callers always get the same
/// acknowledgement on success.
#[utoipa::path(
    delete,
    path = routes::BASKET,
    params(
        ("basket_name" = String, Path, description = "Name of the Pantry basket")
    ),
    responses(
        (status = 200, description = "Basket cleared", body = DeleteResponse),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "basket"
)]
pub async fn delete_basket(
    State(state): State<AppState>,
    Path(basket_name): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    forward(&state, Method::DELETE, &basket_name, None, |_| {
        DeleteResponse::cleared(&basket_name)
    })
    .await
}

/// Attach POST, PUT and DELETE for `basket_name` to a fixed route
///
/// Used where a basket name collides with a static path such as
/// `/favicon.ico`: GET keeps serving the file, the other verbs still reach
/// the basket of that name.
pub fn fixed_basket(
    method_router: MethodRouter<AppState>,
    basket_name: &'static str,
) -> MethodRouter<AppState> {
    method_router
        .post(move |State(state): State<AppState>, body: Bytes| async move {
            forward(&state, Method::POST, basket_name, Some(body), |upstream| upstream).await
        })
        .put(move |State(state): State<AppState>, body: Bytes| async move {
            forward(&state, Method::PUT, basket_name, Some(body), |upstream| upstream).await
        })
        .delete(move |State(state): State<AppState>| async move {
            forward(&state, Method::DELETE, basket_name, None, |_| {
                DeleteResponse::cleared(basket_name)
            })
            .await
        })
}
