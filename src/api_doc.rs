use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::DeleteResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pantry-basket-proxy API",
        version = "0.1.0",
        description = "CORS-enabled pass-through proxy for Pantry baskets"
    ),
    paths(
        handlers::basket::get_basket,
        handlers::basket::post_basket,
        handlers::basket::put_basket,
        handlers::basket::delete_basket
    ),
    components(
        schemas(
            DeleteResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "basket", description = "Pantry basket operations")
    )
)]
pub struct ApiDoc;
