use axum::{
    routing::{get, get_service},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{assets, basket, delete_basket, get_basket, post_basket, put_basket};
use crate::routes;
use crate::state::AppState;

/// Every origin, method and header is allowed on every route.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route(routes::INDEX, get_service(assets::index(&static_dir)))
        .route(
            routes::FAVICON,
            basket::fixed_basket(
                get_service(assets::favicon(&static_dir)),
                assets::FAVICON_FILE,
            ),
        )
        .route(
            routes::BASKET,
            get(get_basket)
                .post(post_basket)
                .put(put_basket)
                .delete(delete_basket),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
