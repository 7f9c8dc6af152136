// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const FAVICON: &str = "/favicon.ico";
pub const BASKET: &str = "/{basket_name}";

// Docs live two segments deep so they never shadow a basket name
pub const OPENAPI_JSON: &str = "/docs/openapi.json";
pub const SWAGGER_UI: &str = "/docs/swagger-ui";
