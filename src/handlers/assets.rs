use std::path::Path;
use tower_http::services::ServeFile;

pub const INDEX_FILE: &str = "index.html";
pub const FAVICON_FILE: &str = "favicon.ico";

/// Landing page served at `/`
pub fn index(static_dir: &Path) -> ServeFile {
    ServeFile::new(static_dir.join(INDEX_FILE))
}

/// Icon served at `/favicon.ico`
pub fn favicon(static_dir: &Path) -> ServeFile {
    ServeFile::new(static_dir.join(FAVICON_FILE))
}
