use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Serve the front-end: the index page at `/` and the static-assets root at `/static`.
pub fn router(static_dir: &Path, index_file: &Path) -> Router<()> {
    Router::new()
        .route_service("/", ServeFile::new(index_file))
        .nest_service("/static", ServeDir::new(static_dir))
}
