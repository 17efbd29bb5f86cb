use std::path::Path;

use axum::{
    body::Body,
    extract::Path as UrlPath,
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        Response,
    },
    routing::get,
    Router,
};
use include_dir::{include_dir, Dir};

use crate::{
    rejections::{AppError, ResultExt},
    AppState,
};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");
const STATIC_CACHE_CONTROL: &str = "max-age=3600, must-revalidate";

async fn send_file(UrlPath(path): UrlPath<String>) -> Result<Response<Body>, AppError> {
    let file = STATIC_DIR
        .get_file(Path::new(&path))
        .ok_or_else(|| AppError::NotFound(format!("no static file named {path}")))?;

    let content_type = match file.path().extension() {
        Some(ext) if ext == "css" => "text/css",
        Some(ext) if ext == "js" => "text/javascript",
        Some(ext) if ext == "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    };

    Response::builder()
        .header(CONTENT_TYPE, content_type)
        .header(CACHE_CONTROL, STATIC_CACHE_CONTROL)
        .body(Body::from(file.contents()))
        .reject("could not build static file response")
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(send_file))
}
