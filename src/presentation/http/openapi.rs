// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::callable::invoke,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::controllers::callable::CallableRequest,
            crate::presentation::http::controllers::callable::CallableResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::ErrorBody,
            crate::application::dto::TimeResponse
        )
    ),
    tags(
        (name = "Functions", description = "Callable function entry points"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Server Time Functions",
        description = "Callable functions exposing the server clock",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// Write the pretty-printed OpenAPI document to `path`, creating parent
/// directories as needed.
pub fn write_openapi_snapshot(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &ApiDoc::openapi())?;
    writer.flush()?;
    Ok(())
}
