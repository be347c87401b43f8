//! Status handlers. Neither touches the store, so they answer even when it is down.

use crate::response::StatusBody;
use axum::Json;

pub const SERVICE_MESSAGE: &str = "Azure SWA Demo API";

pub async fn root() -> Json<StatusBody> {
    Json(StatusBody {
        message: Some(SERVICE_MESSAGE),
        status: "healthy",
    })
}

pub async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        message: None,
        status: "healthy",
    })
}
