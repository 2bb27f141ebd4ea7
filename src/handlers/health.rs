use axum::{extract::State, http::StatusCode, Json};

use crate::dto::{HealthResponse, ReadyzChecks, ReadyzResponse};
use crate::AppState;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        service: "mindcare-api".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<ReadyzResponse>) {
    let checks = ReadyzChecks {
        mood_log: !state.moods.is_empty(),
        catalog: !state.catalog.is_empty(),
    };

    if checks.mood_log && checks.catalog {
        (
            StatusCode::OK,
            Json(ReadyzResponse {
                status: "ready".into(),
                checks,
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyzResponse {
                status: "not_ready".into(),
                checks,
            }),
        )
    }
}
