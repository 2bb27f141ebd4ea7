use axum::{extract::State, Json};

use crate::seed;
use crate::services::dashboard::{self, DashboardSummary};
use crate::AppState;

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(dashboard::summarize(
        &state.moods,
        &seed::BADGES,
        &seed::WEEKLY_GOALS,
    ))
}
