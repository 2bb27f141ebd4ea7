use axum::{extract::State, Json};

use crate::services::onboarding::OnboardingView;
use crate::AppState;

pub async fn get_step(State(state): State<AppState>) -> Json<OnboardingView> {
    Json(state.onboarding.read().await.view())
}

pub async fn next_step(State(state): State<AppState>) -> Json<OnboardingView> {
    let mut progress = state.onboarding.write().await;
    progress.next();
    Json(progress.view())
}

pub async fn previous_step(State(state): State<AppState>) -> Json<OnboardingView> {
    let mut progress = state.onboarding.write().await;
    progress.back();
    Json(progress.view())
}
