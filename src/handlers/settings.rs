use axum::{extract::State, Json};

use crate::dto::{MessageResponse, UpdateSettingsRequest};
use crate::error::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::seed;
use crate::AppState;

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.read().await.clone())
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(body): Json<UpdateSettingsRequest>,
) -> AppResult<Json<Settings>> {
    body.validate_not_empty().map_err(AppError::Validation)?;

    let mut settings = state.settings.write().await;

    if let Some(theme) = body.theme {
        settings.theme = theme;
    }

    let n = &body.notifications;
    let notifications = &mut settings.notifications;
    apply(&mut notifications.daily_reminders, n.daily_reminders);
    apply(&mut notifications.weekly_reports, n.weekly_reports);
    apply(&mut notifications.achievement_alerts, n.achievement_alerts);
    apply(&mut notifications.mood_check_ins, n.mood_check_ins);

    let p = &body.privacy;
    let privacy = &mut settings.privacy;
    apply(&mut privacy.data_collection, p.data_collection);
    apply(&mut privacy.analytics, p.analytics);
    apply(&mut privacy.third_party_sharing, p.third_party_sharing);

    tracing::info!(theme = ?settings.theme, "Settings updated");

    Ok(Json(settings.clone()))
}

fn apply(target: &mut bool, value: Option<bool>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// Export is a stub: nothing is produced, only the confirmation message.
pub async fn export_data() -> Json<MessageResponse> {
    tracing::info!("Data export requested");
    Json(MessageResponse {
        message: seed::EXPORT_MESSAGE.into(),
    })
}

pub async fn delete_account() -> Json<MessageResponse> {
    tracing::info!("Account deletion requested");
    Json(MessageResponse {
        message: seed::DELETE_ACCOUNT_MESSAGE.into(),
    })
}
