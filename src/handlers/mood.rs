use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use validator::Validate;

use crate::dto::{CalendarQuery, CalendarResponse, MoodListQuery, MoodListResponse, MoodStatsResponse};
use crate::error::{AppError, AppResult};
use crate::models::mood::{MonthRef, MoodEntry};
use crate::services::{calendar, mood_stats};
use crate::AppState;

const TREND_WEEKS: usize = 4;

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<CalendarResponse>> {
    let today = Utc::now().date_naive();
    let month = query.resolve(MonthRef::containing(today))?;

    let cells = calendar::build_month_grid(month, today, &state.moods);

    Ok(Json(CalendarResponse {
        month,
        label: month.label(),
        weekdays: calendar::WEEKDAY_HEADERS,
        previous: month.previous(),
        next: month.next(),
        cells,
    }))
}

pub async fn list_moods(
    State(state): State<AppState>,
    Query(query): Query<MoodListQuery>,
) -> AppResult<Json<MoodListResponse>> {
    query.validate()?;

    let moods = state.moods.recent(query.limit()).to_vec();
    Ok(Json(MoodListResponse { moods }))
}

pub async fn get_mood_entry(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<MoodEntry>> {
    state
        .moods
        .get(date)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No mood entry for {}", date)))
}

pub async fn get_mood_stats(State(state): State<AppState>) -> AppResult<Json<MoodStatsResponse>> {
    let entries = state.moods.entries();

    let (streaks, weekly_trends) = match state.moods.latest() {
        Some(latest) => (
            mood_stats::streaks(entries, latest.date),
            mood_stats::weekly_trends(&state.moods, latest.date, TREND_WEEKS),
        ),
        None => (mood_stats::Streaks::default(), Vec::new()),
    };

    Ok(Json(MoodStatsResponse {
        total_entries: entries.len(),
        average: mood_stats::average(entries),
        positive_share: mood_stats::positive_share(entries),
        distribution: mood_stats::distribution(entries).unwrap_or_default(),
        streaks,
        weekly_trends,
    }))
}
