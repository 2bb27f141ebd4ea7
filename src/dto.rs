//! # MindCare: Request/Response DTOs
//!
//! API contract types shared by the handlers.
//!
//! Conventions:
//! - `*Request` / `*Query` → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Bounds are expressed via `validator` derive macros

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;

use crate::models::chat::Message;
use crate::models::mood::{MonthRef, MoodEntry, MoodLevel};
use crate::models::resource::ResourceRecord;
use crate::models::settings::Theme;
use crate::services::calendar::CalendarCell;
use crate::services::mood_stats::{MoodShare, Streaks, WeeklyTrend};

// ============================================================================
// Common
// ============================================================================

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Mood tracker
// ============================================================================

/// GET /api/mood/calendar query params. Both default to the current month.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl CalendarQuery {
    /// Fill missing parts from `current`; `MonthRef::new` owns the bounds.
    pub fn resolve(&self, current: MonthRef) -> AppResult<MonthRef> {
        MonthRef::new(
            self.year.unwrap_or(current.year),
            self.month.unwrap_or(current.month),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub month: MonthRef,
    pub label: String,
    pub weekdays: [&'static str; 7],
    pub previous: MonthRef,
    pub next: MonthRef,
    pub cells: Vec<CalendarCell>,
}

/// GET /api/moods query params
#[derive(Debug, Deserialize, Validate)]
pub struct MoodListQuery {
    /// Default: 30
    #[validate(range(min = 1, max = 366, message = "Limit must be 1-366"))]
    pub limit: Option<usize>,
}

impl MoodListQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(30)
    }
}

/// Oldest first
#[derive(Debug, Serialize)]
pub struct MoodListResponse {
    pub moods: Vec<MoodEntry>,
}

#[derive(Debug, Serialize)]
pub struct MoodStatsResponse {
    pub total_entries: usize,
    pub average: Option<f64>,
    pub positive_share: Option<f64>,
    pub distribution: Vec<MoodShare>,
    pub streaks: Streaks,
    pub weekly_trends: Vec<WeeklyTrend>,
}

// ============================================================================
// Resources
// ============================================================================

/// GET /api/resources query params
#[derive(Debug, Deserialize, Validate)]
pub struct ResourceQuery {
    #[validate(length(max = 200, message = "Search must be under 200 characters"))]
    pub search: Option<String>,

    /// "all" or a category id. Default: "all"
    pub category: Option<String>,
}

/// Catalog record plus the icon key for its type badge
#[derive(Debug, Serialize)]
pub struct ResourceView {
    #[serde(flatten)]
    pub resource: ResourceRecord,
    pub icon: &'static str,
}

impl From<&ResourceRecord> for ResourceView {
    fn from(record: &ResourceRecord) -> Self {
        Self {
            icon: record.kind.icon(),
            resource: record.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub resources: Vec<ResourceView>,
    pub total: usize,
    /// Lets the client show "clear filters" on an empty filtered result
    pub filters_active: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: &'static str,
    pub label: &'static str,
    pub count: usize,
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub messages: Vec<Message>,
    pub is_typing: bool,
    /// Last mood picked in a check-in, if any
    pub selected_mood: Option<MoodLevel>,
    pub quick_starts: Vec<&'static str>,
}

/// POST /api/chat/messages
///
/// A bare `mood` is a check-in: the message text is composed from its label.
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(max = 2000, message = "Message must be under 2000 characters"))]
    pub content: Option<String>,

    pub mood: Option<MoodLevel>,
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct NotificationPatch {
    pub daily_reminders: Option<bool>,
    pub weekly_reports: Option<bool>,
    pub achievement_alerts: Option<bool>,
    pub mood_check_ins: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PrivacyPatch {
    pub data_collection: Option<bool>,
    pub analytics: Option<bool>,
    pub third_party_sharing: Option<bool>,
}

/// PUT /api/settings: partial update, all fields optional
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub theme: Option<Theme>,
    #[serde(default)]
    pub notifications: NotificationPatch,
    #[serde(default)]
    pub privacy: PrivacyPatch,
}

impl UpdateSettingsRequest {
    /// At least one recognised field must be present
    pub fn validate_not_empty(&self) -> Result<(), String> {
        let n = &self.notifications;
        let p = &self.privacy;
        let any = self.theme.is_some()
            || n.daily_reminders.is_some()
            || n.weekly_reports.is_some()
            || n.achievement_alerts.is_some()
            || n.mood_check_ins.is_some()
            || p.data_collection.is_some()
            || p.analytics.is_some()
            || p.third_party_sharing.is_some();
        if !any {
            return Err("No valid fields to update.".into());
        }
        Ok(())
    }
}

// ============================================================================
// System
// ============================================================================

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// GET /readyz
#[derive(Debug, Serialize)]
pub struct ReadyzResponse {
    pub status: String,
    pub checks: ReadyzChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadyzChecks {
    pub mood_log: bool,
    pub catalog: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_settings_patch_requires_a_field() {
        let empty: UpdateSettingsRequest = serde_json::from_str(r#"{"unknown": 1}"#).unwrap();
        assert!(empty.validate_not_empty().is_err());

        let nested_empty: UpdateSettingsRequest =
            serde_json::from_str(r#"{"notifications": {}}"#).unwrap();
        assert!(nested_empty.validate_not_empty().is_err());

        let theme: UpdateSettingsRequest = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert!(theme.validate_not_empty().is_ok());
    }

    #[test]
    fn test_calendar_query_resolve() {
        let current = MonthRef { year: 2024, month: 3 };

        let q = CalendarQuery { year: None, month: None };
        assert_eq!(q.resolve(current).unwrap(), current);

        let q = CalendarQuery { year: Some(2023), month: None };
        assert_eq!(q.resolve(current).unwrap(), MonthRef { year: 2023, month: 3 });

        let q = CalendarQuery { year: Some(2024), month: Some(13) };
        match q.resolve(current) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Month must be between 1 and 12"),
            other => panic!("expected validation error, got {:?}", other),
        }
        let q = CalendarQuery { year: Some(0), month: Some(1) };
        assert!(matches!(q.resolve(current), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_mood_list_default_limit() {
        let q = MoodListQuery { limit: None };
        assert_eq!(q.limit(), 30);
    }
}
