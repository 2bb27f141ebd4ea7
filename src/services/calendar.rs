use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::mood::{MonthRef, MoodLevel, MoodLog};

/// Six display weeks of seven days.
pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// First cell of the grid: the Sunday on or before the 1st of the month.
pub fn grid_start(month: MonthRef) -> NaiveDate {
    let first = month.first_day();
    let offset = first.weekday().num_days_from_sunday();
    first - Duration::days(offset as i64)
}

/// Build the 42-cell month grid, annotating each day with its mood entry.
/// Trailing cells spill into the following month.
pub fn build_month_grid(month: MonthRef, today: NaiveDate, moods: &MoodLog) -> Vec<CalendarCell> {
    let start = grid_start(month);

    (0..GRID_CELLS as i64)
        .map(|i| {
            let date = start + Duration::days(i);
            let entry = moods.get(date);
            CalendarCell {
                date,
                is_current_month: date.year() == month.year && date.month() == month.month,
                is_today: date == today,
                mood: entry.map(|e| e.mood),
                note: entry.and_then(|e| e.note.clone()),
            }
        })
        .collect()
}
