use chrono::NaiveDate;
use serde::Serialize;

/// A figure tracked over mood entries in date order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// Total entries logged
    EntriesLogged,
    /// Entries carrying a note
    NotedEntries,
    /// Entries with a positive mood
    PositiveDays,
    /// Longest run of consecutive logged days
    LoggingStreak,
    /// Longest run of consecutive days with a positive mood
    PositiveRun,
}

/// A badge is earned on the first entry where its milestone reaches `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct BadgeDefinition {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub milestone: Milestone,
    pub threshold: u32,
}

/// A goal counts its milestone over the dashboard's 7-day window.
#[derive(Debug, Clone, Copy)]
pub struct GoalDefinition {
    pub id: u32,
    pub title: &'static str,
    pub milestone: Milestone,
    pub target: u32,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub earned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_on: Option<NaiveDate>,
    /// Percent complete for badges not yet earned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyGoal {
    pub id: u32,
    pub title: String,
    pub target: u32,
    pub current: u32,
    pub unit: String,
}
