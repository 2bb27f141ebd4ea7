use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::dashboard::{Achievement, BadgeDefinition, GoalDefinition, WeeklyGoal};
use crate::models::mood::{MoodEntry, MoodLevel, MoodLog};
use crate::services::mood_stats::{self, MoodShare};

#[derive(Debug, Serialize)]
pub struct MoodBar {
    pub date: NaiveDate,
    pub weekday: String,
    pub mood: MoodLevel,
    /// mood / 5, for bar heights
    pub height_ratio: f64,
}

#[derive(Debug, Serialize)]
pub struct GoalProgress {
    #[serde(flatten)]
    pub goal: WeeklyGoal,
    pub percentage: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub average_mood: Option<f64>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub days_active: usize,
    pub total_moods: usize,
    pub mood_counts: Vec<MoodShare>,
    pub badges_earned: usize,
    pub mood_trend: Vec<MoodBar>,
    pub weekly_goals: Vec<GoalProgress>,
    pub achievements: Vec<Achievement>,
}

/// Dashboard figures, anchored on the most recent logged day. Badges look at
/// the whole log, goals only at the trailing 7-day window.
pub fn summarize(
    log: &MoodLog,
    badges: &[BadgeDefinition],
    goals: &[GoalDefinition],
) -> DashboardSummary {
    let (week, streaks) = match log.latest() {
        Some(latest) => {
            let anchor = latest.date;
            (
                log.window(anchor - Duration::days(6), anchor),
                mood_stats::streaks(log.entries(), anchor),
            )
        }
        None => (&[][..], mood_stats::Streaks::default()),
    };

    let mood_trend = week
        .iter()
        .map(|e| MoodBar {
            date: e.date,
            weekday: e.date.format("%a").to_string(),
            mood: e.mood,
            height_ratio: e.mood.value() as f64 / MoodLevel::MAX as f64,
        })
        .collect();

    let achievements: Vec<Achievement> = badges
        .iter()
        .map(|badge| award(log.entries(), badge))
        .collect();

    DashboardSummary {
        average_mood: mood_stats::average(week),
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        days_active: log.len(),
        total_moods: log.len(),
        mood_counts: mood_stats::distribution(log.entries()).unwrap_or_default(),
        badges_earned: achievements.iter().filter(|a| a.earned).count(),
        mood_trend,
        weekly_goals: goals.iter().map(|goal| track(week, goal)).collect(),
        achievements,
    }
}

/// Earned on the first entry that reaches the threshold; otherwise reports
/// how far along the log is.
pub fn award(entries: &[MoodEntry], badge: &BadgeDefinition) -> Achievement {
    let timeline = mood_stats::milestone_timeline(entries, badge.milestone);
    let earned_on = timeline
        .iter()
        .find(|(_, value)| *value >= badge.threshold)
        .map(|(date, _)| *date);
    let reached = timeline.last().map_or(0, |(_, value)| *value);

    Achievement {
        id: badge.id,
        title: badge.title.into(),
        description: badge.description.into(),
        earned: earned_on.is_some(),
        earned_on,
        progress: match earned_on {
            Some(_) => None,
            None => mood_stats::goal_progress(reached, badge.threshold).map(|p| p.floor() as u8),
        },
    }
}

pub fn track(week: &[MoodEntry], goal: &GoalDefinition) -> GoalProgress {
    let current = mood_stats::milestone_timeline(week, goal.milestone)
        .last()
        .map_or(0, |(_, value)| *value);

    GoalProgress {
        goal: WeeklyGoal {
            id: goal.id,
            title: goal.title.into(),
            target: goal.target,
            current,
            unit: goal.unit.into(),
        },
        percentage: mood_stats::goal_progress(current, goal.target),
    }
}
