//! Read-only summaries over mood entries. Every ratio is undefined for empty
//! input and comes back as `None` rather than a silent zero.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::dashboard::Milestone;
use crate::models::mood::{MoodEntry, MoodLevel, MoodLog};

#[derive(Debug, Clone, Serialize)]
pub struct MoodShare {
    pub level: MoodLevel,
    pub label: &'static str,
    pub emoji: &'static str,
    pub count: usize,
    /// Full precision; round only for display
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyTrend {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub average: Option<f64>,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

pub fn average(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|e| e.mood.value() as u32).sum();
    Some(sum as f64 / entries.len() as f64)
}

/// Share of each mood level, in level order 1..=5.
pub fn distribution(entries: &[MoodEntry]) -> Option<Vec<MoodShare>> {
    if entries.is_empty() {
        return None;
    }
    let total = entries.len() as f64;
    let shares = MoodLevel::all()
        .map(|level| {
            let count = entries.iter().filter(|e| e.mood == level).count();
            MoodShare {
                level,
                label: level.label(),
                emoji: level.emoji(),
                count,
                percentage: count as f64 / total * 100.0,
            }
        })
        .collect();
    Some(shares)
}

/// Percentage of entries rated Happy or better.
pub fn positive_share(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let positive = entries.iter().filter(|e| e.mood.is_positive()).count();
    Some(positive as f64 / entries.len() as f64 * 100.0)
}

/// Mean mood over the inclusive date window `start..=end`.
pub fn window_average(log: &MoodLog, start: NaiveDate, end: NaiveDate) -> Option<f64> {
    average(log.window(start, end))
}

/// Averages of `weeks` consecutive 7-day windows, newest first, the first
/// one ending on `anchor`. Each trend compares against the window before it.
pub fn weekly_trends(log: &MoodLog, anchor: NaiveDate, weeks: usize) -> Vec<WeeklyTrend> {
    let windows: Vec<(NaiveDate, NaiveDate, Option<f64>)> = (0..weeks)
        .map(|i| {
            let end = anchor - Duration::days(7 * i as i64);
            let start = end - Duration::days(6);
            (start, end, window_average(log, start, end))
        })
        .collect();

    windows
        .iter()
        .enumerate()
        .map(|(i, &(start, end, avg))| {
            let older = windows.get(i + 1).and_then(|w| w.2);
            let trend = match (avg, older) {
                (Some(now), Some(before)) if now > before => Trend::Up,
                (Some(now), Some(before)) if now < before => Trend::Down,
                _ => Trend::Flat,
            };
            WeeklyTrend {
                label: week_label(i),
                start,
                end,
                average: avg,
                trend,
            }
        })
        .collect()
}

fn week_label(weeks_back: usize) -> String {
    match weeks_back {
        0 => "This Week".into(),
        1 => "Last Week".into(),
        n => format!("{} Weeks Ago", n),
    }
}

/// Longest run of consecutive logged days, plus the run ending on `anchor`.
pub fn streaks(entries: &[MoodEntry], anchor: NaiveDate) -> Streaks {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    dates.sort_unstable();
    dates.dedup();

    let mut current = 0u32;
    let mut check_date = anchor;
    for date in dates.iter().rev() {
        if *date == check_date {
            current += 1;
            check_date -= Duration::days(1);
        } else if *date < check_date {
            break;
        }
    }

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for date in &dates {
        run = match prev {
            Some(p) if *date == p + Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(*date);
    }

    Streaks { current, longest }
}

/// Value of `milestone` after each entry, in date order. Run milestones
/// report the longest run seen so far.
pub fn milestone_timeline(entries: &[MoodEntry], milestone: Milestone) -> Vec<(NaiveDate, u32)> {
    let mut value = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    entries
        .iter()
        .map(|entry| {
            let consecutive = prev.is_some_and(|p| entry.date == p + Duration::days(1));
            prev = Some(entry.date);

            match milestone {
                Milestone::EntriesLogged => value += 1,
                Milestone::NotedEntries => value += entry.note.is_some() as u32,
                Milestone::PositiveDays => value += entry.mood.is_positive() as u32,
                Milestone::LoggingStreak => {
                    run = if consecutive { run + 1 } else { 1 };
                    value = value.max(run);
                }
                Milestone::PositiveRun => {
                    run = match (entry.mood.is_positive(), consecutive) {
                        (false, _) => 0,
                        (true, true) => run + 1,
                        (true, false) => 1,
                    };
                    value = value.max(run);
                }
            }
            (entry.date, value)
        })
        .collect()
}

/// Percent of a goal reached, capped at 100. Undefined for a zero target.
pub fn goal_progress(current: u32, target: u32) -> Option<f64> {
    if target == 0 {
        return None;
    }
    Some((current as f64 / target as f64 * 100.0).min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entries_from(start: NaiveDate, moods: &[u8]) -> Vec<MoodEntry> {
        moods
            .iter()
            .enumerate()
            .map(|(i, m)| MoodEntry {
                date: start + Duration::days(i as i64),
                mood: MoodLevel::new(*m).unwrap(),
                note: None,
            })
            .collect()
    }

    #[test]
    fn test_average_of_week() {
        let entries = entries_from(date(2024, 1, 8), &[4, 3, 5, 2, 4, 5, 4]);
        let avg = average(&entries).unwrap();
        assert!((avg - 27.0 / 7.0).abs() < 1e-9);
        assert!((avg - 3.857).abs() < 0.001);
    }

    #[test]
    fn test_empty_input_is_undefined() {
        assert!(average(&[]).is_none());
        assert!(distribution(&[]).is_none());
        assert!(positive_share(&[]).is_none());
        assert!(window_average(&MoodLog::default(), date(2024, 1, 1), date(2024, 1, 7)).is_none());
    }

    #[test]
    fn test_distribution_sums_to_100() {
        let samples: Vec<Vec<u8>> = vec![
            vec![1, 2, 3, 4, 5],
            vec![3, 3, 3],
            vec![4, 3, 5, 2, 4, 5, 4, 1, 4, 3],
        ];
        for moods in &samples {
            let entries = entries_from(date(2024, 1, 1), moods);
            let shares = distribution(&entries).unwrap();
            assert_eq!(shares.len(), 5);
            let total: f64 = shares.iter().map(|s| s.percentage).sum();
            assert!((total - 100.0).abs() < 1e-6, "sum was {total}");
            let counted: usize = shares.iter().map(|s| s.count).sum();
            assert_eq!(counted, moods.len());
        }
    }

    #[test]
    fn test_positive_share() {
        let entries = entries_from(date(2024, 1, 1), &[4, 3, 5, 2]);
        assert_eq!(positive_share(&entries), Some(50.0));
    }

    #[test]
    fn test_window_average_is_inclusive() {
        let log = MoodLog::from_entries(entries_from(date(2024, 1, 1), &[1, 2, 3, 4, 5])).unwrap();
        let avg = window_average(&log, date(2024, 1, 2), date(2024, 1, 4)).unwrap();
        assert!((avg - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_trends() {
        // Two weeks: first week all 2s, second week all 4s
        let mut moods = vec![2u8; 7];
        moods.extend([4u8; 7]);
        let log = MoodLog::from_entries(entries_from(date(2024, 1, 1), &moods)).unwrap();

        let trends = weekly_trends(&log, date(2024, 1, 14), 3);
        assert_eq!(trends.len(), 3);
        assert_eq!(trends[0].label, "This Week");
        assert_eq!(trends[0].average, Some(4.0));
        assert_eq!(trends[0].trend, Trend::Up);
        assert_eq!(trends[1].label, "Last Week");
        assert_eq!(trends[1].average, Some(2.0));
        assert_eq!(trends[1].trend, Trend::Flat);
        assert_eq!(trends[2].label, "2 Weeks Ago");
        assert!(trends[2].average.is_none());
    }

    #[test]
    fn test_streaks() {
        let mut entries = entries_from(date(2024, 1, 1), &[3, 3, 3]);
        entries.extend(entries_from(date(2024, 1, 10), &[4, 4, 4, 4]));

        let s = streaks(&entries, date(2024, 1, 13));
        assert_eq!(s, Streaks { current: 4, longest: 4 });

        let s = streaks(&entries, date(2024, 1, 3));
        assert_eq!(s.current, 3);

        let s = streaks(&entries, date(2024, 1, 20));
        assert_eq!(s.current, 0);
        assert_eq!(streaks(&[], date(2024, 1, 1)), Streaks::default());
    }

    #[test]
    fn test_milestone_timeline() {
        // 4, 5, 2 | gap | 4, 4, 4
        let mut entries = entries_from(date(2024, 1, 1), &[4, 5, 2]);
        entries.extend(entries_from(date(2024, 1, 5), &[4, 4, 4]));
        entries[0].note = Some("first".into());

        let last = |m| milestone_timeline(&entries, m).last().map(|(_, v)| *v);
        assert_eq!(last(Milestone::EntriesLogged), Some(6));
        assert_eq!(last(Milestone::NotedEntries), Some(1));
        assert_eq!(last(Milestone::PositiveDays), Some(5));
        assert_eq!(last(Milestone::LoggingStreak), Some(3));
        assert_eq!(last(Milestone::PositiveRun), Some(3));

        let runs = milestone_timeline(&entries, Milestone::PositiveRun);
        let values: Vec<u32> = runs.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1, 2, 2, 2, 2, 3]);
        assert!(milestone_timeline(&[], Milestone::EntriesLogged).is_empty());
    }

    #[test]
    fn test_logging_streak_matches_streaks() {
        let mut entries = entries_from(date(2024, 1, 1), &[3, 3, 3]);
        entries.extend(entries_from(date(2024, 1, 10), &[4, 4, 4, 4]));
        let timeline = milestone_timeline(&entries, Milestone::LoggingStreak);
        let longest = streaks(&entries, date(2024, 1, 13)).longest;
        assert_eq!(timeline.last().map(|(_, v)| *v), Some(longest));
    }

    #[test]
    fn test_goal_progress() {
        assert_eq!(goal_progress(1, 2), Some(50.0));
        assert_eq!(goal_progress(9, 7), Some(100.0));
        assert!(goal_progress(1, 0).is_none());
    }
}
