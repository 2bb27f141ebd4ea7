use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Self-reported mood score, 1 (very sad) to 5 (very happy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> AppResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(AppError::Validation(format!(
                "Mood must be between {} and {}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn all() -> impl Iterator<Item = MoodLevel> {
        (Self::MIN..=Self::MAX).map(MoodLevel)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very Sad",
            2 => "Sad",
            3 => "Neutral",
            4 => "Happy",
            _ => "Very Happy",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self.0 {
            1 => "😢",
            2 => "😔",
            3 => "😐",
            4 => "🙂",
            _ => "😊",
        }
    }

    pub fn is_positive(self) -> bool {
        self.0 >= 4
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MoodLevel::new(value)
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: MoodLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Dated mood entries, kept sorted with at most one entry per date.
#[derive(Debug, Clone, Default)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn from_entries(mut entries: Vec<MoodEntry>) -> AppResult<Self> {
        entries.sort_by_key(|e| e.date);
        if let Some(pair) = entries.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(AppError::Conflict(format!(
                "Duplicate mood entry for {}",
                pair[0].date
            )));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries
            .binary_search_by_key(&date, |e| e.date)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[MoodEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// Entries whose date falls in `start..=end`.
    pub fn window(&self, start: NaiveDate, end: NaiveDate) -> &[MoodEntry] {
        let lo = self.entries.partition_point(|e| e.date < start);
        let hi = self.entries.partition_point(|e| e.date <= end);
        if lo >= hi {
            return &[];
        }
        &self.entries[lo..hi]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A validated calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl MonthRef {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=9999).contains(&year) {
            return Err(AppError::Validation("Year must be between 1 and 9999".into()));
        }
        if !(1..=12).contains(&month) {
            return Err(AppError::Validation("Month must be between 1 and 12".into()));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn previous(self) -> Self {
        match self.month {
            1 => Self { year: self.year - 1, month: 12 },
            m => Self { year: self.year, month: m - 1 },
        }
    }

    pub fn next(self) -> Self {
        match self.month {
            12 => Self { year: self.year + 1, month: 1 },
            m => Self { year: self.year, month: m + 1 },
        }
    }

    pub fn label(self) -> String {
        let name = MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or_default();
        format!("{} {}", name, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(d: NaiveDate, mood: u8) -> MoodEntry {
        MoodEntry {
            date: d,
            mood: MoodLevel::new(mood).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_mood_level_bounds() {
        assert!(MoodLevel::new(0).is_err());
        assert!(MoodLevel::new(6).is_err());
        assert_eq!(MoodLevel::new(3).unwrap().label(), "Neutral");
        assert_eq!(MoodLevel::all().count(), 5);
    }

    #[test]
    fn test_mood_level_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<MoodLevel>("7").is_err());
        assert_eq!(serde_json::from_str::<MoodLevel>("4").unwrap().value(), 4);
    }

    #[test]
    fn test_log_rejects_duplicate_dates() {
        let d = date(2024, 1, 10);
        let result = MoodLog::from_entries(vec![entry(d, 3), entry(d, 4)]);
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_log_sorted_lookup_and_window() {
        let log = MoodLog::from_entries(vec![
            entry(date(2024, 1, 12), 2),
            entry(date(2024, 1, 10), 3),
            entry(date(2024, 1, 11), 4),
        ])
        .unwrap();

        assert_eq!(log.entries()[0].date, date(2024, 1, 10));
        assert_eq!(log.get(date(2024, 1, 11)).unwrap().mood.value(), 4);
        assert!(log.get(date(2024, 1, 13)).is_none());
        assert_eq!(log.window(date(2024, 1, 11), date(2024, 1, 20)).len(), 2);
        assert!(log.window(date(2024, 2, 1), date(2024, 2, 5)).is_empty());
        assert_eq!(log.recent(2)[0].date, date(2024, 1, 11));
        assert_eq!(log.recent(10).len(), 3);
    }

    #[test]
    fn test_month_ref_navigation() {
        let jan = MonthRef::new(2024, 1).unwrap();
        assert_eq!(jan.previous(), MonthRef { year: 2023, month: 12 });
        assert_eq!(jan.next(), MonthRef { year: 2024, month: 2 });
        assert_eq!(jan.next().first_day(), date(2024, 2, 1));
        assert_eq!(jan.label(), "January 2024");
        assert!(MonthRef::new(2024, 13).is_err());
        assert!(MonthRef::new(0, 1).is_err());
    }
}
