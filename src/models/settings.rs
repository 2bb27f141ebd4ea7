use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub daily_reminders: bool,
    pub weekly_reports: bool,
    pub achievement_alerts: bool,
    pub mood_check_ins: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            weekly_reports: true,
            achievement_alerts: true,
            mood_check_ins: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacyPrefs {
    pub data_collection: bool,
    pub analytics: bool,
    pub third_party_sharing: bool,
}

impl Default for PrivacyPrefs {
    fn default() -> Self {
        Self {
            data_collection: true,
            analytics: false,
            third_party_sharing: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub notifications: NotificationPrefs,
    pub privacy: PrivacyPrefs,
}

impl Settings {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_toggles() {
        let settings = Settings::default();
        assert!(settings.notifications.daily_reminders);
        assert!(!settings.notifications.mood_check_ins);
        assert!(settings.privacy.data_collection);
        assert!(!settings.privacy.third_party_sharing);
    }
}
