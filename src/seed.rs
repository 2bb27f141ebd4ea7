//! Static seed data: the mood log, resource catalog, chat prompts and
//! dashboard badges the service starts with. Nothing here is ever persisted.

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};
use crate::models::dashboard::{BadgeDefinition, GoalDefinition, Milestone};
use crate::models::mood::{MoodEntry, MoodLevel, MoodLog};
use crate::models::resource::{Category, Difficulty, ResourceRecord, ResourceType};

pub const GREETING: &str =
    "Hello! I'm here to support you on your wellbeing journey. How are you feeling today?";

pub const CANNED_RESPONSES: [&str; 5] = [
    "I understand how you're feeling. It's completely normal to experience these emotions. Would you like to talk more about what's on your mind?",
    "Thank you for sharing that with me. Your feelings are valid, and I'm here to support you. What would be most helpful for you right now?",
    "I hear you, and I want you to know that you're not alone in this. Let's explore some strategies that might help you feel better.",
    "That sounds challenging. Remember that it's okay to have difficult days. What usually helps you when you're feeling this way?",
    "I appreciate you opening up to me. Your wellbeing matters, and taking time to check in with yourself is a positive step.",
];

pub const QUICK_STARTS: [&str; 6] = [
    "I'm feeling stressed",
    "Tips for better sleep",
    "I'm feeling down today",
    "Help with anxiety",
    "Breathing exercises",
    "I need motivation",
];

pub const EXPORT_MESSAGE: &str =
    "Your data export has been initiated. You will receive an email with your data within 24 hours.";

pub const DELETE_ACCOUNT_MESSAGE: &str =
    "Account deletion initiated. You will receive a confirmation email.";

pub struct OnboardingStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ONBOARDING_STEPS: [OnboardingStep; 3] = [
    OnboardingStep {
        title: "Welcome to MindCare!",
        description: "We're so glad you're here. Let's take a moment to introduce you to your new wellbeing companion.",
    },
    OnboardingStep {
        title: "Your Privacy Matters",
        description: "We take your privacy seriously. Here's how we protect your information.",
    },
    OnboardingStep {
        title: "Explore Your Features",
        description: "Discover all the tools available to support your wellbeing journey.",
    },
];

fn ymd(y: i32, m: u32, d: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("invalid seed date {y}-{m}-{d}")))
}

pub fn mood_log() -> AppResult<MoodLog> {
    let raw: [(u32, u8, &str); 10] = [
        (15, 4, "Great day at work!"),
        (14, 3, "Feeling okay"),
        (13, 5, "Wonderful weekend"),
        (12, 2, "Stressful day"),
        (11, 4, "Good progress on goals"),
        (10, 3, "Average day"),
        (9, 5, "Celebrated achievement"),
        (8, 1, "Difficult day"),
        (7, 4, "Productive Sunday"),
        (6, 3, "Relaxing weekend"),
    ];

    let entries = raw
        .into_iter()
        .map(|(day, mood, note)| {
            Ok(MoodEntry {
                date: ymd(2024, 1, day)?,
                mood: MoodLevel::new(mood)?,
                note: Some(note.to_string()),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    MoodLog::from_entries(entries)
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: u32,
    title: &str,
    description: &str,
    category: Category,
    kind: ResourceType,
    read_time: &str,
    difficulty: Difficulty,
    tags: &[&str],
) -> ResourceRecord {
    ResourceRecord {
        id,
        title: title.into(),
        description: description.into(),
        category,
        kind,
        read_time: read_time.into(),
        difficulty,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn catalog() -> Vec<ResourceRecord> {
    use Category::*;
    use Difficulty::*;
    use ResourceType::*;

    vec![
        resource(
            1,
            "5-Minute Breathing Exercise for Instant Calm",
            "Learn a simple breathing technique that can help reduce stress and anxiety in just 5 minutes.",
            Stress,
            Exercise,
            "5 min",
            Beginner,
            &["breathing", "quick-relief", "anxiety"],
        ),
        resource(
            2,
            "Understanding Anxiety: A Comprehensive Guide",
            "Explore what anxiety is, its common symptoms, and evidence-based strategies for managing it.",
            Anxiety,
            Article,
            "12 min",
            Intermediate,
            &["education", "coping-strategies", "mental-health"],
        ),
        resource(
            3,
            "Progressive Muscle Relaxation Technique",
            "A step-by-step guide to progressive muscle relaxation for better sleep and stress relief.",
            Sleep,
            Exercise,
            "15 min",
            Beginner,
            &["relaxation", "sleep", "body-awareness"],
        ),
        resource(
            4,
            "Building Healthy Communication in Relationships",
            "Learn effective communication strategies to strengthen your personal and professional relationships.",
            Relationships,
            Article,
            "10 min",
            Intermediate,
            &["communication", "relationships", "social-skills"],
        ),
        resource(
            5,
            "Mindful Morning Routine for Mental Clarity",
            "Start your day with intention using this 10-minute mindful morning routine.",
            Stress,
            Exercise,
            "10 min",
            Beginner,
            &["mindfulness", "morning-routine", "productivity"],
        ),
        resource(
            6,
            "Sleep Hygiene: Creating the Perfect Sleep Environment",
            "Discover how to optimize your bedroom and bedtime routine for better quality sleep.",
            Sleep,
            Article,
            "8 min",
            Beginner,
            &["sleep-hygiene", "environment", "wellness"],
        ),
        resource(
            7,
            "Cognitive Behavioral Techniques for Negative Thoughts",
            "Learn practical CBT techniques to identify and challenge negative thought patterns.",
            Anxiety,
            Article,
            "15 min",
            Advanced,
            &["CBT", "thought-patterns", "self-help"],
        ),
        resource(
            8,
            "Setting Healthy Boundaries in Personal Relationships",
            "A practical guide to establishing and maintaining healthy boundaries with family and friends.",
            Relationships,
            Article,
            "12 min",
            Intermediate,
            &["boundaries", "self-care", "relationships"],
        ),
    ]
}

pub const BADGES: [BadgeDefinition; 5] = [
    BadgeDefinition {
        id: 1,
        title: "First Mood Logged",
        description: "Logged your very first mood",
        milestone: Milestone::EntriesLogged,
        threshold: 1,
    },
    BadgeDefinition {
        id: 2,
        title: "First Week Complete",
        description: "Tracked your mood for 7 consecutive days",
        milestone: Milestone::LoggingStreak,
        threshold: 7,
    },
    BadgeDefinition {
        id: 3,
        title: "Mood Master",
        description: "Maintained a positive mood for 5 days in a row",
        milestone: Milestone::PositiveRun,
        threshold: 5,
    },
    BadgeDefinition {
        id: 4,
        title: "10 Happy Days",
        description: "Logged 10 days with a positive mood",
        milestone: Milestone::PositiveDays,
        threshold: 10,
    },
    BadgeDefinition {
        id: 5,
        title: "30 Days of Tracking",
        description: "Logged your mood on 30 days",
        milestone: Milestone::EntriesLogged,
        threshold: 30,
    },
];

pub const WEEKLY_GOALS: [GoalDefinition; 3] = [
    GoalDefinition {
        id: 1,
        title: "Daily Mood Check-ins",
        milestone: Milestone::EntriesLogged,
        target: 7,
        unit: "days",
    },
    GoalDefinition {
        id: 2,
        title: "Positive Days",
        milestone: Milestone::PositiveDays,
        target: 4,
        unit: "days",
    },
    GoalDefinition {
        id: 3,
        title: "Journal Notes",
        milestone: Milestone::NotedEntries,
        target: 5,
        unit: "notes",
    },
];
