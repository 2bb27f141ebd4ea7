pub mod calendar;
pub mod chat;
pub mod dashboard;
pub mod mood_stats;
pub mod onboarding;
pub mod resource_filter;
