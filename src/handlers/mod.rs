pub mod chat;
pub mod dashboard;
pub mod health;
pub mod mood;
pub mod onboarding;
pub mod resources;
pub mod settings;
pub mod ws;
