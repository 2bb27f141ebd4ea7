pub mod chat;
pub mod dashboard;
pub mod mood;
pub mod resource;
pub mod settings;
