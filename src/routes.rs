use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        // Mood tracker
        .route("/api/mood/calendar", get(handlers::mood::get_calendar))
        .route("/api/mood/stats", get(handlers::mood::get_mood_stats))
        .route("/api/mood/entries/:date", get(handlers::mood::get_mood_entry))
        .route("/api/moods", get(handlers::mood::list_moods))
        // Resources
        .route("/api/resources", get(handlers::resources::list_resources))
        .route(
            "/api/resources/categories",
            get(handlers::resources::list_categories),
        )
        .route("/api/resources/:id", get(handlers::resources::get_resource))
        // Chat
        .route("/api/chat", get(handlers::chat::get_chat))
        .route("/api/chat/messages", post(handlers::chat::send_message))
        // Dashboard
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        // Settings
        .route(
            "/api/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
        .route("/api/settings/export", post(handlers::settings::export_data))
        .route(
            "/api/settings/delete-account",
            post(handlers::settings::delete_account),
        )
        // Onboarding
        .route("/api/onboarding", get(handlers::onboarding::get_step))
        .route("/api/onboarding/next", post(handlers::onboarding::next_step))
        .route("/api/onboarding/back", post(handlers::onboarding::previous_step));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/ws", get(handlers::ws::ws_handler));

    let cors = cors_layer(&state)?;

    Ok(Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(state: &AppState) -> anyhow::Result<CorsLayer> {
    let config = &state.config;
    let mut origins = vec![config
        .frontend_url
        .parse::<HeaderValue>()
        .context("FRONTEND_URL is not a valid origin")?];
    for extra in &config.cors_extra_origins {
        match extra.parse::<HeaderValue>() {
            Ok(origin) => origins.push(origin),
            Err(_) => tracing::warn!(origin = %extra, "Ignoring invalid CORS origin"),
        }
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}
