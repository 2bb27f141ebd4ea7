use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

mod config;
mod dto;
mod error;
mod handlers;
mod models;
mod routes;
mod seed;
mod services;

use config::Config;
use error::AppResult;
use models::mood::MoodLog;
use models::resource::ResourceRecord;
use models::settings::Settings;
use services::chat::{CannedResponses, ChatSession, ResponseSource};
use services::onboarding::OnboardingProgress;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub moods: Arc<MoodLog>,
    pub catalog: Arc<Vec<ResourceRecord>>,
    pub chat: ChatSession,
    pub settings: Arc<RwLock<Settings>>,
    pub onboarding: Arc<RwLock<OnboardingProgress>>,
    pub ws_tx: Option<broadcast::Sender<String>>,
}

impl AppState {
    /// Fresh in-memory state built from the static seed data.
    pub fn seeded(config: Arc<Config>, responses: Arc<dyn ResponseSource>) -> AppResult<Self> {
        // Chat event broadcast channel for /ws subscribers
        let (ws_tx, _) = broadcast::channel::<String>(256);

        let chat = ChatSession::new(responses, config.reply_delay, Some(ws_tx.clone()));

        Ok(Self {
            moods: Arc::new(seed::mood_log()?),
            catalog: Arc::new(seed::catalog()),
            chat,
            settings: Arc::new(RwLock::new(Settings::with_theme(config.default_theme))),
            onboarding: Arc::new(RwLock::new(OnboardingProgress::default())),
            ws_tx: Some(ws_tx),
            config,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindcare_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    let state = AppState::seeded(config.clone(), Arc::new(CannedResponses::default()))?;
    tracing::info!(
        moods = state.moods.len(),
        resources = state.catalog.len(),
        "Seed data loaded"
    );

    let app = routes::build_router(state)?;

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
