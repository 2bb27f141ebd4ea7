use std::env;
use std::time::Duration;

use anyhow::Context;

use crate::models::settings::Theme;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    /// Simulated "typing" delay before the assistant reply lands
    pub reply_delay: Duration,

    pub default_theme: Theme,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .context("PORT must be a number")?;

        let reply_delay_ms: u64 = env::var("REPLY_DELAY_MS")
            .unwrap_or_else(|_| "2000".into())
            .parse()
            .context("REPLY_DELAY_MS must be a number of milliseconds")?;

        let default_theme = env::var("DEFAULT_THEME")
            .unwrap_or_else(|_| "light".into())
            .parse()
            .map_err(anyhow::Error::msg)
            .context("DEFAULT_THEME must be 'light' or 'dark'")?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|extra| parse_origins(&extra))
                .unwrap_or_default(),
            reply_delay: Duration::from_millis(reply_delay_ms),
            default_theme,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            reply_delay: Duration::from_millis(2000),
            default_theme: Theme::Light,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
