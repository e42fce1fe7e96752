use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub migrations_path: PathBuf,
    /// When set, budget alerts are also delivered on the e-mail channel.
    pub alert_email: Option<String>,
    /// Quiet period before a data change triggers a background re-analysis.
    pub debounce_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("SPENDWATCH_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("SPENDWATCH_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(7070),
            database_path: env::var("SPENDWATCH_DATABASE_URL")
                .map(|v| {
                    PathBuf::from(
                        v.strip_prefix("sqlite://")
                            .or_else(|| v.strip_prefix("sqlite:"))
                            .unwrap_or(&v),
                    )
                })
                .unwrap_or_else(|_| PathBuf::from("data/spendwatch.db")),
            migrations_path: env::var("SPENDWATCH_MIGRATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("migrations")),
            alert_email: env::var("SPENDWATCH_ALERT_EMAIL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            debounce_ms: env::var("SPENDWATCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn debounce_quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
