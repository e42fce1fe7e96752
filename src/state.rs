use std::sync::Arc;

use chrono::Local;
use tracing::{debug, warn};

use crate::cache::AnalysisCache;
use crate::config::Config;
use crate::date_utils::Period;
use crate::db::DbPool;
use crate::services::analysis;
use crate::services::debounce::Debouncer;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<Config>,
    pub cache: Arc<AnalysisCache>,
    pub debouncer: Debouncer,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        let debouncer = Debouncer::new(config.debounce_quiet_period());
        Self {
            db,
            config: Arc::new(config),
            cache: Arc::new(AnalysisCache::new()),
            debouncer,
        }
    }

    /// Queue a background re-analysis of the current month. Bursts of
    /// writes collapse into one run after the quiet period.
    pub fn schedule_analysis_refresh(&self) {
        let db = self.db.clone();
        let config = self.config.clone();
        let cache = self.cache.clone();

        self.debouncer.trigger(async move {
            let today = Local::now().date_naive();
            let period = Period::containing(today);

            let conn = match db.get() {
                Ok(conn) => conn,
                Err(e) => {
                    warn!("Skipping background analysis: {}", e);
                    return;
                }
            };

            match analysis::run_analysis(&conn, &config, period, today) {
                Ok(outcome) => {
                    debug!(period = %period, "Refreshed analysis");
                    cache.set(outcome);
                }
                Err(e) => warn!("Background analysis failed: {}", e),
            }
        });
    }
}
