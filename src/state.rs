use std::sync::Arc;

use tracing::{info, warn};

use crate::{config::Config, reports::ReportLog, seed::SEED_RESTAURANTS, store::RestaurantStore};

pub struct AppState {
    pub config: Config,
    pub store: RestaurantStore,
    pub reports: ReportLog,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let store = RestaurantStore::open(config.restaurants_path());

        match store.seed(SEED_RESTAURANTS) {
            Ok(added) if added > 0 => info!("Seeded {added} restaurants"),
            Ok(_) => {}
            Err(e) => warn!("Failed to persist seed data: {e}"),
        }

        // Old snapshots may predate synonym table additions.
        match store.normalize_types() {
            Ok(changed) if changed > 0 => info!("Renormalized cuisine type on {changed} rows"),
            Ok(_) => {}
            Err(e) => warn!("Failed to persist renormalized types: {e}"),
        }

        let reports = ReportLog::new(config.reports_path());

        Arc::new(Self {
            config,
            store,
            reports,
        })
    }
}
