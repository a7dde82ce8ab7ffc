use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct AyurvedaConfig {
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Insert the built-in foods when the catalog starts up.
    pub seed: bool,
    /// Optional JSON file with extra foods, loaded after the built-in seed.
    pub file: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: true,
            file: None,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
