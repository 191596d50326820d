use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("FOODI_PORT", "5000"),
            data_dir: PathBuf::from(try_load::<String>("FOODI_DATA_DIR", ".")),
        }
    }

    pub fn restaurants_path(&self) -> PathBuf {
        self.data_dir.join("restaurants.json")
    }

    pub fn reports_path(&self) -> PathBuf {
        self.data_dir.join("reports.json")
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
