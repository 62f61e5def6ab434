use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

use crate::error::Error;

pub const CONFIG_FILENAME: &str = "config.json";
const AIRPORT_DATA_FILENAME: &str = "airports.dat";
const AIRPORT_DATA_URL: &str =
    "https://raw.githubusercontent.com/jpatokal/openflights/master/data/airports.dat";
const LOG_ENV: &str = "ASKCALC_LOG";

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConfigData {
    pub airport_data_path: String,
    pub airport_data_url: String,
    pub request_timeout_secs: u64,
    pub download_attempts: u32,
    pub default_seats: u32,
    pub default_frequency: u32,
    pub log_level: String,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            airport_data_path: AIRPORT_DATA_FILENAME.to_string(),
            airport_data_url: AIRPORT_DATA_URL.to_string(),
            request_timeout_secs: 30,
            download_attempts: 3,
            default_seats: 300,
            default_frequency: 7,
            log_level: "info".to_string(),
        }
    }
}

impl ConfigData {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Level from the environment if set, otherwise from the config file.
    /// Unknown names fall back to info.
    pub fn level_filter(&self) -> LevelFilter {
        std::env::var(LOG_ENV)
            .ok()
            .and_then(|level| level.parse().ok())
            .or_else(|| self.log_level.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}

pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ConfigData, Error> {
    let file = File::open(path)?;
    let mut config: ConfigData = serde_json::from_reader(file)?;
    // Zero would make every input invalid
    config.default_seats = config.default_seats.max(1);
    config.default_frequency = config.default_frequency.max(1);
    Ok(config)
}

pub fn write_config<P: AsRef<Path>>(path: P, config: &ConfigData) -> Result<(), Error> {
    serde_json::to_writer_pretty(File::create(path)?, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults() {
        let config = ConfigData::default();
        assert_eq!(config.default_seats, 300);
        assert_eq!(config.default_frequency, 7);
        assert_eq!(config.airport_data_path, "airports.dat");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{ "default_seats": 180, "log_level": "debug" }"#).unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.default_seats, 180);
        assert_eq!(config.default_frequency, 7);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.airport_data_url, AIRPORT_DATA_URL);
    }

    #[test]
    fn zero_defaults_are_raised() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{ "default_seats": 0, "default_frequency": 0 }"#).unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.default_seats, 1);
        assert_eq!(config.default_frequency, 1);
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        write_config(&path, &ConfigData::default()).unwrap();
        assert_eq!(read_config(&path).unwrap(), ConfigData::default());
    }

    #[test]
    fn malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(read_config(&path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            read_config(dir.path().join(CONFIG_FILENAME)),
            Err(Error::Io(_))
        ));
    }
}
