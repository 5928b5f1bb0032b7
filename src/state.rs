// src/state.rs
use crate::background::BackgroundImage;
use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::weather::WeatherLookup;
use std::sync::Arc;

/// Everything a request handler needs. Built once in `main` and shared by
/// every worker; nothing in here changes after startup.
pub struct AppState {
    pub config: AppConfig,
    pub dataset: Arc<Dataset>,
    pub weather: Box<dyn WeatherLookup>,
    pub background: Option<BackgroundImage>,
}
