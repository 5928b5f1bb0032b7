use crate::background::BackgroundImage;
use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::router::handle;
use crate::state::AppState;
use crate::weather::WeatherClient;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod background;
mod config;
mod dataset;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;
mod view;
mod weather;

#[cfg(test)]
mod tests;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stay_finder=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() {
    // .env is optional; real environment variables win.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 1️⃣ Load the dataset once; the tool is useless without it.
    let dataset = match Dataset::load(&config.dataset_path) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!("failed to load dataset: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Weather client and background image are optional extras.
    let weather = match WeatherClient::new(
        config.weather_url.clone(),
        config.weather_api_key.clone(),
        config.weather_timeout,
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to build weather client: {e}");
            std::process::exit(1);
        }
    };
    if config.weather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; the weather sidebar will show errors");
    }
    let background = BackgroundImage::load(&config.background_path);

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let app = AppState {
        config,
        dataset,
        weather: Box::new(weather),
        background,
    };

    tracing::info!("Starting server at http://{addr}");

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly.");
}
