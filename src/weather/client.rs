// weather/client.rs
use crate::weather::models::CurrentWeather;
use crate::weather::{WeatherError, WeatherLookup, WeatherSnapshot};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Blocking OpenWeatherMap client. One request per city, no retries, no cache.
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let body: Value = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .and_then(|resp| resp.json())
            // The request URL carries the API key; keep it out of the message.
            .map_err(|e| WeatherError::Network(e.without_url().to_string()))?;

        parse_current(city, body)
    }
}

/// Turn a decoded response body into a snapshot. The `cod` field must be the
/// number 200; anything else is a provider-side failure.
pub fn parse_current(city: &str, body: Value) -> Result<WeatherSnapshot, WeatherError> {
    match body.get("cod") {
        Some(cod) if cod.as_i64() == Some(200) => {}
        Some(cod) => return Err(WeatherError::Status(cod.to_string())),
        None => return Err(WeatherError::Status("<none>".into())),
    }

    let current: CurrentWeather =
        serde_json::from_value(body).map_err(|e| WeatherError::UnexpectedShape(e.to_string()))?;

    let description = current
        .weather
        .first()
        .map(|c| c.description.clone())
        .ok_or_else(|| WeatherError::UnexpectedShape("weather list is empty".into()))?;

    Ok(WeatherSnapshot::from_current(city, &current, &description))
}

impl WeatherLookup for WeatherClient {
    fn lookup(&self, city: &str) -> WeatherSnapshot {
        match self.fetch(city) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(%city, error = %e, "weather lookup failed");
                WeatherSnapshot::unavailable(city, e.display_message())
            }
        }
    }
}
