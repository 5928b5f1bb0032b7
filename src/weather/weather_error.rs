use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("API key not configured")]
    MissingApiKey,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider reported status {0}")]
    Status(String),
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl WeatherError {
    /// The text shown in the sidebar in place of the conditions.
    pub fn display_message(&self) -> &'static str {
        match self {
            WeatherError::MissingApiKey => "Weather API key not configured",
            WeatherError::Status(_) => "Weather data not available",
            WeatherError::Network(_) | WeatherError::UnexpectedShape(_) => "Failed to fetch data",
        }
    }
}
