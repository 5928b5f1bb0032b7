use crate::config::AppConfig;
use crate::dataset::loader::load_from_reader;
use crate::state::AppState;
use crate::weather::{WeatherLookup, WeatherSnapshot};
use astra::{Body, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const SAMPLE_CSV: &str = "\
Hotel Name,Destination,Price,Amenities,Ratings,sentiment_score,latitude,longitude
Snow Lodge,Manali,2500,\"WiFi, Parking\",4.2,0.8,32.24,77.19
Pine Retreat,Manali,5000,\"WiFi,Pool\",4.5,0.9,32.25,77.18
Apple Orchard Stay,Manali,2800,\"Pool Table,WiFi\",4.0,0.95,,
Ridge Palace,Manali,9000,\"Spa,Pool\",4.8,0.7,32.26,77.17
Tea Estate Inn,Darjeeling,2000,Spa,3.9,0.6,27.04,88.26
";

/// Weather source that never touches the network and counts its calls.
#[derive(Default)]
pub struct StubWeather {
    pub calls: Arc<AtomicUsize>,
}

impl WeatherLookup for StubWeather {
    fn lookup(&self, city: &str) -> WeatherSnapshot {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if city == "Atlantis" {
            WeatherSnapshot::unavailable(city, "Weather data not available")
        } else {
            WeatherSnapshot::unavailable(city, "stubbed")
        }
    }
}

/// App state over the sample dataset, no background image, no refresh delay.
pub fn test_app() -> AppState {
    test_app_with(SAMPLE_CSV, StubWeather::default())
}

pub fn test_app_with(csv: &str, weather: StubWeather) -> AppState {
    let config = AppConfig::from_vars(|key| match key {
        "FINDER_REFRESH_DELAY_MS" => Some("0".to_string()),
        "FINDER_WEATHER_CITIES" => Some("Manali,Atlantis".to_string()),
        _ => None,
    })
    .unwrap_or_else(|e| panic!("test config invalid: {e}"));

    let dataset = load_from_reader(csv.as_bytes())
        .unwrap_or_else(|e| panic!("test dataset invalid: {e}"));

    AppState {
        config,
        dataset: Arc::new(dataset),
        weather: Box::new(weather),
        background: None,
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn get(uri: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
