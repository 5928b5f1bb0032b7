use serde::Deserialize;

// OpenWeatherMap current weather, only the parts we render:
//
// {
//   "cod": 200,
//   "main":    { "temp": 12.3, "humidity": 81 },
//   "weather": [ { "description": "light rain" } ],
//   "wind":    { "speed": 2.1 }
// }
//
// Error bodies carry `cod` as a string ("404") plus a `message`.

#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub main: Main,
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

#[derive(Debug, Deserialize)]
pub struct Main {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Wind {
    pub speed: f64,
}
