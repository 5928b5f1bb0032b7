use crate::weather::models::CurrentWeather;

/// Weather for one city, as shown in the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub report: WeatherReport,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    Conditions {
        temperature: String,
        condition: String,
        humidity: String,
        wind_speed: String,
    },
    Unavailable(String),
}

impl WeatherSnapshot {
    pub fn unavailable(city: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            report: WeatherReport::Unavailable(message.into()),
        }
    }

    pub fn from_current(city: impl Into<String>, current: &CurrentWeather, description: &str) -> Self {
        Self {
            city: city.into(),
            report: WeatherReport::Conditions {
                temperature: format!("{}°C", current.main.temp),
                condition: capitalize(description),
                humidity: format!("{}%", current.main.humidity),
                wind_speed: format!("{} m/s", current.wind.speed),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.report, WeatherReport::Unavailable(_))
    }

    /// Key/value pairs in display order. Successful and failed lookups go
    /// through the same rendering path.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match &self.report {
            WeatherReport::Conditions {
                temperature,
                condition,
                humidity,
                wind_speed,
            } => vec![
                ("Temperature", temperature.as_str()),
                ("Condition", condition.as_str()),
                ("Humidity", humidity.as_str()),
                ("Wind Speed", wind_speed.as_str()),
            ],
            WeatherReport::Unavailable(message) => vec![("Error", message.as_str())],
        }
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_matches_sentence_case() {
        assert_eq!(capitalize("light rain"), "Light rain");
        assert_eq!(capitalize("OVERCAST Clouds"), "Overcast clouds");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn error_snapshot_has_single_field() {
        let snap = WeatherSnapshot::unavailable("Munnar", "Failed to fetch data");
        assert!(snap.is_error());
        assert_eq!(snap.fields(), vec![("Error", "Failed to fetch data")]);
    }
}
