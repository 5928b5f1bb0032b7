use crate::weather::WeatherSnapshot;
use maud::{html, Markup};

/// Renders whatever fields each snapshot carries, so an error entry and a
/// full report share the same markup.
pub fn weather_sidebar(snapshots: &[WeatherSnapshot]) -> Markup {
    html! {
        aside class="sidebar" {
            h2 { "🌦️ Real-Time Weather Updates" }
            @for snapshot in snapshots {
                section class=(if snapshot.is_error() { "weather-city weather-error" } else { "weather-city" }) {
                    h3 { "📍 " (snapshot.city) }
                    @for (key, value) in snapshot.fields() {
                        p { strong { (key) ":" } " " (value) }
                    }
                }
            }
        }
    }
}
