// templates/pages/finder.rs

use crate::background::BackgroundImage;
use crate::domain::{MapPoint, PriceBand};
use crate::templates::{card, desktop_layout, notice, weather_sidebar, NoticeKind};
use crate::view::{FinderVm, HotelCard, MapSection, RankingSection, NO_RESULTS};
use crate::weather::WeatherSnapshot;
use maud::{html, Markup, PreEscaped};

/// Everything around the view model that is not derived from the dataset.
pub struct FinderPage<'a> {
    pub vm: &'a FinderVm,
    pub weather: &'a [WeatherSnapshot],
    pub background: Option<&'a BackgroundImage>,
    /// Set after a manual refresh.
    pub refreshed: bool,
}

const MAP_SCRIPT: &str = r#"
window.addEventListener("load", function () {
    var el = document.getElementById("map");
    if (!el || typeof L === "undefined") { return; }
    var points = JSON.parse(el.dataset.points || "[]");
    if (points.length === 0) { return; }
    var map = L.map(el);
    L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
        attribution: "&copy; OpenStreetMap contributors"
    }).addTo(map);
    var bounds = [];
    points.forEach(function (p) {
        L.marker([p.latitude, p.longitude]).addTo(map);
        bounds.push([p.latitude, p.longitude]);
    });
    map.fitBounds(bounds, { maxZoom: 13, padding: [20, 20] });
});
"#;

pub fn finder_page(page: &FinderPage<'_>) -> Markup {
    let vm = page.vm;
    desktop_layout(
        "Smart Accommodation Finder",
        page.background,
        html! {
            div class="app" {
                (weather_sidebar(page.weather))

                main class="block-container" {
                    @if page.background.is_none() {
                        (notice(NoticeKind::Warning, "Background image not found. Please check the file path."))
                    }

                    h1 { "Smart Accommodation Finder" }

                    (filter_form(vm))

                    @if let Some(warning) = vm.date_warning {
                        (notice(NoticeKind::Warning, &format!("⚠️ {warning}")))
                    }

                    @if page.refreshed {
                        (notice(NoticeKind::Success, "✅ Results updated!"))
                    }

                    p class="result-count" {
                        "Matching hotels: " strong { (vm.result_count) }
                        @if vm.result_count > 0 {
                            " · " a href=(format!("/export?{}", vm.query)) { "Download as spreadsheet" }
                        }
                    }

                    h2 { "🗺️ Map of Filtered Hotels" }
                    (map_section(&vm.map))

                    h2 { "🏆 Top 3 Recommended Hotels" }
                    (ranking_section(&vm.ranking))
                }
            }
        },
    )
}

fn filter_form(vm: &FinderVm) -> Markup {
    let criteria = &vm.criteria;
    html! {
        // Any change resubmits the whole form, so every input change re-renders.
        form method="get" action="/" onchange="this.requestSubmit()" class="filters" {
            label for="destination" { "📍 Select Destination" }
            select name="destination" id="destination" {
                @for destination in &vm.destinations {
                    option value=(destination) selected[*destination == criteria.destination] { (destination) }
                }
            }

            fieldset {
                legend { "💰 Select Price Range" }
                @for band in PriceBand::ALL {
                    label {
                        input type="radio" name="price" value=(band.slug()) checked[band == criteria.price_band];
                        " " (band.label())
                    }
                }
            }

            fieldset {
                legend { "🛎️ Select Amenities" }
                @for amenity in &vm.amenity_options {
                    label class="amenity" {
                        input type="checkbox" name="amenity" value=(amenity)
                            checked[criteria.amenities.iter().any(|a| a == amenity)];
                        " " (amenity)
                    }
                }
            }

            label for="checkin" { "📅 Select Check-in Date" }
            input type="date" id="checkin" name="checkin" value=(vm.checkin.format("%Y-%m-%d").to_string());

            label for="checkout" { "📅 Select Check-out Date" }
            input type="date" id="checkout" name="checkout" value=(vm.checkout.format("%Y-%m-%d").to_string());

            button type="submit" formaction="/refresh" { "🔄 Refresh Results" }
        }
    }
}

fn map_section(section: &MapSection) -> Markup {
    match section {
        MapSection::CoordinatesMissing => notice(
            NoticeKind::Warning,
            "⚠️ Latitude and Longitude data not available in the dataset.",
        ),
        MapSection::NoResults => notice(NoticeKind::Warning, &format!("⚠️ {NO_RESULTS}")),
        MapSection::NoCoordinates => notice(
            NoticeKind::Info,
            "None of the matching hotels have coordinates to plot.",
        ),
        MapSection::Points(points) => map_view(points),
    }
}

fn map_view(points: &[MapPoint]) -> Markup {
    let json = serde_json::to_string(points).unwrap_or_else(|_| "[]".to_string());
    html! {
        div id="map" data-points=(json) {}
        details {
            summary { (points.len()) " location(s)" }
            ul class="map-points" {
                @for p in points {
                    li { (p.latitude) ", " (p.longitude) }
                }
            }
        }
        script { (PreEscaped(MAP_SCRIPT)) }
    }
}

fn ranking_section(section: &RankingSection) -> Markup {
    match section {
        RankingSection::SentimentMissing { available } => html! {
            (notice(NoticeKind::Error, "⚠️ 'sentiment_score' column not found in dataset."))
            p { "Available columns: " (available.join(", ")) }
        },
        RankingSection::NoResults => notice(NoticeKind::Warning, &format!("⚠️ {NO_RESULTS}")),
        RankingSection::Hotels(cards) => html! {
            @for hotel in cards {
                (hotel_card(hotel))
            }
        },
    }
}

fn hotel_card(hotel: &HotelCard) -> Markup {
    card(
        &format!("🏨 {}", hotel.name),
        html! {
            p { strong { "💰 Price:" } " ₹" (hotel.price) }
            p { strong { "⭐ Ratings:" } " " (hotel.ratings) }
            p { strong { "😊 Sentiment Score:" } " " (hotel.sentiment) }
            p { strong { "📍 Location:" } " " (hotel.destination) }
            p { strong { "🛎️ Amenities:" } " " (hotel.amenities) }
        },
    )
}
