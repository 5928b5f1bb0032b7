use crate::background::BackgroundImage;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, test_app_with, StubWeather, SAMPLE_CSV};
use std::sync::atomic::Ordering;

#[test]
fn finder_page_loads_with_defaults() {
    let app = test_app();

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Smart Accommodation Finder"));
    // Manali, budget band: Apple Orchard Stay ranks above Snow Lodge.
    let apple = body.find("Apple Orchard Stay").expect("ranked hotel missing");
    let lodge = body.find("🏨 Snow Lodge").expect("ranked hotel missing");
    assert!(apple < lodge);
    assert!(!body.contains("Pine Retreat"));
    assert!(body.contains("Background image not found"));
}

#[test]
fn filters_follow_the_query_string() {
    let app = test_app();

    let body = body_string(handle(get("/?destination=Manali&price=mid"), &app).unwrap());
    assert!(body.contains("Pine Retreat"));
    assert!(!body.contains("🏨 Snow Lodge"));

    let body = body_string(handle(get("/?destination=Manali&price=premium"), &app).unwrap());
    assert!(body.contains("Ridge Palace"));
}

#[test]
fn amenity_tokens_do_not_match_longer_phrases() {
    let app = test_app();

    let body = body_string(handle(get("/?destination=Manali&price=budget&amenity=Pool"), &app).unwrap());
    assert!(!body.contains("🏨 Apple Orchard Stay"));
    assert!(body.contains("No hotels found for this destination and criteria"));
}

#[test]
fn sidebar_renders_every_city_including_errors() {
    let weather = StubWeather::default();
    let calls = weather.calls.clone();
    let app = test_app_with(SAMPLE_CSV, weather);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("📍 Manali"));
    assert!(body.contains("📍 Atlantis"));
    assert!(body.contains("Weather data not available"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // No caching: the next render asks again.
    handle(get("/"), &app).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn bad_date_order_warns_without_blocking() {
    let app = test_app();

    let body = body_string(
        handle(get("/?destination=Manali&checkin=2026-05-03&checkout=2026-05-01"), &app).unwrap(),
    );
    assert!(body.contains("Check-out date must be after the Check-in date."));
    assert!(body.contains("Apple Orchard Stay"));

    let body = body_string(
        handle(get("/?destination=Manali&checkin=2026-05-01&checkout=2026-05-03"), &app).unwrap(),
    );
    assert!(!body.contains("Check-out date must be after the Check-in date."));
}

#[test]
fn refresh_reports_success_and_keeps_results() {
    let app = test_app();

    let resp = handle(get("/refresh?destination=Darjeeling&price=budget"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Results updated!"));
    assert!(body.contains("Tea Estate Inn"));
}

#[test]
fn missing_optional_columns_show_section_messages() {
    let app = test_app_with(
        "Hotel Name,Destination,Price,Amenities,Ratings\nBeach Hut,Goa,1500,WiFi,4.1\n",
        StubWeather::default(),
    );

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("Latitude and Longitude data not available in the dataset."));
    assert!(body.contains("column not found in dataset."));
    assert!(body.contains("Available columns: Hotel Name, Destination, Price, Amenities, Ratings"));
}

#[test]
fn background_is_embedded_by_content() {
    let mut app = test_app();
    app.background = Some(BackgroundImage::from_bytes("image/avif", b"abc"));

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("data:image/avif;base64,YWJj"));
    assert!(!body.contains("Background image not found"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    let result = handle(get("/admin"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn only_get_is_accepted() {
    let app = test_app();
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .body(astra::Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}
