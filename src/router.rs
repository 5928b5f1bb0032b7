use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::spreadsheets::export_accommodations_xlsx;
use crate::state::AppState;
use crate::templates::pages::{finder_page, FinderPage};
use crate::view::{self, FinderState};
use astra::Request;
use chrono::{Local, NaiveDate};

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let state = FinderState::from_query(req.uri().query());

    match (method, path) {
        ("GET", "/") => render_finder(app, &state, false),
        ("GET", "/refresh") => {
            // Cosmetic pause; the page is recomputed exactly as for "/".
            std::thread::sleep(app.config.refresh_delay);
            tracing::info!("results refreshed");
            render_finder(app, &state, true)
        }
        ("GET", "/export") => export(app, &state),
        (_, "/" | "/refresh" | "/export") => Err(ServerError::BadRequest(format!(
            "{method} is not supported on {path}"
        ))),
        _ => Err(ServerError::NotFound),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn render_finder(app: &AppState, state: &FinderState, refreshed: bool) -> ResultResp {
    let vm = view::compute(&app.dataset, state, app.config.amenity_match, today());
    let weather = app.weather.lookup_all(&app.config.weather_cities);

    html_response(finder_page(&FinderPage {
        vm: &vm,
        weather: &weather,
        background: app.background.as_ref(),
        refreshed,
    }))
}

fn export(app: &AppState, state: &FinderState) -> ResultResp {
    let criteria = view::resolve_criteria(&app.dataset, state);
    let rows = crate::domain::pipeline::filter(app.dataset.records(), &criteria, app.config.amenity_match);

    tracing::info!(destination = %criteria.destination, rows = rows.len(), "exporting accommodations");
    export_accommodations_xlsx(&rows, &criteria.destination)
}
