use crate::background::BackgroundImage;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; }
.app { display: flex; min-height: 100vh; }
.sidebar { width: 260px; padding: 1.5rem; background: rgba(255, 255, 255, 0.92); }
.block-container { flex: 1; margin: 1.5rem; padding: 20px; border-radius: 10px; }
.card { border: 1px solid #ddd; border-radius: 8px; padding: 0.75rem 1rem; margin-bottom: 1rem; }
.notice { padding: 0.6rem 1rem; border-radius: 6px; margin: 0.5rem 0; }
.notice-warning { background: #fff4d6; color: #7a5200; }
.notice-error { background: #fde2e2; color: #8a1c1c; }
.notice-success { background: #dcf5e3; color: #1d6b36; }
.notice-info { background: #e2eefc; color: #1d4b8a; }
#map { height: 360px; border-radius: 8px; margin-bottom: 0.5rem; }
fieldset { border: none; padding: 0; margin: 0.75rem 0; }
"#;

fn background_css(image: &BackgroundImage) -> String {
    format!(
        r#"
.stay-finder {{
    background-image: url("{url}");
    background-size: cover;
    background-position: center;
    background-repeat: no-repeat;
}}
.block-container {{
    background: rgba(0, 0, 0, 0.6);
    color: white;
}}
"#,
        url = image.data_url()
    )
}

pub fn desktop_layout(title: &str, background: Option<&BackgroundImage>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" defer {}
                style { (PreEscaped(BASE_CSS)) }
                @if let Some(image) = background {
                    style { (PreEscaped(background_css(image))) }
                }
            }
            body class="stay-finder" {
                (content)
            }
        }
    }
}
