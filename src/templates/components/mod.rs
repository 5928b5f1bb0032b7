use maud::{html, Markup};

pub mod weather;

pub use weather::weather_sidebar;

#[derive(Debug, Clone, Copy)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Warning => "notice notice-warning",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

pub fn notice(kind: NoticeKind, message: &str) -> Markup {
    html! {
        div class=(kind.class()) role="status" { (message) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
