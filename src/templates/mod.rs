pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, notice, weather_sidebar, NoticeKind};
pub use layouts::desktop::desktop_layout;
