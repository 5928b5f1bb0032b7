pub mod finder;

pub use finder::{finder_page, FinderPage};
