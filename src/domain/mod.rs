pub mod accommodation;
pub mod pipeline;
pub mod price_band;

pub use accommodation::AccommodationRecord;
pub use pipeline::{select, AmenityMatch, Criteria, MapPoint};
pub use price_band::PriceBand;
