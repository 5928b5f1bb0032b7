// src/domain/price_band.rs

/// The three fixed, non-overlapping price buckets offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBand {
    /// `[0, 3000]`
    #[default]
    Budget,
    /// `[3001, 6000]`
    Mid,
    /// `(6000, ∞)`
    Premium,
}

impl PriceBand {
    pub const ALL: [PriceBand; 3] = [PriceBand::Budget, PriceBand::Mid, PriceBand::Premium];

    /// Whether a (possibly missing) price falls inside this band.
    /// A missing price belongs to no band.
    pub fn contains(self, price: Option<f64>) -> bool {
        let Some(price) = price else {
            return false;
        };
        match self {
            PriceBand::Budget => (0.0..=3000.0).contains(&price),
            PriceBand::Mid => (3001.0..=6000.0).contains(&price),
            PriceBand::Premium => price > 6000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBand::Budget => "₹0 - ₹3000",
            PriceBand::Mid => "₹3001 - ₹6000",
            PriceBand::Premium => "₹6001 and above",
        }
    }

    /// Value used in query strings.
    pub fn slug(self) -> &'static str {
        match self {
            PriceBand::Budget => "budget",
            PriceBand::Mid => "mid",
            PriceBand::Premium => "premium",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.slug() == slug)
    }
}
