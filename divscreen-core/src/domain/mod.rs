//! Domain types shared across the screener.

pub mod series;

pub use series::{PricePoint, PriceSeries, SeriesError};
