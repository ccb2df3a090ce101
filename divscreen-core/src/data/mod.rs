//! Market data providers.

pub mod provider;
pub mod yahoo;

pub use provider::{DataError, PriceProvider};
pub use yahoo::YahooProvider;
