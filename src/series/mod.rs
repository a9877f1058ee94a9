//! Daily price series and ingestion from the locale-formatted feed

mod data;
pub mod locale;
pub mod loader;

pub use data::{PricePoint, PriceSeries};
pub use locale::{parse_locale_date, parse_locale_number};
pub use loader::{load_series, load_series_from_reader, parse_row, parse_series};
