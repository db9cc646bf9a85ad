pub mod constants;
pub mod dates;

pub use constants::*;
pub use dates::{is_iso_date, one_year_before, parse_iso_date};
