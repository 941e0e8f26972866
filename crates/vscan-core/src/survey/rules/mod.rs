//! Rules shared by every parsing strategy.

pub mod dates;
pub mod names;
pub mod patterns;

pub use dates::{find_dates, parse_date, DATE_FORMATS};
pub use names::{clean_name, is_meaningful, strip_markers};
