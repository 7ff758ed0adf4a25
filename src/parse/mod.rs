mod blocks;
mod error;
mod section;
mod week;

pub use blocks::{sections, Section};
pub use error::Error;
pub use section::{extract_section, WeekdayLabels};
