//! Presentational components. Each takes only the slice of course data
//! it displays.

mod header;
mod part;
mod total;

pub use header::header;
pub use part::part;
pub use total::total;
