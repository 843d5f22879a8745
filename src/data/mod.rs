//! Loading and cleaning of the schools dataset

pub mod cleaning;
pub mod loader;

pub use cleaning::{calculate_total_sat, clean_data, get_math_threshold};
pub use loader::{RawRow, RawTable, load_delimited, load_schools_data};
