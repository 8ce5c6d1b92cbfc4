// DataFrame implementations module
pub mod base;
pub mod join;

pub use base::DataFrame;
pub use join::{merge_at_year, KEY_COLUMN, LEFT_SUFFIX, RIGHT_SUFFIX};
