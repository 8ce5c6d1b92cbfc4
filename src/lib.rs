//! Tolerant loading and charting of Gapminder-style indicator tables
//!
//! Tables are read from comma-delimited files whose first row names the
//! columns and whose `country` column identifies each row. Cells may hold
//! plain numbers or magnitude strings such as `"83.8M"`.
//!
//! Strict APIs return [`Result`]. The tolerant boundaries ([`io::load`],
//! [`dataframe::merge_at_year`] and the [`projections`] steps) never fail:
//! they report one [`Diagnostic`] and return `None`.

pub mod column;
pub mod config;
pub mod dataframe;
pub mod diagnostic;
pub mod error;
pub mod index;
pub mod io;
pub mod logging;
pub mod magnitude;
pub mod projections;
pub mod series;
pub mod vis;

// Re-export commonly used types
pub use column::{Column, ColumnType, Value};
pub use config::PlotsConfig;
pub use dataframe::DataFrame;
pub use diagnostic::{Diagnostic, DiagnosticSink, StderrSink};
pub use error::{Error, ErrorKind, Result};
pub use index::Index;
pub use io::{load, read_csv, write_csv};
pub use magnitude::{parse_magnitude, parse_magnitude_legacy, Magnitude};
pub use series::Series;
pub use vis::{Chart, TickFormat};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
