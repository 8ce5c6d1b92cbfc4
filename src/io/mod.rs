pub mod csv;

pub use self::csv::{load, read_csv, read_csv_from_reader, write_csv};
