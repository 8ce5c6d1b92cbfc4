use csv::{ReaderBuilder, StringRecord, Writer};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::column::Column;
use crate::diagnostic::{absorb, DiagnosticSink};
use crate::error::{Error, Result};
use crate::DataFrame;

/// Read a comma-delimited file whose first row names the columns.
///
/// Column order follows the header. Column types are inferred per column,
/// see [`Column::infer`].
pub fn read_csv<P: AsRef<OsStr>>(path: P) -> Result<DataFrame> {
    let path = path
        .as_ref()
        .to_str()
        .ok_or_else(|| Error::ContractViolation("argument must be a string".to_string()))?;

    let file = File::open(Path::new(path)).map_err(|e| open_error(path, e))?;
    let df = read_csv_from_reader(file)?;
    log::debug!(
        "loaded '{}' with {} rows and {} columns",
        path,
        df.row_count(),
        df.column_count()
    );
    Ok(df)
}

/// Same as [`read_csv`] for any reader
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(Error::Value("No columns to parse from file".to_string())),
    };
    let headers = dedupe_headers(&header);
    let width = headers.len();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); width];
    for result in records {
        let record = result?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(Error::Parse(format!(
                "Error tokenizing data. Expected {} fields in line {}, saw {}",
                width,
                line,
                record.len()
            )));
        }
        for (i, column) in cells.iter_mut().enumerate() {
            // short rows are padded with missing cells
            column.push(record.get(i).unwrap_or("").to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells.iter())
        .map(|(name, raw)| (name, Column::infer(raw)));
    DataFrame::from_columns(columns)
}

/// Tolerant loader: the table, or `None` after exactly one diagnostic.
///
/// A path that is not valid UTF-8 text is reported as a contract violation.
pub fn load<P: AsRef<OsStr>>(path: P, sink: &mut dyn DiagnosticSink) -> Option<DataFrame> {
    absorb("load", read_csv(path), sink)
}

/// Write a table as comma-delimited text with a header row
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(df.column_names())?;

    let columns = df
        .column_names()
        .iter()
        .map(|name| df.get_column_string_values(name))
        .collect::<Result<Vec<_>>>()?;

    for i in 0..df.row_count() {
        wtr.write_record(columns.iter().map(|c| c[i].as_str()))?;
    }

    wtr.flush()?;
    Ok(())
}

fn open_error(path: &str, err: std::io::Error) -> Error {
    match err.kind() {
        std::io::ErrorKind::NotFound => Error::PathNotFound(path.to_string()),
        std::io::ErrorKind::PermissionDenied => {
            Error::PermissionDenied(format!("permission denied: '{}'", path))
        }
        _ => Error::Unexpected(format!("{}: {}", path, err)),
    }
}

/// Header names as written, with blanks named `Unnamed: <i>` and repeats
/// suffixed `.1`, `.2`, ...
fn dedupe_headers(header: &StringRecord) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (i, raw) in header.iter().enumerate() {
        let base = if raw.trim().is_empty() {
            format!("Unnamed: {}", i)
        } else {
            raw.to_string()
        };

        let mut name = base.clone();
        let mut n = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, n);
            n += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}
