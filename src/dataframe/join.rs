use std::collections::HashMap;

use crate::diagnostic::{absorb, DiagnosticSink};
use crate::error::{Error, Result};
use crate::DataFrame;

/// Column holding the row identifier in Gapminder-style tables
pub const KEY_COLUMN: &str = "country";

/// Suffixes appended to overlapping non-key columns after a merge
pub const LEFT_SUFFIX: &str = "_x";
pub const RIGHT_SUFFIX: &str = "_y";

impl DataFrame {
    /// Inner join on column `on`, keeping the left table's row order.
    ///
    /// Columns present on both sides (other than `on`) are renamed with
    /// [`LEFT_SUFFIX`] and [`RIGHT_SUFFIX`].
    pub fn merge(&self, other: &DataFrame, on: &str) -> Result<DataFrame> {
        if !self.contains_column(on) {
            return Err(Error::KeyNotFound(format!(
                "join column '{}' not found in left table",
                on
            )));
        }
        if !other.contains_column(on) {
            return Err(Error::KeyNotFound(format!(
                "join column '{}' not found in right table",
                on
            )));
        }

        let left_keys = self.get_column_string_values(on)?;
        let right_keys = other.get_column_string_values(on)?;

        let mut right_rows: HashMap<&str, Vec<usize>> = HashMap::new();
        for (j, key) in right_keys.iter().enumerate() {
            right_rows.entry(key.as_str()).or_default().push(j);
        }

        let mut left_take = Vec::new();
        let mut right_take = Vec::new();
        for (i, key) in left_keys.iter().enumerate() {
            if let Some(matches) = right_rows.get(key.as_str()) {
                for &j in matches {
                    left_take.push(i);
                    right_take.push(j);
                }
            }
        }

        let mut result = DataFrame::new();
        for name in self.column_names() {
            let column = self
                .get_column(name)
                .ok_or_else(|| Error::KeyNotFound(format!("column '{}' not found", name)))?;
            let out_name = if name != on && other.contains_column(name) {
                format!("{}{}", name, LEFT_SUFFIX)
            } else {
                name.clone()
            };
            result.add_column(out_name, column.take(&left_take))?;
        }
        for name in other.column_names() {
            if name == on {
                continue;
            }
            let column = other
                .get_column(name)
                .ok_or_else(|| Error::KeyNotFound(format!("column '{}' not found", name)))?;
            let out_name = if self.contains_column(name) {
                format!("{}{}", name, RIGHT_SUFFIX)
            } else {
                name.clone()
            };
            result.add_column(out_name, column.take(&right_take))?;
        }

        log::debug!(
            "merged {} x {} rows on '{}' into {} rows",
            self.row_count(),
            other.row_count(),
            on,
            result.row_count()
        );
        Ok(result)
    }

    /// Both tables projected to `[country, <year>]` and inner-joined on country
    pub fn merge_at_year(&self, other: &DataFrame, year: i32) -> Result<DataFrame> {
        let year_col = year.to_string();
        if !self.contains_column(&year_col) || !other.contains_column(&year_col) {
            return Err(Error::KeyNotFound(format!(
                "key {} does not exist in both tables",
                year
            )));
        }

        let columns = [KEY_COLUMN, year_col.as_str()];
        let left = self.select(&columns)?;
        let right = other.select(&columns)?;
        left.merge(&right, KEY_COLUMN)
    }
}

/// Tolerant form of [`DataFrame::merge_at_year`].
///
/// Absent inputs and every failure produce one diagnostic and `None`; there
/// is no partial or outer-join fallback.
pub fn merge_at_year(
    left: Option<&DataFrame>,
    right: Option<&DataFrame>,
    year: i32,
    sink: &mut dyn DiagnosticSink,
) -> Option<DataFrame> {
    let result = match (left, right) {
        (None, _) => Err(Error::ContractViolation(
            "first argument must be a table".to_string(),
        )),
        (_, None) => Err(Error::ContractViolation(
            "second argument must be a table".to_string(),
        )),
        (Some(left), Some(right)) => left.merge_at_year(right, year),
    };
    absorb("merge_at_year", result, sink)
}
