use std::collections::HashMap;

use crate::column::{Column, Value};
use crate::error::{Error, Result};
use crate::index::StringIndex;
use crate::series::Series;

/// Column-oriented table of named, row-aligned columns
///
/// Column order is preserved. A table may carry a row index promoted from one
/// of its text columns; see [`DataFrame::set_index`].
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
    column_names: Vec<String>,
    /// name -> position in `columns`
    positions: HashMap<String, usize>,
    row_count: usize,
    index: Option<StringIndex>,
}

impl DataFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, column)` pairs in order
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut df = DataFrame::new();
        for (name, column) in columns {
            df.add_column(name.into(), column)?;
        }
        Ok(df)
    }

    pub fn add_column(&mut self, name: String, column: Column) -> Result<()> {
        if self.positions.contains_key(&name) {
            return Err(Error::Value(format!("duplicate column name '{}'", name)));
        }

        if !self.columns.is_empty() && column.len() != self.row_count {
            return Err(Error::Consistency {
                expected: self.row_count,
                found: column.len(),
            });
        }
        if let Some(index) = &self.index {
            if column.len() != index.len() {
                return Err(Error::Consistency {
                    expected: index.len(),
                    found: column.len(),
                });
            }
        }

        self.row_count = column.len();
        self.positions.insert(name.clone(), self.columns.len());
        self.column_names.push(name);
        self.columns.push(column);
        Ok(())
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.column_count())
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.positions.get(name).map(|&pos| &self.columns[pos])
    }

    pub fn index(&self) -> Option<&StringIndex> {
        self.index.as_ref()
    }

    /// Text form of every cell in `name`
    pub fn get_column_string_values(&self, name: &str) -> Result<Vec<String>> {
        self.get_column(name)
            .map(Column::to_strings)
            .ok_or_else(|| Error::KeyNotFound(format!("column '{}' not found", name)))
    }

    /// New table with only `names`, in the given order
    pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
        let mut df = DataFrame::new();
        df.index = self.index.clone();
        for name in names {
            let column = self
                .get_column(name)
                .ok_or_else(|| Error::KeyNotFound(format!("column '{}' not found", name)))?;
            df.add_column(name.to_string(), column.clone())?;
        }
        if df.columns.is_empty() {
            df.row_count = self.row_count;
        }
        Ok(df)
    }

    /// New table with rows at `positions`, in that order
    pub fn take_rows(&self, positions: &[usize]) -> Result<DataFrame> {
        if let Some(&bad) = positions.iter().find(|&&p| p >= self.row_count) {
            return Err(Error::Value(format!(
                "row {} out of bounds for {} rows",
                bad, self.row_count
            )));
        }

        let mut df = DataFrame::new();
        for (name, column) in self.column_names.iter().zip(self.columns.iter()) {
            df.add_column(name.clone(), column.take(positions))?;
        }
        if let Some(index) = &self.index {
            let labels = positions
                .iter()
                .map(|&p| index.values()[p].clone())
                .collect();
            df.index = Some(StringIndex::with_name(labels, index.name().cloned())?);
        }
        df.row_count = positions.len();
        Ok(df)
    }

    /// New table whose row index is taken from column `name`.
    ///
    /// The column leaves the data columns; `self` is left untouched.
    pub fn set_index(&self, name: &str) -> Result<DataFrame> {
        let labels = self.get_column_string_values(name)?;
        let index = StringIndex::with_name(labels, Some(name.to_string()))?;

        let mut df = DataFrame::new();
        for (col_name, column) in self.column_names.iter().zip(self.columns.iter()) {
            if col_name != name {
                df.add_column(col_name.clone(), column.clone())?;
            }
        }
        df.row_count = self.row_count;
        df.index = Some(index);
        Ok(df)
    }

    /// Row labelled `label`, as a series keyed by column name
    pub fn loc(&self, label: &str) -> Result<Series<Value>> {
        let index = self.index.as_ref().ok_or_else(|| {
            Error::ContractViolation("table has no row index; call set_index first".to_string())
        })?;
        let pos = index.get_loc(label).ok_or_else(|| {
            Error::KeyNotFound(format!("key '{}' could not be found in the table", label))
        })?;
        Ok(self.row(pos)?.with_name(label.to_string()))
    }

    /// Row at position `pos`
    pub fn row(&self, pos: usize) -> Result<Series<Value>> {
        if pos >= self.row_count {
            return Err(Error::Value(format!(
                "row {} out of bounds for {} rows",
                pos, self.row_count
            )));
        }
        let values = self
            .columns
            .iter()
            .map(|c| c.get(pos).unwrap_or(Value::Missing))
            .collect();
        Series::with_labels(values, self.column_names.clone(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn life() -> DataFrame {
        DataFrame::from_columns(vec![
            ("country", Column::from(vec!["Germany", "France"])),
            ("1990", Column::from(vec![75.4, 77.0])),
            ("2000", Column::from(vec![78.1, 79.2])),
        ])
        .unwrap()
    }

    #[test]
    fn test_shape_and_order() {
        let df = life();
        assert_eq!(df.shape(), (2, 3));
        assert_eq!(df.column_names(), &["country", "1990", "2000"]);
    }

    #[test]
    fn test_length_mismatch() {
        let mut df = life();
        let result = df.add_column("2010".into(), Column::from(vec![1.0]));
        assert!(matches!(result, Err(Error::Consistency { .. })));
    }

    #[test]
    fn test_set_index_is_pure() {
        let df = life();
        let indexed = df.set_index("country").unwrap();
        assert_eq!(df.column_count(), 3);
        assert!(df.index().is_none());
        assert_eq!(indexed.column_names(), &["1990", "2000"]);
        assert_eq!(indexed.row_count(), 2);
    }

    #[test]
    fn test_loc() {
        let indexed = life().set_index("country").unwrap();
        let row = indexed.loc("France").unwrap();
        assert_eq!(row.name().map(String::as_str), Some("France"));
        assert_eq!(row.get("2000"), Some(&Value::Float(79.2)));

        let missing = indexed.loc("Atlantis");
        assert!(matches!(missing, Err(Error::KeyNotFound(_))));
    }

    #[test]
    fn test_loc_without_index() {
        assert!(matches!(life().loc("Germany"), Err(Error::ContractViolation(_))));
    }

    #[test]
    fn test_select_and_take() {
        let df = life();
        let projected = df.select(&["2000", "country"]).unwrap();
        assert_eq!(projected.column_names(), &["2000", "country"]);
        assert!(df.select(&["1800"]).is_err());

        let taken = df.take_rows(&[1]).unwrap();
        assert_eq!(taken.row_count(), 1);
        assert_eq!(
            taken.get_column_string_values("country").unwrap(),
            vec!["France".to_string()]
        );
        assert!(df.take_rows(&[4]).is_err());
    }
}
