//! Typed column storage
//!
//! Cells arrive from the loader as text. [`Column::infer`] picks the narrowest
//! type every non-empty cell satisfies: `Int64`, then `Float64`, then `String`.

mod value;

pub use value::Value;

/// Identifies the storage type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int64,
    Float64,
    String,
}

/// One column of a table; all variants are row-aligned vectors
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int64(Vec<i64>),
    /// NaN marks a missing cell
    Float64(Vec<f64>),
    String(Vec<Option<String>>),
}

impl Column {
    /// Build a column from raw text cells, empty cells counting as missing
    pub fn infer<S: AsRef<str>>(cells: &[S]) -> Column {
        let trimmed: Vec<&str> = cells.iter().map(|c| c.as_ref().trim()).collect();
        let present = || trimmed.iter().filter(|c| !c.is_empty());

        let has_missing = trimmed.iter().any(|c| c.is_empty());
        let any_present = present().next().is_some();

        if any_present && !has_missing && present().all(|c| c.parse::<i64>().is_ok()) {
            let values = trimmed.iter().filter_map(|c| c.parse::<i64>().ok()).collect();
            return Column::Int64(values);
        }

        if any_present && present().all(|c| c.parse::<f64>().is_ok()) {
            let values = trimmed
                .iter()
                .map(|c| c.parse::<f64>().unwrap_or(f64::NAN))
                .collect();
            return Column::Float64(values);
        }

        if !any_present {
            // pandas reads an all-empty column as float NaN
            return Column::Float64(vec![f64::NAN; trimmed.len()]);
        }

        Column::String(
            trimmed
                .iter()
                .map(|c| if c.is_empty() { None } else { Some(c.to_string()) })
                .collect(),
        )
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Int64(_) => ColumnType::Int64,
            Column::Float64(_) => ColumnType::Float64,
            Column::String(_) => ColumnType::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Int64(v) => v.len(),
            Column::Float64(v) => v.len(),
            Column::String(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at `row`, or `None` past the end
    pub fn get(&self, row: usize) -> Option<Value> {
        match self {
            Column::Int64(v) => v.get(row).map(|x| Value::Int(*x)),
            Column::Float64(v) => v.get(row).map(|x| {
                if x.is_nan() {
                    Value::Missing
                } else {
                    Value::Float(*x)
                }
            }),
            Column::String(v) => v.get(row).map(|x| match x {
                Some(s) => Value::Str(s.clone()),
                None => Value::Missing,
            }),
        }
    }

    /// New column holding the rows at `positions`, in that order
    pub fn take(&self, positions: &[usize]) -> Column {
        match self {
            Column::Int64(v) => Column::Int64(positions.iter().map(|&i| v[i]).collect()),
            Column::Float64(v) => Column::Float64(positions.iter().map(|&i| v[i]).collect()),
            Column::String(v) => {
                Column::String(positions.iter().map(|&i| v[i].clone()).collect())
            }
        }
    }

    /// Text form of every cell; missing cells render empty
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.len())
            .map(|i| self.get(i).map(|v| v.to_string()).unwrap_or_default())
            .collect()
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Column::Int64(values)
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float64(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::String(values.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::String(values.into_iter().map(Some).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_int() {
        let col = Column::infer(&["1", "2", " 3 "]);
        assert_eq!(col, Column::Int64(vec![1, 2, 3]));
    }

    #[test]
    fn test_infer_int_with_gap_becomes_float() {
        let col = Column::infer(&["1", "", "3"]);
        assert_eq!(col.column_type(), ColumnType::Float64);
        assert_eq!(col.get(1), Some(Value::Missing));
        assert_eq!(col.get(2), Some(Value::Float(3.0)));
    }

    #[test]
    fn test_infer_float() {
        let col = Column::infer(&["72.5", "80"]);
        assert_eq!(col, Column::Float64(vec![72.5, 80.0]));
    }

    #[test]
    fn test_infer_string() {
        let col = Column::infer(&["3.28M", "", "60k"]);
        assert_eq!(col.column_type(), ColumnType::String);
        assert_eq!(col.get(0), Some(Value::Str("3.28M".to_string())));
        assert_eq!(col.get(1), Some(Value::Missing));
    }

    #[test]
    fn test_take_reorders() {
        let col = Column::from(vec!["a", "b", "c"]);
        assert_eq!(col.take(&[2, 0]), Column::from(vec!["c", "a"]));
        assert_eq!(col.get(5), None);
    }
}
