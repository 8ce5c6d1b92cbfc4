use std::fmt::Debug;

use crate::column::Value;
use crate::error::{Error, Result};
use crate::index::StringIndex;

/// One-dimensional labelled sequence: a table row or a single column
#[derive(Debug, Clone)]
pub struct Series<T>
where
    T: Debug + Clone,
{
    values: Vec<T>,

    /// One label per value
    index: StringIndex,

    name: Option<String>,
}

impl<T> Series<T>
where
    T: Debug + Clone,
{
    /// Series with positional labels `"0"`, `"1"`, ...
    pub fn new(values: Vec<T>, name: Option<String>) -> Result<Self> {
        let labels = (0..values.len()).map(|i| i.to_string()).collect();
        Self::with_labels(values, labels, name)
    }

    pub fn with_labels(values: Vec<T>, labels: Vec<String>, name: Option<String>) -> Result<Self> {
        if values.len() != labels.len() {
            return Err(Error::Consistency {
                expected: values.len(),
                found: labels.len(),
            });
        }

        Ok(Series {
            values,
            index: StringIndex::new(labels)?,
            name,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        self.index.values()
    }

    pub fn index(&self) -> &StringIndex {
        &self.index
    }

    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// Value stored under `label`
    pub fn get(&self, label: &str) -> Option<&T> {
        self.index
            .get_loc(label)
            .and_then(|pos| self.values.get(pos))
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Apply a fallible conversion to every value, keeping labels and name
    pub fn try_map<U, F>(&self, f: F) -> Result<Series<U>>
    where
        U: Debug + Clone,
        F: Fn(&T) -> Result<U>,
    {
        let values = self.values.iter().map(f).collect::<Result<Vec<U>>>()?;
        Ok(Series {
            values,
            index: self.index.clone(),
            name: self.name.clone(),
        })
    }
}

impl Series<Value> {
    /// Numeric series with `k`/`M` suffixes expanded
    pub fn to_magnitudes(&self) -> Result<Series<f64>> {
        self.try_map(Value::to_f64_magnitude)
    }

    /// Numeric series from cells that are already numbers
    pub fn to_numeric(&self) -> Result<Series<f64>> {
        self.try_map(|v| match v {
            Value::Missing => Ok(f64::NAN),
            other => other
                .as_f64()
                .ok_or_else(|| Error::Value(format!("non-numeric value '{}'", other))),
        })
    }
}

impl Series<f64> {
    /// Largest non-NaN value
    pub fn max(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// `(label, value)` pairs with numeric labels, skipping missing values.
    ///
    /// Year columns are the usual labels, so every label must parse as a number.
    pub fn points(&self) -> Result<Vec<(f64, f64)>> {
        let mut points = Vec::with_capacity(self.len());
        for (label, value) in self.labels().iter().zip(self.values.iter()) {
            let x = label
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::Value(format!("label '{}' is not numeric", label)))?;
            if !value.is_nan() {
                points.push((x, *value));
            }
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Series<Value> {
        Series::with_labels(
            vec![
                Value::Str("1.2M".into()),
                Value::Str("300k".into()),
                Value::Missing,
            ],
            vec!["1990".into(), "2000".into(), "2010".into()],
            Some("Germany".into()),
        )
        .unwrap()
    }

    #[test]
    fn test_label_lookup() {
        let s = row();
        assert_eq!(s.get("2000"), Some(&Value::Str("300k".into())));
        assert_eq!(s.get("1800"), None);
    }

    #[test]
    fn test_to_magnitudes_and_points() {
        let numeric = row().to_magnitudes().unwrap();
        assert_eq!(numeric.name().map(String::as_str), Some("Germany"));
        assert_eq!(numeric.max(), Some(1_200_000.0));
        let points = numeric.points().unwrap();
        assert_eq!(points, vec![(1990.0, 1_200_000.0), (2000.0, 300_000.0)]);
    }

    #[test]
    fn test_label_length_mismatch() {
        let result = Series::with_labels(vec![1.0], vec![], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_points_reject_text_labels() {
        let s = Series::with_labels(vec![1.0], vec!["year".into()], None).unwrap();
        assert!(s.points().is_err());
    }

    #[test]
    fn test_max_of_empty() {
        let s: Series<f64> = Series::new(vec![], None).unwrap();
        assert_eq!(s.max(), None);
    }
}
