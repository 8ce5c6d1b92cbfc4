use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::{Error, Result};

/// Row labels of a table or series
///
/// Labels are unique; lookup by label is exact-match.
#[derive(Debug, Clone)]
pub struct Index<T>
where
    T: Debug + Clone + Eq + Hash + Display,
{
    labels: Vec<T>,

    /// label -> position
    positions: HashMap<T, usize>,

    /// Column the labels were promoted from
    name: Option<String>,
}

impl<T> Index<T>
where
    T: Debug + Clone + Eq + Hash + Display,
{
    pub fn new(labels: Vec<T>) -> Result<Self> {
        Self::with_name(labels, None)
    }

    /// Fails on the first repeated label
    pub fn with_name(labels: Vec<T>, name: Option<String>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(labels.len());
        for (pos, label) in labels.iter().enumerate() {
            if positions.insert(label.clone(), pos).is_some() {
                return Err(Error::Index(format!("duplicate index label '{}'", label)));
            }
        }

        Ok(Index {
            labels,
            positions,
            name,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get_loc<Q>(&self, label: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(label).copied()
    }

    pub fn contains<Q>(&self, label: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(label)
    }

    pub fn values(&self) -> &[T] {
        &self.labels
    }

    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }
}

/// Labels taken from a text column such as `country`, or column names of a row
pub type StringIndex = Index<String>;

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> StringIndex {
        StringIndex::with_name(
            vec!["Germany".to_string(), "France".to_string()],
            Some("country".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_is_exact() {
        let idx = countries();
        assert_eq!(idx.get_loc("France"), Some(1));
        assert_eq!(idx.get_loc("germany"), None);
        assert!(idx.contains("Germany"));
        assert_eq!(idx.name().map(String::as_str), Some("country"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = StringIndex::new(vec!["Chad".to_string(), "Chad".to_string()]);
        assert!(matches!(result, Err(Error::Index(_))));
    }
}
