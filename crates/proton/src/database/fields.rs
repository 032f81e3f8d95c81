// File: src/database/fields.rs
// Purpose: Ordered column → value pairs for INSERT, UPDATE and WHERE clauses

use crate::value::Value;

/// Column/value pairs in the order they were given
///
/// Order is preserved so that generated SQL is deterministic.
///
/// # Examples
///
/// ```
/// use proton::database::Fields;
///
/// let fields = Fields::new().with("name", "Alice").with("age", 30);
/// let columns: Vec<&str> = fields.columns().collect();
/// assert_eq!(columns, vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, Value)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets a column, replacing an earlier value for it in place
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(column, _)| column.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(column, value)| (column.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (column, value) in iter {
            fields.insert(column, value);
        }
        fields
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
