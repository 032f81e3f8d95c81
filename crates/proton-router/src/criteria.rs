//! Lookup criteria for [`Registry::fetch`](crate::Registry::fetch)
//!
//! Every criterion has to hold for a route to match (conjunctive match).

use std::fmt;

use crate::method::Method;
use crate::route::Route;

/// Ordered key/value pairs a route must satisfy
///
/// # Examples
///
/// ```
/// use proton_router::{Criteria, Method};
///
/// let criteria = Criteria::new().method(Method::Post).uri("login");
/// assert_eq!(criteria.len(), 2);
/// assert_eq!(criteria.to_string(), "method=POST, uri=login");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    entries: Vec<(String, String)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion; a repeated key replaces the earlier value in place
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn method(self, method: Method) -> Self {
        self.with("method", method.as_str())
    }

    pub fn uri(self, uri: impl Into<String>) -> Self {
        self.with("uri", uri)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.with("name", name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if every criterion is present on `route` and holds,
    /// by equality for scalar attributes or membership for sets.
    pub fn is_satisfied_by<A>(&self, route: &Route<A>) -> bool {
        self.iter().all(|(key, wanted)| {
            route
                .attribute(key)
                .is_some_and(|attribute| attribute.matches(wanted))
        })
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Criteria
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Criteria
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Criteria::new(), |criteria, (k, v)| criteria.with(k, v))
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
