/// Value of a caller-defined route option
///
/// Options are either a single scalar (`name = "home"`) or a set of
/// scalars (`host = ["a.com", "b.com"]`). A set matches a lookup value when
/// it contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Scalar(String),
    Set(Vec<String>),
}

impl OptionValue {
    /// The scalar itself, or the first entry of a set
    pub fn first(&self) -> Option<&str> {
        match self {
            OptionValue::Scalar(value) => Some(value),
            OptionValue::Set(values) => values.first().map(String::as_str),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            OptionValue::Scalar(value) => Some(value),
            OptionValue::Set(_) => None,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Scalar(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Scalar(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::Set(values)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(values: Vec<&str>) -> Self {
        OptionValue::Set(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(values: [&str; N]) -> Self {
        OptionValue::Set(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Ordered option bag passed to [`Registry::register`](crate::Registry::register)
///
/// # Examples
///
/// ```
/// use proton_router::{OptionValue, RouteOptions};
///
/// let options = RouteOptions::new()
///     .with("name", "home")
///     .with("host", ["a.com", "b.com"]);
///
/// assert_eq!(options.len(), 2);
/// assert_eq!(options.get("name"), Some(&OptionValue::from("home")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    entries: Vec<(String, OptionValue)>,
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RouteOptions::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an option, replacing an earlier entry with the same key in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = RouteOptions::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl IntoIterator for RouteOptions {
    type Item = (String, OptionValue);
    type IntoIter = std::vec::IntoIter<(String, OptionValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
