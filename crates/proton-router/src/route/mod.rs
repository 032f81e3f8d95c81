//! Route records and their option bags
//!
//! A route is built once by the registry and never mutated afterwards:
//! fields are private and only exposed through accessors.

pub mod option;

use std::collections::HashMap;

use crate::method::Method;

pub use option::{OptionValue, RouteOptions};

/// Keys owned by the route itself. Options using these names are dropped.
pub const RESERVED_KEYS: [&str; 3] = ["method", "uri", "action"];

/// Returns true if `key` names one of the route's own fields
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Borrowed view of a single route attribute, as seen by lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute<'a> {
    Scalar(&'a str),
    Set(&'a [String]),
}

impl Attribute<'_> {
    /// Equality for scalars, membership for sets
    pub fn matches(&self, wanted: &str) -> bool {
        match self {
            Attribute::Scalar(value) => *value == wanted,
            Attribute::Set(values) => values.iter().any(|value| value == wanted),
        }
    }
}

impl<'a> From<&'a OptionValue> for Attribute<'a> {
    fn from(value: &'a OptionValue) -> Self {
        match value {
            OptionValue::Scalar(value) => Attribute::Scalar(value),
            OptionValue::Set(values) => Attribute::Set(values),
        }
    }
}

/// A registered route: method, uri, action handle and caller metadata
#[derive(Debug, Clone)]
pub struct Route<A> {
    method: Method,
    uri: String,
    action: A,
    options: HashMap<String, OptionValue>,
}

impl<A> Route<A> {
    /// Builds a route, merging every non-reserved option.
    ///
    /// Returns the route together with the reserved keys that were dropped,
    /// so the caller can report them.
    pub(crate) fn build(
        method: Method,
        uri: impl Into<String>,
        action: A,
        options: RouteOptions,
    ) -> (Self, Vec<String>) {
        let (kept, dropped): (Vec<_>, Vec<_>) =
            options.into_iter().partition(|(key, _)| !is_reserved(key));

        let route = Route {
            method,
            uri: uri.into(),
            action,
            options: kept.into_iter().collect(),
        };
        let dropped = dropped.into_iter().map(|(key, _)| key).collect();
        (route, dropped)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// URI without a leading slash, e.g. `page` or `users/list`
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    /// A caller-defined option
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    pub fn options(&self) -> &HashMap<String, OptionValue> {
        &self.options
    }

    /// The `name` option, when it is a scalar
    pub fn name(&self) -> Option<&str> {
        self.option("name").and_then(OptionValue::as_scalar)
    }

    /// The `host` option: the scalar, or the first entry of a set
    pub fn host(&self) -> Option<&str> {
        self.option("host").and_then(OptionValue::first)
    }

    /// Looks up any attribute by key, reserved or not.
    ///
    /// `action` is opaque and never exposed as an attribute.
    pub fn attribute(&self, key: &str) -> Option<Attribute<'_>> {
        match key {
            "method" => Some(Attribute::Scalar(self.method.as_str())),
            "uri" => Some(Attribute::Scalar(&self.uri)),
            "action" => None,
            _ => self.options.get(key).map(Attribute::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys() {
        assert!(is_reserved("method"));
        assert!(is_reserved("uri"));
        assert!(is_reserved("action"));
        assert!(!is_reserved("host"));
    }

    #[test]
    fn test_build_drops_reserved_options() {
        let options = RouteOptions::new()
            .with("uri", "other")
            .with("name", "home")
            .with("method", "POST");

        let (route, dropped) = Route::build(Method::Get, "page", (), options);

        assert_eq!(route.uri(), "page");
        assert_eq!(route.method(), Method::Get);
        assert_eq!(route.name(), Some("home"));
        assert_eq!(route.options().len(), 1);
        assert_eq!(dropped, vec!["uri".to_string(), "method".to_string()]);
    }

    #[test]
    fn test_attribute_lookup() {
        let options = RouteOptions::new().with("host", ["a.com", "b.com"]);
        let (route, _) = Route::build(Method::Post, "submit", "handler", options);

        assert_eq!(route.attribute("method"), Some(Attribute::Scalar("POST")));
        assert_eq!(route.attribute("uri"), Some(Attribute::Scalar("submit")));
        assert_eq!(route.attribute("action"), None);
        assert_eq!(route.attribute("missing"), None);
        assert!(route.attribute("host").is_some_and(|a| a.matches("b.com")));
        assert_eq!(route.host(), Some("a.com"));
    }

    #[test]
    fn test_attribute_matching() {
        assert!(Attribute::Scalar("home").matches("home"));
        assert!(!Attribute::Scalar("home").matches("Home"));

        let hosts = vec!["a.com".to_string(), "b.com".to_string()];
        assert!(Attribute::Set(&hosts).matches("b.com"));
        assert!(!Attribute::Set(&hosts).matches("c.com"));
        assert!(!Attribute::Set(&[]).matches(""));
    }
}
