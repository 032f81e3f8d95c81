// File: src/renderer.rs
// Purpose: Variable interpolation for view files

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value as JsonValue};

/// Result of a rendering operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub html: String,
}

impl RenderResult {
    pub fn new(html: String) -> Self {
        Self { html }
    }
}

/// Replaces `{name}` and `{user.name}` with values from the view data
///
/// Unknown variables are left untouched.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    variables: Map<String, JsonValue>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer seeded with every key of a JSON object; other values are ignored
    pub fn with_data(data: &JsonValue) -> Self {
        let mut renderer = Self::new();
        if let JsonValue::Object(map) = data {
            renderer.variables = map.clone();
        }
        renderer
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<JsonValue>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn render(&self, content: &str) -> RenderResult {
        RenderResult::new(self.interpolate(content))
    }

    fn interpolate(&self, content: &str) -> String {
        static VAR_REGEX: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_\.]*)\}").expect("variable pattern is valid")
        });

        VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let name = &caps[1];
                self.lookup(name)
                    .map(display)
                    .unwrap_or_else(|| format!("{{{}}}", name))
            })
            .to_string()
    }

    fn lookup(&self, path: &str) -> Option<&JsonValue> {
        let mut parts = path.split('.');
        let mut current = self.variables.get(parts.next()?)?;
        for part in parts {
            match current {
                JsonValue::Object(map) => current = map.get(part)?,
                _ => return None,
            }
        }
        Some(current)
    }
}

fn display(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_interpolation() {
        let mut renderer = Renderer::new();
        renderer.set_var("name", "Alice");
        renderer.set_var("age", 30);
        let result = renderer.render("<p>Hello, {name}! Age: {age}</p>");
        assert_eq!(result.html, "<p>Hello, Alice! Age: 30</p>");
    }

    #[test]
    fn test_nested_value() {
        let renderer = Renderer::with_data(&json!({ "user": { "name": "Bob" } }));
        assert_eq!(renderer.render("<p>{user.name}</p>").html, "<p>Bob</p>");
    }

    #[test]
    fn test_missing_variable() {
        let renderer = Renderer::new();
        assert_eq!(renderer.render("<p>{missing}</p>").html, "<p>{missing}</p>");
        assert_eq!(renderer.render("{a.b}").html, "{a.b}");
    }

    #[test]
    fn test_null_renders_empty() {
        let renderer = Renderer::with_data(&json!({ "bio": null }));
        assert_eq!(renderer.render("[{bio}]").html, "[]");
    }
}
