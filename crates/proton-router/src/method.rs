/// HTTP method a route answers to
///
/// Only `GET` and `POST` are routable. Anything else given to
/// [`Method::normalize`] falls back to `GET`.
///
/// # Examples
///
/// ```
/// use proton_router::Method;
///
/// assert_eq!(Method::normalize("POST"), Method::Post);
/// assert_eq!(Method::normalize("DELETE"), Method::Get);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    /// Maps a method name onto a routable method.
    ///
    /// The comparison is exact: `"post"` is not `POST` and becomes `GET`.
    pub fn normalize(method: &str) -> Self {
        match method {
            "POST" => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Method {
    fn from(method: &str) -> Self {
        Method::normalize(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_methods() {
        assert_eq!(Method::normalize("GET"), Method::Get);
        assert_eq!(Method::normalize("POST"), Method::Post);
    }

    #[test]
    fn test_normalize_falls_back_to_get() {
        assert_eq!(Method::normalize("PUT"), Method::Get);
        assert_eq!(Method::normalize(""), Method::Get);
        assert_eq!(Method::normalize("post"), Method::Get);
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Get.as_str(), "GET");
    }
}
