//! Reverse URL construction
//!
//! Pure helpers used by [`Registry::build_url`](crate::Registry::build_url).

/// How the scheme of a generated URL is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpsMode {
    /// Mirror the transport of the inbound request
    #[default]
    Auto,
    /// Always `https`
    On,
    /// Always `http`
    Off,
}

impl HttpsMode {
    /// Parses the string form: `"auto"`, `"on"`, anything else is off.
    ///
    /// # Examples
    ///
    /// ```
    /// use proton_router::HttpsMode;
    ///
    /// assert_eq!(HttpsMode::parse("auto"), HttpsMode::Auto);
    /// assert_eq!(HttpsMode::parse("on"), HttpsMode::On);
    /// assert_eq!(HttpsMode::parse("yes"), HttpsMode::Off);
    /// ```
    pub fn parse(mode: &str) -> Self {
        match mode {
            "auto" => HttpsMode::Auto,
            "on" => HttpsMode::On,
            _ => HttpsMode::Off,
        }
    }

    /// Resolves the scheme given whether the inbound request used TLS
    pub fn scheme(self, inbound_https: bool) -> &'static str {
        match self {
            HttpsMode::On => "https",
            HttpsMode::Off => "http",
            HttpsMode::Auto if inbound_https => "https",
            HttpsMode::Auto => "http",
        }
    }
}

impl From<&str> for HttpsMode {
    fn from(mode: &str) -> Self {
        HttpsMode::parse(mode)
    }
}

/// Transport and host of the request currently being served
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOrigin {
    pub https: bool,
    pub host: Option<String>,
}

impl RequestOrigin {
    pub fn new(https: bool, host: impl Into<String>) -> Self {
        Self {
            https,
            host: Some(host.into()),
        }
    }

    pub fn http(host: impl Into<String>) -> Self {
        Self::new(false, host)
    }

    pub fn https(host: impl Into<String>) -> Self {
        Self::new(true, host)
    }
}

/// Joins scheme, host and uri as `scheme://host/uri`
pub fn compose_url(scheme: &str, host: &str, uri: &str) -> String {
    format!("{}://{}/{}", scheme, host, uri)
}
