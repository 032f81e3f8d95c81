// File: src/request_context.rs
// Purpose: Inbound request facts needed for route lookup and URL building

use axum::http::{HeaderMap, Method, Uri};
use proton_router::{Criteria, RequestOrigin};

/// The parts of an inbound request the framework core reads
///
/// Built explicitly by the dispatcher; nothing is read from ambient state.
#[derive(Clone)]
pub struct RequestContext {
    /// HTTP method as received
    pub method: Method,

    /// Request path, with its leading slash
    pub path: String,

    /// Whether the request arrived over TLS
    pub https: bool,

    /// Host the client addressed, from the `Host` header or the URI
    pub host: Option<String>,

    /// Request headers
    pub headers: HeaderMap,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("https", &self.https)
            .field("host", &self.host)
            .finish()
    }
}

impl RequestContext {
    /// Create a new request context
    ///
    /// TLS is detected from an `https` URI scheme or from
    /// `X-Forwarded-Proto: https` set by a terminating proxy.
    pub fn new(method: Method, uri: &Uri, headers: HeaderMap) -> Self {
        let forwarded_https = headers
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"));
        let https = uri.scheme_str() == Some("https") || forwarded_https;

        let host = headers
            .get("host")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .or_else(|| uri.authority().map(|authority| authority.to_string()));

        Self {
            method,
            path: uri.path().to_string(),
            https,
            host,
            headers,
        }
    }

    /// Get a header value
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// The request method as the router sees it (`GET` unless `POST`)
    pub fn route_method(&self) -> proton_router::Method {
        proton_router::Method::normalize(self.method.as_str())
    }

    /// Path without the leading slash, as routes are registered
    pub fn route_uri(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    /// Criteria selecting the route for this request: method and uri
    pub fn criteria(&self) -> Criteria {
        Criteria::new()
            .method(self.route_method())
            .uri(self.route_uri())
    }

    /// Transport and host for reverse URL building
    pub fn origin(&self) -> RequestOrigin {
        RequestOrigin {
            https: self.https,
            host: self.host.clone(),
        }
    }

    /// Like [`RequestContext::origin`], using `fallback`'s host when the
    /// request carried none
    pub fn origin_or(&self, fallback: &RequestOrigin) -> RequestOrigin {
        RequestOrigin {
            https: self.https,
            host: self.host.clone().or_else(|| fallback.host.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_plain_http_request() {
        let uri: Uri = "/users/list?page=2".parse().unwrap();
        let ctx = RequestContext::new(Method::GET, &uri, headers(&[("host", "example.com")]));

        assert!(!ctx.https);
        assert_eq!(ctx.host.as_deref(), Some("example.com"));
        assert_eq!(ctx.route_uri(), "users/list");
        assert_eq!(ctx.criteria().to_string(), "method=GET, uri=users/list");
    }

    #[test]
    fn test_https_from_scheme_and_forwarded_proto() {
        let absolute: Uri = "https://secure.example.com/login".parse().unwrap();
        let ctx = RequestContext::new(Method::POST, &absolute, HeaderMap::new());
        assert!(ctx.https);
        assert_eq!(ctx.host.as_deref(), Some("secure.example.com"));
        assert_eq!(ctx.route_method(), proton_router::Method::Post);

        let relative: Uri = "/login".parse().unwrap();
        let proxied = RequestContext::new(
            Method::GET,
            &relative,
            headers(&[("host", "example.com"), ("x-forwarded-proto", "HTTPS")]),
        );
        assert!(proxied.https);
    }

    #[test]
    fn test_unroutable_methods_map_to_get() {
        let uri: Uri = "/".parse().unwrap();
        let ctx = RequestContext::new(Method::DELETE, &uri, HeaderMap::new());
        assert_eq!(ctx.route_method(), proton_router::Method::Get);
        assert_eq!(ctx.route_uri(), "");
    }

    #[test]
    fn test_origin_fallback() {
        let uri: Uri = "/about".parse().unwrap();
        let ctx = RequestContext::new(Method::GET, &uri, HeaderMap::new());
        assert_eq!(ctx.origin().host, None);

        let fallback = RequestOrigin::http("127.0.0.1:3000");
        assert_eq!(ctx.origin_or(&fallback).host.as_deref(), Some("127.0.0.1:3000"));
        assert_eq!(ctx.get_header("host"), None);
    }
}
