//! # Proton Router
//!
//! An ordered route registry with:
//! - Registration of `GET`/`POST` routes carrying arbitrary metadata
//! - Conjunctive lookup by any attribute (`method`, `uri`, or any option)
//! - Set-valued options that match by membership (`host = ["a.com", "b.com"]`)
//! - Reverse URL generation honouring host options and HTTPS mode
//!
//! ## Matching
//!
//! Routes are scanned in registration order and the first route satisfying
//! every criterion wins. There is no index: registries are expected to hold
//! tens of routes, not thousands.
//!
//! ## Example
//!
//! ```
//! use proton_router::{Criteria, HttpsMode, Registry, RequestOrigin, RouteOptions};
//!
//! let mut routes = Registry::new();
//! routes.get("page", "show_page", RouteOptions::new().with("host", ["a.com", "b.com"]));
//!
//! let route = routes.fetch(&Criteria::new().uri("page")).unwrap();
//! assert_eq!(*route.action(), "show_page");
//!
//! let origin = RequestOrigin::http("localhost");
//! let url = routes.build_url(&Criteria::new().uri("page"), HttpsMode::On, &origin).unwrap();
//! assert_eq!(url, "https://a.com/page");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod criteria;
mod error;
mod method;
pub mod route;
pub mod url;

pub use criteria::Criteria;
pub use error::RouteError;
pub use method::Method;
pub use route::{Attribute, OptionValue, Route, RouteOptions, RESERVED_KEYS};
pub use url::{compose_url, HttpsMode, RequestOrigin};

use tracing::debug;

// ============================================================================
// Registry
// ============================================================================

/// Append-only, ordered collection of routes
///
/// `A` is the action handle stored with each route. The registry never
/// inspects it; a dispatcher calls it after [`Registry::fetch`].
#[derive(Debug, Clone)]
pub struct Registry<A> {
    routes: Vec<Route<A>>,
}

impl<A> Registry<A> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a route.
    ///
    /// `method` is normalized with [`Method::normalize`]. Options named
    /// `method`, `uri` or `action` are dropped; the route's own values win.
    pub fn register(
        &mut self,
        method: impl Into<Method>,
        uri: impl Into<String>,
        action: A,
        options: RouteOptions,
    ) {
        let (route, dropped) = Route::build(method.into(), uri, action, options);

        if !dropped.is_empty() {
            debug!(uri = route.uri(), ?dropped, "ignoring reserved route options");
        }
        debug!(method = %route.method(), uri = route.uri(), "registered route");

        self.routes.push(route);
    }

    /// Registers a `GET` route
    pub fn get(&mut self, uri: impl Into<String>, action: A, options: RouteOptions) {
        self.register(Method::Get, uri, action, options);
    }

    /// Registers a `POST` route
    pub fn post(&mut self, uri: impl Into<String>, action: A, options: RouteOptions) {
        self.register(Method::Post, uri, action, options);
    }

    /// Finds the first route, in registration order, satisfying every
    /// criterion
    ///
    /// # Examples
    ///
    /// ```
    /// use proton_router::{Criteria, Method, Registry, RouteOptions};
    ///
    /// let mut routes = Registry::new();
    /// routes.get("login", "login_form", RouteOptions::new());
    /// routes.post("login", "login_submit", RouteOptions::new());
    ///
    /// let criteria = Criteria::new().method(Method::Post).uri("login");
    /// assert_eq!(routes.fetch(&criteria).map(|r| *r.action()), Some("login_submit"));
    /// assert!(routes.fetch(&Criteria::new().uri("logout")).is_none());
    /// ```
    pub fn fetch(&self, criteria: &Criteria) -> Option<&Route<A>> {
        self.routes
            .iter()
            .find(|route| criteria.is_satisfied_by(route))
    }

    /// Like [`Registry::fetch`], but a miss is an error
    pub fn try_fetch(&self, criteria: &Criteria) -> Result<&Route<A>, RouteError> {
        self.fetch(criteria)
            .ok_or_else(|| RouteError::NotFound(criteria.to_string()))
    }

    /// Builds the absolute URL of the route matching `criteria`
    ///
    /// The host is the route's `host` option (first entry for sets), else
    /// the host of the inbound request. The scheme follows `https`.
    pub fn build_url(
        &self,
        criteria: &Criteria,
        https: HttpsMode,
        origin: &RequestOrigin,
    ) -> Result<String, RouteError> {
        let route = self.try_fetch(criteria)?;

        let host = match route.option("host") {
            Some(_) => route.host(),
            None => origin.host.as_deref(),
        }
        .ok_or_else(|| RouteError::MissingHost(route.uri().to_string()))?;

        Ok(compose_url(https.scheme(origin.https), host, route.uri()))
    }

    /// Shorthand for [`Registry::build_url`] on the `name` option
    pub fn url_for_name(
        &self,
        name: &str,
        https: HttpsMode,
        origin: &RequestOrigin,
    ) -> Result<String, RouteError> {
        self.build_url(&Criteria::new().name(name), https, origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<A>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<A> Default for Registry<A> {
    fn default() -> Self {
        Self::new()
    }
}
