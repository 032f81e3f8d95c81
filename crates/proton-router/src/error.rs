use thiserror::Error;

/// Errors produced by route lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No registered route satisfies the criteria
    #[error("no route matches [{0}]")]
    NotFound(String),

    /// The route has no `host` option and the request carried no host
    #[error("no host available to build a URL for route '{0}'")]
    MissingHost(String),
}
