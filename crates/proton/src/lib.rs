// Proton - minimal web framework core
// Route registry, statement-builder data access and views

pub mod config;
pub mod controller;
pub mod database;
pub mod renderer;
pub mod request_context;
pub mod value;

// Re-export the router crate and its core types
pub use proton_router;
pub use proton_router::{
    Criteria, HttpsMode, Method, OptionValue, Registry, RequestOrigin, Route, RouteError,
    RouteOptions,
};

// Re-export framework types
pub use config::{Config, DatabaseConfig};
pub use controller::{Controller, ViewError};
pub use database::{Database, DbError, Dialect, Fields, Row, Statement};
pub use renderer::{RenderResult, Renderer};
pub use request_context::RequestContext;
pub use value::Value;

// Re-export commonly used types from dependencies
pub use axum::http::StatusCode;
