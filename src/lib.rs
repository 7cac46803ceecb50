//! Addition Service Library
//!
//! A browser form and a JSON endpoint that adds two numbers.

pub mod calc;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use calc::{AdditionRequest, AdditionResult};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
