//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and propagated)
//!     → page.rs   GET  /       (static form)
//!     → sum.rs    POST /sumar  (decode, calc::add)
//!     → response.rs (ApiError → structured JSON error)
//!     → Send to client
//! ```

pub mod page;
pub mod request;
pub mod response;
pub mod server;
pub mod sum;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody};
pub use server::{AppState, HttpServer};
