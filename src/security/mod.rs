//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (nosniff, frame and referrer policy)
//!     → Send to client
//! ```
//!
//! Request size limits are enforced in the HTTP layer (`DefaultBodyLimit`)
//! so an oversize body surfaces as a structured `BadRequest`.

pub mod headers;
