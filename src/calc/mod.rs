//! Addition subsystem.
//!
//! # Data Flow
//! ```text
//! JSON payload (serde_json::Value)
//!     → types.rs (AdditionRequest: pick fields `a` and `b`)
//!     → engine.rs (operand conversion, f64 addition)
//!     → AdditionResult (a, b, resultado)
//! ```
//!
//! Pure: nothing here performs I/O or keeps state between calls.

pub mod engine;
pub mod types;

pub use engine::{add, parse_decimal};
pub use types::{AdditionRequest, AdditionResult, CalcError, Field};
