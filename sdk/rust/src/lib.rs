//! Client for the addition service.

pub mod client;

pub use client::{Addition, ClientError, SumClient};
