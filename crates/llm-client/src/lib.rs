//! Thin client for the advisory model endpoint.
//!
//! One non-streaming chat completion per call, no conversation state, no
//! retries. The reply text is opaque here; interpreting the recommended
//! allocation is the caller's problem.

mod client;
mod types;

pub use client::AdvisoryClient;
pub use types::ServiceError;
