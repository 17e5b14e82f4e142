//! Policy evaluation for signing requests
//!
//! This module provides:
//! - The request model (transactions, data signing, account operations)
//! - The evaluator mapping each request to an approve/reject verdict

pub mod engine;
pub mod request;

pub use engine::{PolicyEvaluator, Verdict};
pub use request::{SignDataRequest, SigningRequest, TransactionRequest};
