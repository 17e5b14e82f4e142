//! sigwarden - Request authorization for blockchain signing agents
//!
//! An embeddable policy evaluator that decides, per incoming request, whether
//! a cryptographic operation should proceed:
//! - Transaction signing is auto-approved only on allow-listed chains
//! - Data signing is always approved
//! - Every other request kind takes the configured fallback verdict
//!
//! # Security
//!
//! - The evaluator captures its configuration immutably at construction
//! - Evaluation is a pure function: no I/O, no clock, no hidden state
//! - The fallback is open (approve) by default, matching the historical
//!   ruleset; set [`FallbackMode::Closed`] to reject unrecognized kinds
//!
//! # Usage
//!
//! ```
//! use sigwarden::{PolicyConfig, PolicyEvaluator, SigningRequest, TransactionRequest, Verdict};
//!
//! let config = PolicyConfig {
//!     allowed_chain_ids: vec![12345],
//!     ..Default::default()
//! };
//! let evaluator = PolicyEvaluator::new(&config);
//!
//! let request = SigningRequest::Transaction(TransactionRequest::new(Some(12345)));
//! assert_eq!(evaluator.evaluate(&request), Verdict::Approve);
//! ```

pub mod config;
pub mod errors;
pub mod policy;

pub use config::{FallbackMode, PolicyConfig};
pub use errors::{Result, SigwardenError};
pub use policy::{PolicyEvaluator, SignDataRequest, SigningRequest, TransactionRequest, Verdict};
