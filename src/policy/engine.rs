//! Policy evaluator
//!
//! Maps each signing request to an approve/reject verdict against the
//! configured chain allow-list.
//!
//! Dispatch order is part of the contract:
//! 1. Transactions are approved iff their chain id is allow-listed.
//! 2. Data signing is approved unconditionally.
//! 3. Every other request kind takes the configured fallback verdict.
//!
//! The fallback is open (approve) unless configured otherwise. That is the
//! sharpest trust decision in this crate: a request kind the policy does not
//! recognize gets signed. It matches the historical ruleset; hosts that want
//! default rejection set [`FallbackMode::Closed`].

use crate::config::{FallbackMode, PolicyConfig};
use crate::policy::request::SigningRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Result of policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Proceed with the cryptographic operation
    Approve,
    /// Refuse the request
    Reject,
}

impl Verdict {
    pub fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approve)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approve => "Approve",
            Verdict::Reject => "Reject",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy evaluator for signing requests
///
/// Holds only immutable data captured at construction, so it is `Send + Sync`
/// and can be shared across connections behind an `Arc` without locking.
pub struct PolicyEvaluator {
    /// Chain ids for which transaction signing is auto-approved
    allowed_chain_ids: HashSet<u64>,
    /// Verdict for request kinds with no explicit rule
    fallback: FallbackMode,
}

impl PolicyEvaluator {
    /// Create a new evaluator from loaded configuration
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            allowed_chain_ids: config.allowed_chain_ids.iter().copied().collect(),
            fallback: config.fallback,
        }
    }

    /// Evaluate a signing request
    ///
    /// Total over every request shape: never panics, never blocks, and two
    /// calls with the same input always return the same verdict.
    pub fn evaluate(&self, request: &SigningRequest) -> Verdict {
        match request {
            SigningRequest::Transaction(tx) => match tx.chain_id {
                Some(id) if self.allowed_chain_ids.contains(&id) => Verdict::Approve,
                Some(id) => {
                    debug!("Rejecting transaction for chain {} (not in allow-list)", id);
                    Verdict::Reject
                }
                None => {
                    debug!("Rejecting transaction without a chain id");
                    Verdict::Reject
                }
            },

            SigningRequest::SignData(_) => Verdict::Approve,

            // No explicit rule for the remaining kinds
            SigningRequest::ListAccounts | SigningRequest::NewAccount => match self.fallback {
                FallbackMode::Open => Verdict::Approve,
                FallbackMode::Closed => {
                    debug!("Rejecting request kind with no explicit rule (fallback closed)");
                    Verdict::Reject
                }
            },
        }
    }

    /// Check if a chain id is in the allow-list
    pub fn is_chain_allowed(&self, chain_id: u64) -> bool {
        self.allowed_chain_ids.contains(&chain_id)
    }

    /// The verdict applied to request kinds with no explicit rule
    pub fn fallback(&self) -> FallbackMode {
        self.fallback
    }
}
