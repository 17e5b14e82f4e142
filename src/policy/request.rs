//! Signing request model
//!
//! The closed set of request kinds a host signer can submit for a policy
//! decision. The set is deliberately exhaustive: adding a new kind forces an
//! explicit arm in the evaluator instead of silently taking the fallback.

use serde::{Deserialize, Serialize};

/// A request to sign a transaction
///
/// Only `chain_id` is consulted by policy. The remaining fields travel with
/// the request so hosts can audit and display them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Chain the transaction targets, if the host resolved one
    pub chain_id: Option<u64>,
    /// Sender address
    pub from: Option<String>,
    /// Recipient address (absent for contract creation)
    pub to: Option<String>,
    /// Value being transferred (in smallest unit, e.g., wei)
    pub value: Option<u128>,
    /// Call data
    #[serde(default)]
    pub input: Vec<u8>,
}

impl TransactionRequest {
    pub fn new(chain_id: Option<u64>) -> Self {
        Self {
            chain_id,
            from: None,
            to: None,
            value: None,
            input: Vec::new(),
        }
    }

    pub fn with_from(mut self, addr: &str) -> Self {
        self.from = Some(addr.to_string());
        self
    }

    pub fn with_to(mut self, addr: &str) -> Self {
        self.to = Some(addr.to_string());
        self
    }

    pub fn with_value(mut self, value: u128) -> Self {
        self.value = Some(value);
        self
    }
}

/// A request to sign arbitrary data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignDataRequest {
    /// Account asked to sign
    pub account: Option<String>,
    /// Raw payload to be signed
    #[serde(default)]
    pub payload: Vec<u8>,
}

impl SignDataRequest {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            account: None,
            payload: payload.into(),
        }
    }

    pub fn with_account(mut self, addr: &str) -> Self {
        self.account = Some(addr.to_string());
        self
    }
}

/// A signing request, tagged with its kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SigningRequest {
    /// Sign a transaction
    Transaction(TransactionRequest),

    /// Sign an opaque data payload
    SignData(SignDataRequest),

    /// List the accounts the signer holds
    ListAccounts,

    /// Create a new account in the signer's keystore
    NewAccount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_transaction() {
        let json = r#"{"kind":"transaction","chain_id":12345,"to":"0x00000000000000000000000000000000000000aa"}"#;
        let request: SigningRequest = serde_json::from_str(json).unwrap();
        match request {
            SigningRequest::Transaction(tx) => {
                assert_eq!(tx.chain_id, Some(12345));
                assert!(tx.from.is_none());
                assert!(tx.input.is_empty());
            }
            other => panic!("Unexpected request kind: {:?}", other),
        }
    }

    #[test]
    fn test_chain_id_must_be_numeric() {
        // A string-typed chain id is a wire-layer bug, not a policy input
        let json = r#"{"kind":"transaction","chain_id":"12345"}"#;
        assert!(serde_json::from_str::<SigningRequest>(json).is_err());
    }

    #[test]
    fn test_deserialize_unit_kinds() {
        let request: SigningRequest = serde_json::from_str(r#"{"kind":"list_accounts"}"#).unwrap();
        assert!(matches!(request, SigningRequest::ListAccounts));

        let request: SigningRequest = serde_json::from_str(r#"{"kind":"new_account"}"#).unwrap();
        assert!(matches!(request, SigningRequest::NewAccount));
    }
}
