//! Fixtures shared with the wider scorer test suites
//!
//! These are the singular counterparts of the sample lists plus the
//! credential, token, and API-key fixtures downstream suites pull in by name.

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_TEST_API_KEY;

/// A verifiable credential as the scorer API stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential {
    #[serde(rename = "type")]
    pub credential_type: Vec<String>,
    pub issuer: String,
    pub issuance_date: String,
    pub expiration_date: String,
    pub credential_subject: CredentialSubject,
    pub proof: CredentialProof,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSubject {
    pub id: String,
    pub provider: String,
    pub hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialProof {
    #[serde(rename = "type")]
    pub proof_type: String,
    pub proof_purpose: String,
    pub verification_method: String,
    pub jws: String,
    pub created: String,
}

/// First of the sample addresses, for single-subject tests
pub fn sample_address() -> String {
    "0x123".to_string()
}

/// First of the sample providers
pub fn sample_provider() -> String {
    "Twitter".to_string()
}

/// The API key the session hook installs into the settings
pub fn api_key() -> String {
    DEFAULT_TEST_API_KEY.to_string()
}

/// Static bearer-token placeholder for authenticated-request tests
pub fn sample_token() -> String {
    "test-access-token".to_string()
}

/// A complete credential for the sample address and provider
pub fn verifiable_credential() -> VerifiableCredential {
    VerifiableCredential {
        credential_type: vec!["VerifiableCredential".to_string()],
        issuer: "did:key:test-issuer".to_string(),
        issuance_date: "2023-01-01T00:00:00Z".to_string(),
        expiration_date: "2099-01-01T00:00:00Z".to_string(),
        credential_subject: CredentialSubject {
            id: format!("did:pkh:eip155:1:{}", sample_address()),
            provider: sample_provider(),
            hash: "v0.0.0:fixturehash".to_string(),
        },
        proof: CredentialProof {
            proof_type: "Ed25519Signature2018".to_string(),
            proof_purpose: "assertionMethod".to_string(),
            verification_method: "did:key:test-issuer#test-issuer".to_string(),
            jws: "eyJhbGciOiJFZERTQSJ9..fixture".to_string(),
            created: "2023-01-01T00:00:00Z".to_string(),
        },
    }
}
