// file: src/payload/credential.rs
// version: 1.0.0
// guid: a4e7c2f9-1b85-4d3e-9f60-7d2b8c1e5a39

//! Credential payload structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential kinds accepted by the manager API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialType {
    #[serde(rename = "SSH")]
    Ssh,
}

/// Username/password pair for one VxRail Manager account
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub credential_type: CredentialType,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("credential_type", &self.credential_type)
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Both manager accounts, as nested in the deployment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub root_credentials: Credential,
    pub admin_credentials: Credential,
}

/// Build an SSH credential object
pub fn to_credential_obj(user: &str, password: &str) -> Credential {
    Credential {
        credential_type: CredentialType::Ssh,
        username: user.to_string(),
        password: password.to_string(),
    }
}
