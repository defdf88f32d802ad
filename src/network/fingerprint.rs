// file: src/network/fingerprint.rs
// version: 1.0.0
// guid: c58e2b07-f9a3-4d16-8b4e-a27d6c0f3e91

//! SSH host key and TLS certificate fingerprints
//!
//! Both fingerprints come from the usual OpenSSH and OpenSSL command line tools.
//! [`FingerprintProvider`] keeps the process plumbing out of the callers so
//! tests can hand in canned answers.

use super::executor::{CommandExecutor, LocalClient};
use crate::utils::validation::validate_host;
use crate::{AgentError, Result};
use tracing::{debug, info};

/// Source of host fingerprints
pub trait FingerprintProvider {
    /// SHA-256 fingerprint of the host's RSA host key, e.g. `SHA256:uC0z...`
    fn ssh_fingerprint(&self, host: &str) -> Result<String>;

    /// SHA-256 fingerprint of the certificate served on port 443, as colon
    /// separated hex
    fn ssl_fingerprint(&self, host: &str) -> Result<String>;
}

/// Fingerprints fetched with `ssh-keyscan`/`ssh-keygen` and `openssl`
pub struct ShellFingerprintProvider<E = LocalClient> {
    executor: E,
}

impl ShellFingerprintProvider<LocalClient> {
    pub fn new() -> Self {
        Self::with_executor(LocalClient::new())
    }
}

impl Default for ShellFingerprintProvider<LocalClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> ShellFingerprintProvider<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }
}

impl<E: CommandExecutor> FingerprintProvider for ShellFingerprintProvider<E> {
    fn ssh_fingerprint(&self, host: &str) -> Result<String> {
        let host = validate_host(host)?;
        let command = ssh_fingerprint_command(host);

        let (exit_code, stdout, stderr) = self
            .executor
            .execute_with_error_collection(&command, "ssh fingerprint")?;
        if exit_code != 0 {
            return Err(AgentError::ProcessError {
                command,
                exit_code: Some(exit_code),
                stderr,
            });
        }

        let fingerprint = parse_ssh_fingerprint(&stdout)?;
        info!("Fetched SSH fingerprint for {}", host);
        Ok(fingerprint)
    }

    fn ssl_fingerprint(&self, host: &str) -> Result<String> {
        let host = validate_host(host)?;
        let command = ssl_fingerprint_command(host);

        let (exit_code, stdout, _) = self
            .executor
            .execute_with_error_collection(&command, "ssl fingerprint")?;
        if exit_code != 0 {
            return Err(AgentError::Fingerprint {
                command,
                host: host.to_string(),
            });
        }

        let fingerprint = parse_ssl_fingerprint(&stdout)?;
        info!("Fetched SSL fingerprint for {}", host);
        Ok(fingerprint)
    }
}

/// Key scan piped into the fingerprint printer, keeping only the hash column
pub fn ssh_fingerprint_command(host: &str) -> String {
    format!(
        "ssh-keygen -lf <(ssh-keyscan -t rsa {} 2>/dev/null) | cut -d' ' -f2",
        host
    )
}

/// TLS handshake on 443 piped into an X.509 SHA-256 fingerprint
pub fn ssl_fingerprint_command(host: &str) -> String {
    format!(
        "openssl s_client -connect {}:443 < /dev/null 2>/dev/null | openssl x509 \
         -fingerprint -sha256 -noout -in /dev/stdin",
        host
    )
}

/// `SHA256:uC0zLDfY...\n` -> `SHA256:uC0zLDfY...`
pub fn parse_ssh_fingerprint(output: &str) -> Result<String> {
    let fingerprint = output.trim_end_matches(['\r', '\n']);
    if fingerprint.trim().is_empty() {
        return Err(AgentError::parse("ssh-keygen printed no fingerprint"));
    }
    Ok(fingerprint.to_string())
}

/// `SHA256 Fingerprint=DD:23:...` -> `DD:23:...`
pub fn parse_ssl_fingerprint(output: &str) -> Result<String> {
    debug!("Parsing openssl fingerprint output: {}", output.trim());
    let (_, value) = output.split_once('=').ok_or_else(|| {
        AgentError::parse(format!(
            "unexpected openssl fingerprint output '{}'",
            output.trim()
        ))
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(AgentError::parse("openssl printed an empty fingerprint"));
    }
    Ok(value.to_string())
}
