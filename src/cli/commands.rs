// file: src/cli/commands.rs
// version: 1.0.0
// guid: 5e0a3c8f-b71d-4692-a4e8-c9f2d6b1e073

//! Command implementations for the CLI

use crate::{
    cli::args::CollectArgs,
    logging::with_operation_span,
    network::{FingerprintProvider, ReachabilityChecker, ShellFingerprintProvider},
    payload::{ExistingNetwork, PayloadAssembler, VxRailManagerSpec},
    prompt::Prompter,
    utils::system::SystemUtils,
    AgentError, Result,
};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::info;

/// Everything `collect` needs besides the operator's answers
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    pub host_count: usize,
    pub needs_vsan_network: bool,
    pub fqdn: Option<String>,
    pub fetch_fingerprints: bool,
    pub existing_mgmt_network: Option<ExistingNetwork>,
}

impl From<&CollectArgs> for CollectOptions {
    fn from(args: &CollectArgs) -> Self {
        Self {
            host_count: usize::from(args.host_count),
            needs_vsan_network: args.vsan,
            fqdn: args.fqdn.clone(),
            fetch_fingerprints: args.fqdn.is_some() && !args.skip_fingerprints,
            existing_mgmt_network: args.existing_mgmt_network(),
        }
    }
}

/// Run the whole interactive collection.
///
/// Fingerprints are fetched before any question is asked so an unreachable
/// manager fails fast.
pub fn collect_manager_spec<R, W, P>(
    prompter: &mut Prompter<R, W>,
    options: &CollectOptions,
    fingerprints: &P,
) -> Result<VxRailManagerSpec>
where
    R: BufRead,
    W: Write,
    P: FingerprintProvider + ?Sized,
{
    let (ssh_thumbprint, ssl_thumbprint) = match (&options.fqdn, options.fetch_fingerprints) {
        (Some(fqdn), true) => with_operation_span("fingerprints", || -> Result<_> {
            Ok((
                Some(fingerprints.ssh_fingerprint(fqdn)?),
                Some(fingerprints.ssl_fingerprint(fqdn)?),
            ))
        })?,
        _ => (None, None),
    };

    let mut assembler = PayloadAssembler::new(prompter);
    let credentials = assembler.collect_credentials()?;
    let networks = with_operation_span("networks", || {
        assembler.prepare_network_info_and_payload(
            options.host_count,
            options.existing_mgmt_network.as_ref(),
            options.needs_vsan_network,
        )
    })?;
    let nic_profile = assembler.select_nic_profile()?;

    Ok(VxRailManagerSpec {
        dns_name: options.fqdn.clone(),
        ssh_thumbprint,
        ssl_thumbprint,
        credentials,
        networks,
        nic_profile,
    })
}

/// Collect a VxRail Manager spec on the terminal and print it as JSON
pub fn collect_command(args: &CollectArgs) -> Result<()> {
    let options = CollectOptions::from(args);

    if let Some(fqdn) = &options.fqdn {
        ReachabilityChecker::new().check_reachability(fqdn)?;
    }

    let mut prompter = Prompter::stdio();
    let spec = collect_manager_spec(&mut prompter, &options, &ShellFingerprintProvider::new())?;

    info!("Collected VxRail Manager spec with {} networks", spec.networks.len());
    println!("{}", spec.to_json(args.compact)?);
    Ok(())
}

/// Print both fingerprints of a host
pub fn fingerprint_command(host: &str, json: bool) -> Result<()> {
    ReachabilityChecker::new().check_reachability(host)?;

    let provider = ShellFingerprintProvider::new();
    let ssh = provider.ssh_fingerprint(host)?;
    let ssl = provider.ssl_fingerprint(host)?;

    if json {
        let value = serde_json::json!({
            "host": host,
            "sshThumbprint": ssh,
            "sslThumbprint": ssl,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{} {}", "SSH fingerprint:".bold(), ssh);
        println!("{} {}", "SSL fingerprint:".bold(), ssl);
    }

    Ok(())
}

/// Ping preflight on its own
pub fn check_reachability_command(host: &str) -> Result<()> {
    ReachabilityChecker::new().check_reachability(host)?;
    println!("{}", format!("{} is reachable", host).green());
    Ok(())
}

/// Report which external tools are missing
pub fn check_prerequisites_command() -> Result<()> {
    let statuses = SystemUtils::check_required_tools();

    for status in &statuses {
        match &status.path {
            Some(path) => println!("{} {} ({})", "✓".green(), status.name, path.display()),
            None => println!("{} {} not found in PATH", "✗".red(), status.name),
        }
    }

    let missing: Vec<&str> = statuses
        .iter()
        .filter(|status| !status.is_available())
        .map(|status| status.name)
        .collect();

    if missing.is_empty() {
        info!("All prerequisites satisfied");
        Ok(())
    } else {
        Err(AgentError::config(format!(
            "missing required tools: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{NetworkType, NicProfile};
    use std::cell::Cell;
    use std::io::Cursor;

    struct StaticFingerprints {
        calls: Cell<usize>,
    }

    impl FingerprintProvider for StaticFingerprints {
        fn ssh_fingerprint(&self, _host: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok("SHA256:hostkey".to_string())
        }

        fn ssl_fingerprint(&self, _host: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok("AA:BB:CC".to_string())
        }
    }

    struct FailingFingerprints;

    impl FingerprintProvider for FailingFingerprints {
        fn ssh_fingerprint(&self, host: &str) -> Result<String> {
            Err(AgentError::ProcessError {
                command: format!("ssh-keyscan {}", host),
                exit_code: Some(1),
                stderr: String::new(),
            })
        }

        fn ssl_fingerprint(&self, _host: &str) -> Result<String> {
            unreachable!("ssh fingerprint fails first")
        }
    }

    const ANSWERS: &str = "R00t!pass\n\nAdm1n!pass\n\
                           1406\n172.18.59.0/24\n\n172.18.59.1\n172.18.59.55-172.18.59.60\n\
                           1405\n172.18.58.0/24\n\n172.18.58.1\n\
                           2\n";

    #[test]
    fn test_collect_manager_spec_with_fingerprints() {
        // Arrange
        let mut prompter = Prompter::new(Cursor::new(ANSWERS.as_bytes().to_vec()), Vec::new());
        let options = CollectOptions {
            host_count: 4,
            fqdn: Some("vxrail.rainpole.local".to_string()),
            fetch_fingerprints: true,
            ..Default::default()
        };
        let provider = StaticFingerprints { calls: Cell::new(0) };

        // Act
        let spec = collect_manager_spec(&mut prompter, &options, &provider).unwrap();

        // Assert
        assert_eq!(provider.calls.get(), 2);
        assert_eq!(spec.dns_name.as_deref(), Some("vxrail.rainpole.local"));
        assert_eq!(spec.ssh_thumbprint.as_deref(), Some("SHA256:hostkey"));
        assert_eq!(spec.ssl_thumbprint.as_deref(), Some("AA:BB:CC"));
        assert_eq!(spec.networks.len(), 2);
        assert_eq!(spec.networks[0].network_type, NetworkType::Vmotion);
        assert_eq!(spec.networks[1].network_type, NetworkType::Management);
        assert_eq!(spec.nic_profile, NicProfile::FourHighSpeed);
    }

    #[test]
    fn test_collect_manager_spec_without_fqdn_skips_fingerprints() {
        let mut prompter = Prompter::new(Cursor::new(ANSWERS.as_bytes().to_vec()), Vec::new());
        let options = CollectOptions {
            host_count: 4,
            ..Default::default()
        };
        let provider = StaticFingerprints { calls: Cell::new(0) };

        let spec = collect_manager_spec(&mut prompter, &options, &provider).unwrap();

        assert_eq!(provider.calls.get(), 0);
        assert!(spec.ssh_thumbprint.is_none());
        assert!(spec.dns_name.is_none());
    }

    #[test]
    fn test_fingerprint_failure_stops_before_prompting() {
        let mut prompter = Prompter::new(Cursor::new(ANSWERS.as_bytes().to_vec()), Vec::new());
        let options = CollectOptions {
            host_count: 4,
            fqdn: Some("vxrail.rainpole.local".to_string()),
            fetch_fingerprints: true,
            ..Default::default()
        };

        let result = collect_manager_spec(&mut prompter, &options, &FailingFingerprints);

        assert!(matches!(result, Err(AgentError::ProcessError { .. })));
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert!(!transcript.contains("root credentials"));
    }
}
