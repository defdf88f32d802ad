// file: src/payload/assembler.rs
// version: 1.0.0
// guid: 2a7e9c05-d6b1-4f38-9e24-c0f5b8a3d167

//! Interactive assembly of credential, network and NIC profile payloads

use super::{
    to_credential_obj, to_network_obj, Credentials, ExistingNetwork, NetworkConfig, NetworkType,
    NicProfile,
};
use crate::prompt::Prompter;
use crate::utils::validation::{
    is_affirmative, parse_choice, parse_cidr, parse_ipv4, parse_vlan_id, IpRange, ValidationError,
};
use crate::Result;
use ipnetwork::Ipv4Network;
use std::io::{BufRead, Write};
use std::net::Ipv4Addr;
use tracing::{debug, info};

/// Fixed login of the VxRail Manager root account
pub const ROOT_USERNAME: &str = "root";
/// Factory default login of the VxRail Manager admin account
pub const DEFAULT_ADMIN_USERNAME: &str = "mystic";
/// Subnet mask offered when the operator just presses enter
pub const DEFAULT_SUBNET_MASK: &str = "255.255.255.0";

/// Raw answers for one network, before they become a [`NetworkConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInputs {
    pub vlan_id: u16,
    pub cidr: Option<Ipv4Network>,
    pub mask: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub ip_range: Option<IpRange>,
}

/// Drives the prompts that make up a VxRail Manager payload
pub struct PayloadAssembler<'p, R, W> {
    prompter: &'p mut Prompter<R, W>,
}

impl<'p, R: BufRead, W: Write> PayloadAssembler<'p, R, W> {
    pub fn new(prompter: &'p mut Prompter<R, W>) -> Self {
        Self { prompter }
    }

    /// Collect root and admin credentials
    pub fn collect_credentials(&mut self) -> Result<Credentials> {
        self.prompter
            .info("Please enter VxRail Manager's root credentials:")?;
        let root_password = self.prompter.ask_password("Enter password:")?;
        self.prompter.separator()?;

        self.prompter
            .info("Please enter VxRail Manager's admin credentials:")?;
        let admin_user = self.prompter.ask_text(
            &format!("Enter username ({}):", DEFAULT_ADMIN_USERNAME),
            DEFAULT_ADMIN_USERNAME,
        )?;
        let admin_password = self.prompter.ask_password("Enter password:")?;
        self.prompter.separator()?;

        debug!("Collected credentials for admin user {}", admin_user);

        Ok(Credentials {
            root_credentials: to_credential_obj(ROOT_USERNAME, &root_password),
            admin_credentials: to_credential_obj(&admin_user, &admin_password),
        })
    }

    /// Collect the vSAN (optional), vMotion and management networks.
    ///
    /// The result is always ordered vMotion, vSAN, management even though the
    /// vSAN questions are asked first.
    pub fn prepare_network_info_and_payload(
        &mut self,
        host_count: usize,
        existing_mgmt_network: Option<&ExistingNetwork>,
        needs_vsan_network: bool,
    ) -> Result<Vec<NetworkConfig>> {
        let vsan_network = if needs_vsan_network {
            self.prompter.hint(
                "** For e.g. vSAN Network VLAN ID: 1407, CIDR: 172.18.60.0/24, \n    \
                 IP Range for hosts vSAN IP assignment: 172.18.60.55-172.18.60.60",
            )?;
            Some(self.collect_network(NetworkType::Vsan, true, host_count)?)
        } else {
            None
        };

        self.prompter.hint(
            "** For e.g. vMotion Network VLAN ID: 1406, CIDR: 172.18.59.0/24, \n    \
             IP Range for hosts vMotion IP assignment: 172.18.59.55-172.18.59.60",
        )?;
        let vmotion_network = self.collect_network(NetworkType::Vmotion, true, host_count)?;

        let mut networks = vec![vmotion_network];
        networks.extend(vsan_network);

        let management_network = match existing_mgmt_network {
            Some(existing) => self.reuse_or_collect_management(existing, host_count)?,
            None => self.input_mgmt_network_info(host_count)?,
        };
        networks.push(management_network);

        info!(
            "Prepared {} networks: {}",
            networks.len(),
            networks
                .iter()
                .map(|network| network.network_type.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(networks)
    }

    /// Prompt for a fresh management network; it never carries an IP pool
    pub fn input_mgmt_network_info(&mut self, host_count: usize) -> Result<NetworkConfig> {
        self.collect_network(NetworkType::Management, false, host_count)
    }

    /// Prompt for the fields of one network.
    ///
    /// The IP range is checked against the CIDR and `host_count` and asked
    /// again until it fits.
    pub fn input_network_info(
        &mut self,
        cidr_required: bool,
        ip_range_required: bool,
        host_count: usize,
    ) -> Result<NetworkInputs> {
        let vlan_id = self.prompter.ask("Enter VLAN Id:", None, parse_vlan_id)?;

        let cidr = if cidr_required {
            Some(self.prompter.ask("Enter CIDR:", None, parse_cidr)?)
        } else {
            None
        };

        let mask = self.prompter.ask(
            &format!("Enter subnet mask({}):", DEFAULT_SUBNET_MASK),
            Some(DEFAULT_SUBNET_MASK),
            parse_ipv4,
        )?;
        let gateway = self.prompter.ask("Enter gateway IP:", None, parse_ipv4)?;

        let ip_range = if ip_range_required {
            Some(self.prompter.ask("Enter IP Range:", None, |answer| {
                let range: IpRange = answer.parse()?;
                match &cidr {
                    Some(network) => range.check_pool(network, host_count)?,
                    None => range.check_count(host_count)?,
                }
                Ok(range)
            })?)
        } else {
            None
        };

        Ok(NetworkInputs {
            vlan_id,
            cidr,
            mask,
            gateway,
            ip_range,
        })
    }

    /// Let the operator pick one of the interactive NIC profiles
    pub fn select_nic_profile(&mut self) -> Result<NicProfile> {
        self.prompter.hint(
            "** ADVANCED_VXRAIL_SUPPLIED_VDS nic profile is supported only via VxRail JSON input",
        )?;
        self.prompter.info("Please select nic profile:")?;
        for (index, profile) in NicProfile::ALL.iter().enumerate() {
            self.prompter.bold(&format!("{}) {}", index + 1, profile))?;
        }

        let profile = self.prompter.ask(
            "Enter your choice(number):",
            Some(NicProfile::CHOICES[0]),
            |answer| {
                let choice = parse_choice(answer, &NicProfile::CHOICES)?;
                choice
                    .parse::<usize>()
                    .ok()
                    .and_then(NicProfile::from_choice)
                    .ok_or_else(|| ValidationError::InvalidChoice {
                        value: choice.to_string(),
                        allowed: NicProfile::CHOICES.join(", "),
                    })
            },
        )?;
        self.prompter.separator()?;

        debug!("Selected nic profile {}", profile);
        Ok(profile)
    }

    fn collect_network(
        &mut self,
        network_type: NetworkType,
        ip_range_required: bool,
        host_count: usize,
    ) -> Result<NetworkConfig> {
        self.prompter.info(&format!(
            "Please enter {} Network details: ",
            network_type.display_name()
        ))?;
        let inputs = self.input_network_info(true, ip_range_required, host_count)?;
        self.prompter.separator()?;

        debug!("Collected {} network on VLAN {}", network_type, inputs.vlan_id);

        Ok(to_network_obj(
            network_type,
            inputs.vlan_id,
            inputs.cidr,
            inputs.mask,
            inputs.gateway,
            inputs.ip_range,
        ))
    }

    fn reuse_or_collect_management(
        &mut self,
        existing: &ExistingNetwork,
        host_count: usize,
    ) -> Result<NetworkConfig> {
        self.prompter.hint(
            "** By default the tool takes Management domain mgmt network for Create Domain and \
             Primary cluster mgmt network for Create Cluster",
        )?;
        self.prompter.hint(&format!(
            "** Existing mgmt network details: VLAN ID: {}, CIDR: {}",
            existing.vlan_id, existing.subnet
        ))?;

        let answer = self.prompter.ask_text(
            "Do you want to provide Management Network details?('yes' or 'no'):",
            "no",
        )?;
        self.prompter.separator()?;

        if is_affirmative(&answer) {
            return self.input_mgmt_network_info(host_count);
        }

        debug!("Reusing existing management network on VLAN {}", existing.vlan_id);
        Ok(to_network_obj(
            NetworkType::Management,
            existing.vlan_id,
            Some(existing.subnet),
            existing.mask,
            existing.gateway,
            None,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::IpPool;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    const VSAN_ANSWERS: &str = "1407\n172.18.60.0/24\n\n172.18.60.1\n172.18.60.55-172.18.60.60\n";
    const VMOTION_ANSWERS: &str = "1406\n172.18.59.0/24\n\n172.18.59.1\n172.18.59.55-172.18.59.60\n";
    const MGMT_ANSWERS: &str = "1405\n172.18.58.0/24\n255.255.255.0\n172.18.58.1\n";

    #[test]
    fn test_networks_ordered_with_vsan() {
        // Arrange
        let input = format!("{}{}{}", VSAN_ANSWERS, VMOTION_ANSWERS, MGMT_ANSWERS);
        let mut prompter = prompter(&input);
        let mut assembler = PayloadAssembler::new(&mut prompter);

        // Act
        let networks = assembler
            .prepare_network_info_and_payload(5, None, true)
            .unwrap();

        // Assert
        let types: Vec<NetworkType> = networks.iter().map(|n| n.network_type).collect();
        assert_eq!(
            types,
            vec![NetworkType::Vmotion, NetworkType::Vsan, NetworkType::Management]
        );
        assert_eq!(networks[0].vlan_id, 1406);
        assert_eq!(networks[1].vlan_id, 1407);
        assert_eq!(networks[2].ip_pools, None);
        assert_eq!(networks[2].subnet, Some(parse_cidr("172.18.58.0/24").unwrap()));
    }

    #[test]
    fn test_networks_without_vsan() {
        let input = format!("{}{}", VMOTION_ANSWERS, MGMT_ANSWERS);
        let mut prompter = prompter(&input);
        let mut assembler = PayloadAssembler::new(&mut prompter);

        let networks = assembler
            .prepare_network_info_and_payload(3, None, false)
            .unwrap();

        assert_eq!(networks.len(), 2);
        assert_eq!(networks[0].network_type, NetworkType::Vmotion);
        assert_eq!(networks[1].network_type, NetworkType::Management);
    }

    #[test]
    fn test_existing_management_network_is_reused() {
        // Arrange
        let existing = ExistingNetwork {
            vlan_id: 1611,
            subnet: parse_cidr("10.0.0.0/24").unwrap(),
            mask: Ipv4Addr::new(255, 255, 255, 0),
            gateway: Ipv4Addr::new(10, 0, 0, 253),
        };
        let input = format!("{}no\n", VMOTION_ANSWERS);
        let mut prompter = prompter(&input);
        let mut assembler = PayloadAssembler::new(&mut prompter);

        // Act
        let networks = assembler
            .prepare_network_info_and_payload(4, Some(&existing), false)
            .unwrap();

        // Assert
        let management = &networks[1];
        assert_eq!(management.network_type, NetworkType::Management);
        assert_eq!(management.vlan_id, 1611);
        assert_eq!(management.subnet, Some(existing.subnet));
        assert_eq!(management.gateway, existing.gateway);
        assert!(management.ip_pools.is_none());
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert!(transcript.contains("VLAN ID: 1611, CIDR: 10.0.0.0/24"));
    }

    #[test]
    fn test_existing_management_network_can_be_overridden() {
        let existing = ExistingNetwork {
            vlan_id: 1611,
            subnet: parse_cidr("10.0.0.0/24").unwrap(),
            mask: Ipv4Addr::new(255, 255, 255, 0),
            gateway: Ipv4Addr::new(10, 0, 0, 253),
        };
        let input = format!("{}Y\n{}", VMOTION_ANSWERS, MGMT_ANSWERS);
        let mut prompter = prompter(&input);
        let mut assembler = PayloadAssembler::new(&mut prompter);

        let networks = assembler
            .prepare_network_info_and_payload(4, Some(&existing), false)
            .unwrap();

        assert_eq!(networks[1].vlan_id, 1405);
    }

    #[test]
    fn test_short_range_is_asked_again() {
        // Arrange
        let input = "1406\n172.18.60.0/24\n\n172.18.60.1\n\
                     172.18.60.55-172.18.60.57\n\
                     172.18.61.55-172.18.61.60\n\
                     172.18.60.55-172.18.60.60\n";
        let mut prompter = prompter(input);
        let mut assembler = PayloadAssembler::new(&mut prompter);

        // Act
        let inputs = assembler.input_network_info(true, true, 5).unwrap();

        // Assert
        let range = inputs.ip_range.unwrap();
        assert_eq!(IpPool::from(range).end, Ipv4Addr::new(172, 18, 60, 60));
        assert_eq!(inputs.mask, Ipv4Addr::new(255, 255, 255, 0));
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert!(transcript.contains("is 3 but required minimum 5"));
        assert!(transcript.contains("not in the same network 172.18.60.0/24"));
    }

    #[test]
    fn test_short_range_is_asked_again_without_cidr() {
        // Arrange
        let input = "1406\n\n172.18.60.1\n\
                     172.18.60.55-172.18.60.57\n\
                     172.18.60.55-172.18.60.59\n";
        let mut prompter = prompter(input);
        let mut assembler = PayloadAssembler::new(&mut prompter);

        // Act
        let inputs = assembler.input_network_info(false, true, 5).unwrap();

        // Assert
        assert_eq!(inputs.cidr, None);
        let range = inputs.ip_range.unwrap();
        assert_eq!(range.address_count(), 5);
        assert_eq!(range.end, Ipv4Addr::new(172, 18, 60, 59));
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert!(transcript.contains("is 3 but required minimum 5"));
    }

    #[test]
    fn test_collect_credentials_with_default_admin() {
        let mut prompter = prompter("R00t!pass\n\nAdm1n!pass\n");
        let mut assembler = PayloadAssembler::new(&mut prompter);

        let credentials = assembler.collect_credentials().unwrap();

        assert_eq!(credentials.root_credentials.username, "root");
        assert_eq!(credentials.root_credentials.password, "R00t!pass");
        assert_eq!(credentials.admin_credentials.username, "mystic");
        assert_eq!(credentials.admin_credentials.password, "Adm1n!pass");
    }

    #[test]
    fn test_select_nic_profile() {
        // Arrange
        let mut prompter = prompter("7\n3\n");
        let mut assembler = PayloadAssembler::new(&mut prompter);

        // Act
        let profile = assembler.select_nic_profile().unwrap();

        // Assert
        assert_eq!(profile, NicProfile::FourExtremeSpeed);
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert!(transcript.contains("Invalid choice '7'"));
    }

    #[test]
    fn test_select_nic_profile_default() {
        let mut prompter = prompter("\n");
        let mut assembler = PayloadAssembler::new(&mut prompter);

        assert_eq!(assembler.select_nic_profile().unwrap(), NicProfile::TwoHighSpeed);
    }
}
