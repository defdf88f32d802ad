// file: src/payload/nic.rs
// version: 1.0.0
// guid: 6f28d0c3-9e14-4b7a-a3c5-b81e0f4d2976

//! NIC profile selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical NIC layouts offered during interactive collection.
///
/// `ADVANCED_VXRAIL_SUPPLIED_VDS` exists on the API side but needs a full VDS
/// definition, so it is only reachable through JSON input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NicProfile {
    TwoHighSpeed,
    FourHighSpeed,
    FourExtremeSpeed,
}

impl NicProfile {
    /// Profiles in menu order; menu numbers start at 1
    pub const ALL: [NicProfile; 3] = [
        NicProfile::TwoHighSpeed,
        NicProfile::FourHighSpeed,
        NicProfile::FourExtremeSpeed,
    ];

    /// Menu choices accepted by the prompt
    pub const CHOICES: [&'static str; 3] = ["1", "2", "3"];

    pub fn as_str(&self) -> &'static str {
        match self {
            NicProfile::TwoHighSpeed => "TWO_HIGH_SPEED",
            NicProfile::FourHighSpeed => "FOUR_HIGH_SPEED",
            NicProfile::FourExtremeSpeed => "FOUR_EXTREME_SPEED",
        }
    }

    /// Look a profile up by its 1-based menu number
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for NicProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice() {
        assert_eq!(NicProfile::from_choice(1), Some(NicProfile::TwoHighSpeed));
        assert_eq!(NicProfile::from_choice(3), Some(NicProfile::FourExtremeSpeed));
        assert_eq!(NicProfile::from_choice(0), None);
        assert_eq!(NicProfile::from_choice(4), None);
    }

    #[test]
    fn test_serialized_name_matches_display() {
        for profile in NicProfile::ALL {
            let value = serde_json::to_value(profile).unwrap();
            assert_eq!(value, serde_json::json!(profile.as_str()));
        }
    }
}
