use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::ValidationError;

/// RAID interface of the node's hardware-management driver. It determines
/// which RAID modes the node supports.
#[derive(
    Serialize,
    Deserialize,
    Copy,
    Clone,
    Debug,
    Default,
    Hash,
    Eq,
    PartialEq,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "kebab-case")]
pub enum RaidInterface {
    /// Driver without RAID support.
    #[default]
    NoRaid,

    /// Software RAID built by the deploy agent.
    Agent,

    Fake,

    Idrac,

    IdracRedfish,

    IdracWsman,

    #[strum(serialize = "ilo5")]
    Ilo5,

    Irmc,

    Redfish,

    Ibmc,
}

impl RaidInterface {
    /// Parses an interface name, failing with a validation error on unknown values.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        RaidInterface::from_str(value).map_err(|_| ValidationError::UnknownRaidInterface {
            value: value.to_string(),
        })
    }
}

impl TryFrom<String> for RaidInterface {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RaidInterface::parse(&value)
    }
}

impl From<RaidInterface> for String {
    fn from(interface: RaidInterface) -> Self {
        interface.to_string()
    }
}
