use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::ValidationError;

use super::RootDeviceHints;

/// RAID configuration for a node.
///
/// Hardware and software RAID are mutually exclusive management modes. Each
/// collection distinguishes "absent" (keep whatever is configured on the node)
/// from "present but empty" (remove whatever is configured on the node).
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RaidConfig {
    /// Volumes to be built by the hardware RAID controller.
    #[serde(
        rename = "hardwareRAIDVolumes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hardware_volumes: Option<Vec<HardwareRaidVolume>>,

    /// Volumes to be built by the deploy agent as software RAID.
    #[serde(
        rename = "softwareRAIDVolumes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub software_volumes: Option<Vec<SoftwareRaidVolume>>,
}

impl RaidConfig {
    pub fn hardware_volumes(&self) -> &[HardwareRaidVolume] {
        self.hardware_volumes.as_deref().unwrap_or_default()
    }

    pub fn software_volumes(&self) -> &[SoftwareRaidVolume] {
        self.software_volumes.as_deref().unwrap_or_default()
    }

    pub fn has_hardware_volumes(&self) -> bool {
        !self.hardware_volumes().is_empty()
    }

    pub fn has_software_volumes(&self) -> bool {
        !self.software_volumes().is_empty()
    }

    /// Projection of this configuration that only keeps the hardware volumes.
    pub fn hardware_view(&self) -> RaidConfig {
        RaidConfig {
            hardware_volumes: self.hardware_volumes.clone(),
            software_volumes: None,
        }
    }

    /// Projection of this configuration that only keeps the software volumes.
    pub fn software_view(&self) -> RaidConfig {
        RaidConfig {
            hardware_volumes: None,
            software_volumes: self.software_volumes.clone(),
        }
    }
}

/// A logical disk built by a hardware RAID controller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HardwareRaidVolume {
    /// Name of the volume. Must be unique across the hardware volumes when set.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Size of the volume in GiB. `0` takes all available capacity.
    #[serde(default)]
    pub size_gibibytes: u64,

    /// RAID level of the volume.
    pub level: RaidLevel,

    /// Restricts the physical disks to HDDs (`true`) or SSDs (`false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotational: Option<bool>,

    /// Number of physical disks to build the volume from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_physical_disks: Option<u32>,
}

/// A logical disk built as software RAID by the deploy agent.
///
/// The first software volume of a node must be RAID1.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SoftwareRaidVolume {
    /// Size of the volume in GiB. `0` takes all available capacity.
    #[serde(default)]
    pub size_gibibytes: u64,

    /// RAID level of the volume.
    pub level: RaidLevel,

    /// Hints pinning the volume to specific physical disks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub physical_disks: Vec<RootDeviceHints>,
}

/// RAID levels accepted by the provisioning service.
///
/// On the wire levels are strings (`"1"`, `"1+0"`, `"JBOD"`); plain integers
/// are accepted when reading documents.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Display, EnumString, EnumIter)]
pub enum RaidLevel {
    /// # Striping
    #[strum(serialize = "0")]
    Raid0,

    /// # Mirroring
    #[strum(serialize = "1")]
    Raid1,

    /// # Bit-level striping with Hamming code parity
    #[strum(serialize = "2")]
    Raid2,

    /// # Striping with parity
    #[strum(serialize = "5")]
    Raid5,

    /// # Striping with double parity
    #[strum(serialize = "6")]
    Raid6,

    /// # Stripe of mirrors
    #[strum(serialize = "1+0")]
    Raid10,

    /// # Stripe of RAID5 sets
    #[strum(serialize = "5+0")]
    Raid50,

    /// # Stripe of RAID6 sets
    #[strum(serialize = "6+0")]
    Raid60,

    /// # Pass-through disk
    #[strum(serialize = "JBOD")]
    Jbod,
}

impl RaidLevel {
    /// Parses a RAID level, failing with a validation error on unknown values.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        RaidLevel::from_str(value.trim()).map_err(|_| ValidationError::UnknownRaidLevel {
            value: value.to_string(),
        })
    }
}

impl Serialize for RaidLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl<'de> Deserialize<'de> for RaidLevel {
    fn deserialize<D>(deserializer: D) -> Result<RaidLevel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LevelVisitor;

        impl<'de> de::Visitor<'de> for LevelVisitor {
            type Value = RaidLevel;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a RAID level such as \"1\", \"1+0\" or \"JBOD\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RaidLevel, E> {
                RaidLevel::parse(v).map_err(de::Error::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RaidLevel, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RaidLevel, E> {
                self.visit_str(&v.to_string())
            }
        }

        deserializer.deserialize_any(LevelVisitor)
    }
}
