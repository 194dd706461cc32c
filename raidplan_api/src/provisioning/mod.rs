//! Shapes consumed by the remote provisioning service. Field names and step
//! identifiers are part of the service's API and must not change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::RaidLevel;

mod serde_size;

/// Body of a "set RAID configuration" request.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct TargetRaidConfig {
    pub logical_disks: Vec<LogicalDisk>,
}

/// A logical disk to be built on the node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogicalDisk {
    /// Size in GiB, `0` takes all available capacity.
    #[serde(with = "serde_size")]
    pub size_gb: u64,

    pub raid_level: RaidLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<DiskType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_physical_disks: Option<u32>,

    /// `software` for software RAID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,

    /// Hint maps selecting the physical disks of a software RAID volume.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub physical_disks: Vec<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_root_volume: Option<bool>,
}

impl LogicalDisk {
    pub fn new(size_gb: u64, raid_level: RaidLevel) -> Self {
        LogicalDisk {
            size_gb,
            raid_level,
            volume_name: None,
            disk_type: None,
            number_of_physical_disks: None,
            controller: None,
            physical_disks: Vec::new(),
            is_root_volume: None,
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Hash, Eq, PartialEq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiskType {
    Hdd,
    Ssd,
}

/// One idempotent maintenance operation, executed by the provisioning service
/// in list order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CleanStep {
    pub interface: CleanStepInterface,

    pub step: CleanStepName,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub args: BTreeMap<String, serde_json::Value>,
}

impl CleanStep {
    pub fn new(interface: CleanStepInterface, step: CleanStepName) -> Self {
        CleanStep {
            interface,
            step,
            args: BTreeMap::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    pub fn delete_raid_configuration() -> Self {
        Self::new(CleanStepInterface::Raid, CleanStepName::DeleteConfiguration)
    }

    pub fn create_raid_configuration() -> Self {
        Self::new(CleanStepInterface::Raid, CleanStepName::CreateConfiguration)
    }

    pub fn erase_devices_metadata() -> Self {
        Self::new(CleanStepInterface::Deploy, CleanStepName::EraseDevicesMetadata)
    }
}

impl std::fmt::Display for CleanStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.interface, self.step)
    }
}

/// Subsystem interface a clean step runs on.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Hash, Eq, PartialEq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CleanStepInterface {
    Raid,
    Deploy,
    Bios,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Hash, Eq, PartialEq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CleanStepName {
    DeleteConfiguration,
    CreateConfiguration,
    EraseDevicesMetadata,
    ApplyConfiguration,
}

/// A single vendor-specific BIOS setting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BiosSetting {
    pub name: String,
    pub value: String,
}
