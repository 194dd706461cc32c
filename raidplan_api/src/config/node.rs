use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::{BmcType, FirmwareConfig, RaidConfig, RaidInterface, RootDeviceHints};

/// Desired state of a bare-metal node, as far as RAID and firmware are
/// concerned.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NodeConfiguration {
    /// RAID interface currently configured on the node's driver.
    #[serde(default)]
    pub raid_interface: RaidInterface,

    /// Address of the node's BMC. Only needed when firmware settings are
    /// requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmc_address: Option<String>,

    /// Desired RAID layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raid: Option<RaidConfig>,

    /// Desired firmware settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<FirmwareConfig>,

    /// Hints selecting the root device. When set, no RAID volume is marked as
    /// the root volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_device_hints: Option<RootDeviceHints>,
}

impl NodeConfiguration {
    /// Type of the node's BMC, if a BMC address is configured.
    pub fn bmc_type(&self) -> Result<Option<BmcType>, ValidationError> {
        self.bmc_address
            .as_deref()
            .map(BmcType::from_address)
            .transpose()
    }
}
