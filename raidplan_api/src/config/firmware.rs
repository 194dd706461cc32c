use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::ValidationError;

/// Vendor-neutral firmware (BIOS) settings of a node.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FirmwareConfig {
    /// Allows a single physical processor core to appear as several logical
    /// processors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simultaneous_multithreading_enabled: Option<bool>,

    /// SR-IOV support enables a hypervisor to create virtual instances of a
    /// PCI-express device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sriov_enabled: Option<bool>,

    /// Supports the virtualization of platform hardware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtualization_enabled: Option<bool>,
}

impl FirmwareConfig {
    pub fn is_empty(&self) -> bool {
        crate::is_default(self)
    }
}

/// Kind of baseboard management controller, derived from the scheme of the
/// BMC address.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum BmcType {
    Ipmi,

    Idrac,

    #[strum(serialize = "ilo4")]
    Ilo4,

    #[strum(serialize = "ilo5")]
    Ilo5,

    Irmc,

    Redfish,
}

impl BmcType {
    /// Derives the BMC type from an address such as `idrac://10.0.0.1` or
    /// `redfish-virtualmedia+https://bmc/redfish/v1/Systems/1`. An address
    /// without a scheme is an IPMI address.
    pub fn from_address(address: &str) -> Result<Self, ValidationError> {
        let Some((scheme, _)) = address.split_once("://") else {
            return Ok(BmcType::Ipmi);
        };

        // Strip the transport suffix, e.g. `+https`.
        let driver = scheme.split('+').next().unwrap_or(scheme);

        Ok(match driver {
            "ipmi" | "libvirt" => BmcType::Ipmi,
            "idrac" | "idrac-redfish" | "idrac-virtualmedia" => BmcType::Idrac,
            "ilo4" | "ilo4-virtualmedia" => BmcType::Ilo4,
            "ilo5" | "ilo5-virtualmedia" | "ilo5-redfish" => BmcType::Ilo5,
            "irmc" | "irmc-virtualmedia" => BmcType::Irmc,
            "redfish" | "redfish-virtualmedia" | "redfish-uefihttp" => BmcType::Redfish,
            _ => {
                return Err(ValidationError::UnknownBmcType {
                    address: address.to_string(),
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmc_type_from_address() {
        assert_eq!(BmcType::from_address("10.0.0.1").unwrap(), BmcType::Ipmi);
        assert_eq!(
            BmcType::from_address("ipmi://10.0.0.1:623").unwrap(),
            BmcType::Ipmi
        );
        assert_eq!(
            BmcType::from_address("idrac://10.0.0.1").unwrap(),
            BmcType::Idrac
        );
        assert_eq!(
            BmcType::from_address("idrac-virtualmedia+https://10.0.0.1/redfish/v1/Systems/1")
                .unwrap(),
            BmcType::Idrac
        );
        assert_eq!(
            BmcType::from_address("ilo4-virtualmedia://10.0.0.1").unwrap(),
            BmcType::Ilo4
        );
        assert_eq!(
            BmcType::from_address("ilo5-redfish://10.0.0.1").unwrap(),
            BmcType::Ilo5
        );
        assert_eq!(
            BmcType::from_address("irmc://10.0.0.1").unwrap(),
            BmcType::Irmc
        );
        assert_eq!(
            BmcType::from_address("redfish+http://10.0.0.1/redfish/v1/Systems/1").unwrap(),
            BmcType::Redfish
        );
        assert_eq!(
            BmcType::from_address("vbmc://10.0.0.1").unwrap_err(),
            ValidationError::UnknownBmcType {
                address: "vbmc://10.0.0.1".into()
            }
        );
    }

    #[test]
    fn test_bmc_type_names() {
        assert_eq!(BmcType::Ilo4.to_string(), "ilo4");
        assert_eq!(BmcType::Redfish.to_string(), "redfish");
    }

    #[test]
    fn test_firmware_config_is_empty() {
        assert!(FirmwareConfig::default().is_empty());
        assert!(!FirmwareConfig {
            sriov_enabled: Some(false),
            ..Default::default()
        }
        .is_empty());
    }
}
