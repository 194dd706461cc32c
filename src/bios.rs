use log::debug;

use raidplan_api::{
    config::{BmcType, FirmwareConfig},
    error::{ConfigurationError, RaidError},
    provisioning::BiosSetting,
};

/// Vendor-specific names of the firmware settings and of their values.
struct BiosVocabulary {
    virtualization: &'static str,
    simultaneous_multithreading: &'static str,
    sriov: &'static str,
    enabled: &'static str,
    disabled: &'static str,
}

const IDRAC_VOCABULARY: BiosVocabulary = BiosVocabulary {
    virtualization: "ProcVirtualization",
    simultaneous_multithreading: "LogicalProc",
    sriov: "SriovGlobalEnable",
    enabled: "Enabled",
    disabled: "Disabled",
};

const ILO_VOCABULARY: BiosVocabulary = BiosVocabulary {
    virtualization: "ProcVirtualization",
    simultaneous_multithreading: "ProcHyperthreading",
    sriov: "Sriov",
    enabled: "Enabled",
    disabled: "Disabled",
};

const IRMC_VOCABULARY: BiosVocabulary = BiosVocabulary {
    virtualization: "cpu_vt_enabled",
    simultaneous_multithreading: "hyper_threading_enabled",
    sriov: "single_root_io_virtualization_support_enabled",
    enabled: "True",
    disabled: "False",
};

fn vocabulary(bmc: BmcType) -> Option<&'static BiosVocabulary> {
    match bmc {
        BmcType::Idrac => Some(&IDRAC_VOCABULARY),
        BmcType::Ilo4 | BmcType::Ilo5 => Some(&ILO_VOCABULARY),
        BmcType::Irmc => Some(&IRMC_VOCABULARY),
        BmcType::Ipmi | BmcType::Redfish => None,
    }
}

/// Translates the vendor-neutral firmware configuration into the BIOS
/// settings understood by the node's BMC.
pub fn build_bios_settings(
    bmc: Option<BmcType>,
    firmware: Option<&FirmwareConfig>,
) -> Result<Vec<BiosSetting>, RaidError> {
    let Some(firmware) = firmware.filter(|firmware| !firmware.is_empty()) else {
        return Ok(Vec::new());
    };

    let bmc = bmc.ok_or_else(|| RaidError::new(ConfigurationError::MissingBmcAddress))?;
    let vocabulary = vocabulary(bmc).ok_or_else(|| {
        RaidError::new(ConfigurationError::FirmwareSettingsUnsupported {
            bmc: bmc.to_string(),
        })
    })?;

    let settings: Vec<BiosSetting> = [
        (vocabulary.virtualization, firmware.virtualization_enabled),
        (
            vocabulary.simultaneous_multithreading,
            firmware.simultaneous_multithreading_enabled,
        ),
        (vocabulary.sriov, firmware.sriov_enabled),
    ]
    .into_iter()
    .filter_map(|(name, enabled)| {
        enabled.map(|enabled| BiosSetting {
            name: name.to_string(),
            value: if enabled {
                vocabulary.enabled
            } else {
                vocabulary.disabled
            }
            .to_string(),
        })
    })
    .collect();

    debug!("Built {} BIOS setting(s) for BMC type '{bmc}'", settings.len());
    Ok(settings)
}
