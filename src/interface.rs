use log::debug;

use raidplan_api::{
    config::{RaidConfig, RaidInterface},
    error::{ConfigurationError, RaidError},
};

/// Checks that the requested RAID interface can serve the RAID mode of the
/// target configuration, and returns the interface to use.
///
/// Software RAID is always served by the `agent` interface, both to build it
/// and to tear it down, so the interface is switched rather than rejected.
pub fn check_raid_interface(
    raid_interface: RaidInterface,
    target: Option<&RaidConfig>,
    actual: Option<&RaidConfig>,
) -> Result<RaidInterface, RaidError> {
    let Some(target) = target else {
        return Ok(raid_interface);
    };

    let wants_hardware = target.has_hardware_volumes();
    let wants_software = target.has_software_volumes();
    let has_software = actual.is_some_and(RaidConfig::has_software_volumes);

    match (raid_interface, wants_hardware, wants_software, has_software) {
        (RaidInterface::NoRaid, true, _, _) => {
            Err(RaidError::new(ConfigurationError::NoRaidSupport {
                interface: raid_interface.to_string(),
            }))
        }
        (RaidInterface::Agent, true, _, _) => {
            Err(RaidError::new(ConfigurationError::SoftwareRaidOnly {
                interface: raid_interface.to_string(),
            }))
        }
        (_, _, true, _) => {
            debug!(
                "Software RAID requested, using the '{}' RAID interface",
                RaidInterface::Agent
            );
            Ok(RaidInterface::Agent)
        }
        (_, _, false, true) => {
            debug!(
                "Software RAID is being removed, using the '{}' RAID interface",
                RaidInterface::Agent
            );
            Ok(RaidInterface::Agent)
        }
        _ => Ok(raid_interface),
    }
}
