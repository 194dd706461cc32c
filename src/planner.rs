use log::{debug, info};

use raidplan_api::{
    config::{RaidConfig, RaidInterface},
    error::RaidError,
    provisioning::CleanStep,
};

use crate::interface;

/// Builds the ordered clean steps that converge the node's RAID layout from
/// `actual` to `target`.
///
/// `create_configuration` only adds logical disks, so it is always preceded
/// by `delete_configuration` to make sure that only the desired logical disks
/// exist once cleaning is done. Neither input is modified: the comparison
/// runs on hardware-only or software-only projections of both documents.
#[tracing::instrument(skip_all)]
pub fn build_raid_clean_steps(
    raid_interface: RaidInterface,
    target: Option<&RaidConfig>,
    actual: Option<&RaidConfig>,
) -> Result<Vec<CleanStep>, RaidError> {
    let effective_interface = interface::check_raid_interface(raid_interface, target, actual)?;

    // Without a target there is nothing to converge to, keep what exists.
    let Some(target) = target else {
        return Ok(Vec::new());
    };

    // The branch follows the target document, not the effective interface:
    // an absent software volume list preserves what exists on the node.
    let steps = if target.software_volumes.is_some() {
        software_raid_steps(target, actual)
    } else if raid_interface == RaidInterface::NoRaid {
        Vec::new()
    } else {
        hardware_raid_steps(target, actual)
    };

    if steps.is_empty() {
        debug!("RAID configuration is up to date, no clean steps needed");
    } else {
        info!(
            "Planned RAID clean steps on interface '{}': {}",
            effective_interface,
            steps
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(steps)
}

fn software_raid_steps(target: &RaidConfig, actual: Option<&RaidConfig>) -> Vec<CleanStep> {
    if Some(target.software_view()) == actual.map(RaidConfig::software_view) {
        return Vec::new();
    }

    let wants_software = target.has_software_volumes();
    if !wants_software && !actual.is_some_and(RaidConfig::has_software_volumes) {
        return Vec::new();
    }

    let mut steps = vec![
        CleanStep::delete_raid_configuration(),
        CleanStep::erase_devices_metadata(),
    ];

    // An empty target only tears down the old configuration.
    if wants_software {
        steps.push(CleanStep::create_raid_configuration());
    }

    steps
}

fn hardware_raid_steps(target: &RaidConfig, actual: Option<&RaidConfig>) -> Vec<CleanStep> {
    // Keep the existing hardware RAID configuration if none is requested.
    if target.hardware_volumes.is_none() {
        return Vec::new();
    }

    if Some(target.hardware_view()) == actual.map(RaidConfig::hardware_view) {
        return Vec::new();
    }

    let mut steps = vec![CleanStep::delete_raid_configuration()];

    if target.has_hardware_volumes() {
        steps.push(CleanStep::create_raid_configuration());
    }

    steps
}
