use std::{
    any::Any,
    collections::{hash_map::Entry, HashMap},
    panic::{self, UnwindSafe},
};

use log::{debug, info};

use raidplan_api::{
    config::{
        HardwareRaidVolume, NodeConfiguration, RaidConfig, RaidLevel, RootDeviceHints,
        SoftwareRaidVolume,
    },
    constants::SOFTWARE_RAID_CONTROLLER,
    error::{InternalError, RaidError, ValidationError},
    provisioning::{DiskType, LogicalDisk, TargetRaidConfig},
};

use crate::hints;

/// Builds the logical disks for the target RAID configuration.
///
/// Hardware volumes take precedence over software volumes; the two are never
/// built together. No disk is marked as the root volume, see
/// [`assign_root_volume`].
#[tracing::instrument(skip_all)]
pub fn build_target_raid_cfg(raid: Option<&RaidConfig>) -> Result<Vec<LogicalDisk>, RaidError> {
    contain_panics(|| build_logical_disks(raid))
}

/// Builds the body of a "set RAID configuration" request for the node, or
/// `None` when the node requests no logical disks.
pub fn build_target_raid_config(
    node: &NodeConfiguration,
) -> Result<Option<TargetRaidConfig>, RaidError> {
    let mut logical_disks = build_target_raid_cfg(node.raid.as_ref())?;
    if logical_disks.is_empty() {
        return Ok(None);
    }

    assign_root_volume(&mut logical_disks, node.root_device_hints.as_ref());
    Ok(Some(TargetRaidConfig { logical_disks }))
}

/// Marks the first logical disk as the root volume, unless root-device hints
/// already select the root device.
pub fn assign_root_volume(
    logical_disks: &mut [LogicalDisk],
    root_device_hints: Option<&RootDeviceHints>,
) {
    let Some(first) = logical_disks.first_mut() else {
        return;
    };

    if root_device_hints.is_some_and(|hints| !hints.is_empty()) {
        info!("Root device hints are set, the first RAID volume will not be the root volume");
        return;
    }

    first.is_root_volume = Some(true);
}

/// Runs `build`, turning a panic into an internal error.
fn contain_panics<T, F>(build: F) -> Result<T, RaidError>
where
    F: FnOnce() -> Result<T, RaidError> + UnwindSafe,
{
    panic::catch_unwind(build).unwrap_or_else(|payload| {
        Err(RaidError::new(InternalError::BuildPanic {
            message: panic_message(payload.as_ref()),
        }))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn build_logical_disks(raid: Option<&RaidConfig>) -> Result<Vec<LogicalDisk>, RaidError> {
    let Some(raid) = raid else {
        return Ok(Vec::new());
    };

    if raid.has_hardware_volumes() {
        build_hardware_disks(raid.hardware_volumes())
    } else if raid.has_software_volumes() {
        build_software_disks(raid.software_volumes())
    } else {
        Ok(Vec::new())
    }
}

fn build_hardware_disks(volumes: &[HardwareRaidVolume]) -> Result<Vec<LogicalDisk>, RaidError> {
    debug!("Building {} hardware RAID logical disk(s)", volumes.len());

    let mut names: HashMap<&str, usize> = HashMap::new();
    volumes
        .iter()
        .enumerate()
        .map(|(index, volume)| {
            if !volume.name.is_empty() {
                match names.entry(volume.name.as_str()) {
                    Entry::Occupied(previous) => {
                        return Err(RaidError::new(ValidationError::DuplicateVolumeName {
                            name: volume.name.clone(),
                            index,
                            previous_index: *previous.get(),
                        }));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                    }
                }
            }

            Ok(LogicalDisk {
                volume_name: (!volume.name.is_empty()).then(|| volume.name.clone()),
                disk_type: volume.rotational.map(|rotational| {
                    if rotational {
                        DiskType::Hdd
                    } else {
                        DiskType::Ssd
                    }
                }),
                number_of_physical_disks: volume.number_of_physical_disks,
                ..LogicalDisk::new(volume.size_gibibytes, volume.level)
            })
        })
        .collect()
}

fn build_software_disks(volumes: &[SoftwareRaidVolume]) -> Result<Vec<LogicalDisk>, RaidError> {
    debug!("Building {} software RAID logical disk(s)", volumes.len());

    // The deploy agent builds the first software volume as a RAID1 holding
    // the boot partitions.
    if let Some(first) = volumes.first() {
        if first.level != RaidLevel::Raid1 {
            return Err(RaidError::new(
                ValidationError::SoftwareRaidFirstVolumeNotRaid1 {
                    level: first.level.to_string(),
                },
            ));
        }
    }

    Ok(volumes
        .iter()
        .map(|volume| LogicalDisk {
            controller: Some(SOFTWARE_RAID_CONTROLLER.to_string()),
            physical_disks: volume
                .physical_disks
                .iter()
                .map(|hints| hints::make_hint_map(Some(hints)))
                .collect(),
            ..LogicalDisk::new(volume.size_gibibytes, volume.level)
        })
        .collect())
}
