use log::debug;

use raidplan_api::{
    config::{NodeConfiguration, RaidConfig},
    constants::BIOS_SETTINGS_ARGUMENT,
    error::{InternalError, RaidError, RaidResultExt, ReportError},
    provisioning::{CleanStep, CleanStepInterface, CleanStepName},
};

use crate::{bios, planner};

/// Builds the manual cleaning steps for a node: the RAID steps converging
/// `actual` to the node's RAID configuration, followed by the BIOS step
/// applying the node's firmware settings.
#[tracing::instrument(skip_all)]
pub fn build_manual_cleaning_steps(
    node: &NodeConfiguration,
    actual: Option<&RaidConfig>,
) -> Result<Vec<CleanStep>, RaidError> {
    let mut steps =
        planner::build_raid_clean_steps(node.raid_interface, node.raid.as_ref(), actual)
            .message("Failed to build RAID clean steps")?;

    let settings = bios::build_bios_settings(node.bmc_type()?, node.firmware.as_ref())
        .message("Failed to build BIOS settings")?;

    if !settings.is_empty() {
        debug!("Applying {} BIOS setting(s)", settings.len());
        let settings =
            serde_json::to_value(&settings).structured(InternalError::SerializeBiosSettings)?;
        steps.push(
            CleanStep::new(CleanStepInterface::Bios, CleanStepName::ApplyConfiguration)
                .with_arg(BIOS_SETTINGS_ARGUMENT, settings),
        );
    }

    Ok(steps)
}
