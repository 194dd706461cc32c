use std::path::Path;

use log::info;

use raidplan_api::{
    config::{NodeConfiguration, RaidConfig},
    error::{InvalidInputError, RaidError, RaidResultExt, ReportError},
};

use crate::{bios, builder, interface};

/// Loads a node configuration document from a YAML (or JSON) file.
pub fn load_node_configuration(path: impl AsRef<Path>) -> Result<NodeConfiguration, RaidError> {
    let path = path.as_ref();
    info!("Loading node configuration file: {}", path.display());

    let contents = std::fs::read_to_string(path).structured(
        InvalidInputError::LoadNodeConfiguration {
            path: path.display().to_string(),
        },
    )?;

    parse_node_configuration(&contents)
        .message(format!("Failed to parse node configuration file: {}", path.display()))
}

/// Parses a node configuration document.
pub fn parse_node_configuration(contents: &str) -> Result<NodeConfiguration, RaidError> {
    serde_yaml::from_str::<NodeConfiguration>(contents)
        .structured(InvalidInputError::ParseNodeConfiguration)
}

/// Validates a node configuration against the node's observed RAID layout,
/// without producing any output.
pub fn validate_node_configuration(
    node: &NodeConfiguration,
    actual: Option<&RaidConfig>,
) -> Result<(), RaidError> {
    interface::check_raid_interface(node.raid_interface, node.raid.as_ref(), actual)?;
    builder::build_target_raid_cfg(node.raid.as_ref())?;
    bios::build_bios_settings(node.bmc_type()?, node.firmware.as_ref())?;

    info!("Node configuration is valid.");
    Ok(())
}

/// Loads and validates a node configuration file.
pub fn validate_node_configuration_file(path: impl AsRef<Path>) -> Result<(), RaidError> {
    let node = load_node_configuration(path.as_ref())?;
    validate_node_configuration(&node, None)
}
