//! Declarative RAID reconciliation for bare-metal nodes.
//!
//! Given the RAID layout a node should have and the layout it currently has,
//! this crate checks that the node's RAID interface can serve the request,
//! builds the logical disks to hand to the provisioning service, and plans
//! the ordered clean steps that converge the node to the desired layout. No
//! I/O happens here; executing the steps is up to the caller.

pub mod bios;
pub mod builder;
pub mod cleaning;
pub mod hints;
pub mod interface;
pub mod planner;
pub mod validation;

pub use builder::{assign_root_volume, build_target_raid_cfg, build_target_raid_config};
pub use cleaning::build_manual_cleaning_steps;
pub use interface::check_raid_interface;
pub use planner::build_raid_clean_steps;
