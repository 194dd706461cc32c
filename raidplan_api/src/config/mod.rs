mod firmware;
mod hints;
mod interface;
mod node;
mod raid;

pub use firmware::{BmcType, FirmwareConfig};
pub use hints::RootDeviceHints;
pub use interface::RaidInterface;
pub use node::NodeConfiguration;
pub use raid::{HardwareRaidVolume, RaidConfig, RaidLevel, SoftwareRaidVolume};
