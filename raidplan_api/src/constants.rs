// Logical disk constants

/// Controller name that marks a logical disk as software RAID.
pub const SOFTWARE_RAID_CONTROLLER: &str = "software";

/// Wire value of a logical disk size that takes all available capacity.
pub const LOGICAL_DISK_SIZE_MAX: &str = "MAX";

// Device hint operators

/// Exact string match.
pub const HINT_OPERATOR_STRING_EQUAL: &str = "s==";

/// Substring match.
pub const HINT_OPERATOR_CONTAINS: &str = "<in>";

/// Numeric greater-or-equal.
pub const HINT_OPERATOR_GREATER_OR_EQUAL: &str = ">=";

// Clean step argument keys

/// Argument carrying the list of BIOS settings of an `apply_configuration` step.
pub const BIOS_SETTINGS_ARGUMENT: &str = "settings";
