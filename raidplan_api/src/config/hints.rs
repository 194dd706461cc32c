use serde::{Deserialize, Serialize};

/// Selects physical disks by their attributes instead of by identity.
///
/// Every field left at its zero value imposes no constraint.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RootDeviceHints {
    /// Linux device name, such as `/dev/sda`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device_name: String,

    /// SCSI address (`Host:Channel:Target:Lun`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hctl: String,

    /// Substring of the disk model.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,

    /// Substring of the disk vendor.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vendor: String,

    /// Disk serial number.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub serial_number: String,

    /// Minimum size of the disk in GB.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_size_gigabytes: u64,

    /// Unique storage identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wwn: String,

    /// Unique storage identifier with the vendor extension appended.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wwn_with_extension: String,

    /// Unique vendor storage identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wwn_vendor_extension: String,

    /// Restricts the match to HDDs (`true`) or SSDs (`false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotational: Option<bool>,
}

impl RootDeviceHints {
    /// True when no field constrains the disk selection.
    pub fn is_empty(&self) -> bool {
        crate::is_default(self)
    }
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_parse_hints() {
        let hints: RootDeviceHints = serde_yaml::from_str(indoc! {r#"
            deviceName: /dev/sda
            minSizeGigabytes: 500
            wwnWithExtension: "0x5000c500a0b1c2d3"
            rotational: false
        "#})
        .unwrap();

        assert_eq!(
            hints,
            RootDeviceHints {
                device_name: "/dev/sda".into(),
                min_size_gigabytes: 500,
                wwn_with_extension: "0x5000c500a0b1c2d3".into(),
                rotational: Some(false),
                ..Default::default()
            }
        );
        assert!(!hints.is_empty());
        assert!(RootDeviceHints::default().is_empty());

        serde_yaml::from_str::<RootDeviceHints>("size: 10").unwrap_err();
    }
}
