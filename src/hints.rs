use std::collections::BTreeMap;

use raidplan_api::{
    config::RootDeviceHints,
    constants::{
        HINT_OPERATOR_CONTAINS, HINT_OPERATOR_GREATER_OR_EQUAL, HINT_OPERATOR_STRING_EQUAL,
    },
};

/// Encodes device hints into the operator-prefixed map understood by the
/// provisioning service. Fields at their zero value are left out; no hints
/// yield an empty map.
pub fn make_hint_map(hints: Option<&RootDeviceHints>) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let Some(hints) = hints else {
        return map;
    };

    let mut insert = |key: &str, operator: &str, value: &str| {
        if !value.is_empty() {
            map.insert(key.to_string(), format!("{operator} {value}"));
        }
    };

    insert("name", HINT_OPERATOR_STRING_EQUAL, &hints.device_name);
    insert("hctl", HINT_OPERATOR_STRING_EQUAL, &hints.hctl);
    insert("model", HINT_OPERATOR_CONTAINS, &hints.model);
    insert("vendor", HINT_OPERATOR_CONTAINS, &hints.vendor);
    insert("serial", HINT_OPERATOR_STRING_EQUAL, &hints.serial_number);
    insert("wwn", HINT_OPERATOR_STRING_EQUAL, &hints.wwn);
    insert(
        "wwn_with_extension",
        HINT_OPERATOR_STRING_EQUAL,
        &hints.wwn_with_extension,
    );
    insert(
        "wwn_vendor_extension",
        HINT_OPERATOR_STRING_EQUAL,
        &hints.wwn_vendor_extension,
    );

    if hints.min_size_gigabytes != 0 {
        map.insert(
            "size".to_string(),
            format!(
                "{HINT_OPERATOR_GREATER_OR_EQUAL} {}",
                hints.min_size_gigabytes
            ),
        );
    }

    if let Some(rotational) = hints.rotational {
        map.insert("rotational".to_string(), rotational.to_string());
    }

    map
}

#[cfg(test)]
mod tests {
    use maplit::btreemap;

    use super::*;

    #[test]
    fn test_no_hints() {
        assert!(make_hint_map(None).is_empty());
        assert!(make_hint_map(Some(&RootDeviceHints::default())).is_empty());
    }

    #[test]
    fn test_size_and_rotational() {
        let hints = RootDeviceHints {
            min_size_gigabytes: 500,
            rotational: Some(false),
            ..Default::default()
        };
        assert_eq!(
            make_hint_map(Some(&hints)),
            btreemap! {
                "size".to_string() => ">= 500".to_string(),
                "rotational".to_string() => "false".to_string(),
            }
        );
    }

    #[test]
    fn test_all_hints() {
        let hints = RootDeviceHints {
            device_name: "/dev/sda".into(),
            hctl: "1:0:0:0".into(),
            model: "PERC H730".into(),
            vendor: "DELL".into(),
            serial_number: "S3Z9NB0K".into(),
            min_size_gigabytes: 120,
            wwn: "0x5000c500a0b1c2d3".into(),
            wwn_with_extension: "0x5000c500a0b1c2d3a1".into(),
            wwn_vendor_extension: "0xa1".into(),
            rotational: Some(true),
        };
        assert_eq!(
            make_hint_map(Some(&hints)),
            btreemap! {
                "name".to_string() => "s== /dev/sda".to_string(),
                "hctl".to_string() => "s== 1:0:0:0".to_string(),
                "model".to_string() => "<in> PERC H730".to_string(),
                "vendor".to_string() => "<in> DELL".to_string(),
                "serial".to_string() => "s== S3Z9NB0K".to_string(),
                "size".to_string() => ">= 120".to_string(),
                "wwn".to_string() => "s== 0x5000c500a0b1c2d3".to_string(),
                "wwn_with_extension".to_string() => "s== 0x5000c500a0b1c2d3a1".to_string(),
                "wwn_vendor_extension".to_string() => "s== 0xa1".to_string(),
                "rotational".to_string() => "true".to_string(),
            }
        );
    }
}
