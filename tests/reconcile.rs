//! End-to-end reconciliation scenarios, driven from node configuration
//! documents the way callers feed them in.

use indoc::indoc;
use serde_json::json;

use raidplan::{
    build_manual_cleaning_steps, build_raid_clean_steps, build_target_raid_cfg,
    build_target_raid_config, check_raid_interface, validation,
};
use raidplan_api::{
    config::{RaidConfig, RaidInterface},
    error::{ErrorKind, ValidationError},
    provisioning::CleanStep,
};

fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}

fn raid(yaml: &str) -> RaidConfig {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_hardware_raid_from_scratch() {
    init_logging();

    let target = raid(indoc! {r#"
        hardwareRAIDVolumes:
          - level: "1"
            sizeGibibytes: 100
    "#});

    assert_eq!(
        build_raid_clean_steps(RaidInterface::Idrac, Some(&target), None).unwrap(),
        vec![
            CleanStep::delete_raid_configuration(),
            CleanStep::create_raid_configuration(),
        ]
    );
}

#[test]
fn test_software_raid_teardown() {
    init_logging();

    let target = raid("softwareRAIDVolumes: []");
    let actual = raid(indoc! {r#"
        softwareRAIDVolumes:
          - level: "1"
    "#});

    assert_eq!(
        check_raid_interface(RaidInterface::Idrac, Some(&target), Some(&actual)).unwrap(),
        RaidInterface::Agent
    );
    assert_eq!(
        build_raid_clean_steps(RaidInterface::Agent, Some(&target), Some(&actual)).unwrap(),
        vec![
            CleanStep::delete_raid_configuration(),
            CleanStep::erase_devices_metadata(),
        ]
    );
}

#[test]
fn test_converged_state_is_idempotent() {
    init_logging();

    let documents = [
        (
            RaidInterface::Ilo5,
            indoc! {r#"
                hardwareRAIDVolumes:
                  - name: os
                    level: "1"
                    sizeGibibytes: 200
                    rotational: false
                  - name: data
                    level: "5+0"
                    numberOfPhysicalDisks: 6
            "#},
        ),
        (
            RaidInterface::Agent,
            indoc! {r#"
                softwareRAIDVolumes:
                  - level: "1"
                    sizeGibibytes: 100
                    physicalDisks:
                      - serialNumber: S3Z9NB0K
                      - serialNumber: S3Z9NB0L
                  - level: "0"
            "#},
        ),
        (RaidInterface::Redfish, "hardwareRAIDVolumes: []"),
        (RaidInterface::Fake, "{}"),
    ];

    for (interface, document) in documents {
        let config = raid(document);
        assert!(
            build_raid_clean_steps(interface, Some(&config), Some(&config.clone()))
                .unwrap()
                .is_empty(),
            "{document}"
        );
    }
}

#[test]
fn test_set_raid_config_request() {
    init_logging();

    let node = validation::parse_node_configuration(indoc! {r#"
        raidInterface: agent
        raid:
          softwareRAIDVolumes:
            - level: "1"
              sizeGibibytes: 100
              physicalDisks:
                - deviceName: /dev/sda
                - minSizeGigabytes: 500
                  rotational: false
            - level: "1+0"
    "#})
    .unwrap();
    validation::validate_node_configuration(&node, None).unwrap();

    let target = build_target_raid_config(&node).unwrap().unwrap();
    assert_eq!(
        serde_json::to_value(&target).unwrap(),
        json!({
            "logical_disks": [
                {
                    "size_gb": 100,
                    "raid_level": "1",
                    "controller": "software",
                    "physical_disks": [
                        {"name": "s== /dev/sda"},
                        {"size": ">= 500", "rotational": "false"},
                    ],
                    "is_root_volume": true,
                },
                {
                    "size_gb": "MAX",
                    "raid_level": "1+0",
                    "controller": "software",
                },
            ]
        })
    );
}

#[test]
fn test_root_device_hints_keep_root_volume_unset() {
    let node = validation::parse_node_configuration(indoc! {r#"
        raidInterface: idrac
        rootDeviceHints:
          wwn: "0x5000c500a0b1c2d3"
        raid:
          hardwareRAIDVolumes:
            - name: os
              level: "1"
    "#})
    .unwrap();

    let target = build_target_raid_config(&node).unwrap().unwrap();
    assert_eq!(target.logical_disks.len(), 1);
    assert_eq!(target.logical_disks[0].is_root_volume, None);
}

#[test]
fn test_duplicate_volume_names() {
    let target = raid(indoc! {r#"
        hardwareRAIDVolumes:
          - name: a
            level: "1"
          - name: a
            level: "1"
    "#});

    let err = build_target_raid_cfg(Some(&target)).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::Validation(ValidationError::DuplicateVolumeName {
            name: "a".into(),
            index: 1,
            previous_index: 0,
        })
    );

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["category"], json!("validation"));
    assert_eq!(
        value["error"],
        json!({"duplicate-volume-name": {"name": "a", "index": 1, "previous_index": 0}})
    );
}

#[test]
fn test_manual_cleaning_with_bios() {
    init_logging();

    let node = validation::parse_node_configuration(indoc! {r#"
        raidInterface: ilo5
        bmcAddress: ilo5-redfish://10.0.0.7
        raid:
          hardwareRAIDVolumes: []
        firmware:
          virtualizationEnabled: false
    "#})
    .unwrap();
    let actual = raid(indoc! {r#"
        hardwareRAIDVolumes:
          - level: "6"
    "#});

    assert_eq!(
        serde_json::to_value(build_manual_cleaning_steps(&node, Some(&actual)).unwrap()).unwrap(),
        json!([
            {"interface": "raid", "step": "delete_configuration"},
            {
                "interface": "bios",
                "step": "apply_configuration",
                "args": {"settings": [{"name": "ProcVirtualization", "value": "Disabled"}]},
            },
        ])
    );
}
