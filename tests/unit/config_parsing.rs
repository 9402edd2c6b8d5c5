//! Unit tests for TOML configuration parsing.

use stepper_axes::config::{load_config, MachineConfig, PinSpec};

/// Test parsing a full axis section from TOML.
#[test]
fn test_parse_axis_config() {
    let toml_str = r#"
[axes.y]
steps_per_mm = 100.0
max_rate_mm_per_min = 5000.0
acceleration_mm_per_sec2 = 200.0
max_travel_mm = 250.0

[axes.y.homing]
cycle = 2
positive_direction = true
mpos_mm = 250.0
feed_mm_per_min = 100.0
seek_mm_per_min = 2000.0
settle_ms = 100
seek_scaler = 1.5
feed_scaler = 1.2
allow_single_axis = false
"#;

    let config: MachineConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axes.axis(1).expect("Axis not found");

    assert_eq!(axis.steps_per_mm, 100.0);
    assert_eq!(axis.max_rate.0, 5000.0);
    assert_eq!(axis.acceleration.0, 200.0);
    assert_eq!(axis.max_travel.0, 250.0);

    let homing = axis.homing.as_ref().expect("Homing not found");
    assert!(homing.is_enabled());
    assert_eq!(homing.cycle, Some(2));
    assert!(homing.positive_direction);
    assert_eq!(homing.mpos.0, 250.0);
    assert_eq!(homing.feed_rate.0, 100.0);
    assert_eq!(homing.seek_rate.0, 2000.0);
    assert_eq!(homing.settle_ms, 100);
    assert!(!homing.allow_single_axis);
}

/// Test defaults applied to an empty axis section.
#[test]
fn test_axis_defaults() {
    let config: MachineConfig = toml::from_str("[axes.a]\n").expect("Failed to parse TOML");
    let axis = config.axes.a.as_ref().expect("Axis not found");

    assert_eq!(axis.steps_per_mm, 80.0);
    assert!(axis.homing.is_none());
    assert!(axis.motor0.is_none());
    assert!(axis.motor1.is_none());
    assert_eq!(config.axes.configured_count(), 1);
}

/// Test parsing shared stepper lines and limit pins.
#[test]
fn test_parse_pins() {
    let toml_str = r#"
[axes]
shared_stepper_disable_pin = "gpio.13:low"
shared_stepper_reset_pin = "NO_PIN"

[axes.x.motor0]
limit_neg_pin = "gpio.17:pu"
"#;

    let config: MachineConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(config.axes.shared_stepper_disable_pin.is_defined());
    assert_eq!(config.axes.shared_stepper_disable_pin.as_str(), "gpio.13:low");
    assert!(!config.axes.shared_stepper_reset_pin.is_defined());

    let motor = config.axes.x.as_ref().and_then(|x| x.motor0.as_ref()).unwrap();
    assert!(motor.has_limit_switch());
    assert!(!motor.limit_pos_pin.is_defined());
    assert!(!PinSpec::default().is_defined());
}

/// Test loading a configuration file from disk.
#[test]
fn test_load_config_file() {
    let path = std::env::temp_dir().join("stepper_axes_load_config_test.toml");
    std::fs::write(
        &path,
        "[stepping]\npulse_us = 3\n\n[axes.x]\nsteps_per_mm = 320.0\n",
    )
    .expect("Failed to write config");

    let config = load_config(&path).expect("Failed to load config");
    assert_eq!(config.stepping.pulse_us, 3);
    assert_eq!(config.axes.x.as_ref().map(|x| x.steps_per_mm), Some(320.0));

    let _ = std::fs::remove_file(&path);
}
