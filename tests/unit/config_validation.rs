//! Unit tests for configuration validation.

use stepper_axes::config::{parse_config, validate_config, MachineConfig};
use stepper_axes::error::ConfigError;
use stepper_axes::Error;

fn parse_unchecked(toml_str: &str) -> MachineConfig {
    toml::from_str(toml_str).expect("Failed to parse TOML")
}

#[test]
fn test_homing_runs_bounds() {
    for runs in 1..=5 {
        let config = parse_unchecked(&format!("[axes]\nhoming_runs = {runs}\n"));
        assert!(validate_config(&config).is_ok(), "{runs} runs should be valid");
    }

    for runs in [0, 6] {
        let config = parse_unchecked(&format!("[axes]\nhoming_runs = {runs}\n"));
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidHomingRuns(r))) if r == runs
        ));
    }
}

#[test]
fn test_zero_pulse_width_rejected() {
    let result = parse_config("[stepping]\npulse_us = 0\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidPulseWidth(0)))
    ));
}

#[test]
fn test_zero_timer_frequency_rejected() {
    let result = parse_config("[stepping]\ntimer_frequency_hz = 0\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTimerFrequency(0)))
    ));
}

#[test]
fn test_negative_max_rate_rejected() {
    let result = parse_config("[axes.c]\nmax_rate_mm_per_min = -10.0\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMaxRate { axis: 'C', .. }))
    ));
}

#[test]
fn test_negative_travel_rejected() {
    let result = parse_config("[axes.b]\nmax_travel_mm = -1.0\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMaxTravel { axis: 'B', .. }))
    ));
}

#[test]
fn test_nan_values_rejected() {
    let result = parse_config("[axes.x]\nsteps_per_mm = nan\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepsPerMm { axis: 'X', value })) if value.is_nan()
    ));

    let result = parse_config("[axes.y]\nmax_rate_mm_per_min = nan\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMaxRate { axis: 'Y', .. }))
    ));

    let result = parse_config("[axes.z]\nmax_travel_mm = nan\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMaxTravel { axis: 'Z', .. }))
    ));
}

#[test]
fn test_infinite_acceleration_rejected() {
    let result = parse_config("[axes.a]\nacceleration_mm_per_sec2 = inf\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidAcceleration { axis: 'A', .. }))
    ));
}

#[test]
fn test_error_display() {
    let err = Error::Config(ConfigError::InvalidHomingRuns(9));
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid homing runs: 9. Must be 1-5"
    );
}
