//! Unit tests for configuration validation.

use motor_shield::config::{validate_config, ShieldConfig};
use motor_shield::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[steppers.pan]
port = 1
steps_per_revolution = 200
rpm = 30

[dc_motors.pump]
header = 3
speed_percent = 100

[dc_motors.fan]
header = 4
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test a stepper and a DC motor on the same lines conflict.
#[test]
fn test_stepper_and_dc_motor_conflict() {
    let toml_str = r#"
[steppers.pan]
port = 1
steps_per_revolution = 200

[dc_motors.wheel]
header = 2
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);

    match result {
        Err(Error::Config(ConfigError::PortConflict { first, second })) => {
            assert_eq!(first.as_str(), "pan");
            assert_eq!(second.as_str(), "wheel");
        }
        other => panic!("Expected PortConflict, got {:?}", other),
    }
}

/// Test two steppers on the same port conflict.
#[test]
fn test_two_steppers_same_port() {
    let toml_str = r#"
[steppers.pan]
port = 2
steps_per_revolution = 200

[steppers.tilt]
port = 2
steps_per_revolution = 48
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::PortConflict { .. }))
    ));
}

/// Test a zero resolution stepper is rejected.
#[test]
fn test_zero_steps_per_revolution() {
    let toml_str = r#"
[steppers.pan]
port = 1
steps_per_revolution = 0
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::ZeroStepsPerRevolution))
    ));
}

/// Test a zero rpm speed is rejected.
#[test]
fn test_zero_rpm() {
    let toml_str = r#"
[steppers.pan]
port = 1
steps_per_revolution = 200
rpm = 0
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::ZeroSpeed))
    ));
}

/// Test DC speed above 100% is rejected.
#[test]
fn test_speed_percent_over_100() {
    let toml_str = r#"
[dc_motors.fan]
header = 1
speed_percent = 120
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSpeedPercent(120)))
    ));
}
