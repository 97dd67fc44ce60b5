//! Unit tests for TOML configuration parsing.

use motor_shield::config::{parse_config, ShieldConfig};
use motor_shield::error::{ConfigError, Error};
use motor_shield::{MicrostepCurve, MotorHeader, PortId};

/// Test parsing a fully specified stepper.
#[test]
fn test_parse_stepper_config() {
    let toml_str = r#"
[steppers.pan]
port = 1
steps_per_revolution = 48
microsteps = 8
rpm = 10
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let stepper = config.stepper("pan").expect("Stepper not found");

    assert_eq!(stepper.port, PortId::M1M2);
    assert_eq!(stepper.steps_per_revolution, 48);
    assert_eq!(stepper.microsteps, MicrostepCurve::Eighth);
    assert_eq!(stepper.rpm, Some(10));
    assert!(config.dc_motors.is_empty());
}

/// Test defaults for optional stepper fields.
#[test]
fn test_stepper_defaults() {
    let toml_str = r#"
[steppers.tilt]
port = 2
steps_per_revolution = 200
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let stepper = config.stepper("tilt").expect("Stepper not found");

    assert_eq!(stepper.microsteps, MicrostepCurve::Sixteenth);
    assert_eq!(stepper.rpm, None);
    assert_eq!(stepper.mask(), PortId::M3M4.mask());
}

/// Test parsing DC motors on every header.
#[test]
fn test_parse_dc_motors() {
    let toml_str = r#"
[dc_motors.left]
header = 1
speed_percent = 80

[dc_motors.right]
header = 2

[dc_motors.pump]
header = 3
speed_percent = 100

[dc_motors.fan]
header = 4
speed_percent = 25
"#;

    let config: ShieldConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.dc_motor("left").unwrap().header, MotorHeader::M1);
    assert_eq!(config.dc_motor("right").unwrap().speed_percent, 0);
    assert_eq!(config.dc_motor("pump").unwrap().header, MotorHeader::M3);
    assert_eq!(config.dc_motor("fan").unwrap().speed_percent, 25);

    let names: Vec<&str> = config.dc_motor_names().collect();
    assert_eq!(names, vec!["left", "right", "pump", "fan"]);
}

/// Test claims list every motor in declaration order.
#[test]
fn test_claims_cover_all_motors() {
    let toml_str = r#"
[steppers.pan]
port = 2
steps_per_revolution = 200

[dc_motors.left]
header = 1

[dc_motors.right]
header = 2
"#;

    let config = parse_config(toml_str).expect("Config should be valid");
    let claims: Vec<(&str, u8)> = config.claims().collect();

    assert_eq!(
        claims,
        vec![
            ("pan", PortId::M3M4.mask()),
            ("left", MotorHeader::M1.mask()),
            ("right", MotorHeader::M2.mask()),
        ]
    );
}

/// Test an empty document is an empty shield.
#[test]
fn test_empty_config() {
    let config = parse_config("").expect("Empty config should be valid");
    assert_eq!(config.stepper_names().count(), 0);
    assert_eq!(config.dc_motor_names().count(), 0);
}

/// Test out-of-range selectors surface as parse errors.
#[test]
fn test_invalid_selectors_rejected() {
    let bad_header = r#"
[dc_motors.left]
header = 5
"#;
    assert!(matches!(
        parse_config(bad_header),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));

    let bad_microsteps = r#"
[steppers.pan]
port = 1
steps_per_revolution = 200
microsteps = 32
"#;
    assert!(matches!(
        parse_config(bad_microsteps),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test a missing required field is reported.
#[test]
fn test_missing_steps_per_revolution() {
    let toml_str = r#"
[steppers.pan]
port = 1
"#;

    let result: Result<ShieldConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test the shield holds at most four motors of each kind.
#[test]
fn test_too_many_dc_motors() {
    let toml_str = r#"
[dc_motors.a]
header = 1
[dc_motors.b]
header = 2
[dc_motors.c]
header = 3
[dc_motors.d]
header = 4
[dc_motors.e]
header = 1
"#;

    assert!(parse_config(toml_str).is_err());
}
