//! Loading configuration from disk.

use std::io::Write;

use bondval_config::{ConfigError, PricingConfig};
use bondval_core::types::LeapDayPolicy;

#[test]
fn loads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[solver]\ntolerance = 1e-8\n\n[conventions]\nleap_day_policy = \"clamp_to_february28\""
    )
    .unwrap();

    let config = PricingConfig::from_file(file.path()).unwrap();
    assert_eq!(config.solver.tolerance, 1e-8);
    assert_eq!(
        config.conventions.leap_day_policy,
        LeapDayPolicy::ClampToFebruary28
    );
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = PricingConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[solver\nmax_iterations = ").unwrap();

    assert!(matches!(
        PricingConfig::from_file(file.path()),
        Err(ConfigError::Deserialization(_))
    ));
}
