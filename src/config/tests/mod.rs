//! Tests for configuration helpers.

use camino::Utf8PathBuf;

use crate::error::CoverageError;

use super::{OperationMode, StubbleConfig};

#[test]
fn defaults_to_idle_mode() {
    let config = StubbleConfig::default();
    assert_eq!(config.operation_mode(), OperationMode::Idle);
}

#[test]
fn generate_missing_selects_report_mode() {
    let config = StubbleConfig {
        generate_missing: true,
        ..StubbleConfig::default()
    };
    assert_eq!(config.operation_mode(), OperationMode::GenerateMissing);
}

#[test]
fn require_features_rejects_an_empty_list() {
    let config = StubbleConfig::default();
    let error = config
        .require_features()
        .expect_err("empty feature list should be rejected");
    assert_eq!(error, CoverageError::MissingFeaturePaths);
}

#[test]
fn require_features_returns_the_configured_paths() {
    let config = StubbleConfig {
        features: vec!["features".to_owned(), "extra/login.feature".to_owned()],
        ..StubbleConfig::default()
    };
    let paths = config.require_features().expect("paths should be returned");
    assert_eq!(
        paths,
        vec![
            Utf8PathBuf::from("features"),
            Utf8PathBuf::from("extra/login.feature"),
        ]
    );
}

#[test]
fn no_color_switches_to_plain_styling() {
    let config = StubbleConfig {
        no_color: true,
        ..StubbleConfig::default()
    };
    let style = config.report_style();
    assert_eq!(style.alert("alert"), "alert");
}
