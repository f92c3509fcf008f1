use std::str::FromStr;

use log::LevelFilter;

use crate::config::BoxDropConfig;
use crate::errors::BoxDropError;

#[test]
fn test_builtin_defaults() {
    let config = BoxDropConfig::default();

    assert_eq!(config.default_roi_size, 512);
    assert_eq!(config.default_description, "cellularity(%)");
    assert_eq!(config.session_suffix, ".session.xml");
    assert_eq!(config.log_level, LevelFilter::Info);
}

#[test]
fn test_partial_override() {
    let config = BoxDropConfig::from_str("[roi]\ndefault_size = 256\n\n[logging]\nlevel = \"debug\"\n").unwrap();

    assert_eq!(config.default_roi_size, 256);
    assert_eq!(config.log_level, LevelFilter::Debug);
    assert_eq!(config.default_description, "cellularity(%)");
}

#[test]
fn test_parse_through_str() {
    let config: BoxDropConfig = "[session]\nsuffix = \".roi.xml\"\n".parse().unwrap();

    assert_eq!(config.session_suffix, ".roi.xml");
    assert_eq!(config.default_roi_size, 512);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(BoxDropConfig::from_str("[roi]\ndefault_size = 0\n"), Err(BoxDropError::Config(_))));
    assert!(matches!(BoxDropConfig::from_str("[session]\nsuffix = \"\"\n"), Err(BoxDropError::Config(_))));
    assert!(matches!(BoxDropConfig::from_str("[logging]\nlevel = \"loud\"\n"), Err(BoxDropError::Config(_))));
    assert!(matches!(BoxDropConfig::from_str("[roi\n"), Err(BoxDropError::Config(_))));
}
