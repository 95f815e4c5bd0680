//! Tests for layout module

use super::*;
use crate::error::ErrorKind;
use chrono::NaiveDate;
use std::path::PathBuf;

fn root() -> PathBuf {
    PathBuf::from("/data/aggregated/user/country/india")
}

// ============================================================================
// Classification Tests
// ============================================================================

#[test]
fn test_is_state_group() {
    assert!(is_state_group("state"));
    assert!(is_state_group("maharashtra-state"));
    assert!(!is_state_group("2018"));
    assert!(!is_state_group("State"));
}

#[test]
fn test_classify_year() {
    let role = classify_child(&root().join("2018")).unwrap();
    assert_eq!(role, DirectoryRole::Year(2018));
}

#[test]
fn test_classify_state_group() {
    let role = classify_child(&root().join("state")).unwrap();
    assert_eq!(role, DirectoryRole::StateGroup);
}

#[test]
fn test_classify_non_integer_year() {
    let err = classify_child(&root().join("latest")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(matches!(err, Error::InvalidYear { ref name, .. } if name == "latest"));
}

// ============================================================================
// Locate Tests
// ============================================================================

#[test]
fn test_locate_country_leaf() {
    let leaf = root().join("2018/1.json");
    let location = locate(&root(), &leaf).unwrap();

    assert_eq!(location.scope, GeoScope::country());
    assert_eq!(location.scope.level.as_str(), "country");
    assert_eq!(location.scope.name, "india");
    assert_eq!(location.year, 2018);
    assert_eq!(location.quarter, Quarter::Q1);
    assert_eq!(location.path, leaf);
}

#[test]
fn test_locate_state_leaf() {
    let leaf = root().join("state/maharashtra-state/2019/2.json");
    let location = locate(&root(), &leaf).unwrap();

    assert_eq!(location.scope.level, GeoLevel::State);
    assert_eq!(location.scope.name, "maharashtra-state");
    assert_eq!(location.year, 2019);
    assert_eq!(location.quarter, Quarter::Q2);
}

#[test]
fn test_locate_state_name_is_lower_cased() {
    let leaf = root().join("state/Andaman-&-Nicobar-Islands/2020/4.json");
    let location = locate(&root(), &leaf).unwrap();
    assert_eq!(location.scope.name, "andaman-&-nicobar-islands");
}

#[test]
fn test_locate_synthetic_path_list() {
    let leaves = [
        "2018/1.json",
        "2018/4.json",
        "state/bihar/2021/3.json",
        "state/goa/2018/2.json",
    ];

    let located: Vec<(GeoLevel, String, i32, u32)> = leaves
        .iter()
        .map(|l| locate(&root(), &root().join(l)).unwrap())
        .map(|l| (l.scope.level, l.scope.name, l.year, l.quarter.index()))
        .collect();

    assert_eq!(
        located,
        vec![
            (GeoLevel::Country, "india".to_string(), 2018, 1),
            (GeoLevel::Country, "india".to_string(), 2018, 4),
            (GeoLevel::State, "bihar".to_string(), 2021, 3),
            (GeoLevel::State, "goa".to_string(), 2018, 2),
        ]
    );
}

#[test]
fn test_locate_non_integer_year_in_state() {
    let leaf = root().join("state/goa/twenty/1.json");
    let err = locate(&root(), &leaf).unwrap_err();
    assert!(matches!(err, Error::InvalidYear { ref name, .. } if name == "twenty"));
}

#[test]
fn test_locate_unknown_quarter() {
    let leaf = root().join("2018/5.json");
    let err = locate(&root(), &leaf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedQuarter);
}

#[test]
fn test_locate_wrong_depth() {
    let err = locate(&root(), &root().join("2018/extra/1.json")).unwrap_err();
    assert!(matches!(err, Error::UnexpectedLayout { .. }));

    let err = locate(&root(), &root().join("state/goa/1.json")).unwrap_err();
    assert!(matches!(err, Error::UnexpectedLayout { .. }));
}

#[test]
fn test_locate_outside_root() {
    let err = locate(&root(), Path::new("/elsewhere/2018/1.json")).unwrap_err();
    assert!(matches!(err, Error::UnexpectedLayout { .. }));
}

#[test]
fn test_leaf_window() {
    let location = locate(&root(), &root().join("state/goa/2019/2.json")).unwrap();
    let window = location.window().unwrap();

    assert_eq!(window.year, 2019);
    assert_eq!(window.start_date, NaiveDate::from_ymd_opt(2019, 4, 1).unwrap());
    assert_eq!(window.end_date, NaiveDate::from_ymd_opt(2019, 6, 30).unwrap());
}

#[test]
fn test_geo_scope_serde() {
    let json = serde_json::to_value(GeoScope::state("Goa")).unwrap();
    assert_eq!(json, serde_json::json!({"level": "state", "name": "goa"}));
}
