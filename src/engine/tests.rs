//! Tests for engine module

use super::*;
use crate::database::MemorySink;
use crate::error::{Error, ErrorKind};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn write(root: &Path, relative: &str, value: &serde_json::Value) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, value.to_string()).unwrap();
}

/// One country file and one state file per domain
fn export_tree() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let user = json!({
        "data": {
            "aggregated": {"registeredUsers": 10, "appOpens": 20},
            "usersByDevice": [
                {"brand": "Xiaomi", "count": 6, "percentage": 0.6},
                {"brand": "Apple", "count": 4, "percentage": 0.4}
            ]
        }
    });
    write(root, "aggregated/user/country/india/2021/1.json", &user);
    write(root, "aggregated/user/country/india/state/goa/2021/1.json", &user);

    let transaction = json!({
        "data": {
            "transactionData": [{
                "name": "Recharge & bill payments",
                "paymentInstruments": [{"type": "TOTAL", "count": 3, "amount": 99.5}]
            }]
        }
    });
    write(root, "aggregated/transaction/country/india/2021/1.json", &transaction);
    write(
        root,
        "aggregated/transaction/country/india/state/goa/2021/1.json",
        &transaction,
    );

    let top_user = json!({
        "data": {
            "states": [{"name": "goa", "registeredUsers": 7}],
            "districts": [{"name": "north goa", "registeredUsers": 5}],
            "pincodes": null
        }
    });
    write(root, "top/user/country/india/2021/1.json", &top_user);
    write(root, "top/user/country/india/state/goa/2021/1.json", &top_user);

    let top_transaction = json!({
        "data": {
            "states": null,
            "districts": [{
                "entityName": "north goa",
                "metric": {"type": "TOTAL", "count": 8, "amount": 12.0}
            }],
            "pincodes": [{
                "entityName": "403001",
                "metric": {"type": "TOTAL", "count": 2, "amount": 1.5}
            }]
        }
    });
    write(root, "top/transaction/country/india/2021/1.json", &top_transaction);
    write(
        root,
        "top/transaction/country/india/state/goa/2021/1.json",
        &top_transaction,
    );

    dir
}

// ============================================================================
// LoadConfig Tests
// ============================================================================

#[test]
fn test_load_config_defaults() {
    let config = LoadConfig::default();
    assert_eq!(config.tables, TableKind::ALL.to_vec());
    assert_eq!(config.batch_size, 1000);
}

#[test]
fn test_load_config_builder() {
    let config = LoadConfig::new()
        .with_tables(vec![TableKind::TopTransaction, TableKind::AggregatedUser])
        .with_batch_size(0);

    assert_eq!(config.batch_size, 1);
    assert_eq!(
        config.ordered_tables(),
        vec![TableKind::AggregatedUser, TableKind::TopTransaction]
    );
}

#[test]
fn test_ordered_tables_drops_duplicates() {
    let config = LoadConfig::new().with_tables(vec![TableKind::TopUser, TableKind::TopUser]);
    assert_eq!(config.ordered_tables(), vec![TableKind::TopUser]);
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_run_loads_every_table() {
    let dir = export_tree();
    let mut sink = MemorySink::new();

    let summary = Pipeline::new(dir.path()).run(&mut sink).unwrap();

    let counts: Vec<(TableKind, usize)> = summary
        .tables
        .iter()
        .map(|t| (t.table, t.rows_inserted))
        .collect();
    assert_eq!(
        counts,
        vec![
            (TableKind::AggregatedUserDevice, 4),
            (TableKind::AggregatedUser, 2),
            (TableKind::AggregatedTransaction, 2),
            (TableKind::TopUser, 4),
            (TableKind::TopTransaction, 4),
        ]
    );
    assert_eq!(summary.total_rows(), 16);

    let users = sink.rows(TableKind::AggregatedUser);
    assert_eq!(users[0].record["aggregated_by"], json!("country"));
    assert_eq!(users[1].record["aggregated_by"], json!("state"));
    assert_eq!(users[1].record["aggregate_name"], json!("goa"));
}

#[test]
fn test_run_selected_tables_only() {
    let dir = export_tree();
    let mut sink = MemorySink::new();

    let summary = Pipeline::new(dir.path())
        .with_config(LoadConfig::new().with_tables(vec![TableKind::TopUser]))
        .run(&mut sink)
        .unwrap();

    assert_eq!(summary.tables.len(), 1);
    assert_eq!(summary.table(TableKind::TopUser).unwrap().table_total, 4);
    assert!(summary.table(TableKind::AggregatedUser).is_none());
    assert_eq!(sink.tables().collect::<Vec<_>>(), vec![TableKind::TopUser]);
}

#[test]
fn test_small_batches_insert_everything() {
    let dir = export_tree();
    let mut sink = MemorySink::new();
    sink.create_table(&TableSchema::for_kind(TableKind::TopTransaction))
        .unwrap();

    let load = Pipeline::new(dir.path())
        .with_config(LoadConfig::new().with_batch_size(3))
        .load_table(TableKind::TopTransaction, &mut sink)
        .unwrap();

    assert_eq!(load.rows_inserted, 4);
    assert_eq!(load.table_total, 4);
}

#[test]
fn test_failure_keeps_earlier_tables() {
    let dir = export_tree();
    fs::write(
        dir.path()
            .join("aggregated/transaction/country/india/2021/2.json"),
        "not json",
    )
    .unwrap();

    let mut sink = MemorySink::new();
    let err = Pipeline::new(dir.path()).run(&mut sink).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(sink.rows(TableKind::AggregatedUserDevice).len(), 4);
    assert_eq!(sink.rows(TableKind::AggregatedUser).len(), 2);
    assert!(sink.rows(TableKind::AggregatedTransaction).is_empty());
    assert!(sink.rows(TableKind::TopUser).is_empty());
    assert_eq!(sink.tables().count(), 5);
}

#[test]
fn test_missing_domain_is_an_error() {
    let dir = tempdir().unwrap();
    let mut sink = MemorySink::new();

    let err = Pipeline::new(dir.path()).run(&mut sink).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}
