//! Mapper implementations
//!
//! Each mapper handles one output table.

use super::document::{Document, Node};
use super::types::RecordMapper;
use crate::error::Result;
use crate::schema::{TableKind, TOP_ENTITY_TYPES};
use crate::types::{JsonValue, Record};

fn record<const N: usize>(fields: [(&str, JsonValue); N]) -> Record {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Non-null lists under `data.states`, `data.pincodes` and `data.districts`,
/// paired with their key.
fn top_entries<'a>(data: &Node<'a>) -> Result<Vec<(&'static str, Node<'a>)>> {
    let mut entries = Vec::new();
    for key in TOP_ENTITY_TYPES.iter().copied() {
        let list = data.get(key)?;
        if list.is_null() {
            continue;
        }
        for item in list.items()? {
            entries.push((key, item));
        }
    }
    Ok(entries)
}

// ============================================================================
// Aggregated Users
// ============================================================================

/// `data.aggregated` totals, one row per file
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatedUserMapper;

impl RecordMapper for AggregatedUserMapper {
    fn table(&self) -> TableKind {
        TableKind::AggregatedUser
    }

    fn map(&self, document: &Document) -> Result<Vec<Record>> {
        let aggregated = document.data()?.get("aggregated")?;
        Ok(vec![record([
            ("users", aggregated.get("registeredUsers")?.to_value()),
            ("app_opens", aggregated.get("appOpens")?.to_value()),
        ])])
    }
}

// ============================================================================
// Users By Device
// ============================================================================

/// `data.usersByDevice`, one row per brand
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDeviceMapper;

impl RecordMapper for UserDeviceMapper {
    fn table(&self) -> TableKind {
        TableKind::AggregatedUserDevice
    }

    fn map(&self, document: &Document) -> Result<Vec<Record>> {
        let devices = match document.data()?.member("usersByDevice")? {
            Some(list) if !list.is_null() => list.items()?,
            _ => return Ok(Vec::new()),
        };

        devices
            .iter()
            .map(|device| {
                Ok(record([
                    ("brand", device.get("brand")?.to_value()),
                    ("count", device.get("count")?.to_value()),
                    ("percentage", device.get("percentage")?.to_value()),
                ]))
            })
            .collect()
    }
}

// ============================================================================
// Aggregated Transactions
// ============================================================================

/// `data.transactionData`, one row per entry.
///
/// Only the first payment instrument of an entry is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatedTransactionMapper;

impl RecordMapper for AggregatedTransactionMapper {
    fn table(&self) -> TableKind {
        TableKind::AggregatedTransaction
    }

    fn map(&self, document: &Document) -> Result<Vec<Record>> {
        document
            .data()?
            .get("transactionData")?
            .items()?
            .iter()
            .map(|entry| {
                let instrument = entry.get("paymentInstruments")?.at(0)?;
                Ok(record([
                    ("name", entry.get("name")?.to_value()),
                    ("type", instrument.get("type")?.to_value()),
                    ("count", instrument.get("count")?.to_value()),
                    ("amount", instrument.get("amount")?.to_value()),
                ]))
            })
            .collect()
    }
}

// ============================================================================
// Top Users
// ============================================================================

/// Top states / pincodes / districts by registered users
#[derive(Debug, Clone, Copy, Default)]
pub struct TopUserMapper;

impl RecordMapper for TopUserMapper {
    fn table(&self) -> TableKind {
        TableKind::TopUser
    }

    fn map(&self, document: &Document) -> Result<Vec<Record>> {
        top_entries(&document.data()?)?
            .iter()
            .map(|(key, item)| {
                Ok(record([
                    ("name", item.get("name")?.to_value()),
                    ("registered_users", item.get("registeredUsers")?.to_value()),
                    ("type", JsonValue::from(*key)),
                ]))
            })
            .collect()
    }
}

// ============================================================================
// Top Transactions
// ============================================================================

/// Top states / pincodes / districts by transactions
#[derive(Debug, Clone, Copy, Default)]
pub struct TopTransactionMapper;

impl RecordMapper for TopTransactionMapper {
    fn table(&self) -> TableKind {
        TableKind::TopTransaction
    }

    fn map(&self, document: &Document) -> Result<Vec<Record>> {
        top_entries(&document.data()?)?
            .iter()
            .map(|(key, item)| {
                let metric = item.get("metric")?;
                Ok(record([
                    ("entity_name", item.get("entityName")?.to_value()),
                    ("entity_type", JsonValue::from(*key)),
                    ("type", metric.get("type")?.to_value()),
                    ("count", metric.get("count")?.to_value()),
                    ("amount", metric.get("amount")?.to_value()),
                ]))
            })
            .collect()
    }
}
