//! Record mapper module
//!
//! One mapper per output table. Each turns the `data` subtree of a leaf
//! document into zero or more flat rows.

mod document;
mod mappers;
mod types;

pub use document::{Document, Node};
pub use mappers::{
    AggregatedTransactionMapper, AggregatedUserMapper, TopTransactionMapper, TopUserMapper,
    UserDeviceMapper,
};
pub use types::RecordMapper;

use crate::schema::TableKind;

/// Mapper for a table kind
pub fn mapper_for(kind: TableKind) -> Box<dyn RecordMapper> {
    match kind {
        TableKind::AggregatedUser => Box::new(AggregatedUserMapper),
        TableKind::AggregatedUserDevice => Box::new(UserDeviceMapper),
        TableKind::AggregatedTransaction => Box::new(AggregatedTransactionMapper),
        TableKind::TopUser => Box::new(TopUserMapper),
        TableKind::TopTransaction => Box::new(TopTransactionMapper),
    }
}
