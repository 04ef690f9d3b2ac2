use alloy_primitives::{Address, B256};

use crate::block_spec::BlockSpec;

/// Either a single value or a list of values.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum OneOrMore<T> {
    /// a single value
    One(T),
    /// a list of values
    Many(Vec<T>),
}

/// Filter options for `eth_getLogs`
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilterOptions {
    /// start of the block range, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockSpec>,
    /// end of the block range, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockSpec>,
    /// restrict to logs emitted by these addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<OneOrMore<Address>>,
    /// restrict to logs whose indexed topics match; a `None` entry matches
    /// any topic at that position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Option<OneOrMore<B256>>>>,
}
