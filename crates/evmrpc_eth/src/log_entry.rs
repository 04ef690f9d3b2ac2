use alloy_primitives::{Address, Bytes, B256, U256};

/// A log entry emitted by a contract, as returned by `eth_getLogs` and
/// carried inside transaction receipts.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// address from which the log originated
    pub address: Address,
    /// up to four indexed topics
    pub topics: Vec<B256>,
    /// non-indexed payload of the log
    pub data: Bytes,
    /// number of the block containing the log. null when its pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<U256>,
    /// hash of the transaction that emitted the log. null when its pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    /// index of the log within the block. null when its pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_index: Option<U256>,
    /// true when the log was emitted by a block that was later excluded by a
    /// chain reorganization. Surfaced to the caller as-is, never filtered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
}
