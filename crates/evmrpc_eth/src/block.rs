use alloy_primitives::{Address, B256, U256};

/// block object returned by `eth_getBlockBy*`
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block<TransactionT> {
    /// the block number. None when its pending block.
    pub number: Option<U256>,
    /// Hash of the block. None when its pending block.
    pub hash: Option<B256>,
    /// hash of the parent block.
    pub parent_hash: B256,
    /// the unix timestamp for when the block was collated
    pub timestamp: U256,
    /// the maximum gas allowed in this block
    pub gas_limit: U256,
    /// the total used gas by all transactions in this block
    pub gas_used: U256,
    /// the address of the beneficiary to whom the mining rewards were given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miner: Option<Address>,
    /// Array of transaction objects, or 32 Bytes transaction hashes depending
    /// on the include-full-transactions flag of the request
    #[serde(default)]
    pub transactions: Vec<TransactionT>,
}
