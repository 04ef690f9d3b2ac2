use alloy_primitives::{Address, B256, U256};

use crate::log_entry::LogEntry;

/// Receipt of a mined transaction, returned by `eth_getTransactionReceipt`.
/// A receipt only exists once the transaction has been included in a block.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// hash of the transaction
    pub transaction_hash: B256,
    /// index of the transaction within the block
    pub transaction_index: U256,
    /// hash of the block containing the transaction
    pub block_hash: B256,
    /// number of the block containing the transaction
    pub block_number: U256,
    /// address of the sender
    pub from: Address,
    /// address of the receiver. null when its a contract creation transaction.
    pub to: Option<Address>,
    /// total gas used by the block up to and including this transaction
    pub cumulative_gas_used: U256,
    /// gas used by this transaction alone
    pub gas_used: U256,
    /// address of the created contract, if the transaction was a contract
    /// creation
    pub contract_address: Option<Address>,
    /// log entries emitted during execution, in order
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    /// `0x1` if execution succeeded, `0x0` if it reverted
    pub status: U256,
}

impl TransactionReceipt {
    /// Whether the transaction executed successfully.
    pub fn is_success(&self) -> bool {
        self.status == U256::from(1)
    }
}
