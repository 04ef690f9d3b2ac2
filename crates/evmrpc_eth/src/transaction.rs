use alloy_primitives::{Address, Bytes, B256, U256};

/// RPC transaction
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// hash of the transaction
    pub hash: B256,
    /// the number of transactions made by the sender prior to this one
    pub nonce: U256,
    /// hash of the block where this transaction was in. null when its pending
    pub block_hash: Option<B256>,
    /// block number where this transaction was in. null when its pending
    pub block_number: Option<U256>,
    /// integer of the transactions index position in the block. null when its
    /// pending
    pub transaction_index: Option<U256>,
    /// address of the sender
    pub from: Address,
    /// address of the receiver. null when its a contract creation transaction.
    pub to: Option<Address>,
    /// value transferred in Wei
    pub value: U256,
    /// gas price provided by the sender in Wei
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// gas provided by the sender
    pub gas: U256,
    /// the data sent along with the transaction
    pub input: Bytes,
}

impl Transaction {
    /// Whether the transaction is still waiting to be included in a block.
    /// The `blockHash`, `blockNumber`, and `transactionIndex` fields are only
    /// set once it has been mined.
    pub fn is_pending(&self) -> bool {
        self.block_hash.is_none()
    }
}
