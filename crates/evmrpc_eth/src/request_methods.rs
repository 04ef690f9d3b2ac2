use alloy_primitives::{Address, B256, U256};

use crate::{block_spec::BlockSpec, call_request::CallRequest, filter::LogFilterOptions};

/// Methods that can be invoked on a remote Ethereum node. Serializes into the
/// `method` and `params` members of a JSON-RPC request.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// eth_blockNumber
    #[serde(rename = "eth_blockNumber", with = "crate::serde::empty_params")]
    BlockNumber(()),
    /// eth_chainId
    #[serde(rename = "eth_chainId", with = "crate::serde::empty_params")]
    ChainId(()),
    /// eth_gasPrice
    #[serde(rename = "eth_gasPrice", with = "crate::serde::empty_params")]
    GasPrice(()),
    /// net_version
    #[serde(rename = "net_version", with = "crate::serde::empty_params")]
    NetVersion(()),
    /// eth_getBalance
    #[serde(rename = "eth_getBalance")]
    GetBalance(
        Address,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// eth_getCode
    #[serde(rename = "eth_getCode")]
    GetCode(
        Address,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// eth_getStorageAt
    #[serde(rename = "eth_getStorageAt")]
    GetStorageAt(
        Address,
        /// position in the storage
        U256,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// eth_getTransactionCount
    #[serde(rename = "eth_getTransactionCount")]
    GetTransactionCount(
        Address,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// eth_call
    #[serde(rename = "eth_call")]
    Call(
        CallRequest,
        #[serde(skip_serializing_if = "Option::is_none")] Option<BlockSpec>,
    ),
    /// eth_estimateGas
    #[serde(rename = "eth_estimateGas", with = "crate::serde::sequence")]
    EstimateGas(CallRequest),
    /// eth_getTransactionByHash
    #[serde(rename = "eth_getTransactionByHash", with = "crate::serde::sequence")]
    GetTransactionByHash(B256),
    /// eth_getTransactionReceipt
    #[serde(rename = "eth_getTransactionReceipt", with = "crate::serde::sequence")]
    GetTransactionReceipt(B256),
    /// eth_getBlockByHash
    #[serde(rename = "eth_getBlockByHash")]
    GetBlockByHash(
        B256,
        /// include full transaction objects
        bool,
    ),
    /// eth_getBlockByNumber
    #[serde(rename = "eth_getBlockByNumber")]
    GetBlockByNumber(
        BlockSpec,
        /// include full transaction objects
        bool,
    ),
    /// eth_getLogs
    #[serde(rename = "eth_getLogs", with = "crate::serde::sequence")]
    GetLogs(LogFilterOptions),
}
