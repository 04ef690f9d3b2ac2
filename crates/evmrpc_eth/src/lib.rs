#![warn(missing_docs)]

//! Ethereum JSON-RPC method bindings and block identifier resolution.

/// Types for Ethereum JSON-RPC blocks
pub mod block;
mod block_spec;
/// Input type for `eth_call` and `eth_estimateGas`
mod call_request;
/// The typed Ethereum JSON-RPC client
pub mod client;
/// Filter options for `eth_getLogs`
pub mod filter;
mod log_entry;
mod receipt;
mod request_methods;
/// Block identifier classification and finality status
pub mod resolver;
/// Helper utilities for serde
pub mod serde;
mod transaction;

pub use self::{
    block_spec::{BlockSpec, BlockTag, ParseBlockSpecError},
    call_request::CallRequest,
    log_entry::LogEntry,
    receipt::TransactionReceipt,
    request_methods::RequestMethod,
    transaction::Transaction,
};
