#![warn(missing_docs)]

//! Generic JSON-RPC 2.0 client over HTTP

mod client;

/// Types specific to JSON-RPC
pub mod jsonrpc;

pub use client::{RpcClient, RpcClientError};
