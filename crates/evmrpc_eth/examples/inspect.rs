//! Demonstrates programmatic use of the client against a public endpoint.
//!
//! Run with `cargo run --example inspect`, optionally passing an RPC URL as
//! the first argument.

use std::{env, str::FromStr};

use alloy_primitives::{utils::format_ether, Address};
use anyhow::{Context, Result};
use evmrpc_eth::{client::EthRpcClient, BlockSpec};

const DEFAULT_RPC_URL: &str = "https://ethereum-rpc.publicnode.com";

/// The Ethereum Foundation donation address.
const EXAMPLE_ADDRESS: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";
/// The USDC token contract.
const CONTRACT_ADDRESS: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

#[tokio::main]
async fn main() -> Result<()> {
    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

    let client = EthRpcClient::new(&url)?;

    let info = client.chain_info().await?;
    println!(
        "Current block: {:#x} ({})",
        info.block_number, info.block_number
    );
    println!("Chain id: {}", info.chain_id);
    println!("Gas price: {} wei", info.gas_price);

    let address = Address::from_str(EXAMPLE_ADDRESS)?;
    let balance = client.get_balance(address, Some(BlockSpec::latest())).await?;
    println!("Balance of {address}: {} ETH", format_ether(balance));

    let block = client
        .get_block_by_number(BlockSpec::latest())
        .await?
        .context("the latest block should always exist")?;
    println!(
        "Latest block carries {} transactions and used {} of {} gas",
        block.transactions.len(),
        block.gas_used,
        block.gas_limit
    );

    let contract = Address::from_str(CONTRACT_ADDRESS)?;
    let code = client.get_code(contract, Some(BlockSpec::latest())).await?;
    println!(
        "{contract} {} a contract",
        if code.is_empty() { "is not" } else { "is" }
    );

    Ok(())
}
