mod format;
mod validate;

use alloy_primitives::{
    utils::{format_ether, format_units},
    Bytes, U256,
};
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use evmrpc_eth::{
    client::EthRpcClient,
    resolver::{self, ResolvedBlock},
    BlockSpec, CallRequest,
};
use format::OutputFormat;

#[derive(Parser)]
#[command(
    name = "evmrpc",
    version,
    about = "Inspect the state of an Ethereum-compatible chain over JSON-RPC"
)]
struct Cli {
    /// RPC URL endpoint
    #[arg(short, long, env = "RPC_URL")]
    url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Get the current block number
    BlockNumber,
    /// Get the balance of an address
    Balance {
        /// Ethereum address
        address: String,
        /// Block tag (latest, earliest, pending, safe, finalized, or a block
        /// number)
        #[arg(short, long, default_value = "latest")]
        block: String,
    },
    /// Make a read-only call to a smart contract
    Call {
        /// Contract address
        to: String,
        /// Call data (hex)
        #[arg(short, long, default_value = "0x")]
        data: String,
        /// From address
        #[arg(long)]
        from: Option<String>,
        /// Gas limit
        #[arg(short, long)]
        gas: Option<String>,
        /// Gas price
        #[arg(short = 'p', long)]
        gas_price: Option<String>,
        /// Value to send
        #[arg(short, long)]
        value: Option<String>,
        /// Block tag
        #[arg(short, long, default_value = "latest")]
        block: String,
    },
    /// Get transaction details by hash
    Tx {
        /// Transaction hash
        hash: String,
    },
    /// Get a transaction receipt by hash
    Receipt {
        /// Transaction hash
        hash: String,
    },
    /// Get a block by number, tag, or hash
    Block {
        /// Block number (hex or decimal), block tag, or block hash
        identifier: String,
        /// Include full transaction details
        #[arg(short, long)]
        transactions: bool,
        /// Report the finality status of the block
        #[arg(short, long)]
        status: bool,
    },
    /// Get the code stored at an address
    Code {
        /// Contract address
        address: String,
        /// Block tag
        #[arg(short, long, default_value = "latest")]
        block: String,
    },
    /// Get blockchain information
    Info,
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = EthRpcClient::new(&cli.url)?;
    let format = cli.format;

    match cli.command {
        Command::BlockNumber => {
            let block_number = client.block_number().await?;
            print_value(&serde_json::to_value(block_number)?, format);
        }
        Command::Balance { address, block } => {
            let address = validate::parse_address(&address)?;
            let block = parse_block_spec(&block)?;

            let balance = client.get_balance(address, Some(block)).await?;
            if format == OutputFormat::Pretty {
                println!("Balance: {balance:#x} wei ({} ETH)", format_ether(balance));
            } else {
                print_value(&serde_json::to_value(balance)?, format);
            }
        }
        Command::Call {
            to,
            data,
            from,
            gas,
            gas_price,
            value,
            block,
        } => {
            let to = validate::parse_address(&to).context("Invalid contract address")?;
            let block = parse_block_spec(&block)?;

            let request = CallRequest {
                from: from
                    .map(|from| {
                        from.parse()
                            .map_err(|_| anyhow!("Invalid from address: '{from}'"))
                    })
                    .transpose()?,
                to: Some(to),
                gas: gas.map(|gas| parse_quantity(&gas, "gas")).transpose()?,
                gas_price: gas_price
                    .map(|gas_price| parse_quantity(&gas_price, "gas price"))
                    .transpose()?,
                value: value
                    .map(|value| parse_quantity(&value, "value"))
                    .transpose()?,
                data: Some(
                    data.parse::<Bytes>()
                        .map_err(|_| anyhow!("Invalid call data: '{data}'"))?,
                ),
            };

            let result = client.call(request, Some(block)).await?;
            print_value(&serde_json::to_value(result)?, format);
        }
        Command::Tx { hash } => {
            let hash = validate::parse_tx_hash(&hash)?;

            let transaction = client
                .get_transaction_by_hash(hash)
                .await?
                .ok_or_else(|| anyhow!("Transaction '{hash}' not found"))?;
            print_value(&serde_json::to_value(transaction)?, format);
        }
        Command::Receipt { hash } => {
            let hash = validate::parse_tx_hash(&hash)?;

            let receipt = client
                .get_transaction_receipt(hash)
                .await?
                .ok_or_else(|| anyhow!("Transaction receipt for '{hash}' not found"))?;
            print_value(&serde_json::to_value(receipt)?, format);
        }
        Command::Block {
            identifier,
            transactions,
            status,
        } => {
            let resolution =
                resolver::resolve_block(&client, &identifier, transactions, status).await?;

            let block = match &resolution.block {
                ResolvedBlock::Hashes(block) => serde_json::to_value(block)?,
                ResolvedBlock::Full(block) => serde_json::to_value(block)?,
            };

            match resolution.finality {
                Some(finality) if format == OutputFormat::Json => {
                    let annotated = serde_json::json!({"block": block, "status": finality});
                    print_value(&annotated, format);
                }
                Some(finality) => {
                    print_value(&block, format);
                    println!("Status: {finality}");
                }
                None => print_value(&block, format),
            }
        }
        Command::Code { address, block } => {
            let address = validate::parse_address(&address)?;
            let block = parse_block_spec(&block)?;

            let code = client.get_code(address, Some(block)).await?;
            print_value(&serde_json::to_value(code)?, format);
        }
        Command::Info => {
            let info = client.chain_info().await?;
            let gas_price_gwei = format_units(info.gas_price, "gwei")?;

            let info = serde_json::json!({
                "blockNumber": format!("{:#x} ({})", info.block_number, info.block_number),
                "chainId": format!("{:#x} ({})", info.chain_id, info.chain_id),
                "gasPrice": format!("{:#x} ({} gwei)", info.gas_price, gas_price_gwei),
            });
            print_value(&info, format);
        }
    }

    Ok(())
}

fn print_value(value: &serde_json::Value, format: OutputFormat) {
    println!("{}", format::render(value, format));
}

fn parse_quantity(value: &str, what: &str) -> anyhow::Result<U256> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid {what}: '{value}'"))
}

fn parse_block_spec(value: &str) -> anyhow::Result<BlockSpec> {
    value
        .parse()
        .with_context(|| format!("Invalid block tag: '{value}'"))
}
