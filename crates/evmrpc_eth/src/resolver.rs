use std::fmt;

use alloy_primitives::{B256, U256};
use evmrpc_client::RpcClientError;

use crate::{
    block::Block,
    block_spec::{BlockSpec, BlockTag},
    client::EthRpcClient,
    transaction::Transaction,
};

/// Error that occurs when resolving a user-supplied block identifier.
#[derive(Debug, thiserror::Error)]
pub enum ResolveBlockError {
    /// The identifier is neither a block hash, a tag, nor a well-formed
    /// block number. Detected locally, before any request is issued.
    #[error("Invalid block identifier: '{identifier}'")]
    InvalidIdentifier {
        /// the offending identifier
        identifier: String,
    },

    /// The referenced block does not exist on the node.
    #[error("Block '{identifier}' not found. The block may not exist yet.")]
    NotFound {
        /// the identifier that failed to resolve
        identifier: String,
    },

    /// The underlying RPC call failed.
    #[error(transparent)]
    Rpc(#[from] RpcClientError),
}

/// Finality classification of a block, determined by its position relative to
/// the `safe` and `finalized` tagged blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalityStatus {
    /// not yet safe; may still be reverted
    Pending,
    /// very unlikely to be reverted
    Safe,
    /// irreversible
    Finalized,
}

impl fmt::Display for FinalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FinalityStatus::Pending => "pending",
            FinalityStatus::Safe => "safe",
            FinalityStatus::Finalized => "finalized",
        })
    }
}

/// A resolved block, with transactions as hashes or as full objects
/// depending on the include-full-transactions flag of the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedBlock {
    /// transactions as hashes
    Hashes(Block<B256>),
    /// transactions as full objects
    Full(Block<Transaction>),
}

impl ResolvedBlock {
    /// Returns the block number, if the block is not pending.
    pub fn number(&self) -> Option<U256> {
        match self {
            ResolvedBlock::Hashes(block) => block.number,
            ResolvedBlock::Full(block) => block.number,
        }
    }
}

/// The outcome of a block identifier resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockResolution {
    /// the resolved block
    pub block: ResolvedBlock,
    /// finality classification, when status reporting was requested and the
    /// identifier was not a tag
    pub finality: Option<FinalityStatus>,
}

/// How a user-supplied identifier string was classified.
#[derive(Clone, Debug, PartialEq, Eq)]
enum BlockIdentifier {
    Hash(B256),
    Spec(BlockSpec),
}

/// Classifies an identifier, first match wins: a 66-character `0x`-prefixed
/// string is a block hash; one of the five block tags is used as-is; anything
/// else is parsed as a block number, base-16 with a `0x` prefix and base-10
/// otherwise. The hash check is length-and-prefix only, so a 66-character
/// string that is not valid hex commits to the hash path and fails there.
fn classify(identifier: &str) -> Result<BlockIdentifier, ResolveBlockError> {
    if identifier.starts_with("0x") && identifier.len() == 66 {
        let hash = identifier
            .parse::<B256>()
            .map_err(|_| ResolveBlockError::InvalidIdentifier {
                identifier: identifier.to_string(),
            })?;

        return Ok(BlockIdentifier::Hash(hash));
    }

    let spec =
        identifier
            .parse::<BlockSpec>()
            .map_err(|_| ResolveBlockError::InvalidIdentifier {
                identifier: identifier.to_string(),
            })?;

    Ok(BlockIdentifier::Spec(spec))
}

/// Resolves a user-supplied block identifier to a block, optionally
/// classifying its finality.
///
/// The finality classification cross-references the `safe` and `finalized`
/// tagged blocks, fetched concurrently after the primary lookup. It is only
/// computed for hash and number identifiers; asking for the status of a tag
/// is not meaningful.
pub async fn resolve_block(
    client: &EthRpcClient,
    identifier: &str,
    include_full_transactions: bool,
    with_status: bool,
) -> Result<BlockResolution, ResolveBlockError> {
    let classified = classify(identifier)?;

    let block = lookup(client, &classified, include_full_transactions)
        .await?
        .ok_or_else(|| ResolveBlockError::NotFound {
            identifier: identifier.to_string(),
        })?;

    let finality = if with_status && !matches!(classified, BlockIdentifier::Spec(BlockSpec::Tag(_)))
    {
        Some(finality_status(client, block.number()).await)
    } else {
        None
    };

    Ok(BlockResolution { block, finality })
}

async fn lookup(
    client: &EthRpcClient,
    identifier: &BlockIdentifier,
    include_full_transactions: bool,
) -> Result<Option<ResolvedBlock>, RpcClientError> {
    match identifier {
        BlockIdentifier::Hash(hash) => {
            if include_full_transactions {
                client
                    .get_block_by_hash_with_transaction_data(*hash)
                    .await
                    .map(|block| block.map(ResolvedBlock::Full))
            } else {
                client
                    .get_block_by_hash(*hash)
                    .await
                    .map(|block| block.map(ResolvedBlock::Hashes))
            }
        }
        BlockIdentifier::Spec(spec) => {
            if include_full_transactions {
                client
                    .get_block_by_number_with_transaction_data(spec.clone())
                    .await
                    .map(|block| block.map(ResolvedBlock::Full))
            } else {
                client
                    .get_block_by_number(spec.clone())
                    .await
                    .map(|block| block.map(ResolvedBlock::Hashes))
            }
        }
    }
}

/// Classifies a block by cross-referencing the `safe` and `finalized` tags.
///
/// The two secondary fetches are issued concurrently and the join degrades
/// gracefully: a failed or absent fetch collapses to an unknown bound rather
/// than aborting the resolution. Since `finalized <= safe <= latest` holds
/// for any chain state, checking the finalized bound first preserves that
/// ordering even when only one of the fetches succeeded.
async fn finality_status(client: &EthRpcClient, number: Option<U256>) -> FinalityStatus {
    // A pending block has no number and can never be classified higher.
    let Some(number) = number else {
        return FinalityStatus::Pending;
    };

    let safe = client.get_block_by_number(BlockSpec::safe());
    let finalized = client.get_block_by_number(BlockSpec::finalized());
    let (safe, finalized) = tokio::join!(safe, finalized);

    let safe_number = tag_block_number(safe, BlockTag::Safe);
    let finalized_number = tag_block_number(finalized, BlockTag::Finalized);

    if finalized_number.is_some_and(|finalized| number <= finalized) {
        FinalityStatus::Finalized
    } else if safe_number.is_some_and(|safe| number <= safe) {
        FinalityStatus::Safe
    } else {
        FinalityStatus::Pending
    }
}

fn tag_block_number(
    result: Result<Option<Block<B256>>, RpcClientError>,
    tag: BlockTag,
) -> Option<U256> {
    match result {
        Ok(block) => block.and_then(|block| block.number),
        Err(error) => {
            log::debug!("failed to fetch the '{tag}' block: {error}");
            None
        }
    }
}
