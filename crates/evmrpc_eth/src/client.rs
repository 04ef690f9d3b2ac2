use alloy_primitives::{Address, Bytes, B256, U256};
use evmrpc_client::RpcClient;
pub use evmrpc_client::RpcClientError;

use crate::{
    block::Block, block_spec::BlockSpec, call_request::CallRequest, filter::LogFilterOptions,
    log_entry::LogEntry, receipt::TransactionReceipt, request_methods::RequestMethod,
    transaction::Transaction,
};

/// Chain-wide information fetched in a single concurrent sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainInfo {
    /// the current block number
    pub block_number: U256,
    /// the chain id
    pub chain_id: U256,
    /// the current gas price in wei
    pub gas_price: U256,
}

/// A client for the Ethereum JSON-RPC API of a remote node.
///
/// Methods that look up an entity by identity (`eth_getTransactionByHash`,
/// `eth_getTransactionReceipt`, `eth_getBlockBy*`) return `Option`: the
/// protocol reports "unknown to the node" as a null result rather than an
/// error, and callers need to branch on existence without parsing error
/// codes. All other methods never return an absent value on success.
#[derive(Debug)]
pub struct EthRpcClient {
    inner: RpcClient<RequestMethod>,
}

impl EthRpcClient {
    /// Creates a new instance, given a remote node URL.
    pub fn new(url: &str) -> Result<Self, RpcClientError> {
        let inner = RpcClient::new(url)?;
        Ok(Self { inner })
    }

    /// Calls `eth_blockNumber` and returns the block number.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn block_number(&self) -> Result<U256, RpcClientError> {
        self.inner.call(RequestMethod::BlockNumber(())).await
    }

    /// Calls `eth_chainId` and returns the chain ID.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn chain_id(&self) -> Result<U256, RpcClientError> {
        self.inner.call(RequestMethod::ChainId(())).await
    }

    /// Calls `eth_gasPrice` and returns the current gas price in wei.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn gas_price(&self) -> Result<U256, RpcClientError> {
        self.inner.call(RequestMethod::GasPrice(())).await
    }

    /// Calls `net_version` and returns the network id as a decimal string.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn network_version(&self) -> Result<String, RpcClientError> {
        self.inner.call(RequestMethod::NetVersion(())).await
    }

    /// Calls `eth_getBalance`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_balance(
        &self,
        address: Address,
        block: Option<BlockSpec>,
    ) -> Result<U256, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBalance(address, block))
            .await
    }

    /// Calls `eth_getCode`. An account without code yields `0x`, never an
    /// absent value.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_code(
        &self,
        address: Address,
        block: Option<BlockSpec>,
    ) -> Result<Bytes, RpcClientError> {
        self.inner
            .call(RequestMethod::GetCode(address, block))
            .await
    }

    /// Calls `eth_getStorageAt`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_storage_at(
        &self,
        address: Address,
        position: U256,
        block: Option<BlockSpec>,
    ) -> Result<B256, RpcClientError> {
        self.inner
            .call(RequestMethod::GetStorageAt(address, position, block))
            .await
    }

    /// Calls `eth_getTransactionCount`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_count(
        &self,
        address: Address,
        block: Option<BlockSpec>,
    ) -> Result<U256, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionCount(address, block))
            .await
    }

    /// Calls `eth_call`. A revert surfaces as a JSON-RPC error, not as an
    /// absent value.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn call(
        &self,
        request: CallRequest,
        block: Option<BlockSpec>,
    ) -> Result<Bytes, RpcClientError> {
        self.inner.call(RequestMethod::Call(request, block)).await
    }

    /// Calls `eth_estimateGas`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn estimate_gas(&self, request: CallRequest) -> Result<U256, RpcClientError> {
        self.inner.call(RequestMethod::EstimateGas(request)).await
    }

    /// Calls `eth_getTransactionByHash`. Returns `None` when the transaction
    /// is unknown to the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_hash(
        &self,
        transaction_hash: B256,
    ) -> Result<Option<Transaction>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionByHash(transaction_hash))
            .await
    }

    /// Calls `eth_getTransactionReceipt`. Returns `None` while the
    /// transaction is unmined, or when it is unknown to the node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_receipt(
        &self,
        transaction_hash: B256,
    ) -> Result<Option<TransactionReceipt>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionReceipt(transaction_hash))
            .await
    }

    /// Calls `eth_getBlockByHash` with transactions as hashes. Returns `None`
    /// when no block with the given hash exists.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_hash(
        &self,
        hash: B256,
    ) -> Result<Option<Block<B256>>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBlockByHash(hash, false))
            .await
    }

    /// Calls `eth_getBlockByHash` with full transaction objects.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_hash_with_transaction_data(
        &self,
        hash: B256,
    ) -> Result<Option<Block<Transaction>>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBlockByHash(hash, true))
            .await
    }

    /// Calls `eth_getBlockByNumber` with transactions as hashes. Returns
    /// `None` when the referenced block does not exist, e.g. for a block
    /// number beyond the chain tip.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number(
        &self,
        spec: BlockSpec,
    ) -> Result<Option<Block<B256>>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBlockByNumber(spec, false))
            .await
    }

    /// Calls `eth_getBlockByNumber` with full transaction objects.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number_with_transaction_data(
        &self,
        spec: BlockSpec,
    ) -> Result<Option<Block<Transaction>>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBlockByNumber(spec, true))
            .await
    }

    /// Calls `eth_getLogs`. A filter that matches nothing yields an empty
    /// sequence, never an absent value.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_logs(
        &self,
        filter: LogFilterOptions,
    ) -> Result<Vec<LogEntry>, RpcClientError> {
        self.inner.call(RequestMethod::GetLogs(filter)).await
    }

    /// Fetches the current block number, chain id, and gas price
    /// concurrently. The join is all-or-nothing: the first failure aborts
    /// the whole sweep.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn chain_info(&self) -> Result<ChainInfo, RpcClientError> {
        let block_number = self.block_number();
        let chain_id = self.chain_id();
        let gas_price = self.gas_price();

        let (block_number, chain_id, gas_price) =
            tokio::try_join!(block_number, chain_id, gas_price)?;

        Ok(ChainInfo {
            block_number,
            chain_id,
            gas_price,
        })
    }
}
