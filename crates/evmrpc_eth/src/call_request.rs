use alloy_primitives::{Address, Bytes, U256};

/// For specifying input to methods requiring a transaction object, like
/// `eth_call` and `eth_estimateGas`
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// the address from which the transaction should be sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// the address to which the transaction should be sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// gas provided for the execution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    /// gas price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// value transferred in Wei
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// the call data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
}
