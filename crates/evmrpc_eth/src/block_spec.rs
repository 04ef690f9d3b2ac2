use std::{fmt, str::FromStr};

use alloy_primitives::U256;

/// A block tag, denoting a relative chain position rather than an absolute
/// number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// latest
    Latest,
    /// earliest
    Earliest,
    /// pending
    Pending,
    /// safe
    Safe,
    /// finalized
    Finalized,
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockTag::Latest => "latest",
            BlockTag::Earliest => "earliest",
            BlockTag::Pending => "pending",
            BlockTag::Safe => "safe",
            BlockTag::Finalized => "finalized",
        })
    }
}

impl FromStr for BlockTag {
    type Err = ParseBlockSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(BlockTag::Latest),
            "earliest" => Ok(BlockTag::Earliest),
            "pending" => Ok(BlockTag::Pending),
            "safe" => Ok(BlockTag::Safe),
            "finalized" => Ok(BlockTag::Finalized),
            _ => Err(ParseBlockSpecError(s.to_string())),
        }
    }
}

/// A block number or tag argument to a JSON-RPC method. Block hashes are
/// passed to the dedicated `eth_getBlockByHash` method instead.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum BlockSpec {
    /// as a block number
    Number(U256),
    /// as a block tag
    Tag(BlockTag),
}

macro_rules! impl_block_tag_constructors {
    ($($name:ident => $variant:ident),* $(,)?) => {
        impl BlockSpec {
            $(
                #[doc = concat!("Constructs an instance for the `", stringify!($name), "` tag.")]
                pub fn $name() -> Self {
                    BlockSpec::Tag(BlockTag::$variant)
                }
            )*
        }
    };
}

impl_block_tag_constructors! {
    latest => Latest,
    earliest => Earliest,
    pending => Pending,
    safe => Safe,
    finalized => Finalized,
}

impl fmt::Display for BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockSpec::Number(number) => write!(f, "{number:#x}"),
            BlockSpec::Tag(tag) => tag.fmt(f),
        }
    }
}

/// Error that occurs when a string is neither a block tag nor a well-formed
/// block number.
#[derive(Debug, thiserror::Error)]
#[error("Invalid block spec: '{0}'")]
pub struct ParseBlockSpecError(String);

impl FromStr for BlockSpec {
    type Err = ParseBlockSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(tag) = s.parse::<BlockTag>() {
            return Ok(BlockSpec::Tag(tag));
        }

        let (digits, radix) = match s.strip_prefix("0x") {
            Some(digits) => (digits, 16),
            None => (s, 10),
        };

        if digits.is_empty() {
            return Err(ParseBlockSpecError(s.to_string()));
        }

        let number = U256::from_str_radix(digits, radix)
            .map_err(|_| ParseBlockSpecError(s.to_string()))?;

        Ok(BlockSpec::Number(number))
    }
}
