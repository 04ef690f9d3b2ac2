use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JSON-RPC protocol version. Only 2.0 is supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    /// Protocol version 2.0
    V2_0,
}

impl Serialize for Version {
    fn serialize<SerializerT: Serializer>(
        &self,
        serializer: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error> {
        match self {
            Version::V2_0 => serializer.serialize_str("2.0"),
        }
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<DeserializerT: Deserializer<'de>>(
        deserializer: DeserializerT,
    ) -> Result<Self, DeserializerT::Error> {
        struct VersionVisitor;

        impl serde::de::Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string")
            }

            fn visit_str<ErrorT: serde::de::Error>(self, value: &str) -> Result<Version, ErrorT> {
                match value {
                    "2.0" => Ok(Version::V2_0),
                    _ => Err(ErrorT::custom(format!(
                        "unsupported JSON-RPC version: {value}"
                    ))),
                }
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

/// Correlation id linking a request to its response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric id
    Num(u64),
    /// String id
    Str(String),
}

/// A JSON-RPC request envelope. The method name and its params are provided
/// by the method type, flattened into the envelope during serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Request<MethodT> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// the method to invoke, including its params
    #[serde(flatten)]
    pub method: MethodT,
    /// the request id, echoed back in the response
    pub id: Id,
}

/// A JSON-RPC response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Response<T> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// the id of the request this responds to
    pub id: Id,
    /// the success or error payload
    #[serde(flatten)]
    pub data: ResponseData<T>,
}

/// Success or error payload of a response. `Error` is listed first so that a
/// response carrying an `error` member never parses as a success, regardless
/// of any `result` member present alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    /// a failed invocation
    Error {
        /// the error returned by the server
        error: Error,
    },
    /// a successful invocation
    Success {
        /// the result of the invocation. An absent or `null` member
        /// deserializes to `None` for optional result types; that is the
        /// protocol's "not found" outcome, not an error.
        result: T,
    },
}

impl<T> ResponseData<T> {
    /// Converts the payload into a `Result`.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            ResponseData::Success { result } => Ok(result),
            ResponseData::Error { error } => Err(error),
        }
    }
}

/// The error member of a JSON-RPC response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, thiserror::Error)]
#[error("{message} (code: {code})")]
pub struct Error {
    /// error code
    pub code: i64,
    /// error message
    pub message: String,
    /// optional additional data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
