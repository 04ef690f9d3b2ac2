use std::{
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use reqwest::{
    header::{self, HeaderValue},
    Client as HttpClient,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::jsonrpc;

// Upper bound on a single request/response round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The message could not be sent to the remote node
    #[error("Failed to send request to the remote node: {0}")]
    FailedToSend(reqwest::Error),

    /// The remote node failed to reply with the body of the response
    #[error("The response text was corrupted: {0}.")]
    CorruptedResponse(reqwest::Error),

    /// The server returned an error status code.
    #[error("The Http server returned error status code: {0}")]
    HttpStatus(reqwest::Error),

    /// The request cannot be serialized as JSON.
    #[error(transparent)]
    InvalidJsonRequest(serde_json::Error),

    /// The server returned an invalid JSON-RPC response.
    #[error("Response '{response}' failed to parse with expected type '{expected_type}', due to error: '{error}'")]
    InvalidResponse {
        /// The response text
        response: String,
        /// The expected type of the response
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },

    /// The server echoed back an id other than the one requested.
    #[error("The server returned an invalid id: '{id:?}' in response: '{response}'")]
    InvalidId {
        /// The response text
        response: String,
        /// The invalid id
        id: jsonrpc::Id,
    },

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The JSON-RPC server returned an error.
    #[error("{error}. Request: {request}")]
    JsonRpcError {
        /// The JSON-RPC error
        error: jsonrpc::Error,
        /// The request JSON
        request: String,
    },
}

/// A client for executing JSON-RPC methods on a remote node.
///
/// Every invocation is a single HTTP POST round trip; responses are never
/// cached and failed requests are never retried. Retry policy belongs to the
/// caller.
#[derive(Debug)]
pub struct RpcClient<MethodT: Serialize> {
    url: url::Url,
    client: HttpClient,
    next_id: AtomicU64,
    _phantom: PhantomData<MethodT>,
}

impl<MethodT: Serialize> RpcClient<MethodT> {
    /// Create a new instance, given a remote node URL.
    pub fn new(url: &str) -> Result<Self, RpcClientError> {
        let mut headers = header::HeaderMap::new();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = HttpClient::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Default construction nor setting default headers can cause an error");

        Ok(RpcClient {
            url: url.parse()?,
            client,
            next_id: AtomicU64::new(1),
            _phantom: PhantomData,
        })
    }

    fn parse_response_str<SuccessT: DeserializeOwned>(
        response: String,
    ) -> Result<jsonrpc::Response<SuccessT>, RpcClientError> {
        serde_json::from_str(&response).map_err(|error| RpcClientError::InvalidResponse {
            response,
            expected_type: std::any::type_name::<jsonrpc::Response<SuccessT>>(),
            error,
        })
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    async fn send_request_body(
        &self,
        request_body: &SerializedRequest,
    ) -> Result<String, RpcClientError> {
        self.client
            .post(self.url.clone())
            .body(request_body.to_json_string())
            .send()
            .await
            .map_err(RpcClientError::FailedToSend)?
            .error_for_status()
            .map_err(RpcClientError::HttpStatus)?
            .text()
            .await
            .map_err(RpcClientError::CorruptedResponse)
    }

    fn serialize_request(
        &self,
        input: &MethodT,
    ) -> Result<(jsonrpc::Id, SerializedRequest), RpcClientError> {
        let id = jsonrpc::Id::Num(self.next_id.fetch_add(1, Ordering::Relaxed));

        let request = serde_json::to_value(jsonrpc::Request {
            version: jsonrpc::Version::V2_0,
            method: input,
            id: id.clone(),
        })
        .map_err(RpcClientError::InvalidJsonRequest)?;

        Ok((id, SerializedRequest(request)))
    }

    /// Calls the provided JSON-RPC method and returns the result.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub async fn call<SuccessT: DeserializeOwned>(
        &self,
        method: MethodT,
    ) -> Result<SuccessT, RpcClientError> {
        let (id, request) = self.serialize_request(&method)?;

        let response_text = self.send_request_body(&request).await?;
        let response: jsonrpc::Response<SuccessT> =
            Self::parse_response_str(response_text.clone())?;

        if response.id != id {
            return Err(RpcClientError::InvalidId {
                response: response_text,
                id: response.id,
            });
        }

        response.data.into_result().map_err(|error| {
            let request = request.to_json_string();
            log::debug!("JSON-RPC error for request {request}: {error}");
            RpcClientError::JsonRpcError { error, request }
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
struct SerializedRequest(serde_json::Value);

impl SerializedRequest {
    fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}
