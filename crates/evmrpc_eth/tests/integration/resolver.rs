use alloy_primitives::U256;
use evmrpc_eth::{
    client::EthRpcClient,
    resolver::{resolve_block, FinalityStatus, ResolveBlockError, ResolvedBlock},
};
use mockito::Matcher;
use serde_json::json;

const BLOCK_HASH: &str = "0x71d5e7c8ff9ea737034c16e333a75575a4a94d29482e0c2b88f0a6a8369c1812";
const PARENT_HASH: &str = "0xe99e022112df268087ea7eafaf4790497fd21dbeeb6bd7a1721df161a6657a54";

fn block_body(id: u64, number: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": {
            "number": number,
            "hash": BLOCK_HASH,
            "parentHash": PARENT_HASH,
            "timestamp": "0x55ba467c",
            "gasLimit": "0x1388",
            "gasUsed": "0x0",
            "miner": "0xbb7b8287f3f0a933474a79eae42cbca977791171",
            "transactions": [],
        },
    })
    .to_string()
}

fn null_body(id: u64) -> String {
    json!({"jsonrpc": "2.0", "id": id, "result": null}).to_string()
}

#[tokio::test]
async fn hash_identifiers_route_through_the_hash_lookup() {
    let mut server = mockito::Server::new_async().await;

    let by_hash = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByHash",
            "params": [BLOCK_HASH, false],
        })))
        .with_body(block_body(1, "0x1b4"))
        .create_async()
        .await;

    let by_number = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(
            json!({"method": "eth_getBlockByNumber"}),
        ))
        .expect(0)
        .create_async()
        .await;

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let resolution = resolve_block(&client, BLOCK_HASH, false, false)
        .await
        .expect("should have succeeded");

    assert_eq!(resolution.block.number(), Some(U256::from(0x1b4)));
    assert_eq!(resolution.finality, None);

    by_hash.assert_async().await;
    by_number.assert_async().await;
}

#[tokio::test]
async fn decimal_identifiers_are_reencoded_as_quantities() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["0x1b4", false],
        })))
        .with_body(block_body(1, "0x1b4"))
        .create_async()
        .await;

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    resolve_block(&client, "436", false, false)
        .await
        .expect("should have succeeded");

    mock.assert_async().await;
}

#[tokio::test]
async fn nonexistent_block_number_reports_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["0xe8d4a50fff", false],
        })))
        .with_body(null_body(1))
        .create_async()
        .await;

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let error = resolve_block(&client, "999999999999", false, false)
        .await
        .expect_err("the block is beyond the chain tip");

    assert!(matches!(error, ResolveBlockError::NotFound { .. }));

    let message = error.to_string();
    assert!(message.contains("999999999999"));
    assert!(message.contains("not found"));
    assert!(message.contains("may not exist yet"));
}

#[tokio::test]
async fn malformed_identifier_fails_without_a_round_trip() {
    // No mocks are registered: any request would fail with an unexpected
    // status, so a local rejection proves nothing was sent.
    let server = mockito::Server::new_async().await;

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let error = resolve_block(&client, "not-a-block", false, false)
        .await
        .expect_err("the identifier is malformed");

    assert!(matches!(error, ResolveBlockError::InvalidIdentifier { .. }));
    assert!(error.to_string().contains("not-a-block"));
}

#[tokio::test]
async fn tag_identifiers_skip_the_status_fetches() {
    let mut server = mockito::Server::new_async().await;

    let latest = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["latest", false],
        })))
        .with_body(block_body(1, "0x1b4"))
        .create_async()
        .await;

    let secondaries = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(
            json!({"method": "eth_getBlockByNumber", "params": ["safe", false]}),
        ))
        .expect(0)
        .create_async()
        .await;

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let resolution = resolve_block(&client, "latest", false, true)
        .await
        .expect("should have succeeded");

    assert_eq!(resolution.finality, None);

    latest.assert_async().await;
    secondaries.assert_async().await;
}

#[tokio::test]
async fn block_below_the_finalized_tag_is_finalized() {
    let mut server = mockito::Server::new_async().await;

    for (id, params, number) in [
        (1, json!(["0x5", false]), "0x5"),
        (2, json!(["safe", false]), "0x10"),
        (3, json!(["finalized", false]), "0x8"),
    ] {
        server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "method": "eth_getBlockByNumber",
                "params": params,
                "id": id,
            })))
            .with_body(block_body(id, number))
            .create_async()
            .await;
    }

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let resolution = resolve_block(&client, "5", false, true)
        .await
        .expect("should have succeeded");

    assert_eq!(resolution.finality, Some(FinalityStatus::Finalized));
}

#[tokio::test]
async fn classification_degrades_to_safe_when_the_finalized_fetch_fails() {
    let mut server = mockito::Server::new_async().await;

    for (id, params, number) in [
        (1, json!(["0x5", false]), "0x5"),
        (2, json!(["safe", false]), "0x10"),
    ] {
        server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "method": "eth_getBlockByNumber",
                "params": params,
                "id": id,
            })))
            .with_body(block_body(id, number))
            .create_async()
            .await;
    }

    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["finalized", false],
        })))
        .with_status(500)
        .create_async()
        .await;

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let resolution = resolve_block(&client, "5", false, true)
        .await
        .expect("a failed secondary fetch must not abort the resolution");

    assert_eq!(resolution.finality, Some(FinalityStatus::Safe));
}

#[tokio::test]
async fn classification_degrades_to_pending_when_both_fetches_fail() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["0x5", false],
        })))
        .with_body(block_body(1, "0x5"))
        .create_async()
        .await;

    for tag in ["safe", "finalized"] {
        server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "method": "eth_getBlockByNumber",
                "params": [tag, false],
            })))
            .with_status(500)
            .create_async()
            .await;
    }

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let resolution = resolve_block(&client, "5", false, true)
        .await
        .expect("should have succeeded");

    assert_eq!(resolution.finality, Some(FinalityStatus::Pending));
}

#[tokio::test]
async fn block_above_the_safe_tag_is_pending() {
    let mut server = mockito::Server::new_async().await;

    for (id, params, number) in [
        (1, json!(["0x20", false]), "0x20"),
        (2, json!(["safe", false]), "0x10"),
        (3, json!(["finalized", false]), "0x8"),
    ] {
        server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "method": "eth_getBlockByNumber",
                "params": params,
                "id": id,
            })))
            .with_body(block_body(id, number))
            .create_async()
            .await;
    }

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let resolution = resolve_block(&client, "0x20", false, true)
        .await
        .expect("should have succeeded");

    assert_eq!(resolution.finality, Some(FinalityStatus::Pending));
}

#[tokio::test]
async fn full_transaction_objects_are_requested_on_demand() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["0x1b4", true],
        })))
        .with_body(block_body(1, "0x1b4"))
        .create_async()
        .await;

    let client = EthRpcClient::new(&server.url()).expect("url ok");
    let resolution = resolve_block(&client, "0x1b4", true, false)
        .await
        .expect("should have succeeded");

    assert!(matches!(resolution.block, ResolvedBlock::Full(_)));
}
