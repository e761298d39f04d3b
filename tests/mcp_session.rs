//! End-to-end MCP session tests.
//!
//! A real rmcp client talks to the server over an in-memory duplex stream,
//! with the documentation endpoint replaced by a mockito server.

use mockito::{Matcher, Server};
use rmcp::{
    RoleClient, ServiceError, ServiceExt,
    model::{CallToolRequestParam, ErrorCode, GetPromptRequestParam, PromptMessageContent},
    service::RunningService,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use owlpay_mcp_server::core::config::SearchConfig;
use owlpay_mcp_server::domains::search::SearchClient;
use owlpay_mcp_server::domains::tools::definitions::SearchDocsTool;
use owlpay_mcp_server::{Config, McpServer};

const TOOL: &str = "search_owlpay_documentation";

/// Start a server backed by `api_url` and connect a client to it.
async fn connect(api_url: String) -> RunningService<RoleClient, ()> {
    connect_with(SearchConfig {
        api_url,
        timeout_secs: 5,
        max_retries: 1,
    })
    .await
}

async fn connect_with(search: SearchConfig) -> RunningService<RoleClient, ()> {
    let search = SearchClient::new(&search).unwrap();
    let server = McpServer::new(Config::default(), Arc::new(search));

    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        let service = server.serve(server_io).await.unwrap();
        let _ = service.waiting().await;
    });

    ().serve(client_io).await.unwrap()
}

fn tool_call(arguments: serde_json::Value) -> CallToolRequestParam {
    serde_json::from_value(serde_json::json!({
        "name": TOOL,
        "arguments": arguments,
    }))
    .unwrap()
}

fn prompt_request(arguments: serde_json::Value) -> GetPromptRequestParam {
    serde_json::from_value(serde_json::json!({
        "name": TOOL,
        "arguments": arguments,
    }))
    .unwrap()
}

fn mcp_error_code(err: ServiceError) -> ErrorCode {
    match err {
        ServiceError::McpError(data) => data.code,
        other => panic!("Expected an MCP error, got {:?}", other),
    }
}

/// Listener that accepts connections and never answers.
async fn hanging_url() -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hold = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });
    (format!("http://{}/", addr), hold)
}

async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

#[tokio::test]
async fn lists_exactly_one_tool() {
    let client = connect(refused_url().await).await;

    let tools = client.list_all_tools().await.unwrap();
    assert_eq!(tools.len(), 1);

    let tool = &tools[0];
    assert_eq!(tool.name, TOOL);
    assert_eq!(tool.description.as_deref(), Some(SearchDocsTool::DESCRIPTION));

    let required = tool.input_schema.get("required").unwrap();
    assert_eq!(required, &serde_json::json!(["query"]));
    assert!(tool.input_schema["properties"]["query"]["description"].is_string());

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn lists_the_search_prompt() {
    let client = connect(refused_url().await).await;

    let prompts = client.list_all_prompts().await.unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].name, TOOL);

    let arguments = prompts[0].arguments.as_ref().unwrap();
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].name, "query");
    assert_eq!(arguments[0].required, Some(true));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn tool_returns_endpoint_body() {
    let mut docs = Server::new_async().await;
    let body = "Payouts settle in 1-2 business days.";
    let m = docs
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("query".into(), "payout schedule".into()))
        .with_status(200)
        .with_body(body)
        .expect(2)
        .create_async()
        .await;

    let client = connect(format!("{}/", docs.url())).await;

    let first = client
        .call_tool(tool_call(serde_json::json!({"query": "payout schedule"})))
        .await
        .unwrap();
    let second = client
        .call_tool(tool_call(serde_json::json!({"query": "payout schedule"})))
        .await
        .unwrap();

    assert_eq!(first.content.len(), 1);
    assert_eq!(first.content[0].as_text().unwrap().text, body);
    assert_ne!(first.is_error, Some(true));
    assert_eq!(
        first.content[0].as_text().unwrap().text,
        second.content[0].as_text().unwrap().text
    );

    m.assert_async().await;
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn tool_without_query_is_rejected_before_searching() {
    let mut docs = Server::new_async().await;
    let m = docs
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = connect(format!("{}/", docs.url())).await;

    let err = client
        .call_tool(tool_call(serde_json::json!({})))
        .await
        .unwrap_err();
    assert_eq!(mcp_error_code(err), ErrorCode::INVALID_PARAMS);

    m.assert_async().await;
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn failures_surface_as_error_on_tool_and_text_on_prompt() {
    let client = connect(refused_url().await).await;

    let err = client
        .call_tool(tool_call(serde_json::json!({"query": "fees"})))
        .await
        .unwrap_err();
    match err {
        ServiceError::McpError(data) => {
            assert_eq!(data.code, ErrorCode::INTERNAL_ERROR);
            assert!(data.message.starts_with("Failed to search documentation:"));
        }
        other => panic!("Expected an MCP error, got {:?}", other),
    }

    let prompt = client
        .get_prompt(prompt_request(serde_json::json!({"query": "fees"})))
        .await
        .unwrap();
    assert_eq!(prompt.description.as_deref(), Some("Search failed"));
    assert_eq!(prompt.messages.len(), 1);
    match &prompt.messages[0].content {
        PromptMessageContent::Text { text } => {
            assert!(text.starts_with("Failed to search documentation:"));
        }
        other => panic!("Expected text content, got {:?}", other),
    }

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn prompt_renders_search_results() {
    let mut docs = Server::new_async().await;
    let m = docs
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("query".into(), "webhooks".into()))
        .with_status(200)
        .with_body("Webhook retries use exponential backoff.")
        .create_async()
        .await;

    let client = connect(format!("{}/", docs.url())).await;

    let prompt = client
        .get_prompt(prompt_request(serde_json::json!({"query": "webhooks"})))
        .await
        .unwrap();
    assert_eq!(prompt.description.as_deref(), Some("Search results"));
    match &prompt.messages[0].content {
        PromptMessageContent::Text { text } => {
            assert_eq!(text, "Webhook retries use exponential backoff.");
        }
        other => panic!("Expected text content, got {:?}", other),
    }

    m.assert_async().await;
    client.cancel().await.unwrap();
}

#[tokio::test]
async fn prompt_without_query_is_invalid_params() {
    let client = connect(refused_url().await).await;

    let err = client
        .get_prompt(prompt_request(serde_json::json!({})))
        .await
        .unwrap_err();
    assert_eq!(mcp_error_code(err), ErrorCode::INVALID_PARAMS);

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn timeouts_surface_as_error_on_tool_and_text_on_prompt() {
    let (api_url, hold) = hanging_url().await;
    let client = connect_with(SearchConfig {
        api_url,
        timeout_secs: 1,
        max_retries: 3,
    })
    .await;

    let err = client
        .call_tool(tool_call(serde_json::json!({"query": "settlement"})))
        .await
        .unwrap_err();
    match err {
        ServiceError::McpError(data) => {
            assert_eq!(data.code, ErrorCode::INTERNAL_ERROR);
            assert!(data.message.starts_with("Failed to search documentation:"));
            assert!(data.message.contains("timed out"));
        }
        other => panic!("Expected an MCP error, got {:?}", other),
    }

    let prompt = client
        .get_prompt(prompt_request(serde_json::json!({"query": "settlement"})))
        .await
        .unwrap();
    assert_eq!(prompt.description.as_deref(), Some("Search failed"));
    match &prompt.messages[0].content {
        PromptMessageContent::Text { text } => assert!(text.contains("timed out")),
        other => panic!("Expected text content, got {:?}", other),
    }

    hold.abort();
    client.cancel().await.unwrap();
}
