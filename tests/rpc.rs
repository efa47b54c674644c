//! End-to-end tests against a live server on an ephemeral port.
//!
//! Every server in this process shares one store, so each test uses its own
//! key prefix.

use anyhow::Result;
use futures::future::join_all;
use kvrpc::config::ClientConfig;
use kvrpc::{ClientError, KvClient, Operation, Response, Server};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
  client: KvClient,
  shutdown: Option<oneshot::Sender<()>>,
  handle: JoinHandle<()>,
}

impl TestServer {
  async fn start() -> Result<Self> {
    let server = Server::bind("127.0.0.1:0").await?;
    let addr = server.local_addr();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
      let _ = server
        .run_until(async {
          let _ = rx.await;
        })
        .await;
    });

    let client = KvClient::connect(&ClientConfig {
      server_url: format!("http://{}", addr),
      timeout_ms: 3000,
    })
    .await?;

    Ok(Self {
      client,
      shutdown: Some(tx),
      handle,
    })
  }

  async fn stop(mut self) {
    if let Some(tx) = self.shutdown.take() {
      let _ = tx.send(());
    }
    let _ = self.handle.await;
  }
}

#[tokio::test]
async fn get_unknown_key_is_not_found() -> Result<()> {
  let server = TestServer::start().await?;

  let resp = server.client.get("missing:1").await?;

  assert_eq!(resp.operation(), Operation::Get);
  assert!(!resp.is_success());
  assert_eq!(resp.value(), None);
  assert_eq!(
    resp.error_msg(),
    Some("Key=missing:1 is not found in the database.")
  );

  server.stop().await;
  Ok(())
}

#[tokio::test]
async fn put_get_delete_scenario() -> Result<()> {
  let server = TestServer::start().await?;
  let client = &server.client;

  assert_eq!(
    client.put("scenario:6650", "Distributed Systems").await?,
    Response::ok(Operation::Put)
  );
  assert_eq!(
    client.get("scenario:6650").await?,
    Response::found("Distributed Systems")
  );
  assert_eq!(
    client.delete("scenario:6650").await?,
    Response::ok(Operation::Delete)
  );
  assert!(!client.get("scenario:6650").await?.is_success());

  let again = client.delete("scenario:6650").await?;
  assert!(!again.is_success());
  assert_eq!(
    again.error_msg(),
    Some("Key=scenario:6650 is not found or has already been deleted from the database.")
  );

  server.stop().await;
  Ok(())
}

#[tokio::test]
async fn put_overwrites_and_trims() -> Result<()> {
  let server = TestServer::start().await?;
  let client = &server.client;

  client.put("  overwrite:k ", "v1").await?;
  client.put("overwrite:k", "  v2  ").await?;

  assert_eq!(client.get("overwrite:k").await?, Response::found("v2"));

  server.stop().await;
  Ok(())
}

#[tokio::test]
async fn invalid_arguments_are_rejected() -> Result<()> {
  let server = TestServer::start().await?;
  let client = &server.client;

  client.put("invalid:k", "kept").await?;

  assert!(matches!(
    client.get("").await,
    Err(ClientError::InvalidArgument(_))
  ));
  assert!(matches!(
    client.put("", "x").await,
    Err(ClientError::InvalidArgument(_))
  ));
  assert!(matches!(
    client.put("invalid:k", "   ").await,
    Err(ClientError::InvalidArgument(_))
  ));
  match client.delete(" ").await {
    Err(ClientError::InvalidArgument(msg)) => {
      assert_eq!(msg, "Key must not be null or empty after being trimmed.")
    }
    other => panic!("Expected InvalidArgument, got {:?}", other),
  }

  // The rejected PUT did not touch the stored value
  assert_eq!(client.get("invalid:k").await?, Response::found("kept"));

  server.stop().await;
  Ok(())
}

#[tokio::test]
async fn concurrent_puts_leave_one_value() -> Result<()> {
  let server = TestServer::start().await?;
  let writers = 20;

  let calls = (0..writers).map(|i| {
    let client = server.client.clone();
    async move { client.put("race:k", &format!("writer-{}", i)).await }
  });
  for result in join_all(calls).await {
    assert!(result?.is_success());
  }

  let first = server.client.get("race:k").await?;
  let value = first.value().expect("value after concurrent puts").to_string();
  assert!((0..writers).any(|i| value == format!("writer-{}", i)));
  for _ in 0..5 {
    assert_eq!(server.client.get("race:k").await?, first);
  }

  server.stop().await;
  Ok(())
}

#[tokio::test]
async fn preload_runs_full_sequence() -> Result<()> {
  let server = TestServer::start().await?;

  let responses = server.client.preload().await?;

  assert_eq!(responses.len(), 20);
  assert!(responses.iter().all(Response::is_success));
  assert_eq!(responses[5], Response::found("Scalable Distributed Systems"));
  assert!(
    responses[10..15]
      .iter()
      .all(|r| r.operation() == Operation::Delete)
  );
  assert_eq!(server.client.get("5800").await?, Response::found("Algorithms"));

  server.stop().await;
  Ok(())
}

#[tokio::test]
async fn connect_to_stopped_server_fails() -> Result<()> {
  let server = Server::bind("127.0.0.1:0").await?;
  let addr = server.local_addr();
  drop(server);

  let result = KvClient::connect(&ClientConfig {
    server_url: format!("http://{}", addr),
    timeout_ms: 500,
  })
  .await;

  assert!(matches!(result, Err(ClientError::Transport(_))));
  Ok(())
}
