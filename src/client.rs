//! Typed client for a kvrpc server

use std::time::Duration;

use thiserror::Error;
use tonic::transport::{Channel, Endpoint};
use tracing::{error, info};

use crate::config::ClientConfig;
use crate::protocol::Response;
use crate::protocol::rpc::key_value_client::KeyValueClient;
use crate::protocol::rpc::{DeleteRequest, GetRequest, PutRequest};

/// Entries written by [`KvClient::preload`]
pub const PRELOAD_ENTRIES: [(&str, &str); 5] = [
  ("6650", "Scalable Distributed Systems"),
  ("5800", "Algorithms"),
  ("5700", "Computer Networking"),
  ("6140", "Machine Learning"),
  ("5200", "Database Management"),
];

/// Errors that can occur when calling a kvrpc server
#[derive(Error, Debug)]
pub enum ClientError {
  /// The server rejected the arguments; nothing was changed
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// Endpoint or connection failure
  #[error("transport error: {0}")]
  Transport(#[from] tonic::transport::Error),

  /// Any other failed call, including timeouts
  #[error("rpc error: {0}")]
  Rpc(tonic::Status),
}

impl From<tonic::Status> for ClientError {
  fn from(status: tonic::Status) -> Self {
    if status.code() == tonic::Code::InvalidArgument {
      ClientError::InvalidArgument(status.message().to_string())
    } else {
      ClientError::Rpc(status)
    }
  }
}

/// Client for the key-value service
///
/// Cloning is cheap; clones share the underlying channel.
#[derive(Clone, Debug)]
pub struct KvClient {
  inner: KeyValueClient<Channel>,
}

impl KvClient {
  /// Connect to the configured server
  pub async fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
    let timeout = Duration::from_millis(config.timeout_ms);
    let channel = Endpoint::from_shared(config.server_url.clone())?
      .connect_timeout(timeout)
      .timeout(timeout)
      .connect()
      .await?;
    info!("Connected to {}", config.server_url);

    Ok(Self {
      inner: KeyValueClient::new(channel),
    })
  }

  pub async fn get(&self, key: &str) -> Result<Response, ClientError> {
    let request = GetRequest {
      key: Some(key.to_string()),
    };
    let reply = self.inner.clone().get(request).await?;
    Ok(reply.into_inner().into())
  }

  pub async fn put(&self, key: &str, value: &str) -> Result<Response, ClientError> {
    let request = PutRequest {
      key: Some(key.to_string()),
      value: Some(value.to_string()),
    };
    let reply = self.inner.clone().put(request).await?;
    Ok(reply.into_inner().into())
  }

  pub async fn delete(&self, key: &str) -> Result<Response, ClientError> {
    let request = DeleteRequest {
      key: Some(key.to_string()),
    };
    let reply = self.inner.clone().delete(request).await?;
    Ok(reply.into_inner().into())
  }

  /// Warm up a server: put every preload entry, read each back, delete them,
  /// then put them again. Returns every response in call order.
  pub async fn preload(&self) -> Result<Vec<Response>, ClientError> {
    let mut responses = Vec::with_capacity(PRELOAD_ENTRIES.len() * 4);

    for (key, value) in PRELOAD_ENTRIES {
      responses.push(self.put(key, value).await?);
    }
    for (key, _) in PRELOAD_ENTRIES {
      responses.push(self.get(key).await?);
    }
    for (key, _) in PRELOAD_ENTRIES {
      responses.push(self.delete(key).await?);
    }
    for (key, value) in PRELOAD_ENTRIES {
      responses.push(self.put(key, value).await?);
    }

    for resp in &responses {
      if resp.is_success() {
        info!("Preload {}", resp);
      } else {
        error!("Preload {}", resp);
      }
    }
    Ok(responses)
  }
}
