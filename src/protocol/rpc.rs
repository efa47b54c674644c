//! gRPC wire messages for the `kvrpc.KeyValue` service
//!
//! Arguments are `optional` on the wire so that a missing argument and an
//! empty one can both reach validation.

use crate::protocol::response::{Operation, Response};

include!(concat!(env!("OUT_DIR"), "/kvrpc.KeyValue.rs"));

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetRequest {
  #[prost(string, optional, tag = "1")]
  pub key: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PutRequest {
  #[prost(string, optional, tag = "1")]
  pub key: Option<String>,
  #[prost(string, optional, tag = "2")]
  pub value: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteRequest {
  #[prost(string, optional, tag = "1")]
  pub key: Option<String>,
}

/// Wire form of [`Response`]
#[derive(Clone, PartialEq, prost::Message)]
pub struct KeyValueResponse {
  #[prost(enumeration = "Operation", tag = "1")]
  pub operation: i32,
  #[prost(string, optional, tag = "2")]
  pub value: Option<String>,
  #[prost(bool, tag = "3")]
  pub success: bool,
  #[prost(string, optional, tag = "4")]
  pub error_msg: Option<String>,
}

impl From<Response> for KeyValueResponse {
  fn from(resp: Response) -> Self {
    Self {
      operation: resp.operation().into(),
      value: resp.value().map(str::to_string),
      success: resp.is_success(),
      error_msg: resp.error_msg().map(str::to_string),
    }
  }
}

impl From<KeyValueResponse> for Response {
  /// Rebuild the envelope through its constructors, so a malformed peer
  /// message cannot produce a success that carries an error.
  fn from(msg: KeyValueResponse) -> Self {
    let operation = msg.operation();
    if !msg.success {
      return Response::failed(operation, msg.error_msg.unwrap_or_default());
    }
    match (operation, msg.value) {
      (Operation::Get, Some(value)) => Response::found(value),
      (op, _) => Response::ok(op),
    }
  }
}
