use std::sync::Arc;

use tonic::{Request, Response as GrpcResponse, Status};
use tracing::{info, warn};

use crate::protocol::rpc::key_value_server::KeyValue;
use crate::protocol::rpc::{DeleteRequest, GetRequest, KeyValueResponse, PutRequest};
use crate::protocol::{DeleteCmd, GetCmd, PutCmd, RequestError, Response};
use crate::store::Store;

/// Request/response boundary of the key-value store
///
/// Holds nothing but a handle to the store, so one instance can serve any
/// number of concurrent calls.
#[derive(Clone)]
pub struct KvService {
  store: Arc<Store>,
}

impl KvService {
  /// Service backed by the process-wide store
  pub fn new() -> Self {
    Self::with_store(Store::shared())
  }

  pub(crate) fn with_store(store: Arc<Store>) -> Self {
    Self { store }
  }

  pub fn handle_get(&self, key: Option<&str>) -> Result<Response, RequestError> {
    Ok(GetCmd::parse(key)?.execute(&self.store))
  }

  pub fn handle_put(
    &self,
    key: Option<&str>,
    value: Option<&str>,
  ) -> Result<Response, RequestError> {
    Ok(PutCmd::parse(key, value)?.execute(&self.store))
  }

  pub fn handle_delete(&self, key: Option<&str>) -> Result<Response, RequestError> {
    Ok(DeleteCmd::parse(key)?.execute(&self.store))
  }
}

impl Default for KvService {
  fn default() -> Self {
    Self::new()
  }
}

/// Log the outcome of a call and shape it for the wire
fn reply(
  result: Result<Response, RequestError>,
) -> Result<GrpcResponse<KeyValueResponse>, Status> {
  match result {
    Ok(resp) => {
      if resp.is_success() {
        info!("{}", resp);
      } else {
        warn!("{}", resp);
      }
      Ok(GrpcResponse::new(resp.into()))
    }
    Err(e) => {
      warn!("Rejected request: {}", e);
      Err(e.into())
    }
  }
}

#[tonic::async_trait]
impl KeyValue for KvService {
  async fn get(
    &self,
    request: Request<GetRequest>,
  ) -> Result<GrpcResponse<KeyValueResponse>, Status> {
    let req = request.get_ref();
    info!("Received GET key={:?}", req.key);
    reply(self.handle_get(req.key.as_deref()))
  }

  async fn put(
    &self,
    request: Request<PutRequest>,
  ) -> Result<GrpcResponse<KeyValueResponse>, Status> {
    let req = request.get_ref();
    info!("Received PUT key={:?} value={:?}", req.key, req.value);
    reply(self.handle_put(req.key.as_deref(), req.value.as_deref()))
  }

  async fn delete(
    &self,
    request: Request<DeleteRequest>,
  ) -> Result<GrpcResponse<KeyValueResponse>, Status> {
    let req = request.get_ref();
    info!("Received DELETE key={:?}", req.key);
    reply(self.handle_delete(req.key.as_deref()))
  }
}
