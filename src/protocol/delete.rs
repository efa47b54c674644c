use crate::protocol::error::{RequestError, required};
use crate::protocol::get::KEY_REQUIRED;
use crate::protocol::response::{Operation, Response};
use crate::store::Store;

/// DELETE command: DELETE key
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCmd {
  pub key: String,
}

impl DeleteCmd {
  pub fn new(key: impl Into<String>) -> Self {
    Self { key: key.into() }
  }

  pub fn parse(key: Option<&str>) -> Result<Self, RequestError> {
    let key = required(key).ok_or(RequestError::InvalidArgument(KEY_REQUIRED))?;
    Ok(Self::new(key))
  }

  /// Execute the DELETE command
  pub fn execute(&self, store: &Store) -> Response {
    if store.delete(&self.key) {
      Response::ok(Operation::Delete)
    } else {
      Response::failed(
        Operation::Delete,
        format!(
          "Key={} is not found or has already been deleted from the database.",
          self.key
        ),
      )
    }
  }
}
