use crate::protocol::error::{RequestError, required};
use crate::protocol::response::{Operation, Response};
use crate::store::Store;

pub(crate) const KEY_AND_VALUE_REQUIRED: &str =
  "Key and value must not be null or empty after being trimmed.";

/// PUT command: PUT key value
#[derive(Debug, Clone, PartialEq)]
pub struct PutCmd {
  pub key: String,
  pub value: String,
}

impl PutCmd {
  pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      key: key.into(),
      value: value.into(),
    }
  }

  /// Validate and trim the PUT arguments
  pub fn parse(key: Option<&str>, value: Option<&str>) -> Result<Self, RequestError> {
    match (required(key), required(value)) {
      (Some(key), Some(value)) => Ok(Self::new(key, value)),
      _ => Err(RequestError::InvalidArgument(KEY_AND_VALUE_REQUIRED)),
    }
  }

  /// Execute the PUT command. Inserts and updates both report success.
  pub fn execute(self, store: &Store) -> Response {
    store.put(self.key, self.value);
    Response::ok(Operation::Put)
  }
}
