use crate::protocol::error::{RequestError, required};
use crate::protocol::response::{Operation, Response};
use crate::store::Store;

pub(crate) const KEY_REQUIRED: &str = "Key must not be null or empty after being trimmed.";

/// GET command: GET key
#[derive(Debug, Clone, PartialEq)]
pub struct GetCmd {
  pub key: String,
}

impl GetCmd {
  /// Create a new GET command
  pub fn new(key: impl Into<String>) -> Self {
    Self { key: key.into() }
  }

  /// Validate and trim the GET argument
  pub fn parse(key: Option<&str>) -> Result<Self, RequestError> {
    let key = required(key).ok_or(RequestError::InvalidArgument(KEY_REQUIRED))?;
    Ok(Self::new(key))
  }

  /// Execute the GET command
  pub fn execute(&self, store: &Store) -> Response {
    match store.get(&self.key) {
      Some(value) => Response::found(value),
      None => Response::failed(
        Operation::Get,
        format!("Key={} is not found in the database.", self.key),
      ),
    }
  }
}
