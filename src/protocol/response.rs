use std::fmt;

/// Operation an envelope answers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Operation {
  Get = 0,
  Put = 1,
  Delete = 2,
}

impl Operation {
  pub fn as_str(&self) -> &'static str {
    match self {
      Operation::Get => "GET",
      Operation::Put => "PUT",
      Operation::Delete => "DELETE",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Uniform result of every store operation
///
/// A response is either successful, in which case it carries no error
/// message, or failed, in which case it always does. Only a successful GET
/// carries a value. The constructors are the only way to build one, so those
/// rules hold for every instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
  operation: Operation,
  value: Option<String>,
  success: bool,
  error_msg: Option<String>,
}

impl Response {
  /// Successful GET carrying the found value
  pub fn found(value: impl Into<String>) -> Self {
    Self {
      operation: Operation::Get,
      value: Some(value.into()),
      success: true,
      error_msg: None,
    }
  }

  /// Successful PUT or DELETE
  pub fn ok(operation: Operation) -> Self {
    Self {
      operation,
      value: None,
      success: true,
      error_msg: None,
    }
  }

  /// Failed operation with the reason
  pub fn failed(operation: Operation, error_msg: impl Into<String>) -> Self {
    Self {
      operation,
      value: None,
      success: false,
      error_msg: Some(error_msg.into()),
    }
  }

  pub fn operation(&self) -> Operation {
    self.operation
  }

  pub fn value(&self) -> Option<&str> {
    self.value.as_deref()
  }

  pub fn is_success(&self) -> bool {
    self.success
  }

  pub fn error_msg(&self) -> Option<&str> {
    self.error_msg.as_deref()
  }
}

impl fmt::Display for Response {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ", self.operation)?;
    match (&self.value, &self.error_msg) {
      (_, Some(msg)) => write!(f, "failed: {}", msg),
      (Some(value), None) => write!(f, "ok: {}", value),
      (None, None) => f.write_str("ok"),
    }
  }
}
