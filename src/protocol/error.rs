use thiserror::Error;

/// Requests rejected before the store is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
  #[error("{0}")]
  InvalidArgument(&'static str),
}

impl From<RequestError> for tonic::Status {
  fn from(err: RequestError) -> Self {
    match err {
      RequestError::InvalidArgument(msg) => tonic::Status::invalid_argument(msg),
    }
  }
}

/// Trim the argument, treating an absent or blank one as missing
pub(crate) fn required(arg: Option<&str>) -> Option<&str> {
  arg.map(str::trim).filter(|s| !s.is_empty())
}
