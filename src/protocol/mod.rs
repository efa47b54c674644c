//! Key-value protocol implementation
//!
//! This module provides the GET/PUT/DELETE commands, the response envelope
//! they produce, and the gRPC messages that carry both over the network.

pub mod delete;
pub mod error;
pub mod get;
pub mod put;
pub mod response;
pub mod rpc;

pub use delete::DeleteCmd;
pub use error::RequestError;
pub use get::GetCmd;
pub use put::PutCmd;
pub use response::{Operation, Response};
