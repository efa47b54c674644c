//! kvrpc: an in-memory key-value store served over gRPC
//!
//! - [`store`]: the process-wide map behind a single lock
//! - [`protocol`]: GET/PUT/DELETE commands, the response envelope and the
//!   wire messages
//! - [`service`]: the validated request/response boundary
//! - [`server`] / [`client`]: tonic server and typed client

pub mod client;
pub mod config;
pub mod protocol;
pub mod server;
pub mod service;
pub mod store;
pub mod util;

pub use client::{ClientError, KvClient};
pub use config::Config;
pub use protocol::{Operation, RequestError, Response};
pub use server::Server;
pub use service::KvService;
pub use store::Store;
