use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server as GrpcServer;
use tracing::info;

use crate::protocol::rpc::key_value_server::KeyValueServer;
use crate::service::KvService;

/// gRPC server for the key-value service
pub struct Server {
  listener: TcpListener,
  local_addr: SocketAddr,
  service: KvService,
}

impl Server {
  /// Create and bind the server to the specified address
  pub async fn bind(addr: &str) -> std::io::Result<Self> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("TCP server bound to {}", local_addr);

    Ok(Self {
      listener,
      local_addr,
      service: KvService::new(),
    })
  }

  /// Get local listening address
  pub fn local_addr(&self) -> SocketAddr {
    self.local_addr
  }

  /// Serve until the process exits
  pub async fn run(self) -> Result<(), tonic::transport::Error> {
    self.run_until(std::future::pending()).await
  }

  /// Serve until `signal` completes, then finish in-flight calls and return
  pub async fn run_until<F>(self, signal: F) -> Result<(), tonic::transport::Error>
  where
    F: Future<Output = ()>,
  {
    info!("Server started, listening on {}", self.local_addr);

    GrpcServer::builder()
      .add_service(KeyValueServer::new(self.service))
      .serve_with_incoming_shutdown(TcpListenerStream::new(self.listener), signal)
      .await?;

    info!("Server on {} stopped", self.local_addr);
    Ok(())
  }
}
