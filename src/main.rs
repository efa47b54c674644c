use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use kvrpc::util::logging;
use kvrpc::{Config, KvClient, Response, Server};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory key-value store over gRPC", long_about = None)]
struct Cli {
  /// Path to a TOML configuration file
  #[arg(long, global = true)]
  config: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run the key-value server until Ctrl-C
  Server(ServerArgs),
  /// Send one request to a running server
  Client(ClientArgs),
}

#[derive(Args, Debug)]
struct ServerArgs {
  /// Address to listen on, overrides `server_addr`
  #[arg(long)]
  addr: Option<String>,
}

#[derive(Args, Debug)]
struct ClientArgs {
  /// Server endpoint, overrides `client.server_url`
  #[arg(long)]
  server: Option<String>,

  /// Connect and call timeout in milliseconds, overrides `client.timeout_ms`
  #[arg(long)]
  timeout_ms: Option<u64>,

  #[command(subcommand)]
  op: ClientOp,
}

#[derive(Subcommand, Debug)]
enum ClientOp {
  /// GET the value of a key
  Get { key: String },
  /// PUT a key-value pair, adding or updating it
  Put { key: String, value: String },
  /// DELETE a key
  Delete { key: String },
  /// Load the sample course entries
  Preload,
}

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();

  let mut config = match Config::load(cli.config.as_deref()) {
    Ok(config) => config,
    Err(e) => {
      eprintln!("{}", e);
      return ExitCode::FAILURE;
    }
  };

  if let Err(e) = logging::init(&config.log) {
    eprintln!("{:#}", e);
    return ExitCode::FAILURE;
  }

  let result = match cli.command {
    Command::Server(args) => {
      if let Some(addr) = args.addr {
        config.server_addr = addr;
      }
      run_server(config).await
    }
    Command::Client(args) => {
      if let Some(server) = args.server {
        config.client.server_url = server;
      }
      if let Some(timeout_ms) = args.timeout_ms {
        config.client.timeout_ms = timeout_ms;
      }
      run_client(config, args.op).await
    }
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{:#}", e);
      eprintln!("Error: {:#}", e);
      ExitCode::FAILURE
    }
  }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
  info!("Starting kvrpc - in-memory key-value store");
  info!("Version: {}", env!("CARGO_PKG_VERSION"));

  let server = Server::bind(&config.server_addr).await?;
  info!("Server listening on: {}", server.local_addr());

  server
    .run_until(async {
      if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
      }
      info!("Shutdown signal received");
    })
    .await?;

  Ok(())
}

async fn run_client(config: Config, op: ClientOp) -> anyhow::Result<()> {
  let client = KvClient::connect(&config.client).await?;

  let responses: Vec<Response> = match op {
    ClientOp::Get { key } => vec![client.get(&key).await?],
    ClientOp::Put { key, value } => vec![client.put(&key, &value).await?],
    ClientOp::Delete { key } => vec![client.delete(&key).await?],
    ClientOp::Preload => client.preload().await?,
  };

  for resp in &responses {
    println!("{}", resp);
  }
  Ok(())
}
