//! Command line and environment configuration.
//!
//! Every option can be given as a flag or through its `PRODUCT_REGISTRY_*` environment
//! variable. With no configuration at all the registry listens on `0.0.0.0:8080`, writes
//! `openapi.yaml` to the working directory and starts serving.

use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_OPENAPI_PATH: &str = "openapi.yaml";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "product-registry",
    version,
    about = "In-memory product registry served over HTTP"
)]
pub struct Config {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "PRODUCT_REGISTRY_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PRODUCT_REGISTRY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Where to write the OpenAPI document at startup
    #[arg(long, env = "PRODUCT_REGISTRY_OPENAPI_OUT", default_value = DEFAULT_OPENAPI_PATH)]
    pub openapi_out: PathBuf,

    /// Do not write the OpenAPI document at startup
    #[arg(long)]
    pub no_openapi: bool,

    /// Requests that may queue for the product actor before callers wait
    #[arg(long, env = "PRODUCT_REGISTRY_CHANNEL_CAPACITY", default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    pub channel_capacity: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the registry (the default)
    Serve,
    /// Render the OpenAPI document and exit without serving
    Openapi {
        /// Output file; the document goes to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// URL advertised in the OpenAPI `servers` list.
    pub fn server_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// The OpenAPI file to write before serving, if any.
    pub fn startup_openapi_path(&self) -> Option<&PathBuf> {
        (!self.no_openapi).then_some(&self.openapi_out)
    }
}
