use ordered_float::OrderedFloat;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::graph::generators::delivery_city;
use crate::graph::loader::load_graph_file;
use crate::graph::UndirectedGraph;
use crate::{Error, Result};

pub const HOST_VAR: &str = "ROUTE_FINDER_HOST";
pub const PORT_VAR: &str = "ROUTE_FINDER_PORT";
pub const GRAPH_VAR: &str = "ROUTE_FINDER_GRAPH";
pub const CORS_VAR: &str = "ROUTE_FINDER_CORS";

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// JSON graph definition to serve; the built-in delivery map when unset
    pub graph_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3005,
            enable_cors: true,
            graph_path: None,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment and command line.
    ///
    /// A first positional argument overrides the port from the environment.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::from_lookup(|key| env::var(key).ok(), &args)
    }

    /// Builds a configuration from an arbitrary variable lookup and argument list
    pub fn from_lookup<F>(lookup: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host
                .parse()
                .map_err(|_| Error::InvalidConfig(format!("{} is not an IP address: {}", HOST_VAR, host)))?;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = parse_port(PORT_VAR, &port)?;
        }

        if let Some(path) = lookup(GRAPH_VAR).filter(|p| !p.is_empty()) {
            config.graph_path = Some(PathBuf::from(path));
        }

        if let Some(cors) = lookup(CORS_VAR) {
            config.enable_cors = parse_flag(CORS_VAR, &cors)?;
        }

        if let Some(port) = args.first() {
            config.port = parse_port("port argument", port)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Builds the graph this server should answer queries against
    pub fn load_graph(&self) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
        match &self.graph_path {
            Some(path) => load_graph_file(path),
            None => {
                log::info!("No graph file configured, using the built-in delivery map");
                delivery_city()
            }
        }
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16> {
    value
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("{} is not a valid port: {}", name, value)))
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfig(format!("{} must be true or false, got {}", name, value))),
    }
}
