//! local server configuration
use {
    crate::error::{Result, ThemeError},
    std::{
        net::{SocketAddr, ToSocketAddrs},
        path::{Path, PathBuf},
    },
};

/// what the local server serves and where
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// the directory files are served from
    pub root: PathBuf,
    /// the resolved listening address
    pub bind_address: SocketAddr,
}

impl ServerConfig {
    /// start building a config
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// the directory files are served from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// the resolved listening address
    pub fn bind_address(&self) -> &SocketAddr {
        &self.bind_address
    }
}

/// builder for [`ServerConfig`]
#[derive(Default)]
pub struct ServerConfigBuilder {
    /// the directory to serve
    root: Option<PathBuf>,
    /// host name or ip
    host: Option<String>,
    /// port
    port: Option<u16>,
}

impl ServerConfigBuilder {
    /// make a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// set the directory to serve
    pub fn root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root = Some(dir.into());
        self
    }

    /// set the host to bind
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// set the port to bind
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// build the config, resolving the host
    ///
    /// ipv4 addresses are preferred when a host name resolves to several
    ///
    /// # Errors
    ///
    /// returns an error if no root was given, the root isn't a directory or
    /// the host doesn't resolve
    pub fn build(self) -> Result<ServerConfig> {
        let root = self
            .root
            .ok_or_else(|| ThemeError::Other("server root directory is required".into()))?;

        if !root.is_dir() {
            return Err(ThemeError::Other(format!(
                "server root is not a directory: {}",
                root.display()
            )));
        }

        let host = self.host.unwrap_or_else(|| "localhost".to_string());
        let port = self.port.unwrap_or(8001);
        let candidates: Vec<SocketAddr> = (host.as_str(), port).to_socket_addrs()?.collect();

        let bind_address = candidates
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| candidates.first())
            .copied()
            .ok_or_else(|| ThemeError::Other(format!("host did not resolve: {host}")))?;

        Ok(ServerConfig { root, bind_address })
    }
}
