//! rocket-backed static file server
use {
    crate::{
        error::Result,
        serve::{
            cfg::ServerConfig,
            cors::{Cors, preflight},
        },
    },
    rocket::{Build, Rocket, fs::FileServer, routes},
    tracing::info,
};

/// a static file server for the output directory
#[derive(Clone)]
pub struct ThemeServer {
    /// what to serve and where
    config: ServerConfig,
}

impl ThemeServer {
    /// make a new server
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// serve until interrupted (Ctrl+C or SIGTERM), then release the socket
    ///
    /// # Errors
    ///
    /// returns an error if rocket fails to ignite or bind
    pub async fn serve(self) -> Result<()> {
        info!(
            address = %self.config.bind_address,
            root = %self.config.root.display(),
            "starting theme server"
        );

        let _rocket = self.build_rocket().launch().await?;

        info!("theme server stopped");
        Ok(())
    }

    /// the rocket instance behind [`ThemeServer::serve`]
    ///
    /// files are served from the configured root, no cwd changes involved
    pub fn build_rocket(&self) -> Rocket<Build> {
        let figment = rocket::Config::figment()
            .merge(("address", self.config.bind_address.ip().to_string()))
            .merge(("port", self.config.bind_address.port()))
            .merge(("log_level", "critical"));

        rocket::custom(figment)
            .attach(Cors)
            .mount("/", routes![preflight])
            .mount("/", FileServer::from(&self.config.root))
    }
}
