//! every available configuration option and its type is listed in this file
use {
    crate::config::validate::{Validate, format_validation_errors},
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::debug,
};

/// the name of the config file looked up in the config dir and cwd ancestors
pub const CONFIG_FILE_NAME: &str = "skthemer.toml";

/// the prefix of environment overrides (`SKTHEMER_SERVER__PORT=9000`)
pub const ENV_PREFIX: &str = "SKTHEMER";

/// Identity of the generated theme package
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct PackageCfg {
    /// Theme name shown in Standard Notes
    #[default(Some("Emacs Org Mode".to_string()))]
    pub name: Option<String>,

    /// Reverse-DNS theme identifier
    #[default(Some("lt.sarunas.emacs-org-mode-theme".to_string()))]
    pub identifier: Option<String>,

    /// Theme version string
    #[default(Some("1.0.0".to_string()))]
    pub version: Option<String>,

    /// Theme description shown in Standard Notes
    #[default(Some("A dark theme inspired by Emacs Org Mode with Zenburn-like colors".to_string()))]
    pub description: Option<String>,

    /// Mark the theme as light instead of dark
    #[default(Some(false))]
    pub light: Option<bool>,
}

/// Settings for the local CORS-enabled server
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ServerCfg {
    /// Host to bind and to use in local URLs
    #[default(Some("localhost".to_string()))]
    pub host: Option<String>,

    /// Port to bind and to use in local URLs
    #[default(Some(8001))]
    pub port: Option<u16>,
}

/// Where and how the artifacts get written
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct OutputCfg {
    /// Output directory for ext.json and theme.css
    #[default(Some("dist".to_string()))]
    pub dir: Option<String>,

    /// Hosting base URL, when set the manifest points here instead of localhost
    #[default(Some(String::new()))]
    pub cdn: Option<String>,

    /// Project homepage
    #[default(Some(String::new()))]
    pub marketing_url: Option<String>,

    /// Emit the optional per-surface override variables
    #[default(Some(true))]
    pub optional_overrides: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, SmartDefault)]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    #[default]
    Compact,

    /// Use an excessively pretty output format
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("warn".to_string()))]
    pub level: Option<String>,

    /// Log output format
    #[default(Some(LoggingFormat::Compact))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// skthemer's configuration
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct Settings {
    /// Package identity
    #[default(Some(PackageCfg::default()))]
    pub package: Option<PackageCfg>,

    /// Local server settings
    #[default(Some(ServerCfg::default()))]
    pub server: Option<ServerCfg>,

    /// Output settings
    #[default(Some(OutputCfg::default()))]
    pub output: Option<OutputCfg>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl Settings {
    /// load config from the default locations, or from `explicit` if given
    ///
    /// load prio: env > local (or explicit) > global > defaults
    ///
    /// # Errors
    ///
    /// returns an error if a config file is malformed or the result fails validation
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Self::create_builder(&Self::default())?;

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(config::File::from(global).required(false));
        }

        match explicit {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(local) = Self::find_local_config()? {
                    debug!(path = %local.display(), "using local config");
                    builder = builder.add_source(config::File::from(local).required(false));
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: Settings = settings
            .try_deserialize()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;

        Ok(cfg)
    }

    /// the package section, or its defaults
    pub fn package(&self) -> PackageCfg {
        self.package.clone().unwrap_or_default()
    }

    /// the server section, or its defaults
    pub fn server(&self) -> ServerCfg {
        self.server.clone().unwrap_or_default()
    }

    /// the output section, or its defaults
    pub fn output(&self) -> OutputCfg {
        self.output.clone().unwrap_or_default()
    }

    /// the logging section, or its defaults
    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }

    /// the default config as pretty TOML
    ///
    /// # Errors
    ///
    /// returns an error if the defaults can't be serialized
    pub fn default_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default()).wrap_err("Failed to serialize config to TOML")
    }

    /// the JSON schema of the config file
    ///
    /// # Errors
    ///
    /// returns an error if the schema can't be serialized
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Settings);
        serde_json::to_string_pretty(&schema).wrap_err("Failed to serialize config schema")
    }

    /// get the global config file path
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// find the nearest config file in the cwd's ancestors
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        Ok(curr_dir
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|path| path.exists()))
    }

    /// create a config builder with defaults
    fn create_builder(defaults: &Settings) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let config_source = Config::try_from(defaults)
            .wrap_err("Failed to convert default settings to config source")?;

        Ok(Config::builder().add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| eyre!(format_validation_errors(&errors)))
            .wrap_err("config validation failed")
            .with_section(|| CONFIG_FILE_NAME.to_string().header("Config file:"))
            .suggestion("Run with --gen-default to see valid options")
    }
}
