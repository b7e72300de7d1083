//! cli stuff
use {
    crate::{config::Settings, error::Result},
    clap::Parser,
    std::path::PathBuf,
};

/// Generate and optionally serve a Standard Notes SN|Theme from StyleKit CSS variables.
///
/// Flags left unset fall back to `skthemer.toml` / `SKTHEMER_*` settings.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "skthemer")]
pub struct Cli {
    /// Path to an index.html (or any HTML/CSS) to extract the palette from
    #[arg(long = "from-index", value_name = "PATH")]
    pub from_index: Option<PathBuf>,

    /// Path to a JSON file containing a CSS variable map
    #[arg(long, value_name = "PATH")]
    pub vars: Option<PathBuf>,

    /// Override/add a CSS variable, e.g. --set "--sn-stylekit-info-color=#7cb8bb" (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub set: Vec<String>,

    /// Output directory for ext.json and theme.css
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Theme name in Standard Notes
    #[arg(long)]
    pub name: Option<String>,

    /// Theme identifier
    #[arg(long)]
    pub identifier: Option<String>,

    /// Theme version string
    #[arg(long = "version", value_name = "VERSION")]
    pub theme_version: Option<String>,

    /// Theme description shown in Standard Notes
    #[arg(long)]
    pub description: Option<String>,

    /// Mark the theme as light (default is dark)
    #[arg(long)]
    pub light: bool,

    /// Host for the local server and the URLs in ext.json
    #[arg(long)]
    pub host: Option<String>,

    /// Port for the local server and the URLs in ext.json
    #[arg(long)]
    pub port: Option<u16>,

    /// Do not emit the optional override variables
    #[arg(long)]
    pub no_optional_overrides: bool,

    /// Hosting base URL (e.g. https://cdn.jsdelivr.net/gh/USER/REPO@TAG/dist),
    /// ext.json URLs point here instead of localhost
    #[arg(long, value_name = "URL")]
    pub cdn: Option<String>,

    /// URL to the project homepage / repository
    #[arg(long, value_name = "URL")]
    pub marketing_url: Option<String>,

    /// Run a local CORS-enabled server after generating files
    #[arg(long)]
    pub serve: bool,

    /// Use this config file instead of looking for skthemer.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the JSON schema of the config file and exit
    #[arg(long)]
    pub gen_schema: bool,

    /// Print the default config file and exit
    #[arg(long)]
    pub gen_default: bool,
}

impl Cli {
    /// handle the config generation flags
    ///
    /// returns whether anything was printed, in which case nothing else
    /// should run
    ///
    /// # Errors
    ///
    /// returns an error if the schema or the defaults fail to serialize
    pub fn run_generators(&self) -> Result<bool> {
        if self.gen_schema {
            println!("{}", Settings::json_schema()?);
        }

        if self.gen_default {
            println!("{}", Settings::default_toml()?);
        }

        Ok(self.gen_schema || self.gen_default)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::CommandFactory};

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "skthemer",
            "--from-index",
            "index.html",
            "--set",
            "--sn-stylekit-info-color=#7cb8bb",
            "--set=--a=b",
            "--out",
            "dist",
            "--version",
            "2.0.0",
            "--port",
            "9000",
            "--light",
            "--no-optional-overrides",
            "--cdn",
            "https://cdn.example/pkg",
            "--serve",
        ])
        .unwrap();

        assert_eq!(cli.from_index, Some(PathBuf::from("index.html")));
        assert_eq!(cli.set, vec!["--sn-stylekit-info-color=#7cb8bb", "--a=b"]);
        assert_eq!(cli.theme_version.as_deref(), Some("2.0.0"));
        assert_eq!(cli.port, Some(9000));
        assert!(cli.light && cli.no_optional_overrides && cli.serve);
        assert_eq!(cli.cdn.as_deref(), Some("https://cdn.example/pkg"));
    }

    #[test]
    fn test_parse_nothing() {
        let cli = Cli::try_parse_from(["skthemer"]).unwrap();
        assert!(cli.from_index.is_none() && cli.vars.is_none() && cli.set.is_empty());
        assert!(!cli.run_generators().unwrap());
    }
}
