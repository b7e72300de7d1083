//! the core app
use {
    super::{cli::Cli, logging},
    crate::{
        artifact::{Written, render_manifest, render_stylesheet, write_artifacts},
        bail,
        config::Settings,
        error::{Result, ThemeError},
        serve::{ServerConfig, ThemeServer},
        theme::{
            PaletteTheme,
            metadata::{CSS_FILENAME, DockIcon, EXT_FILENAME, PackageMeta},
            vars::{self, VarMap},
        },
    },
    owo_colors::OwoColorize,
    std::path::{Path, PathBuf},
    tracing::{debug, info},
};

/// one fully resolved generation run
#[derive(Debug, Clone)]
pub struct Job {
    /// HTML/CSS palette source
    pub from_index: Option<PathBuf>,
    /// JSON variable mapping
    pub vars: Option<PathBuf>,
    /// raw `KEY=VALUE` overrides
    pub overrides: Vec<String>,
    /// where the artifacts go
    pub out_dir: PathBuf,
    /// emit the optional per-surface variables
    pub optional_overrides: bool,
    /// package metadata, the dock icon gets filled in from the palette
    pub meta: PackageMeta,
}

impl Job {
    /// merge the command line over the loaded settings
    pub fn resolve(cli: &Cli, settings: &Settings) -> Self {
        let package = settings.package();
        let server = settings.server();
        let output = settings.output();

        /// pick the cli value, then the config value, then the default
        fn pick<T>(cli: Option<T>, cfg: Option<T>, default: T) -> T {
            cli.or(cfg).unwrap_or(default)
        }

        /// empty strings mean "unset"
        fn non_empty(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }

        let defaults = Settings::default();
        let default_pkg = defaults.package();
        let default_srv = defaults.server();

        Self {
            from_index: cli.from_index.clone(),
            vars: cli.vars.clone(),
            overrides: cli.set.clone(),
            out_dir: cli
                .out
                .clone()
                .or_else(|| output.dir.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("dist")),
            optional_overrides: !cli.no_optional_overrides
                && output.optional_overrides.unwrap_or(true),
            meta: PackageMeta {
                identifier: pick(
                    cli.identifier.clone(),
                    package.identifier,
                    default_pkg.identifier.unwrap_or_default(),
                ),
                name: pick(
                    cli.name.clone(),
                    package.name,
                    default_pkg.name.unwrap_or_default(),
                ),
                version: pick(
                    cli.theme_version.clone(),
                    package.version,
                    default_pkg.version.unwrap_or_default(),
                ),
                description: pick(cli.description.clone(), package.description, String::new()),
                is_dark: !(cli.light || package.light.unwrap_or(false)),
                host: pick(
                    cli.host.clone(),
                    server.host,
                    default_srv.host.unwrap_or_default(),
                ),
                port: pick(cli.port, server.port, default_srv.port.unwrap_or(8001)),
                cdn_base: non_empty(cli.cdn.clone().or(output.cdn)),
                marketing_url: non_empty(cli.marketing_url.clone().or(output.marketing_url)),
                dock_icon: None,
            },
        }
    }
}

/// what a generation run produced
#[derive(Debug, Clone)]
pub struct Outcome {
    /// the files on disk
    pub written: Written,
    /// the metadata the manifest was rendered from
    pub meta: PackageMeta,
    /// how many variables ended up in the stylesheet
    pub var_count: usize,
}

/// read a palette source, tolerating invalid utf-8
fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ThemeError::MissingSource(path.to_path_buf()));
    }

    let raw = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// run the generation phase
///
/// every input is resolved before anything touches the output directory, so
/// an input error leaves no files behind
///
/// # Errors
///
/// returns an input error (exit code 2) for missing files, malformed
/// overrides or an empty mapping
/// returns an i/o error if writing the artifacts fails
pub fn generate(job: &Job) -> Result<Outcome> {
    let palette = match &job.from_index {
        Some(path) => {
            let source = read_source(path)?;
            info!(path = %path.display(), "extracting palette");
            Some(PaletteTheme::from_source(&source, job.optional_overrides))
        }
        None => None,
    };

    let external = job.vars.as_deref().map(vars::load_json).transpose()?;
    let overrides = vars::parse_overrides(&job.overrides)?;

    let mut layers: Vec<VarMap> = Vec::with_capacity(3);
    if let Some(theme) = &palette {
        layers.push(theme.vars.clone());
    }
    layers.extend(external);
    layers.push(overrides);

    let merged = vars::merge(layers);
    if merged.is_empty() {
        bail!(ThemeError::NoVariables);
    }

    debug!(count = merged.len(), "merged variable layers");

    let mut meta = job.meta.clone();
    meta.dock_icon = palette
        .as_ref()
        .map(|theme| DockIcon::from_palette(&theme.palette));

    let extra_css = palette
        .as_ref()
        .map(|theme| theme.extra_css.as_str())
        .unwrap_or_default();
    let css = render_stylesheet(&merged, extra_css);
    let manifest = render_manifest(&meta);
    let written = write_artifacts(&job.out_dir, &css, &manifest)?;

    Ok(Outcome {
        written,
        meta,
        var_count: merged.len(),
    })
}

/// the skthemer app
pub struct ThemeApp {
    /// the parsed command line
    cli: Cli,
    /// the loaded settings
    settings: Settings,
}

impl ThemeApp {
    /// initialize skthemer
    ///
    /// - 1. installs the miette error handler hook
    /// - 2. loads the config file(s)
    /// - 3. sets up logging
    ///
    /// # Errors
    ///
    /// returns an error if the miette hook fails to install
    /// returns an error if the configuration fails to load or validate
    /// returns an error if it fails to setup logging
    pub fn init(cli: Cli) -> Result<Self> {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::MietteHandlerOpts::new()
                    .terminal_links(true)
                    .unicode(true)
                    .context_lines(3)
                    .tab_width(4)
                    .build(),
            )
        }))?;

        let settings = Settings::load(cli.config.as_deref())?;
        logging::setup(&settings.logging(), cli.verbose)?;

        Ok(Self { cli, settings })
    }

    /// generate the artifacts and serve them if asked to
    ///
    /// # Errors
    ///
    /// returns an error if generation fails or the server can't start
    pub async fn run(self) -> Result<()> {
        if self.cli.run_generators()? {
            return Ok(());
        }

        let job = Job::resolve(&self.cli, &self.settings);
        let outcome = generate(&job)?;
        Self::report(&outcome);

        if self.cli.serve {
            let config = ServerConfig::builder()
                .root(&job.out_dir)
                .host(outcome.meta.host.clone())
                .port(outcome.meta.port)
                .build()?;

            println!(
                "{} Serving {} at http://{}:{}/ (CORS: *)",
                "[server]".cyan().bold(),
                job.out_dir.display(),
                outcome.meta.host,
                outcome.meta.port
            );

            ThemeServer::new(config).serve().await?;
        }

        Ok(())
    }

    /// print what was written and how to install it
    fn report(outcome: &Outcome) {
        let ok = "[ok]".green().bold().to_string();
        println!("{ok} Wrote: {}", outcome.written.css.display());
        println!("{ok} Wrote: {}", outcome.written.manifest.display());
        debug!(variables = outcome.var_count, "generation finished");

        let meta = &outcome.meta;
        match meta.latest_url() {
            Some(url) => {
                println!(
                    "{} Paste into Standard Notes → Manage Plugins → Install:",
                    "[install]".yellow().bold()
                );
                println!("          {url}");
            }
            None => {
                let tag = "[import]".yellow().bold().to_string();
                println!("{tag} {EXT_FILENAME}: {}", meta.local_url(EXT_FILENAME));
                println!("{tag} {CSS_FILENAME}: {}", meta.local_url(CSS_FILENAME));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::fs};

    const INDEX: &str = r#"<html><style>
        body { font-family: 'Iosevka Term', monospace; background: #1c1c1c; }
        a { color: #93E0E3; } .err { color: #cc9393; }
    </style></html>"#;

    fn job(out_dir: &Path) -> Job {
        Job::resolve(
            &Cli {
                out: Some(out_dir.to_path_buf()),
                ..Cli::default()
            },
            &Settings::default(),
        )
    }

    #[test]
    fn test_resolve_defaults() {
        let job = Job::resolve(&Cli::default(), &Settings::default());

        assert_eq!(job.out_dir, PathBuf::from("dist"));
        assert!(job.optional_overrides);
        assert!(job.meta.is_dark);
        assert_eq!(job.meta.host, "localhost");
        assert_eq!(job.meta.port, 8001);
        assert_eq!(job.meta.version, "1.0.0");
        assert_eq!(job.meta.cdn_base, None);
        assert_eq!(job.meta.marketing_url, None);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let cli = Cli {
            name: Some("Zenburn".into()),
            port: Some(9000),
            light: true,
            no_optional_overrides: true,
            cdn: Some("https://cdn.example/pkg".into()),
            ..Cli::default()
        };
        let job = Job::resolve(&cli, &Settings::default());

        assert_eq!(job.meta.name, "Zenburn");
        assert_eq!(job.meta.port, 9000);
        assert!(!job.meta.is_dark);
        assert!(!job.optional_overrides);
        assert_eq!(job.meta.cdn_base.as_deref(), Some("https://cdn.example/pkg"));
    }

    #[test]
    fn test_nothing_to_generate_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");

        let err = generate(&job(&out)).unwrap_err();

        assert!(matches!(err, ThemeError::NoVariables));
        assert_eq!(err.exit_code(), 2);
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let mut job = job(&out);
        job.from_index = Some(dir.path().join("index.html"));

        let err = generate(&job).unwrap_err();

        assert!(matches!(err, ThemeError::MissingSource(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_malformed_override_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let index = dir.path().join("index.html");
        fs::write(&index, INDEX).unwrap();

        let mut job = job(&out);
        job.from_index = Some(index);
        job.overrides = vec!["novalue".into()];

        let err = generate(&job).unwrap_err();

        assert!(matches!(err, ThemeError::MalformedOverride(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_generate_from_index() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let index = dir.path().join("index.html");
        fs::write(&index, INDEX).unwrap();

        let mut job = job(&out);
        job.from_index = Some(index);

        let outcome = generate(&job).unwrap();
        let css = fs::read_to_string(&outcome.written.css).unwrap();
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&outcome.written.manifest).unwrap())
                .unwrap();

        assert_eq!(outcome.var_count, 46 + 25);
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --sn-stylekit-monospace-font: 'Iosevka Term', monospace;\n"));
        assert!(css.contains("  --sn-stylekit-danger-color: #cc9393;\n"));
        assert!(css.contains("  --sn-stylekit-warning-color: #f6a200;\n"));
        assert!(css.ends_with("}\n\na { color: #93e0e3; }\n\n"));

        assert_eq!(manifest["url"], "http://localhost:8001/theme.css");
        assert_eq!(manifest["dock_icon"]["foreground_color"], "#7049cf");
        assert_eq!(manifest["dock_icon"]["border_color"], "#086dd6");
        assert!(manifest.get("latest_url").is_none());
    }

    #[test]
    fn test_layer_precedence_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let index = dir.path().join("index.html");
        let json = dir.path().join("vars.json");
        fs::write(&index, INDEX).unwrap();
        fs::write(
            &json,
            r##"{"--sn-stylekit-info-color": "#000001", "--sn-stylekit-danger-color": "#000002", "--custom": "x"}"##,
        )
        .unwrap();

        let mut job = job(&out);
        job.from_index = Some(index);
        job.vars = Some(json);
        job.overrides = vec!["--sn-stylekit-info-color=#000003".into()];

        let outcome = generate(&job).unwrap();
        let css = fs::read_to_string(&outcome.written.css).unwrap();

        assert!(css.contains("  --sn-stylekit-info-color: #000003;\n"));
        assert!(css.contains("  --sn-stylekit-danger-color: #000002;\n"));
        assert!(css.contains("  --custom: x;\n"));
        assert!(css.contains("  --sn-stylekit-success-color: #2b9612;\n"));
    }

    #[test]
    fn test_generate_from_json_only() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let json = dir.path().join("vars.json");
        fs::write(&json, r##"{"--b": "#222222", "--a": "#111111"}"##).unwrap();

        let mut job = job(&out);
        job.vars = Some(json);
        job.meta.cdn_base = Some("https://cdn.example/pkg/".into());

        let outcome = generate(&job).unwrap();
        let css = fs::read_to_string(&outcome.written.css).unwrap();
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&outcome.written.manifest).unwrap())
                .unwrap();

        assert_eq!(css, ":root {\n  --a: #111111;\n  --b: #222222;\n}\n");
        assert_eq!(manifest["url"], "https://cdn.example/pkg/theme.css");
        assert_eq!(manifest["latest_url"], "https://cdn.example/pkg/ext.json");
        assert!(manifest.get("dock_icon").is_none());
    }

    #[test]
    fn test_overrides_alone_are_enough() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job(&dir.path().join("dist"));
        job.overrides = vec!["--x-color=#112233".into()];

        let outcome = generate(&job).unwrap();
        assert_eq!(outcome.var_count, 1);
    }
}
