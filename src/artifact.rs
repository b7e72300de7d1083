//! stylesheet + manifest rendering and writing
use {
    crate::{
        error::Result,
        theme::{
            metadata::{CSS_FILENAME, DockIcon, EXT_FILENAME, PackageMeta},
            vars::VarMap,
        },
    },
    serde::Serialize,
    std::{
        fs,
        path::{Path, PathBuf},
    },
    tracing::info,
};

/// the content type the app expects for themes
pub const CONTENT_TYPE: &str = "SN|Theme";
/// the area themes live in
pub const AREA: &str = "themes";

/// the `ext.json` manifest
///
/// field order here is the order they're written in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// package identifier
    pub identifier: String,
    /// display name
    pub name: String,
    /// always [`CONTENT_TYPE`]
    pub content_type: &'static str,
    /// always [`AREA`]
    pub area: &'static str,
    /// package version
    pub version: String,
    /// package description
    pub description: String,
    /// where the stylesheet lives
    pub url: String,
    /// dark/light flag
    #[serde(rename = "isDark")]
    pub is_dark: bool,
    /// where the manifest itself lives, when hosted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_url: Option<String>,
    /// project homepage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_url: Option<String>,
    /// dock icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dock_icon: Option<DockIcon>,
}

impl Manifest {
    /// pretty JSON with a trailing newline
    ///
    /// # Errors
    ///
    /// returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// render the variables into a `:root` block
///
/// declarations are sorted by key case-insensitively (ties broken by the
/// exact key) and values go out verbatim. `extra_css` is appended as-is when
/// it has anything besides whitespace
pub fn render_stylesheet(vars: &VarMap, extra_css: &str) -> String {
    let mut entries: Vec<(&String, &String)> = vars.iter().collect();
    entries.sort_by(|(a, _), (b, _)| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    let mut lines = Vec::with_capacity(entries.len() + 4);
    lines.push(":root {".to_string());
    lines.extend(entries.iter().map(|(k, v)| format!("  {k}: {v};")));
    lines.push("}".to_string());

    if !extra_css.trim().is_empty() {
        lines.push(String::new());
        lines.push(format!("{}\n", extra_css.trim_end()));
    }

    let mut css = lines.join("\n");
    css.push('\n');
    css
}

/// build the manifest for a package
pub fn render_manifest(meta: &PackageMeta) -> Manifest {
    Manifest {
        identifier: meta.identifier.clone(),
        name: meta.name.clone(),
        content_type: CONTENT_TYPE,
        area: AREA,
        version: meta.version.clone(),
        description: meta.description.clone(),
        url: meta.css_url(),
        is_dark: meta.is_dark,
        latest_url: meta.latest_url(),
        marketing_url: meta.marketing_url.clone().filter(|u| !u.is_empty()),
        dock_icon: meta.dock_icon.clone(),
    }
}

/// paths of the files [`write_artifacts`] produced
#[derive(Debug, Clone)]
pub struct Written {
    /// the stylesheet
    pub css: PathBuf,
    /// the manifest
    pub manifest: PathBuf,
}

/// write the stylesheet and manifest into `out_dir`, creating it if needed
///
/// the returned paths are absolute, even if `out_dir` isn't
///
/// # Errors
///
/// returns an error if the directory can't be created or a file can't be written
pub fn write_artifacts(out_dir: &Path, css: &str, manifest: &Manifest) -> Result<Written> {
    fs::create_dir_all(out_dir)?;
    let out_dir = std::path::absolute(out_dir)?;

    let written = Written {
        css: out_dir.join(CSS_FILENAME),
        manifest: out_dir.join(EXT_FILENAME),
    };

    fs::write(&written.css, css)?;
    info!(path = %written.css.display(), "wrote stylesheet");

    fs::write(&written.manifest, manifest.to_json()?)?;
    info!(path = %written.manifest.display(), "wrote manifest");

    Ok(written)
}
