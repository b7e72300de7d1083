//! theme package metadata stuff
use {
    crate::theme::palette::{Palette, Slot},
    serde::Serialize,
};

/// the stylesheet's filename inside the output directory
pub const CSS_FILENAME: &str = "theme.css";
/// the manifest's filename inside the output directory
pub const EXT_FILENAME: &str = "ext.json";

/// the icon shown in the app's dock for the theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DockIcon {
    /// the icon shape
    #[serde(rename = "type")]
    pub kind: String,
    /// fill color
    pub background_color: String,
    /// glyph color
    pub foreground_color: String,
    /// outline color
    pub border_color: String,
}

impl DockIcon {
    /// a circle icon in the palette's colors
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            kind: "circle".to_string(),
            background_color: p[Slot::Background].to_string(),
            foreground_color: p[Slot::Accent].to_string(),
            border_color: p[Slot::Info].to_string(),
        }
    }
}

/// the metadata of a theme package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMeta {
    /// reverse-dns style identifier
    pub identifier: String,
    /// the display name
    pub name: String,
    /// the package version
    pub version: String,
    /// shown under the name in the app
    pub description: String,
    /// dark themes get `isDark: true`
    pub is_dark: bool,
    /// host used for local urls
    pub host: String,
    /// port used for local urls
    pub port: u16,
    /// where the files get published, if anywhere
    pub cdn_base: Option<String>,
    /// project homepage
    pub marketing_url: Option<String>,
    /// the dock icon
    pub dock_icon: Option<DockIcon>,
}

impl PackageMeta {
    /// the hosting base with any trailing slashes stripped
    pub fn hosted_base(&self) -> Option<&str> {
        self.cdn_base
            .as_deref()
            .map(|base| base.trim_end_matches('/'))
            .filter(|base| !base.is_empty())
    }

    /// the url the stylesheet is fetched from
    pub fn css_url(&self) -> String {
        match self.hosted_base() {
            Some(base) => format!("{base}/{CSS_FILENAME}"),
            None => self.local_url(CSS_FILENAME),
        }
    }

    /// the url of the manifest itself, only known when hosted
    pub fn latest_url(&self) -> Option<String> {
        self.hosted_base()
            .map(|base| format!("{base}/{EXT_FILENAME}"))
    }

    /// the url to paste into the app's install dialog
    pub fn install_url(&self) -> String {
        self.latest_url()
            .unwrap_or_else(|| self.local_url(EXT_FILENAME))
    }

    /// a url on the local server
    pub fn local_url(&self, file: &str) -> String {
        format!("http://{}:{}/{}", self.host, self.port, file)
    }
}
