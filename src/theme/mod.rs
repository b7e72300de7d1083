//! theme generation stuff
pub mod metadata;
pub mod palette;
pub mod stylekit;
pub mod vars;

use crate::theme::{
    palette::Palette,
    stylekit::{extra_rules, map_optional_overrides, map_variables},
    vars::VarMap,
};

/// everything derived from a palette source
#[derive(Debug, Clone)]
pub struct PaletteTheme {
    /// the palette itself
    pub palette: Palette,
    /// primary variables, plus the optional ones unless suppressed
    pub vars: VarMap,
    /// raw rules appended after the variable block
    pub extra_css: String,
}

impl PaletteTheme {
    /// derive the variables from an HTML/CSS source
    pub fn from_source(source: &str, with_optional: bool) -> Self {
        Self::from_palette(palette::build_palette(source), with_optional)
    }

    /// derive the variables from an already built palette
    pub fn from_palette(palette: Palette, with_optional: bool) -> Self {
        let mut vars = map_variables(&palette);

        if with_optional {
            vars.extend(map_optional_overrides(&palette));
        }

        Self {
            extra_css: extra_rules(&palette),
            vars,
            palette,
        }
    }
}
