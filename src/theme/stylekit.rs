//! StyleKit variable templates
//!
//! `var(--...)` values are references for the consuming renderer and are
//! never resolved here
use {
    crate::{
        theme::{
            palette::{Palette, Slot},
            vars::VarMap,
        },
        vars,
    },
    tracing::debug,
};

/// the primary `--sn-stylekit-*` variables
pub fn map_variables(p: &Palette) -> VarMap {
    use Slot::*;

    let bg = &p[Background];
    let fg = &p[Foreground];
    let font = p.font_family.as_str();

    let map = vars! {
        "--sn-stylekit-monospace-font" => font,
        "--sn-stylekit-sans-serif-font" => font,

        "--sn-stylekit-background-color" => bg,
        "--sn-stylekit-foreground-color" => fg,
        "--sn-stylekit-border-color" => &p[Border],

        "--sn-stylekit-contrast-background-color" => &p[EditorBackground],
        "--sn-stylekit-contrast-foreground-color" => &p[Muted],
        "--sn-stylekit-contrast-border-color" => &p[Border],

        "--sn-stylekit-secondary-background-color" => &p[PanelBackground],
        "--sn-stylekit-secondary-foreground-color" => fg,
        "--sn-stylekit-secondary-border-color" => &p[Border],

        "--sn-stylekit-secondary-contrast-background-color" => &p[HeaderBackground],
        "--sn-stylekit-secondary-contrast-foreground-color" => fg,
        // upstream docs misspell this one, the app reads the corrected name
        "--sn-stylekit-secondary-contrast-border-color" => &p[Border],

        "--sn-stylekit-editor-background-color" => &p[EditorBackground],
        "--sn-stylekit-editor-foreground-color" => fg,

        "--sn-stylekit-neutral-color" => &p[Muted],
        "--sn-stylekit-neutral-contrast-color" => bg,
        "--sn-stylekit-info-color" => &p[Info],
        "--sn-stylekit-info-contrast-color" => bg,
        "--sn-stylekit-success-color" => &p[Success],
        "--sn-stylekit-success-contrast-color" => bg,
        "--sn-stylekit-warning-color" => &p[Warning],
        "--sn-stylekit-warning-contrast-color" => bg,
        "--sn-stylekit-danger-color" => &p[Danger],
        "--sn-stylekit-danger-contrast-color" => bg,

        "--sn-stylekit-shadow-color" => &p[DimBorder],
        "--sn-stylekit-paragraph-text-color" => fg,
        "--sn-stylekit-input-placeholder-color" => &p[Comment],
        "--sn-stylekit-input-border-color" => &p[Border],
        "--sn-stylekit-scrollbar-thumb-color" => &p[DimBorder],
        "--sn-stylekit-scrollbar-track-border-color" => &p[Border],
        "--sn-stylekit-general-border-radius" => "2px",

        "--sn-stylekit-grey-1" => &p[DimBorder],
        "--sn-stylekit-grey-2" => &p[Border],
        "--sn-stylekit-grey-3" => &p[SelectionBackground],
        "--sn-stylekit-grey-4" => &p[StatusBackground],
        // 50% alpha
        "--sn-stylekit-grey-4-opacity-variant" => format!("{}80", &p[StatusBackground]),
        "--sn-stylekit-grey-5" => &p[HeaderBackground],
        "--sn-stylekit-grey-6" => &p[EditorBackground],

        "--sn-stylekit-accessory-tint-color-1" => &p[Info],
        "--sn-stylekit-accessory-tint-color-2" => &p[Danger],
        "--sn-stylekit-accessory-tint-color-3" => &p[Warning],
        "--sn-stylekit-accessory-tint-color-4" => &p[Accent],
        "--sn-stylekit-accessory-tint-color-5" => &p[Success],
        "--sn-stylekit-accessory-tint-color-6" => &p[Link],
    };

    debug!(count = map.len(), "mapped stylekit variables");
    map
}

/// the auxiliary per-surface variables, layered over [`map_variables`]
pub fn map_optional_overrides(p: &Palette) -> VarMap {
    use Slot::*;

    let map = vars! {
        "--modal-background-color" => "var(--sn-stylekit-background-color)",
        "--editor-header-bar-background-color" => &p[HeaderBackground],
        "--editor-background-color" => "var(--sn-stylekit-editor-background-color)",
        "--editor-foreground-color" => "var(--sn-stylekit-editor-foreground-color)",
        "--editor-title-bar-border-bottom-color" => "var(--sn-stylekit-border-color)",
        "--editor-title-input-color" => "var(--sn-stylekit-editor-foreground-color)",

        "--editor-pane-background-color" => "var(--sn-stylekit-background-color)",
        "--editor-pane-editor-background-color" => "var(--sn-stylekit-editor-background-color)",
        "--editor-pane-editor-foreground-color" => "var(--sn-stylekit-editor-foreground-color)",
        "--editor-pane-component-stack-item-background-color" => "var(--sn-stylekit-background-color)",

        "--text-selection-color" => "var(--sn-stylekit-info-contrast-color)",
        "--text-selection-background-color" => "var(--sn-stylekit-info-color)",

        "--items-column-background-color" => "var(--sn-stylekit-background-color)",
        "--items-column-items-background-color" => "var(--sn-stylekit-background-color)",
        "--items-column-border-left-color" => "var(--sn-stylekit-border-color)",
        "--items-column-border-right-color" => "var(--sn-stylekit-border-color)",

        "--items-column-search-background-color" => "var(--sn-stylekit-contrast-background-color)",
        "--item-cell-selected-background-color" => "var(--sn-stylekit-contrast-background-color)",
        "--item-cell-selected-border-left-color" => "var(--sn-stylekit-info-color)",

        "--navigation-column-background-color" => "var(--sn-stylekit-secondary-background-color)",
        "--navigation-section-title-color" => "var(--sn-stylekit-secondary-foreground-color)",
        "--navigation-item-text-color" => "var(--sn-stylekit-secondary-foreground-color)",
        "--navigation-item-count-color" => "var(--sn-stylekit-neutral-color)",

        "--panel-resizer-background-color" => "var(--sn-stylekit-secondary-contrast-background-color)",
        "--link-element-color" => &p[Link],
    };

    debug!(count = map.len(), "mapped optional override variables");
    map
}

/// the raw rules appended after the variable block
pub fn extra_rules(p: &Palette) -> String {
    format!("a {{ color: {}; }}\n", &p[Slot::Link])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// pull the name out of a `var(--name)` reference
    fn referenced(value: &str) -> Option<&str> {
        value.strip_prefix("var(")?.strip_suffix(')')
    }

    #[test]
    fn test_primary_template_size() {
        assert_eq!(map_variables(&Palette::fallback()).len(), 46);
        assert_eq!(map_optional_overrides(&Palette::fallback()).len(), 25);
    }

    #[test]
    fn test_primary_uses_palette_slots() {
        let palette = crate::theme::palette::build_palette(
            "body { font-family: 'Fira Code'; color: #d0d0d0; } .err { color: #cc9393 }",
        );
        let map = map_variables(&palette);

        assert_eq!(map["--sn-stylekit-monospace-font"], "'Fira Code'");
        assert_eq!(map["--sn-stylekit-sans-serif-font"], "'Fira Code'");
        assert_eq!(map["--sn-stylekit-danger-color"], "#cc9393");
        assert_eq!(map["--sn-stylekit-accessory-tint-color-2"], "#cc9393");
        assert_eq!(map["--sn-stylekit-warning-color"], "#f6a200");
        assert_eq!(map["--sn-stylekit-danger-contrast-color"], "#1c1c1c");
    }

    #[test]
    fn test_opacity_variant_appends_alpha() {
        let map = map_variables(&Palette::fallback());
        assert_eq!(map["--sn-stylekit-grey-4-opacity-variant"], "#34343480");
        assert_eq!(map["--sn-stylekit-general-border-radius"], "2px");
    }

    #[test]
    fn test_corrected_secondary_contrast_border_name() {
        let map = map_variables(&Palette::fallback());
        assert!(map.contains_key("--sn-stylekit-secondary-contrast-border-color"));
    }

    #[test]
    fn test_references_are_kept_verbatim_and_resolve_in_scope() {
        let palette = Palette::fallback();
        let primary = map_variables(&palette);
        let optional = map_optional_overrides(&palette);

        assert_eq!(
            optional["--modal-background-color"],
            "var(--sn-stylekit-background-color)"
        );

        for (name, value) in &optional {
            if let Some(target) = referenced(value) {
                assert!(
                    primary.contains_key(target),
                    "{name} points at undefined {target}"
                );
            }
        }
    }

    #[test]
    fn test_optional_literal_values() {
        let optional = map_optional_overrides(&Palette::fallback());
        assert_eq!(optional["--editor-header-bar-background-color"], "#383838");
        assert_eq!(optional["--link-element-color"], "#086dd6");
    }

    #[test]
    fn test_extra_rules_use_link_color() {
        let palette = crate::theme::palette::build_palette("#93E0E3");
        assert_eq!(extra_rules(&palette), "a { color: #93e0e3; }\n");
        assert_eq!(
            extra_rules(&Palette::fallback()),
            "a { color: #086dd6; }\n"
        );
    }
}
