//! palette extraction stuff
//!
//! the "extraction" here is a presence test: every slot has a preferred and a
//! fallback color, and the preferred one only wins if the source mentions it
use {
    hashbrown::HashSet,
    regex::Regex,
    std::{fmt, ops::Index, sync::LazyLock},
    tracing::debug,
};

/// the font stack used when the source declares none
pub const FALLBACK_FONT: &str = "'Courier New', monospace";

/// matches `#` followed by six hex digits
static HEX6_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("hex color pattern is valid"));

/// matches the first `font-family: ...;` declaration
static FONT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-family:\s*([^;]+);").expect("font-family pattern is valid")
});

/// a color slot of the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// main background
    Background,
    /// editor pane background
    EditorBackground,
    /// side panel background
    PanelBackground,
    /// selected item background
    SelectionBackground,
    /// status bar background
    StatusBackground,
    /// header background
    HeaderBackground,
    /// low contrast border
    DimBorder,
    /// regular border
    Border,
    /// success green
    Success,
    /// info blue
    Info,
    /// comment grey
    Comment,
    /// accent color
    Accent,
    /// hyperlink color
    Link,
    /// muted text
    Muted,
    /// danger red
    Danger,
    /// main text
    Foreground,
    /// bright text
    LightForeground,
    /// warning yellow
    Warning,
}

impl Slot {
    /// every slot, in palette order
    pub const ALL: [Slot; 18] = [
        Slot::Background,
        Slot::EditorBackground,
        Slot::PanelBackground,
        Slot::SelectionBackground,
        Slot::StatusBackground,
        Slot::HeaderBackground,
        Slot::DimBorder,
        Slot::Border,
        Slot::Success,
        Slot::Info,
        Slot::Comment,
        Slot::Accent,
        Slot::Link,
        Slot::Muted,
        Slot::Danger,
        Slot::Foreground,
        Slot::LightForeground,
        Slot::Warning,
    ];

    /// the snake_case name of the slot
    pub fn name(self) -> &'static str {
        match self {
            Slot::Background => "background",
            Slot::EditorBackground => "editor_background",
            Slot::PanelBackground => "panel_background",
            Slot::SelectionBackground => "selection_background",
            Slot::StatusBackground => "status_background",
            Slot::HeaderBackground => "header_background",
            Slot::DimBorder => "dim_border",
            Slot::Border => "border",
            Slot::Success => "success",
            Slot::Info => "info",
            Slot::Comment => "comment",
            Slot::Accent => "accent",
            Slot::Link => "link",
            Slot::Muted => "muted",
            Slot::Danger => "danger",
            Slot::Foreground => "foreground",
            Slot::LightForeground => "light_foreground",
            Slot::Warning => "warning",
        }
    }

    /// the color used if the source mentions it
    pub fn preferred(self) -> &'static str {
        match self {
            Slot::Background => "#1c1c1c",
            Slot::EditorBackground => "#282828",
            Slot::PanelBackground => "#2a2a2a",
            Slot::SelectionBackground => "#2f2f2f",
            Slot::StatusBackground => "#343434",
            Slot::HeaderBackground => "#383838",
            Slot::DimBorder => "#505050",
            Slot::Border => "#696969",
            Slot::Success => "#6fb86f",
            Slot::Info => "#7cb8bb",
            Slot::Comment => "#7f9f7f",
            Slot::Accent => "#8cd0d3",
            Slot::Link => "#93e0e3",
            Slot::Muted => "#c0c0c0",
            Slot::Danger => "#cc9393",
            Slot::Foreground => "#d0d0d0",
            Slot::LightForeground => "#dcdccc",
            Slot::Warning => "#f0dfaf",
        }
    }

    /// the color used otherwise
    pub fn fallback(self) -> &'static str {
        match self {
            Slot::Background => "#1c1c1c",
            Slot::EditorBackground => "#282828",
            Slot::PanelBackground => "#2a2a2a",
            Slot::SelectionBackground => "#2f2f2f",
            Slot::StatusBackground => "#343434",
            Slot::HeaderBackground => "#383838",
            Slot::DimBorder => "#505050",
            Slot::Border => "#696969",
            Slot::Success => "#2b9612",
            Slot::Info => "#086dd6",
            Slot::Comment => "#989898",
            Slot::Accent => "#7049cf",
            Slot::Link => "#086dd6",
            Slot::Muted => "#989898",
            Slot::Danger => "#f80324",
            Slot::Foreground => "#d0d0d0",
            Slot::LightForeground => "#ffffff",
            Slot::Warning => "#f6a200",
        }
    }

    /// pick between the preferred and fallback color
    fn pick(self, present: &HashSet<String>) -> &'static str {
        let wanted = self.preferred();

        if present.contains(&wanted.to_ascii_lowercase()) {
            wanted
        } else {
            self.fallback()
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// the colors and font a theme is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// the font family used for both the monospace and sans-serif stacks
    pub font_family: String,
    /// one color per slot, indexed in [`Slot::ALL`] order
    colors: [&'static str; Slot::ALL.len()],
}

impl Palette {
    /// build a palette from an HTML/CSS source
    pub fn from_source(source: &str) -> Self {
        let present = extract_colors(source);
        let colors = Slot::ALL.map(|slot| slot.pick(&present));

        debug!(
            distinct_colors = present.len(),
            "built palette from source text"
        );

        Self {
            font_family: extract_font(source),
            colors,
        }
    }

    /// the palette you get from a source without any hints
    pub fn fallback() -> Self {
        Self {
            font_family: FALLBACK_FONT.to_string(),
            colors: Slot::ALL.map(Slot::fallback),
        }
    }

    /// iterate over every slot and its color
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &'static str)> + '_ {
        Slot::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

impl Index<Slot> for Palette {
    type Output = str;

    fn index(&self, slot: Slot) -> &Self::Output {
        self.colors[slot as usize]
    }
}

/// extract the first `font-family` declaration's value
///
/// falls back to [`FALLBACK_FONT`] if there isn't one
pub fn extract_font(source: &str) -> String {
    FONT_RE
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| FALLBACK_FONT.to_string())
}

/// the set of distinct `#rrggbb` colors in a source, lowercased
pub fn extract_colors(source: &str) -> HashSet<String> {
    HEX6_RE
        .find_iter(source)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// build a palette from an HTML/CSS source
pub fn build_palette(source: &str) -> Palette {
    Palette::from_source(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_font_first_match_trimmed() {
        let src = "body { FONT-FAMILY:   'Iosevka', monospace  ; }\np { font-family: serif; }";
        assert_eq!(extract_font(src), "'Iosevka', monospace");
    }

    #[test]
    fn test_extract_font_fallback() {
        assert_eq!(extract_font("<html></html>"), FALLBACK_FONT);
        assert_eq!(extract_font("font-family: unterminated"), FALLBACK_FONT);
    }

    #[test]
    fn test_extract_colors_dedups_case_insensitively() {
        let colors = extract_colors("#ABCDEF #abcdef #123456 #12345 #zzzzzz");
        assert_eq!(colors.len(), 2);
        assert!(colors.contains("#abcdef"));
        assert!(colors.contains("#123456"));
    }

    #[test]
    fn test_extract_colors_takes_prefix_of_longer_runs() {
        let colors = extract_colors("color: #11223344;");
        assert!(colors.contains("#112233"));
    }

    #[test]
    fn test_no_colors_means_all_fallbacks() {
        let palette = build_palette("nothing to see here");

        for (slot, color) in palette.iter() {
            assert_eq!(color, slot.fallback(), "slot {slot}");
        }

        assert_eq!(palette, Palette::fallback());
    }

    #[test]
    fn test_preferred_color_wins_when_present() {
        let palette = build_palette("a { color: #CC9393; } b { color: #8cd0d3 }");

        assert_eq!(&palette[Slot::Danger], "#cc9393");
        assert_eq!(&palette[Slot::Accent], "#8cd0d3");
        assert_eq!(&palette[Slot::Warning], "#f6a200");
        assert_eq!(&palette[Slot::Info], "#086dd6");
    }

    #[test]
    fn test_unrelated_colors_are_never_adopted() {
        let palette = build_palette("#ff00ff #00ff00 #0000ff");

        for (slot, color) in palette.iter() {
            assert!(color == slot.preferred() || color == slot.fallback());
        }
    }

    #[test]
    fn test_index_matches_slot_order() {
        let palette = Palette::fallback();
        for slot in Slot::ALL {
            assert_eq!(&palette[slot], slot.fallback());
        }
    }
}
