//! Compiled-in palettes for every mode x accent pair.
//!
//! Accent colours (primary shades, accent, blob gradient stops) are shared by
//! the dark and light variant of an accent. Surfaces and text colours depend
//! on both mode and accent.

use crate::theme::types::{Accent, Mode, Rgb, Style, Theme, ThemeColors, ThemeId};

pub const DEFAULT_THEME_ID: ThemeId = ThemeId::new(Mode::Dark, Accent::Blue);
pub const DEFAULT_STYLE: Style = Style::Default;

struct AccentPalette {
    primary: Rgb,
    primary_dark: Rgb,
    primary_light: Rgb,
    accent: Rgb,
    blob_gradient_start: Rgb,
    blob_gradient_mid: Rgb,
    blob_gradient_end: Rgb,
}

struct Surfaces {
    background: Rgb,
    foreground: Rgb,
    secondary: Rgb,
    muted: Rgb,
    border: Rgb,
    card: Rgb,
}

const PURPLE: AccentPalette = AccentPalette {
    primary: Rgb(168, 85, 247),
    primary_dark: Rgb(126, 34, 206),
    primary_light: Rgb(192, 132, 252),
    accent: Rgb(217, 70, 239),
    blob_gradient_start: Rgb(124, 58, 237),
    blob_gradient_mid: Rgb(6, 182, 212),
    blob_gradient_end: Rgb(147, 51, 234),
};

const BLUE: AccentPalette = AccentPalette {
    primary: Rgb(59, 130, 246),
    primary_dark: Rgb(29, 78, 216),
    primary_light: Rgb(96, 165, 250),
    accent: Rgb(6, 182, 212),
    blob_gradient_start: Rgb(59, 130, 246),
    blob_gradient_mid: Rgb(14, 165, 233),
    blob_gradient_end: Rgb(96, 165, 250),
};

const GREEN: AccentPalette = AccentPalette {
    primary: Rgb(16, 185, 129),
    primary_dark: Rgb(5, 150, 105),
    primary_light: Rgb(52, 211, 153),
    accent: Rgb(20, 184, 166),
    blob_gradient_start: Rgb(34, 197, 94),
    blob_gradient_mid: Rgb(16, 185, 129),
    blob_gradient_end: Rgb(74, 222, 128),
};

const fn theme(mode: Mode, accent: Accent, palette: AccentPalette, surfaces: Surfaces) -> Theme {
    Theme {
        id: ThemeId::new(mode, accent),
        colors: ThemeColors {
            background: surfaces.background,
            foreground: surfaces.foreground,
            primary: palette.primary,
            primary_dark: palette.primary_dark,
            primary_light: palette.primary_light,
            secondary: surfaces.secondary,
            accent: palette.accent,
            muted: surfaces.muted,
            border: surfaces.border,
            card: surfaces.card,
            blob_gradient_start: palette.blob_gradient_start,
            blob_gradient_mid: palette.blob_gradient_mid,
            blob_gradient_end: palette.blob_gradient_end,
        },
    }
}

// Indexed by `index(mode, accent)`.
static THEMES: [Theme; 6] = [
    theme(
        Mode::Dark,
        Accent::Purple,
        PURPLE,
        Surfaces {
            background: Rgb(15, 15, 15),
            foreground: Rgb(255, 255, 255),
            secondary: Rgb(31, 31, 31),
            muted: Rgb(112, 112, 112),
            border: Rgb(42, 42, 42),
            card: Rgb(24, 24, 24),
        },
    ),
    theme(
        Mode::Dark,
        Accent::Blue,
        BLUE,
        Surfaces {
            background: Rgb(10, 14, 26),
            foreground: Rgb(255, 255, 255),
            secondary: Rgb(26, 31, 46),
            muted: Rgb(107, 114, 128),
            border: Rgb(30, 41, 59),
            card: Rgb(21, 27, 42),
        },
    ),
    theme(
        Mode::Dark,
        Accent::Green,
        GREEN,
        Surfaces {
            background: Rgb(10, 20, 16),
            foreground: Rgb(255, 255, 255),
            secondary: Rgb(26, 36, 32),
            muted: Rgb(107, 114, 105),
            border: Rgb(30, 43, 36),
            card: Rgb(20, 30, 24),
        },
    ),
    theme(
        Mode::Light,
        Accent::Purple,
        PURPLE,
        Surfaces {
            background: Rgb(255, 255, 255),
            foreground: Rgb(15, 15, 15),
            secondary: Rgb(245, 245, 245),
            muted: Rgb(107, 114, 128),
            border: Rgb(229, 229, 229),
            card: Rgb(250, 250, 250),
        },
    ),
    theme(
        Mode::Light,
        Accent::Blue,
        BLUE,
        Surfaces {
            background: Rgb(255, 255, 255),
            foreground: Rgb(10, 14, 26),
            secondary: Rgb(240, 244, 248),
            muted: Rgb(100, 116, 139),
            border: Rgb(226, 232, 240),
            card: Rgb(248, 250, 252),
        },
    ),
    theme(
        Mode::Light,
        Accent::Green,
        GREEN,
        Surfaces {
            background: Rgb(255, 255, 255),
            foreground: Rgb(10, 20, 16),
            secondary: Rgb(240, 245, 242),
            muted: Rgb(107, 114, 105),
            border: Rgb(226, 232, 229),
            card: Rgb(248, 250, 249),
        },
    ),
];

fn index(id: &ThemeId) -> usize {
    let mode = match id.mode {
        Mode::Dark => 0,
        Mode::Light => 1,
    };
    let accent = match id.accent {
        Accent::Purple => 0,
        Accent::Blue => 1,
        Accent::Green => 2,
    };
    mode * Accent::ALL.len() + accent
}

/// The palette for a theme. Every identifier has exactly one.
pub fn lookup(id: &ThemeId) -> &'static Theme {
    &THEMES[index(id)]
}

/// Resolve a `"<mode>-<accent>"` key. Anything else, including keys that
/// only look close, resolves to nothing.
pub fn lookup_key(key: &str) -> Option<&'static Theme> {
    key.parse::<ThemeId>().ok().map(|id| lookup(&id))
}

pub fn compose_key(mode: Mode, accent: Accent) -> String {
    ThemeId::new(mode, accent).key()
}

/// All themes, dark first, accents in purple, blue, green order.
pub fn all() -> &'static [Theme] {
    &THEMES
}

/// Colour for the browser chrome (`theme-color` and friends): the theme background.
pub fn browser_color(theme: &Theme) -> String {
    theme.colors.background.hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use proptest::prelude::*;

    fn any_mode() -> impl Strategy<Value = Mode> {
        prop::sample::select(Mode::ALL.to_vec())
    }

    fn any_accent() -> impl Strategy<Value = Accent> {
        prop::sample::select(Accent::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn compose_then_lookup_round_trips(mode in any_mode(), accent in any_accent()) {
            let theme = lookup_key(&compose_key(mode, accent)).expect("composed key resolves");
            prop_assert_eq!(theme.mode(), mode);
            prop_assert_eq!(theme.accent(), accent);
        }

        #[test]
        fn arbitrary_strings_never_panic(key in ".{0,24}") {
            let _ = lookup_key(&key);
        }
    }

    #[test]
    fn test_table_order_matches_index() {
        for theme in all() {
            assert_eq!(lookup(&theme.id), theme);
        }
        assert_eq!(all().len(), 6);
    }

    #[test]
    fn test_unknown_keys() {
        assert_none!(lookup_key("ultraviolet-mode"));
        assert_none!(lookup_key("dark"));
        assert_none!(lookup_key("Dark-Blue"));
        assert_none!(lookup_key(""));
    }

    #[test]
    fn test_default_theme() {
        assert_eq!(DEFAULT_THEME_ID.key(), "dark-blue");
        assert_eq!(lookup(&DEFAULT_THEME_ID).colors.background, Rgb(10, 14, 26));
        assert_eq!(DEFAULT_STYLE, Style::Default);
    }

    #[test]
    fn test_accent_palette_shared_across_modes() {
        let dark = lookup(&ThemeId::new(Mode::Dark, Accent::Green));
        let light = lookup(&ThemeId::new(Mode::Light, Accent::Green));
        assert_eq!(dark.colors.primary, light.colors.primary);
        assert_eq!(dark.colors.blob_gradient_end, light.colors.blob_gradient_end);
        assert_ne!(dark.colors.background, light.colors.background);
    }

    #[test]
    fn test_browser_colors() {
        let color = |key| browser_color(lookup_key(key).unwrap());
        assert_eq!(color("dark-purple"), "#0f0f0f");
        assert_eq!(color("dark-blue"), "#0a0e1a");
        assert_eq!(color("dark-green"), "#0a1410");
        assert_eq!(color("light-blue"), "#ffffff");
    }
}
