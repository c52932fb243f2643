use crate::theme::validation::ThemeValidationError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Dark, Mode::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Purple,
    Blue,
    Green,
}

impl Accent {
    pub const ALL: [Accent; 3] = [Accent::Purple, Accent::Blue, Accent::Green];

    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Purple => "purple",
            Accent::Blue => "blue",
            Accent::Green => "green",
        }
    }
}

/// Presentation variant, independent of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Default,
    Monochromatic,
    Pixelated,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Default, Style::Monochromatic, Style::Pixelated];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Monochromatic => "monochromatic",
            Style::Pixelated => "pixelated",
        }
    }

    /// Class name carried by the document root, e.g. `style-pixelated`.
    pub fn class_name(self) -> String {
        format!("style-{}", self.as_str())
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Mode, Accent, Style);

impl FromStr for Mode {
    type Err = ThemeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ThemeValidationError::UnknownMode {
                value: s.to_string(),
            })
    }
}

impl FromStr for Accent {
    type Err = ThemeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accent::ALL
            .into_iter()
            .find(|accent| accent.as_str() == s)
            .ok_or_else(|| ThemeValidationError::UnknownAccent {
                value: s.to_string(),
            })
    }
}

impl FromStr for Style {
    type Err = ThemeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ThemeValidationError::UnknownStyle {
                value: s.to_string(),
            })
    }
}

/// A theme is identified by its mode and accent. The `"<mode>-<accent>"`
/// string is only used where the key crosses into storage or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeId {
    pub mode: Mode,
    pub accent: Accent,
}

impl ThemeId {
    pub const fn new(mode: Mode, accent: Accent) -> Self {
        Self { mode, accent }
    }

    pub fn key(&self) -> String {
        format!("{}-{}", self.mode, self.accent)
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_accent(self, accent: Accent) -> Self {
        Self { accent, ..self }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.mode, self.accent)
    }
}

impl FromStr for ThemeId {
    type Err = ThemeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ThemeValidationError::MalformedKey { key: s.to_string() };

        let (mode, accent) = s.split_once('-').ok_or_else(malformed)?;
        if accent.contains('-') {
            return Err(malformed());
        }

        Ok(Self {
            mode: mode.parse()?,
            accent: accent.parse()?,
        })
    }
}

/// One colour channel triple, written as `"r g b"` in CSS variables so the
/// stylesheet can wrap it in `rgb(var(--x) / alpha)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Foreground,
    Primary,
    PrimaryDark,
    PrimaryLight,
    Secondary,
    Accent,
    Muted,
    Border,
    Card,
    BlobGradientStart,
    BlobGradientMid,
    BlobGradientEnd,
}

impl ColorRole {
    pub const ALL: [ColorRole; 13] = [
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Primary,
        ColorRole::PrimaryDark,
        ColorRole::PrimaryLight,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Muted,
        ColorRole::Border,
        ColorRole::Card,
        ColorRole::BlobGradientStart,
        ColorRole::BlobGradientMid,
        ColorRole::BlobGradientEnd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Foreground => "foreground",
            ColorRole::Primary => "primary",
            ColorRole::PrimaryDark => "primaryDark",
            ColorRole::PrimaryLight => "primaryLight",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Muted => "muted",
            ColorRole::Border => "border",
            ColorRole::Card => "card",
            ColorRole::BlobGradientStart => "blobGradientStart",
            ColorRole::BlobGradientMid => "blobGradientMid",
            ColorRole::BlobGradientEnd => "blobGradientEnd",
        }
    }

    /// CSS custom property for this role: camel humps become dashes.
    pub fn css_variable(self) -> String {
        let mut var = String::from("--");
        for c in self.name().chars() {
            if c.is_ascii_uppercase() {
                var.push('-');
                var.push(c.to_ascii_lowercase());
            } else {
                var.push(c);
            }
        }
        var
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Rgb,
    pub foreground: Rgb,
    pub primary: Rgb,
    pub primary_dark: Rgb,
    pub primary_light: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    pub card: Rgb,
    pub blob_gradient_start: Rgb,
    pub blob_gradient_mid: Rgb,
    pub blob_gradient_end: Rgb,
}

impl ThemeColors {
    pub fn get(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Foreground => self.foreground,
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryDark => self.primary_dark,
            ColorRole::PrimaryLight => self.primary_light,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::Muted => self.muted,
            ColorRole::Border => self.border,
            ColorRole::Card => self.card,
            ColorRole::BlobGradientStart => self.blob_gradient_start,
            ColorRole::BlobGradientMid => self.blob_gradient_mid,
            ColorRole::BlobGradientEnd => self.blob_gradient_end,
        }
    }

    /// Every role with its value, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Rgb)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn mode(&self) -> Mode {
        self.id.mode
    }

    pub fn accent(&self) -> Accent {
        self.id.accent
    }

    pub fn key(&self) -> String {
        self.id.key()
    }
}
