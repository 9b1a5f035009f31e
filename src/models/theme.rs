//! Theme preference (colour scheme and accent).

use serde::{Deserialize, Serialize};

/// Colour scheme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Concrete appearance, given whether the OS prefers dark.
    pub fn resolve(self, prefers_dark: bool) -> Appearance {
        match self {
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
            Self::System if prefers_dark => Appearance::Dark,
            Self::System => Appearance::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

/// Appearance actually applied to the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Class set on `<html>`.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Accent colour for primary elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Zinc,
    Red,
    #[default]
    Blue,
    Green,
    Orange,
}

impl AccentColor {
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Zinc,
        AccentColor::Red,
        AccentColor::Blue,
        AccentColor::Green,
        AccentColor::Orange,
    ];

    /// HSL triple (`"H S% L%"`) applied to `--primary` and `--ring`.
    pub fn hsl(&self) -> &'static str {
        match self {
            Self::Zinc => "240 5.9% 10%",
            Self::Red => "0 72.2% 50.6%",
            Self::Blue => "221.2 83.2% 53.3%",
            Self::Green => "142.1 76.2% 36.3%",
            Self::Orange => "24.6 95% 53.1%",
        }
    }

    /// CSS variable overrides; `None` means "use the stylesheet defaults".
    ///
    /// Zinc defers to the stylesheet so it can swap between light and dark.
    pub fn css_overrides(&self) -> Option<[(&'static str, &'static str); 3]> {
        match self {
            Self::Zinc => None,
            _ => Some([
                ("--primary", self.hsl()),
                ("--primary-foreground", "0 0% 100%"),
                ("--ring", self.hsl()),
            ]),
        }
    }

    /// Swatch colour for the appearance picker.
    pub fn swatch(&self) -> String {
        match self {
            Self::Zinc => "#18181b".to_string(),
            _ => format!("hsl({})", self.hsl()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Zinc => "zinc",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
        }
    }
}

/// Stored theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub mode: ThemeMode,
    pub accent: AccentColor,
}
