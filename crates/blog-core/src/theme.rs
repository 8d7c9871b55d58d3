//! Theme preference values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The active visual mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted textual form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Map a switch position to a theme: checked is dark.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for text that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {:?}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Theme as seen by a mounted view.
///
/// Views start `Unresolved` and switch to `Resolved` after they first read
/// the store, so nothing theme-dependent is guessed on the first render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeState {
    #[default]
    Unresolved,
    Resolved(Theme),
}

impl ThemeState {
    /// The resolved theme, if any.
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(theme) => Some(theme),
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Pick the browser chrome tint for this state.
    ///
    /// Only a resolved light theme gets the light color.
    pub fn theme_color<'a>(self, light: &'a str, dark: &'a str) -> &'a str {
        match self {
            Self::Resolved(Theme::Light) => light,
            Self::Resolved(Theme::Dark) | Self::Unresolved => dark,
        }
    }
}

impl From<Theme> for ThemeState {
    fn from(theme: Theme) -> Self {
        Self::Resolved(theme)
    }
}
