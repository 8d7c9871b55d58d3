//! Site configuration management.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for the blog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteSection,

    /// Author shown in the bio block.
    #[serde(default)]
    pub author: AuthorConfig,

    /// Theme persistence and browser chrome colors.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Externally supplied images.
    #[serde(default)]
    pub assets: AssetConfig,

    /// Content of the 404 page.
    #[serde(default)]
    pub not_found: NotFoundConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    /// Site title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Prefix the site is served under (e.g. "/blog"), empty for the domain root.
    #[serde(default)]
    pub path_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorConfig {
    #[serde(default = "default_title")]
    pub name: String,

    /// Link on the author's name.
    #[serde(default = "default_author_url")]
    pub url: String,

    /// Profile picture path.
    #[serde(default = "default_avatar")]
    pub avatar: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Storage key the chosen theme is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// `theme-color` while the light theme is active.
    #[serde(default = "default_light_color")]
    pub light_color: String,

    /// `theme-color` otherwise.
    #[serde(default = "default_dark_color")]
    pub dark_color: String,
}

/// Asset paths, relative to the site root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_sun_icon")]
    pub sun_icon: String,

    #[serde(default = "default_moon_icon")]
    pub moon_icon: String,

    /// Brand mark shown on the home page.
    #[serde(default = "default_logo_full")]
    pub logo_full: String,

    /// Brand mark shown on every other page.
    #[serde(default = "default_logo_compact")]
    pub logo_compact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundConfig {
    #[serde(default = "default_not_found_heading")]
    pub heading: String,

    #[serde(default = "default_not_found_message")]
    pub message: String,

    /// Optional embedded video or page.
    #[serde(default)]
    pub embed: Option<EmbedConfig>,
}

/// An iframe embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Accessible title of the frame.
    pub title: String,

    pub src: String,
}

// Default value functions
fn default_title() -> String {
    "Enzo Ferey".to_string()
}

fn default_author_url() -> String {
    "https://mobile.twitter.com/enzo_ferey".to_string()
}

fn default_avatar() -> String {
    "/assets/profile-pic.svg".to_string()
}

fn default_tagline() -> String {
    "Eating. Always eating.".to_string()
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_light_color() -> String {
    "#ffa8c5".to_string()
}

fn default_dark_color() -> String {
    "#282c35".to_string()
}

fn default_sun_icon() -> String {
    "/assets/sun.svg".to_string()
}

fn default_moon_icon() -> String {
    "/assets/moon.svg".to_string()
}

fn default_logo_full() -> String {
    "/assets/logo-full.svg".to_string()
}

fn default_logo_compact() -> String {
    "/assets/logo-compact.svg".to_string()
}

fn default_not_found_heading() -> String {
    "Not Found".to_string()
}

fn default_not_found_message() -> String {
    "I haven’t written this post yet. Will you help me write it?".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
            path_prefix: String::new(),
        }
    }
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: default_title(),
            url: default_author_url(),
            avatar: default_avatar(),
            tagline: default_tagline(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            light_color: default_light_color(),
            dark_color: default_dark_color(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            sun_icon: default_sun_icon(),
            moon_icon: default_moon_icon(),
            logo_full: default_logo_full(),
            logo_compact: default_logo_compact(),
        }
    }
}

impl Default for NotFoundConfig {
    fn default() -> Self {
        Self {
            heading: default_not_found_heading(),
            message: default_not_found_message(),
            embed: None,
        }
    }
}

impl SiteConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.theme.storage_key.is_empty() {
            return Err(CoreError::config("theme.storage_key cannot be empty"));
        }

        let prefix = &self.site.path_prefix;
        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
            return Err(CoreError::config(format!(
                "site.path_prefix must start with '/' and have no trailing slash, got {prefix:?}"
            )));
        }

        for (field, color) in [
            ("theme.light_color", &self.theme.light_color),
            ("theme.dark_color", &self.theme.dark_color),
        ] {
            if !color.starts_with('#') {
                return Err(CoreError::config(format!(
                    "{field} must be a hex color, got {color:?}"
                )));
            }
        }

        Ok(())
    }

    /// Path of the site root, always ending in a slash.
    pub fn root_path(&self) -> String {
        format!("{}/", self.site.path_prefix)
    }

    /// Full path for an asset under the path prefix.
    pub fn asset_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.site.path_prefix)
    }
}
