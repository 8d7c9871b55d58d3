use std::sync::Arc;

use blog_core::{SiteConfig, ThemeStore};
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

pub mod pages;

use pages::{HomePage, NotFoundPage};

/// Site configuration compiled into the binary.
pub const SITE_TOML: &str = include_str!("../../site.toml");

/// Parse the embedded site configuration, falling back to defaults.
pub fn load_site_config() -> SiteConfig {
    SiteConfig::from_toml(SITE_TOML).unwrap_or_else(|err| {
        log::error!("invalid site.toml, using defaults: {err}");
        SiteConfig::default()
    })
}

#[component]
pub fn App(
    /// Theme store resolved at startup.
    store: ThemeStore,
    /// Site configuration.
    config: Arc<SiteConfig>,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let base = config.site.path_prefix.clone();
    let (home_store, home_config) = (store.clone(), config.clone());
    let home = move || {
        view! { <HomePage store=home_store.clone() config=home_config.clone() /> }
    };
    let not_found = move || {
        view! { <NotFoundPage store=store.clone() config=config.clone() /> }
    };

    view! {
      <Router base=base>
        <Routes fallback=not_found>
          <Route path=StaticSegment("") view=home />
        </Routes>
      </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_toml(SITE_TOML).expect("site.toml parses");
        assert!(!config.site.title.is_empty());
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn test_load_site_config_matches_embedded() {
        let config = load_site_config();
        assert_eq!(config.author.name, "Enzo Ferey");
        assert!(config.not_found.embed.is_some());
    }
}
