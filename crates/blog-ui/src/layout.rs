//! Page shell shared by every page.

use std::sync::Arc;

use blog_core::{SiteConfig, ThemeState, ThemeStore};
use leptos::prelude::*;
use leptos_meta::Meta;

use crate::{
    browser::set_root_theme,
    logo::{BrandMark, Logo},
    toggle::{ThemeToggle, ToggleIcons},
};

/// Page shell with a header (brand mark and theme toggle) around `children`.
///
/// The shell starts with an unresolved theme, reads the store once mounted
/// and follows every store notification until it is unmounted. The active
/// theme is mirrored to `data-theme` on `<html>` and to the `theme-color`
/// meta tag.
#[component]
pub fn Layout(
    /// Theme store shared by the application.
    store: ThemeStore,
    /// Site configuration.
    config: Arc<SiteConfig>,
    /// Current location path, used to pick the brand mark.
    #[prop(into)]
    pathname: Signal<String>,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(ThemeState::Unresolved);

    let reader = store.clone();
    Effect::new(move |_| state.set(reader.get().into()));

    let reader = store.clone();
    let subscription = store.subscribe(move || state.set(reader.get().into()));
    let owner = store.clone();
    on_cleanup(move || {
        owner.unsubscribe(subscription);
    });

    Effect::new(move |_| set_root_theme(state.get()));

    let light_color = config.theme.light_color.clone();
    let dark_color = config.theme.dark_color.clone();
    let theme_color = move || {
        state
            .get()
            .theme_color(&light_color, &dark_color)
            .to_string()
    };

    let root_path = config.root_path();
    let root = root_path.clone();
    let mark = Memo::new(move |_| BrandMark::for_path(&pathname.get(), &root));

    view! {
      <Meta name="theme-color" content=theme_color />
      <div class="layout">
        <div class="layout-content">
          <header class="layout-header">
            <Logo
              mark=mark
              root_path=root_path
              full_src=config.asset_url(&config.assets.logo_full)
              compact_src=config.asset_url(&config.assets.logo_compact)
              alt=config.site.title.clone()
            />
            <ThemeToggle store=store state=state icons=ToggleIcons::from_config(&config) />
          </header>
          {children()}
        </div>
      </div>
    }
}
