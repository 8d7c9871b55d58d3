use std::sync::Arc;

use blog_core::{SiteConfig, ThemeStore};
use blog_ui::{Bio, Layout};
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_location;

/// Renders the home page: the author bio.
#[component]
pub fn HomePage(store: ThemeStore, config: Arc<SiteConfig>) -> impl IntoView {
    let pathname = use_location().pathname;
    let description = config.site.description.clone().unwrap_or_default();

    view! {
      <Title text=config.site.title.clone() />
      <Meta name="description" content=description />
      <Layout store=store config=config.clone() pathname=pathname>
        <aside>
          <Bio config=config />
        </aside>
      </Layout>
    }
}
