use std::sync::Arc;

use blog_core::{SiteConfig, ThemeStore, config::EmbedConfig};
use blog_ui::Layout;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

/// Title of the 404 page.
pub const NOT_FOUND_TITLE: &str = "404: Not Found";

/// Router fallback for paths without a page.
#[component]
pub fn NotFoundPage(store: ThemeStore, config: Arc<SiteConfig>) -> impl IntoView {
    let pathname = use_location().pathname;
    let content = config.not_found.clone();

    view! {
      <Title text=NOT_FOUND_TITLE />
      <Layout store=store config=config pathname=pathname>
        <main>
          <h1>{content.heading}</h1>
          <p>{content.message}</p>
          {content.embed.map(|embed| view! { <Embed embed=embed /> })}
        </main>
      </Layout>
    }
}

#[component]
fn Embed(embed: EmbedConfig) -> impl IntoView {
    view! {
      <iframe
        title=embed.title
        width="560"
        height="315"
        src=embed.src
        {::leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
        allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
        allowfullscreen=true
      ></iframe>
    }
}
