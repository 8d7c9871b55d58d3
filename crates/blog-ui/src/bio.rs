//! Author bio block.

use std::sync::Arc;

use blog_core::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Bio(config: Arc<SiteConfig>) -> impl IntoView {
    let author = config.author.clone();
    let avatar = config.asset_url(&author.avatar);

    view! {
      <div class="bio">
        <img class="bio-avatar" src=avatar alt=author.name.clone() />
        <p class="bio-text">
          "Personal blog by " <a href=author.url>{author.name}</a> ". " {author.tagline}
        </p>
      </div>
    }
}
