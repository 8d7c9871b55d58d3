//! Brand mark in the page header.

use leptos::prelude::*;

/// Which brand mark variant to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandMark {
    /// On the site root.
    Full,
    /// Everywhere else.
    Compact,
}

impl BrandMark {
    /// `Full` only when `pathname` is exactly the site root.
    pub fn for_path(pathname: &str, root_path: &str) -> Self {
        if pathname == root_path {
            Self::Full
        } else {
            Self::Compact
        }
    }

    /// CSS class of the image.
    pub fn class(self) -> &'static str {
        match self {
            Self::Full => "brand-mark brand-mark--full",
            Self::Compact => "brand-mark brand-mark--compact",
        }
    }
}

/// Brand mark linking to the site root.
#[component]
pub fn Logo(
    /// Variant to render.
    #[prop(into)]
    mark: Signal<BrandMark>,
    /// Link target.
    root_path: String,
    /// Image for [`BrandMark::Full`].
    full_src: String,
    /// Image for [`BrandMark::Compact`].
    compact_src: String,
    /// Alternative text for both images.
    alt: String,
) -> impl IntoView {
    view! {
      <a href=root_path class="brand-link">
        {move || {
          let mark = mark.get();
          let src = match mark {
            BrandMark::Full => full_src.clone(),
            BrandMark::Compact => compact_src.clone(),
          };
          view! { <img class=mark.class() src=src alt=alt.clone() /> }
        }}
      </a>
    }
}
