//! Theme toggle components.
//!
//! [`Toggle`] is a plain accessible switch; [`ThemeToggle`] binds one to a
//! [`ThemeStore`].

use blog_core::{SiteConfig, Theme, ThemeState, ThemeStore};
use leptos::prelude::*;

/// Height of the placeholder shown before the theme is resolved. Matches the
/// rendered switch so the header does not shift.
pub const PLACEHOLDER_HEIGHT: &str = "24px";

/// An image icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub src: String,
    pub alt: String,
}

impl Icon {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Icons for the two switch positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleIcons {
    /// Shown on the track while checked.
    pub checked: Icon,
    /// Shown on the track while unchecked.
    pub unchecked: Icon,
}

impl ToggleIcons {
    /// Moon when checked (dark), sun when unchecked (light).
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            checked: Icon::new(config.asset_url(&config.assets.moon_icon), "Moon icon"),
            unchecked: Icon::new(config.asset_url(&config.assets.sun_icon), "Sun icon"),
        }
    }
}

/// Class list of the switch root.
pub fn toggle_class(checked: bool, focused: bool) -> String {
    let mut class = String::from("toggle");
    if checked {
        class.push_str(" toggle--checked");
    }
    if focused {
        class.push_str(" toggle--focus");
    }
    class
}

#[component]
fn IconImage(icon: Icon) -> impl IntoView {
    view! {
      <img alt=icon.alt src=icon.src width="16" height="16" style="pointer-events: none" />
    }
}

/// Accessible binary switch.
///
/// The checkbox stays in the DOM for keyboard and screen reader use; the
/// track, icons and thumb are decoration.
#[component]
pub fn Toggle(
    /// Whether the switch is on.
    #[prop(into)]
    checked: Signal<bool>,
    /// Track icons.
    icons: ToggleIcons,
    /// Called with the new checked state on interaction.
    on_change: Callback<bool>,
    /// Accessible label of the checkbox.
    #[prop(default = "Switch between Dark and Light mode")]
    aria_label: &'static str,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let ToggleIcons {
        checked: checked_icon,
        unchecked: unchecked_icon,
    } = icons;

    view! {
      <label class=move || toggle_class(checked.get(), focused.get())>
        <span class="toggle-track">
          <span class="toggle-track-check">
            <IconImage icon=checked_icon />
          </span>
          <span class="toggle-track-x">
            <IconImage icon=unchecked_icon />
          </span>
        </span>
        <span class="toggle-thumb"></span>
        <input
          type="checkbox"
          class="toggle-screenreader-only"
          aria-label=aria_label
          prop:checked=move || checked.get()
          on:change=move |ev| on_change.run(event_target_checked(&ev))
          on:focus=move |_| focused.set(true)
          on:blur=move |_| focused.set(false)
        />
      </label>
    }
}

/// Theme switch bound to the store.
///
/// Renders a fixed-size placeholder until `state` is resolved, then a
/// [`Toggle`] that is checked for the dark theme.
#[component]
pub fn ThemeToggle(
    /// Store written on interaction.
    store: ThemeStore,
    /// Theme as currently seen by the shell.
    #[prop(into)]
    state: Signal<ThemeState>,
    /// Sun and moon icons.
    icons: ToggleIcons,
) -> impl IntoView {
    let icons = StoredValue::new(icons);
    let checked = Signal::derive(move || state.get().theme().is_some_and(Theme::is_dark));
    let on_change = Callback::new(move |checked: bool| store.set(Theme::from_checked(checked)));

    view! {
      <Show
        when=move || state.get().is_resolved()
        fallback=|| {
          view! {
            <div class="toggle-placeholder" style:height=PLACEHOLDER_HEIGHT></div>
          }
        }
      >
        <Toggle checked=checked icons=icons.get_value() on_change=on_change />
      </Show>
    }
}
