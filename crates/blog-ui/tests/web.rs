//! Browser tests for the UI components.
//!
//! Run with `wasm-pack test --headless --firefox crates/blog-ui`.

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use blog_core::{FixedPreference, SiteConfig, Theme, ThemeState, ThemeStore};
use blog_ui::{BrandMark, Layout, Logo, ThemeToggle, Toggle, ToggleIcons};
use leptos::{mount::mount_to, prelude::*};
use leptos_meta::provide_meta_context;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn container() -> web_sys::HtmlElement {
    let el = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&el).unwrap();
    el.unchecked_into()
}

fn checkbox(root: &web_sys::HtmlElement) -> Option<web_sys::HtmlInputElement> {
    root.query_selector("input[type=checkbox]")
        .unwrap()
        .map(|el| el.unchecked_into())
}

/// Wait for queued effects and DOM updates to run.
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback(&resolve)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn theme_color() -> Option<String> {
    document()
        .query_selector("meta[name=\"theme-color\"]")
        .unwrap()
        .and_then(|meta| meta.get_attribute("content"))
}

fn session_store() -> ThemeStore {
    ThemeStore::with_session_storage("theme", &FixedPreference::NONE)
}

#[wasm_bindgen_test]
fn test_toggle_reports_new_checked_state() {
    let root = container();
    let last = RwSignal::new(None::<bool>);
    let icons = ToggleIcons::from_config(&SiteConfig::default());

    let _handle = mount_to(root.clone(), move || {
        view! {
          <Toggle checked=false icons=icons on_change=Callback::new(move |c: bool| last.set(Some(c))) />
        }
    });

    let input = checkbox(&root).expect("checkbox rendered");
    assert_eq!(
        input.get_attribute("aria-label").as_deref(),
        Some("Switch between Dark and Light mode")
    );
    input.click();
    assert_eq!(last.get_untracked(), Some(true));
}

#[wasm_bindgen_test]
fn test_placeholder_before_resolution() {
    let root = container();
    let store = session_store();
    let icons = ToggleIcons::from_config(&SiteConfig::default());

    let _handle = mount_to(root.clone(), move || {
        view! {
          <ThemeToggle store=store state=Signal::stored(ThemeState::Unresolved) icons=icons />
        }
    });

    let placeholder = root
        .query_selector(".toggle-placeholder")
        .unwrap()
        .expect("placeholder rendered");
    assert!(
        placeholder
            .get_attribute("style")
            .unwrap_or_default()
            .contains("24px")
    );
    assert!(checkbox(&root).is_none());
}

#[wasm_bindgen_test]
fn test_resolved_toggle_reflects_theme() {
    let root = container();
    let store = session_store();
    let icons = ToggleIcons::from_config(&SiteConfig::default());

    let _handle = mount_to(root.clone(), move || {
        view! {
          <ThemeToggle store=store state=Signal::stored(ThemeState::Resolved(Theme::Dark)) icons=icons />
        }
    });

    let input = checkbox(&root).expect("checkbox rendered");
    assert!(input.checked());
    assert!(root.query_selector(".toggle-placeholder").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_logo_variant_follows_mark() {
    for (pathname, expected) in [
        ("/", "brand-mark--full"),
        ("/any-other-page", "brand-mark--compact"),
    ] {
        let root = container();
        let mark = BrandMark::for_path(pathname, "/");

        let _handle = mount_to(root.clone(), move || {
            view! {
              <Logo
                mark=mark
                root_path="/".to_string()
                full_src="/full.svg".to_string()
                compact_src="/compact.svg".to_string()
                alt="Blog".to_string()
              />
            }
        });

        let img = root.query_selector("img").unwrap().expect("brand mark");
        assert!(img.class_name().contains(expected), "{pathname}");
    }
}

#[wasm_bindgen_test]
async fn test_shell_resolves_and_toggles_theme() {
    let root = container();
    let store = session_store();
    let config = Arc::new(SiteConfig::default());
    let shell_store = store.clone();

    let _handle = mount_to(root.clone(), move || {
        provide_meta_context();
        view! {
          <Layout store=shell_store config=config pathname="/".to_string()>
            <p class="page-body">"Hello"</p>
          </Layout>
        }
    });

    assert!(root.query_selector(".brand-mark--full").unwrap().is_some());
    assert!(root.query_selector(".page-body").unwrap().is_some());
    assert!(root.query_selector(".toggle-placeholder").unwrap().is_some());

    next_tick().await;

    let input = checkbox(&root).expect("toggle after resolution");
    assert!(!input.checked());
    assert_eq!(store.get(), Theme::Light);
    assert_eq!(theme_color().as_deref(), Some("#ffa8c5"));

    input.click();
    assert_eq!(store.get(), Theme::Dark);

    next_tick().await;

    let input = checkbox(&root).expect("toggle after interaction");
    assert!(input.checked());

    assert_eq!(theme_color().as_deref(), Some("#282c35"));

    let html = document().document_element().unwrap();
    assert_eq!(html.get_attribute("data-theme").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
async fn test_shell_unsubscribes_on_unmount() {
    let root = container();
    let store = session_store();
    let config = Arc::new(SiteConfig::default());
    let shell_store = store.clone();

    let handle = mount_to(root.clone(), move || {
        provide_meta_context();
        view! {
          <Layout store=shell_store config=config pathname="/".to_string()>
            <p>"Hello"</p>
          </Layout>
        }
    });

    next_tick().await;
    assert_eq!(store.observer_count(), 1);

    drop(handle);
    assert_eq!(store.observer_count(), 0);

    store.set(Theme::Dark);
    assert_eq!(store.get(), Theme::Dark);
}

#[wasm_bindgen_test]
fn test_shell_brand_mark_follows_pathname() {
    let mut prefixed = SiteConfig::default();
    prefixed.site.path_prefix = "/blog".to_string();
    let prefixed = Arc::new(prefixed);
    let unprefixed = Arc::new(SiteConfig::default());

    for (config, pathname, expected, unexpected) in [
        (unprefixed.clone(), "/", "brand-mark--full", "brand-mark--compact"),
        (unprefixed, "/any-other-page", "brand-mark--compact", "brand-mark--full"),
        (prefixed.clone(), "/blog/", "brand-mark--full", "brand-mark--compact"),
        (prefixed, "/blog", "brand-mark--compact", "brand-mark--full"),
    ] {
        let root = container();
        let store = session_store();

        let _handle = mount_to(root.clone(), move || {
            provide_meta_context();
            view! {
              <Layout store=store config=config pathname=pathname.to_string()>
                <p>"Hello"</p>
              </Layout>
            }
        });

        let present = format!(".{expected}");
        let absent = format!(".{unexpected}");
        assert!(root.query_selector(&present).unwrap().is_some(), "{pathname}");
        assert!(root.query_selector(&absent).unwrap().is_none(), "{pathname}");
    }
}
