//! Blog UI Components
//!
//! Leptos components for the blog frontend.
//!
//! # Components
//!
//! ## Shell
//! - [`Layout`] - Page shell with header, brand mark and theme toggle
//! - [`Logo`] - Full or compact brand mark linking home
//!
//! ## Theme
//! - [`Toggle`] - Accessible binary switch with two icons
//! - [`ThemeToggle`] - [`Toggle`] bound to a [`ThemeStore`](blog_core::ThemeStore)
//!
//! ## Content
//! - [`Bio`] - Author bio block
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use blog_core::{SiteConfig, ThemeStore};
//! use blog_ui::{Bio, Layout, browser};
//! use leptos::prelude::*;
//!
//! let config = Arc::new(SiteConfig::default());
//! let store = browser::theme_store(&config.theme.storage_key);
//!
//! leptos::mount::mount_to_body(move || {
//!     view! {
//!         <Layout store=store config=config.clone() pathname="/".to_string()>
//!             <Bio config=config />
//!         </Layout>
//!     }
//! });
//! ```

pub mod bio;
pub mod browser;
pub mod layout;
pub mod logo;
pub mod toggle;

pub use bio::Bio;
pub use layout::Layout;
pub use logo::{BrandMark, Logo};
pub use toggle::{Icon, ThemeToggle, Toggle, ToggleIcons};
