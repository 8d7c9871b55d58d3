//! Blog Core Library
//!
//! Theme preference store, the capabilities it depends on, and the site
//! configuration shared by the UI crates.

pub mod config;
pub mod error;
pub mod storage;
pub mod store;
pub mod theme;

pub use config::SiteConfig;
pub use error::{CoreError, Result};
pub use storage::{FixedPreference, MemoryStorage, PreferenceStorage, SystemPreference};
pub use store::{Subscription, ThemeStore, resolve_initial};
pub use theme::{Theme, ThemeState};
