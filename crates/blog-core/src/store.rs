//! The theme preference store.
//!
//! A [`ThemeStore`] is constructed once at application start and handed to
//! the views that need it. It is a cheap clonable handle: all clones share
//! the same value, storage and observer list.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use crate::{
    storage::{MemoryStorage, PreferenceStorage, SystemPreference},
    theme::Theme,
};

type Observer = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Single source of truth for the active theme, with change notification.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Inner>,
}

struct Inner {
    dark: AtomicBool,
    key: String,
    storage: Box<dyn PreferenceStorage>,
    observers: scc::HashMap<u64, Observer>,
    next_id: AtomicU64,
}

/// Determine the initial theme. First match wins:
///
/// 1. a value persisted at `key`
/// 2. the system dark-mode signal
/// 3. [`Theme::Light`]
///
/// Unreadable storage and unrecognized stored text count as "not present".
pub fn resolve_initial(
    storage: &dyn PreferenceStorage,
    key: &str,
    system: &dyn SystemPreference,
) -> Theme {
    match storage.read(key) {
        Ok(Some(text)) => match text.parse::<Theme>() {
            Ok(theme) => {
                log::debug!("theme resolved from storage: {theme}");
                return theme;
            }
            Err(err) => log::debug!("ignoring stored theme: {err}"),
        },
        Ok(None) => {}
        Err(err) => log::warn!("theme storage unavailable, ignoring: {err}"),
    }

    if let Some(prefers_dark) = system.prefers_dark() {
        let theme = Theme::from_checked(prefers_dark);
        log::debug!("theme resolved from system preference: {theme}");
        return theme;
    }

    log::debug!("theme resolved to default: {}", Theme::default());
    Theme::default()
}

impl ThemeStore {
    /// Resolve the initial theme and build the store around `storage`.
    pub fn resolve(
        storage: impl PreferenceStorage + 'static,
        key: impl Into<String>,
        system: &dyn SystemPreference,
    ) -> Self {
        let key = key.into();
        let initial = resolve_initial(&storage, &key, system);
        Self::with_theme(storage, key, initial)
    }

    /// Build a store over fresh in-memory storage.
    ///
    /// Used when durable storage is unavailable; choices last for the
    /// session only.
    pub fn with_session_storage(key: impl Into<String>, system: &dyn SystemPreference) -> Self {
        Self::resolve(MemoryStorage::new(), key, system)
    }

    fn with_theme(storage: impl PreferenceStorage + 'static, key: String, theme: Theme) -> Self {
        Self {
            inner: Arc::new(Inner {
                dark: AtomicBool::new(theme.is_dark()),
                key,
                storage: Box::new(storage),
                observers: scc::HashMap::default(),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// The active theme.
    pub fn get(&self) -> Theme {
        Theme::from_checked(self.inner.dark.load(Ordering::Acquire))
    }

    /// Persist `theme`, make it active, then notify every observer.
    ///
    /// Observers run even when `theme` is already active. A failed write
    /// leaves the in-memory value updated.
    pub fn set(&self, theme: Theme) {
        if let Err(err) = self.inner.storage.write(&self.inner.key, theme.as_str()) {
            log::warn!("could not persist theme, keeping it for this session: {err}");
        } else {
            log::debug!("theme persisted: {theme}");
        }

        self.inner.dark.store(theme.is_dark(), Ordering::Release);
        self.notify();
    }

    /// Register a callback invoked after every [`set`](Self::set).
    pub fn subscribe(&self, observer: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        // Ids are never reused, so the slot is always free.
        let _ = self.inner.observers.insert(id, Arc::new(observer));
        Subscription(id)
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.inner.observers.remove(&subscription.0).is_some()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Key the theme is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.inner.key
    }

    fn notify(&self) {
        // Snapshot first: observers may call back into the store.
        let mut observers = Vec::with_capacity(self.inner.observers.len());
        self.inner
            .observers
            .scan(|id, observer| observers.push((*id, Arc::clone(observer))));
        observers.sort_unstable_by_key(|(id, _)| *id);

        for (_, observer) in observers {
            observer();
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.get())
            .field("key", &self.inner.key)
            .field("observers", &self.observer_count())
            .finish()
    }
}
