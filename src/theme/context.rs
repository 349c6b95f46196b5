use std::rc::Rc;
use crate::configs::SiteConfig;
use crate::utils::ThemeState;
use super::store::{ MemoryStore, PreferenceStore };
use super::system::{ FixedSignal, SystemThemeSignal };

/// Theme capabilities handed to the rendering layer through Dioxus context.
#[derive(Clone)]
pub struct ThemeContext {
    key: String,
    store: Rc<dyn PreferenceStore>,
    system: Rc<dyn SystemThemeSignal>,
}

impl ThemeContext {
    pub fn new(
        key: impl Into<String>,
        store: Rc<dyn PreferenceStore>,
        system: Rc<dyn SystemThemeSignal>
    ) -> Self {
        Self {
            key: key.into(),
            store,
            system,
        }
    }

    /// Browser `localStorage` plus the `prefers-color-scheme` query.
    #[cfg(target_arch = "wasm32")]
    pub fn for_platform(config: &SiteConfig) -> Self {
        use super::store::LocalStorageStore;
        use super::system::MediaQuerySignal;

        Self::new(&config.theme_storage_key, Rc::new(LocalStorageStore), Rc::new(MediaQuerySignal))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn for_platform(config: &SiteConfig) -> Self {
        Self::for_native(config, cfg!(feature = "server"))
    }

    /// Preferences file on disk for desktop runs; native targets have no OS
    /// signal wired. A server renders for visitors whose choice lives in
    /// their own `localStorage`, so it always starts light and lets the
    /// client resolve after hydration.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn for_native(config: &SiteConfig, serving: bool) -> Self {
        use super::store::FileStore;

        if serving {
            log::debug!("Serving pages, theme starts light");
            return Self::ephemeral(&config.theme_storage_key);
        }
        Self::new(
            &config.theme_storage_key,
            Rc::new(FileStore::new(&config.prefs_path)),
            Rc::new(FixedSignal::unknown())
        )
    }

    /// Nothing durable, no system signal: always starts light.
    pub fn ephemeral(key: impl Into<String>) -> Self {
        Self::new(key, Rc::new(MemoryStore::new()), Rc::new(FixedSignal::unknown()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored choice, then system preference, then light.
    pub fn resolve_initial(&self) -> bool {
        let stored = match self.store.load(&self.key) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                None
            }
        };

        if let Some(value) = stored {
            log::debug!("Using stored theme preference {:?}", value);
            return ThemeState::from_stored(&value).is_dark;
        }

        let prefers_dark = self.system.prefers_dark().unwrap_or(false);
        log::debug!("No stored theme, system prefers dark: {}", prefers_dark);
        prefers_dark
    }

    /// Persist `is_dark` and return the state the root element should render.
    pub fn apply(&self, is_dark: bool) -> ThemeState {
        let state = ThemeState::new(is_dark);
        if let Err(e) = self.store.save(&self.key, state.as_str()) {
            log::warn!("Could not persist theme preference: {}", e);
        }
        state
    }

    pub fn toggle(&self, current: bool) -> bool {
        let next = !current;
        self.apply(next);
        log::info!("Theme switched to {}", ThemeState::new(next).as_str());
        next
    }
}
