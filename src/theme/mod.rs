//! Dark/light preference: resolution at startup, persistence on change.
//!
//! The rendering layer never touches storage or the DOM directly. It holds a
//! [`ThemeContext`] and a `Signal<ThemeState>` from the Dioxus context, and
//! the root element derives its `dark` class from the signal.

mod context;
mod store;
mod system;

pub use context::ThemeContext;
pub use store::{ FileStore, MemoryStore, PreferenceStore };
pub use system::{ FixedSignal, SystemThemeSignal };

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageStore;
#[cfg(target_arch = "wasm32")]
pub use system::MediaQuerySignal;
