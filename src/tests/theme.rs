use std::rc::Rc;
use crate::configs::SiteConfig;
use crate::theme::{ FileStore, FixedSignal, MemoryStore, PreferenceStore, ThemeContext };
use super::common::{ self, mocks::BrokenStore };

const KEY: &str = "theme";

fn context(store: Rc<dyn PreferenceStore>, prefers_dark: Option<bool>) -> ThemeContext {
    ThemeContext::new(KEY, store, Rc::new(FixedSignal(prefers_dark)))
}

#[test]
fn test_stored_preference_overrides_system() {
    common::setup();
    for system in [Some(true), Some(false), None] {
        let dark = context(Rc::new(MemoryStore::with_value(KEY, "dark")), system);
        assert!(dark.resolve_initial(), "stored dark, system {:?}", system);

        let light = context(Rc::new(MemoryStore::with_value(KEY, "light")), system);
        assert!(!light.resolve_initial(), "stored light, system {:?}", system);
    }
}

#[test]
fn test_no_stored_value_follows_system() {
    assert!(context(Rc::new(MemoryStore::new()), Some(true)).resolve_initial());
    assert!(!context(Rc::new(MemoryStore::new()), Some(false)).resolve_initial());
    assert!(!context(Rc::new(MemoryStore::new()), None).resolve_initial());
}

#[test]
fn test_unrecognised_stored_value_is_light() {
    let ctx = context(Rc::new(MemoryStore::with_value(KEY, "solarized")), Some(true));
    assert!(!ctx.resolve_initial());
}

#[test]
fn test_toggle_persists_for_reload() {
    let store = Rc::new(MemoryStore::new());
    let ctx = context(store.clone(), Some(false));

    assert!(ctx.toggle(false));
    assert_eq!(store.load(KEY).unwrap().as_deref(), Some("dark"));
    // Reload: fresh context over the same store, opposite system signal.
    assert!(context(store.clone(), Some(false)).resolve_initial());

    assert!(!ctx.toggle(true));
    assert_eq!(store.load(KEY).unwrap().as_deref(), Some("light"));
    assert!(!context(store, Some(true)).resolve_initial());
}

#[test]
fn test_apply_returns_render_state() {
    let ctx = ThemeContext::ephemeral(KEY);
    assert!(ctx.apply(true).is_dark);
    assert_eq!(ctx.apply(false).root_class(), "app-root");
    assert!(!ctx.apply(false).is_dark);
}

#[test]
fn test_broken_storage_degrades_to_system_then_light() {
    common::setup();
    let store = Rc::new(BrokenStore::default());

    assert!(context(store.clone(), Some(true)).resolve_initial());
    assert!(!context(store.clone(), None).resolve_initial());

    let ctx = context(store.clone(), None);
    assert!(ctx.toggle(false));
    assert_eq!(store.save_attempts.get(), 1);
}

#[test]
fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let first = context(Rc::new(FileStore::new(&path)), None);
    first.toggle(false);

    let second = context(Rc::new(FileStore::new(&path)), Some(false));
    assert!(second.resolve_initial());
}

#[test]
fn test_server_render_ignores_desktop_preference_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = SiteConfig {
        prefs_path: dir.path().join("prefs.json"),
        ..SiteConfig::default()
    };
    FileStore::new(&config.prefs_path).save(&config.theme_storage_key, "dark").unwrap();

    assert!(ThemeContext::for_native(&config, false).resolve_initial());
    let served = ThemeContext::for_native(&config, true);
    assert!(!served.resolve_initial());

    // Toggling on the server never touches the desktop file.
    served.toggle(false);
    let stored = FileStore::new(&config.prefs_path).load(&config.theme_storage_key).unwrap();
    assert_eq!(stored.as_deref(), Some("dark"));
}
