/// Read-only "prefers dark" query against the environment.
pub trait SystemThemeSignal {
    /// `None` when the environment cannot answer.
    fn prefers_dark(&self) -> Option<bool>;
}

/// A signal with a fixed answer, for native builds and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSignal(pub Option<bool>);

impl FixedSignal {
    pub fn unknown() -> Self {
        Self(None)
    }
}

impl SystemThemeSignal for FixedSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// `(prefers-color-scheme: dark)` media query.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaQuerySignal;

#[cfg(target_arch = "wasm32")]
impl SystemThemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> Option<bool> {
        let window = web_sys::window()?;
        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) => Some(query.matches()),
            Ok(None) => None,
            Err(e) => {
                log::warn!("prefers-color-scheme query failed: {:?}", e);
                None
            }
        }
    }
}
