use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use serde::{ Deserialize, Serialize };

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 5000;
pub const DEFAULT_NOTICE_LIMIT: usize = 1;

/// How contact-form messages leave the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Wait out the submit delay and report success. Nothing is sent.
    #[default]
    Simulated,
    /// Hand the message to the `deliver_contact_message` server function.
    Server,
}

impl FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(DeliveryMode::Simulated),
            "server" => Ok(DeliveryMode::Server),
            other => Err(format!("unknown delivery mode: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub submit_delay: Duration,
    pub notice_duration: Duration,
    pub notice_limit: usize,
    pub delivery: DeliveryMode,
    pub prefs_path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_DURATION_MS),
            notice_limit: DEFAULT_NOTICE_LIMIT,
            delivery: DeliveryMode::default(),
            prefs_path: default_prefs_path(),
        }
    }
}

impl SiteConfig {
    /// Overlay `PORTFOLIO_*` environment variables on the defaults.
    ///
    /// The browser has no process environment, so wasm builds always get the
    /// defaults. Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(key) = std::env::var("PORTFOLIO_THEME_KEY") {
                if key.trim().is_empty() {
                    log::warn!("PORTFOLIO_THEME_KEY is empty, keeping {:?}", config.theme_storage_key);
                } else {
                    config.theme_storage_key = key;
                }
            }
            if let Some(ms) = parse_var::<u64>("PORTFOLIO_SUBMIT_DELAY_MS") {
                config.submit_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = parse_var::<u64>("PORTFOLIO_NOTICE_DURATION_MS") {
                config.notice_duration = Duration::from_millis(ms);
            }
            if let Some(limit) = parse_var::<usize>("PORTFOLIO_NOTICE_LIMIT") {
                if limit == 0 {
                    log::warn!("PORTFOLIO_NOTICE_LIMIT must be at least 1, keeping {}", config.notice_limit);
                } else {
                    config.notice_limit = limit;
                }
            }
            if let Some(mode) = parse_var::<DeliveryMode>("PORTFOLIO_DELIVERY") {
                config.delivery = mode;
            }
            if let Ok(path) = std::env::var("PORTFOLIO_PREFS_PATH") {
                config.prefs_path = PathBuf::from(path);
            }
        }

        log::info!(
            "Site config: delivery={:?}, submit_delay={}ms, theme_key={:?}",
            config.delivery,
            config.submit_delay.as_millis(),
            config.theme_storage_key
        );
        config
    }
}

/// Per-user config directory, so a desktop choice survives reboots and temp
/// cleaners. Falls back to the temp dir where the platform has none.
fn default_prefs_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("portfolio").join("prefs.json"))
        .unwrap_or_else(|| std::env::temp_dir().join("portfolio-prefs.json"))
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("{} has invalid value {:?}, using default", name, raw);
            None
        }
    }
}
