//! Site configuration.
//!
//! Timings and the pending-request policy are read from the embedded
//! `config/site.json`. Missing fields take their defaults; a file that fails
//! to parse is logged and replaced by [`SiteConfig::default`].

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use serde::Deserialize;

const EMBEDDED_SITE_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/config/site.json"
));

/// What happens to an in-flight demo request when the Demo view unmounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingOnLeave {
    /// The request task is owned by the Demo view and dropped with it.
    #[default]
    Cancel,
    /// The request runs to completion on an app-lifetime task; its result is
    /// thrown away because the view that asked for it is gone.
    Discard,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub demo_delay_ms: u64,
    pub typewriter_tick_ms: u64,
    pub typewriter_pause_ms: u64,
    pub step_interval_ms: u64,
    pub scroll_threshold_px: f64,
    pub pending_on_leave: PendingOnLeave,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            demo_delay_ms: api::DEFAULT_DELAY_MS,
            typewriter_tick_ms: 100,
            typewriter_pause_ms: 2_000,
            step_interval_ms: 3_000,
            scroll_threshold_px: 50.0,
            pending_on_leave: PendingOnLeave::Cancel,
        }
    }
}

impl SiteConfig {
    /// Configuration compiled into the binary.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_SITE_CONFIG).unwrap_or_else(|err| {
            warn!("site config unreadable ({err}); using defaults");
            Self::default()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|err| err.to_string())
    }
}

/// The shell's [`SiteConfig`] context, or the embedded file when none is provided.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_else(SiteConfig::embedded)
}
