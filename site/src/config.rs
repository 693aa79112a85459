//! Build-time site configuration.
//!
//! The browser bundle has no process environment, so settings are baked in
//! at compile time with `option_env!` and fall back to the production
//! values when unset:
//!
//! - `SIMPLIZER_EMAILJS_ENDPOINT`: relay REST endpoint
//! - `SIMPLIZER_EMAILJS_SERVICE_ID`: relay service id
//! - `SIMPLIZER_EMAILJS_TEMPLATE_ID`: relay template id
//! - `SIMPLIZER_EMAILJS_PUBLIC_KEY`: relay public key
//! - `SIMPLIZER_TOAST_MS`: toast dismissal delay in milliseconds (default 4000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::contact::DEFAULT_DISMISS_AFTER;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "service_f0ptr4j";
pub const DEFAULT_TEMPLATE_ID: &str = "template_sw7uhws";
pub const DEFAULT_PUBLIC_KEY: &str = "pjCZ_LvwRFJAUJ2G5";

/// Where and as whom contact messages are relayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub relay: RelayConfig,
    pub dismiss_after: Duration,
}

impl SiteConfig {
    /// Configuration baked into this build.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "SIMPLIZER_EMAILJS_ENDPOINT" => option_env!("SIMPLIZER_EMAILJS_ENDPOINT"),
            "SIMPLIZER_EMAILJS_SERVICE_ID" => option_env!("SIMPLIZER_EMAILJS_SERVICE_ID"),
            "SIMPLIZER_EMAILJS_TEMPLATE_ID" => option_env!("SIMPLIZER_EMAILJS_TEMPLATE_ID"),
            "SIMPLIZER_EMAILJS_PUBLIC_KEY" => option_env!("SIMPLIZER_EMAILJS_PUBLIC_KEY"),
            "SIMPLIZER_TOAST_MS" => option_env!("SIMPLIZER_TOAST_MS"),
            _ => None,
        })
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_owned()
        };
        let relay = RelayConfig {
            endpoint: get("SIMPLIZER_EMAILJS_ENDPOINT", DEFAULT_RELAY_ENDPOINT),
            service_id: get("SIMPLIZER_EMAILJS_SERVICE_ID", DEFAULT_SERVICE_ID),
            template_id: get("SIMPLIZER_EMAILJS_TEMPLATE_ID", DEFAULT_TEMPLATE_ID),
            public_key: get("SIMPLIZER_EMAILJS_PUBLIC_KEY", DEFAULT_PUBLIC_KEY),
        };
        let dismiss_after = parse_millis(lookup("SIMPLIZER_TOAST_MS")).unwrap_or(DEFAULT_DISMISS_AFTER);
        Self { relay, dismiss_after }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_millis(raw: Option<&str>) -> Option<Duration> {
    let raw = raw?.trim();
    match raw.parse::<u64>() {
        Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
        _ => {
            leptos::logging::warn!("config: ignoring SIMPLIZER_TOAST_MS={raw:?}");
            None
        }
    }
}
