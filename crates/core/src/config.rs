//! Client settings.
//!
//! Defaults point at a backend on `localhost:8000` polled every 50 ms. A page
//! can override individual keys from its query string, e.g.
//! `?backend=http://10.0.0.5:8000&interval_ms=100&scale=2&policy=issue&log=debug`.

use thiserror::Error;
use tracing::Level;

use crate::render::RenderStyle;
use crate::view_state::ApplyPolicy;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_COMMAND_PATH: &str = "/command";

const MIN_POLL_INTERVAL_MS: u32 = 10;
const MAX_POLL_INTERVAL_MS: u32 = 60_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),

    #[error("invalid value for `{key}`: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Root endpoint polled for `{"vector": [x, y]}`.
    pub backend_url: String,
    pub command_path: String,
    pub poll_interval_ms: u32,
    pub scale: f64,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub grid_spacing: f64,
    pub apply_policy: ApplyPolicy,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            command_path: DEFAULT_COMMAND_PATH.to_string(),
            poll_interval_ms: 50,
            scale: 1.0,
            canvas_width: 400,
            canvas_height: 400,
            grid_spacing: 40.0,
            apply_policy: ApplyPolicy::Arrival,
            log_level: Level::INFO,
        }
    }
}

impl ClientConfig {
    /// URL polled for the vector.
    pub fn poll_url(&self) -> &str {
        &self.backend_url
    }

    pub fn command_url(&self) -> String {
        let base = self.backend_url.trim_end_matches('/');
        if self.command_path.starts_with('/') {
            format!("{base}{}", self.command_path)
        } else {
            format!("{base}/{}", self.command_path)
        }
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            scale: self.scale,
            grid_spacing: self.grid_spacing,
            ..RenderStyle::default()
        }
    }

    /// Apply a single `key=value` override. On error the setting keeps its
    /// previous value.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "backend" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(invalid("backend", value, "expected an http(s) URL"));
                }
                self.backend_url = value.to_string();
            }
            "command_path" => {
                if value.is_empty() {
                    return Err(invalid("command_path", value, "empty"));
                }
                self.command_path = value.to_string();
            }
            "interval_ms" => {
                let n: u32 = value
                    .parse()
                    .map_err(|_| invalid("interval_ms", value, "expected an integer"))?;
                self.poll_interval_ms = n.clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS);
            }
            "scale" => {
                let s: f64 = value
                    .parse()
                    .map_err(|_| invalid("scale", value, "expected a number"))?;
                if !s.is_finite() || s <= 0.0 {
                    return Err(invalid("scale", value, "must be finite and > 0"));
                }
                self.scale = s;
            }
            "policy" => {
                self.apply_policy = ApplyPolicy::parse(value)
                    .ok_or_else(|| invalid("policy", value, "expected `arrival` or `issue`"))?;
            }
            "log" => {
                self.log_level = value
                    .parse()
                    .map_err(|_| invalid("log", value, "expected trace|debug|info|warn|error"))?;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Build a config from already-decoded query pairs. Bad pairs are skipped
    /// and returned so the caller can log them once logging is up.
    pub fn from_pairs<I, K, V>(pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cfg = Self::default();
        let mut errors = Vec::new();
        for (k, v) in pairs {
            if let Err(e) = cfg.apply_override(k.as_ref(), v.as_ref()) {
                errors.push(e);
            }
        }
        (cfg, errors)
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason,
    }
}
