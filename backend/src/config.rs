//! Host settings read from the process environment.
//!
//! Every value has a default, and a value that does not parse is logged and
//! replaced by its default instead of stopping the host.

use log::warn;

pub const HOST_VAR: &str = "CASE_PORTAL_HOST";
pub const PORT_VAR: &str = "CASE_PORTAL_PORT";
pub const OPEN_BROWSER_VAR: &str = "CASE_PORTAL_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = read(HOST_VAR).unwrap_or(defaults.host);

        let port = match read(PORT_VAR) {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => {
                    warn!("{}={:?} is not a valid port, using {}", PORT_VAR, raw, defaults.port);
                    defaults.port
                }
            },
            None => defaults.port,
        };

        let open_browser = match read(OPEN_BROWSER_VAR) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(
                    "{}={:?} is not a boolean, using {}",
                    OPEN_BROWSER_VAR, raw, defaults.open_browser
                );
                defaults.open_browser
            }),
            None => defaults.open_browser,
        };

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
