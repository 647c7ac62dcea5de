//! Environment selection for the four backend services.
//!
//! The mode and optional URL overrides are read at compile time (the wasm
//! bundle has no process environment), turned into an [`AppConfig`] by the
//! pure [`resolve`] function and frozen in [`app_config`]. Call sites never
//! re-resolve.

use tracing::Level;
use once_cell::sync::Lazy;
use std::fmt;

/// Build mode that decides which service URLs the bundle talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    /// Maps a build mode string to an environment. Anything unrecognised,
    /// including no mode at all, selects production.
    pub fn from_mode(mode: Option<&str>) -> Self {
        match mode.map(|m| m.trim().to_ascii_lowercase()).as_deref() {
            Some("development" | "dev" | "local") => Environment::Local,
            _ => Environment::Production,
        }
    }

    pub fn detect() -> Self {
        Self::from_mode(option_env!("CASE_PORTAL_MODE"))
    }
}

/// One of the four remote services the portal composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Data,
    RefData,
    File,
    Search,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceKind::Data => "data",
            ServiceKind::RefData => "refdata",
            ServiceKind::File => "file",
            ServiceKind::Search => "search",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicroserviceConfig {
    pub base_url: String,
    pub description: String,
}

impl MicroserviceConfig {
    fn new(base_url: &str, description: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Microservices {
    pub data: MicroserviceConfig,
    pub refdata: MicroserviceConfig,
    pub file: MicroserviceConfig,
    pub search: MicroserviceConfig,
}

impl Microservices {
    pub fn get(&self, kind: ServiceKind) -> &MicroserviceConfig {
        match kind {
            ServiceKind::Data => &self.data,
            ServiceKind::RefData => &self.refdata,
            ServiceKind::File => &self.file,
            ServiceKind::Search => &self.search,
        }
    }

    fn get_mut(&mut self, kind: ServiceKind) -> &mut MicroserviceConfig {
        match kind {
            ServiceKind::Data => &mut self.data,
            ServiceKind::RefData => &mut self.refdata,
            ServiceKind::File => &mut self.file,
            ServiceKind::Search => &mut self.search,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub microservices: Microservices,
}

impl AppConfig {
    pub fn log_level(&self) -> Level {
        match self.environment {
            Environment::Local => Level::DEBUG,
            Environment::Production => Level::INFO,
        }
    }

    /// Replaces base URLs for the services that have an override. Blank
    /// overrides are ignored.
    pub fn with_overrides(mut self, overrides: &[(ServiceKind, Option<&str>)]) -> Self {
        for (kind, url) in overrides {
            if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
                self.microservices.get_mut(*kind).base_url = url.to_string();
            }
        }
        self
    }
}

/// Pure selection of the configuration for `environment`.
pub fn resolve(environment: Environment) -> AppConfig {
    let microservices = match environment {
        Environment::Local => Microservices {
            data: MicroserviceConfig::new("http://localhost:9090", "Case data service (local)"),
            file: MicroserviceConfig::new("http://localhost:9091", "File service (local)"),
            refdata: MicroserviceConfig::new("http://localhost:9092", "Reference data service (local)"),
            search: MicroserviceConfig::new("http://localhost:9093", "Case search service (local)"),
        },
        Environment::Production => Microservices {
            data: MicroserviceConfig::new("https://data.caseportal.app", "Case data service"),
            file: MicroserviceConfig::new("https://file.caseportal.app", "File service"),
            refdata: MicroserviceConfig::new("https://refdata.caseportal.app", "Reference data service"),
            search: MicroserviceConfig::new("https://search.caseportal.app", "Case search service"),
        },
    };

    AppConfig {
        environment,
        microservices,
    }
}

fn build_overrides() -> [(ServiceKind, Option<&'static str>); 4] {
    [
        (ServiceKind::Data, option_env!("CASE_PORTAL_DATA_API_URL")),
        (ServiceKind::RefData, option_env!("CASE_PORTAL_REFDATA_API_URL")),
        (ServiceKind::File, option_env!("CASE_PORTAL_FILE_API_URL")),
        (ServiceKind::Search, option_env!("CASE_PORTAL_SEARCH_API_URL")),
    ]
}

static APP_CONFIG: Lazy<AppConfig> =
    Lazy::new(|| resolve(Environment::detect()).with_overrides(&build_overrides()));

/// The configuration resolved for this build.
pub fn app_config() -> &'static AppConfig {
    &APP_CONFIG
}
