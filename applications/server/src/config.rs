/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, path::PathBuf};

/// Named configuration profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Default,
    Development,
    Test,
    Production,
}

impl Environment {
    /// Resolve a selector name; unknown names fall back to the base profile
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Environment::Development,
            "test" => Environment::Test,
            "prod" | "production" => Environment::Production,
            _ => Environment::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Default => "default",
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }

    pub fn database_url(&self) -> &'static str {
        match self {
            Environment::Default => "sqlite://data_project.db",
            Environment::Development => "sqlite://dev_data_project.db",
            Environment::Test => "sqlite://test_data_project.db",
            Environment::Production => "sqlite://prod_data_project.db",
        }
    }

    pub fn debug(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn testing(&self) -> bool {
        matches!(self, Environment::Test)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub environment: Environment,

    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub testing: bool,

    #[serde(default = "default_server")]
    pub server: ServerSettings,

    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    pub database_url: String,
}

impl ServerConfig {
    /// Plain profile values with no file or environment overrides
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            debug: environment.debug(),
            testing: environment.testing(),
            server: default_server(),
            storage: StorageSettings {
                database_url: environment.database_url().to_string(),
            },
        }
    }

    /// Load configuration for a profile, layering file and environment
    ///
    /// Precedence, lowest first: profile defaults, the TOML file at
    /// `config_path` (or `roster.toml` when present), then `ROSTER_*`
    /// variables using `__` between nested keys
    /// (`ROSTER_STORAGE__DATABASE_URL`).
    pub fn load(environment: Environment, config_path: Option<&Path>) -> Result<Self> {
        let profile = Self::for_environment(environment);

        let mut settings = config::Config::builder()
            .set_default("environment", profile.environment.as_str())?
            .set_default("debug", profile.debug)?
            .set_default("testing", profile.testing)?
            .set_default("server.host", profile.server.host)?
            .set_default("server.port", i64::from(profile.server.port))?
            .set_default("storage.database_url", profile.storage.database_url)?;

        match config_path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("roster.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set ROSTER_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if !self.storage.database_url.starts_with("sqlite:") {
            return Err(ServerError::Config(format!(
                "Unsupported database URL {:?}, expected a sqlite: URL",
                self.storage.database_url
            )));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        Ok(())
    }

    /// Default tracing filter for this profile
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "roster_server=debug,roster_storage=debug,tower_http=debug"
        } else if self.testing {
            "roster_server=warn,tower_http=warn"
        } else {
            "roster_server=info,tower_http=info"
        }
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Default)
    }
}
