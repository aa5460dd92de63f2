use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

use crate::auth::AuthMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub auth: AuthRouteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRouteConfig {
    pub mode: AuthMode,
    pub endpoint: String,
    pub fetch_timeout_secs: u64,
    pub fetch_retries: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("AUTH_ROUTE_MODE") {
            self.auth.mode = AuthMode::from(v.as_str());
        }
        if let Ok(v) = env::var("AUTH_ROUTE_ENDPOINT") {
            self.auth.endpoint = v;
        }
        if let Ok(v) = env::var("AUTH_FETCH_TIMEOUT_SECS") {
            self.auth.fetch_timeout_secs = v.parse().unwrap_or(self.auth.fetch_timeout_secs);
        }
        if let Ok(v) = env::var("AUTH_FETCH_RETRIES") {
            self.auth.fetch_retries = v.parse().unwrap_or(self.auth.fetch_retries);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            auth: AuthRouteConfig {
                mode: AuthMode::Static,
                endpoint: "http://localhost:8000/admin/getUserRoutes".to_string(),
                fetch_timeout_secs: 30,
                fetch_retries: 0,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            auth: AuthRouteConfig {
                mode: AuthMode::Dynamic,
                endpoint: "https://staging.example.com/admin/getUserRoutes".to_string(),
                fetch_timeout_secs: 10,
                fetch_retries: 2,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            auth: AuthRouteConfig {
                mode: AuthMode::Dynamic,
                endpoint: "https://app.example.com/admin/getUserRoutes".to_string(),
                fetch_timeout_secs: 5,
                fetch_retries: 2,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
