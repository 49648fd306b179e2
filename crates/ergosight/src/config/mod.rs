use crate::workflows::catalog::AnthroProfile;
use crate::workflows::scenario::validate_baseline;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assistant: AssistantConfig,
    pub scenario: ScenarioConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let copilot_delay = delay_from_env("ERGO_COPILOT_DELAY_MS", 1500)?;
        let cad_delay = delay_from_env("ERGO_CAD_DELAY_MS", 2000)?;

        let baseline_rating = match env::var("ERGO_BASELINE_RATING") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidBaseline { value: raw.clone() })
                .and_then(|value| {
                    validate_baseline(value)
                        .map_err(|_| ConfigError::InvalidBaseline { value: raw.clone() })
                })?,
            Err(_) => 7.2,
        };

        let default_profile = match env::var("ERGO_DEFAULT_PROFILE") {
            Ok(raw) => raw
                .parse::<AnthroProfile>()
                .map_err(|_| ConfigError::InvalidProfile { value: raw })?,
            Err(_) => AnthroProfile::P95Male,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            assistant: AssistantConfig {
                copilot_delay,
                cad_delay,
            },
            scenario: ScenarioConfig {
                baseline_rating,
                default_profile,
            },
        })
    }
}

fn delay_from_env(variable: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDelay { variable }),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Artificial "thinking" latency applied by chat sessions before each reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantConfig {
    pub copilot_delay: Duration,
    pub cad_delay: Duration,
}

/// Defaults for the scenario lab when the caller does not supply them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioConfig {
    pub baseline_rating: f64,
    pub default_profile: AnthroProfile,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: std::net::AddrParseError },
    #[error("{variable} must be a whole number of milliseconds")]
    InvalidDelay { variable: &'static str },
    #[error("ERGO_BASELINE_RATING must be a number between 1 and 10 (found '{value}')")]
    InvalidBaseline { value: String },
    #[error("ERGO_DEFAULT_PROFILE '{value}' is not one of P5F, P50M, P95M, Senior")]
    InvalidProfile { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for variable in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "ERGO_COPILOT_DELAY_MS",
            "ERGO_CAD_DELAY_MS",
            "ERGO_BASELINE_RATING",
            "ERGO_DEFAULT_PROFILE",
        ] {
            env::remove_var(variable);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.telemetry.ansi);
        assert_eq!(config.assistant.copilot_delay, Duration::from_millis(1500));
        assert_eq!(config.assistant.cad_delay, Duration::from_millis(2000));
        assert_eq!(config.scenario.baseline_rating, 7.2);
        assert_eq!(config.scenario.default_profile, AnthroProfile::P95Male);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_baseline_outside_rating_scale() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ERGO_BASELINE_RATING", "11.5");
        let err = AppConfig::load().expect_err("baseline above 10 is rejected");
        assert!(matches!(err, ConfigError::InvalidBaseline { .. }));
        reset_env();
    }

    #[test]
    fn parses_profile_and_delay_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("ERGO_DEFAULT_PROFILE", "senior");
        env::set_var("ERGO_CAD_DELAY_MS", "0");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(!config.telemetry.ansi);
        assert_eq!(config.scenario.default_profile, AnthroProfile::Senior);
        assert_eq!(config.assistant.cad_delay, Duration::ZERO);

        env::set_var("ERGO_COPILOT_DELAY_MS", "soon");
        let err = AppConfig::load().expect_err("non-numeric delay is rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidDelay {
                variable: "ERGO_COPILOT_DELAY_MS"
            }
        ));
        reset_env();
    }
}
