//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use swiss_tournament::{RandomTieBreak, RegistrationOrder, SeedTieBreak};

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Directory served for every non-API path
    pub static_dir: PathBuf,
    /// Seeding configuration
    pub seeding: SeedingConfig,
    /// Prometheus exporter address, disabled when unset
    pub metrics_bind: Option<SocketAddr>,
}

/// How players on equal scores are ordered before pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedingConfig {
    /// Raw `SEEDING` value, checked by [`ServerConfig::validate`]
    pub mode: String,
    /// Fixed seed for the random tie-break
    pub seed: Option<u64>,
}

impl SeedingConfig {
    /// Build the tie-break strategy this configuration describes
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an unknown mode.
    pub fn tie_break(&self) -> Result<Box<dyn SeedTieBreak>, ConfigError> {
        match self.mode.as_str() {
            "random" => Ok(match self.seed {
                Some(seed) => Box::new(RandomTieBreak::seeded(seed)),
                None => Box::new(RandomTieBreak::new()),
            }),
            "registration" => Ok(Box::new(RegistrationOrder)),
            other => Err(ConfigError::Invalid {
                var: "SEEDING".to_string(),
                reason: format!("Unknown mode '{other}' (expected random or registration)"),
            }),
        }
    }
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            mode: "random".to_string(),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `static_dir_override` - Optional static directory override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        static_dir_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_env_opt("SERVER_BIND")?
                .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000))),
        };

        let static_dir = static_dir_override
            .or_else(|| std::env::var("STATIC_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("public"));

        let seeding = SeedingConfig {
            mode: std::env::var("SEEDING")
                .map(|v| v.to_lowercase())
                .unwrap_or_else(|_| "random".to_string()),
            seed: parse_env_opt("SEEDING_SEED")?,
        };

        let metrics_bind = parse_env_opt("METRICS_BIND")?;

        Ok(ServerConfig {
            bind,
            static_dir,
            seeding,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.seeding.tie_break()?;

        if self.seeding.mode == "registration" && self.seeding.seed.is_some() {
            return Err(ConfigError::Invalid {
                var: "SEEDING_SEED".to_string(),
                reason: "Only applies to random seeding".to_string(),
            });
        }

        if self.static_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: "STATIC_DIR".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server bind address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional environment variable
///
/// Unset means `None`; set but unparsable is an error rather than a silent
/// fallback.
fn parse_env_opt<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var: key.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
