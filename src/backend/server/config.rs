/**
 * Server Configuration
 *
 * This module loads the server configuration from the environment and opens
 * the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * Values come from environment variables (a `.env` file is loaded by the
 * binary before this runs). Everything except the signing secret has a
 * default suitable for local development.
 *
 * | Variable            | Default                     |
 * |---------------------|-----------------------------|
 * | `JWT_SECRET`        | required, must be non-empty |
 * | `TOKEN_TTL_SECS`    | `21600` (6 hours)           |
 * | `DATABASE_URL`      | built from `POSTGRES_*`     |
 * | `POSTGRES_USER`     | `postgres`                  |
 * | `POSTGRES_PASSWORD` | `postgres`                  |
 * | `POSTGRES_ADDRESS`  | `localhost:5432`            |
 * | `POSTGRES_DB`       | `postgres`                  |
 * | `SERVER_PORT`       | `8080`                      |
 *
 * `TOKEN_TTL_SECS` must lie in `1..=31536000` (one year).
 *
 * # Error Handling
 *
 * Unlike optional services, a missing or empty signing secret is fatal:
 * the server refuses to start rather than sign tokens with a guessable key.
 */

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

/// Default token lifetime: 6 hours
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 6 * 60 * 60;

/// Longest accepted token lifetime: 365 days
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `JWT_SECRET` is unset, empty or whitespace
    #[error("JWT_SECRET must be set to a non-empty value")]
    EmptySecret,

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Process-wide HMAC signing secret
///
/// Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);

impl SigningSecret {
    /// Wrap a secret, rejecting empty or whitespace-only values
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self(secret))
    }

    /// Raw secret bytes for key construction
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HMAC secret used to sign and verify tokens
    pub signing_secret: SigningSecret,
    /// Lifetime of issued tokens
    pub token_lifetime: Duration,
    /// PostgreSQL connection string
    pub database_url: String,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Example
    ///
    /// ```rust
    /// use postgate::backend::server::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_lookup(|name| match name {
    ///     "JWT_SECRET" => Some("dev-secret".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.port, 8080);
    /// assert_eq!(config.token_lifetime.as_secs(), 21600);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let signing_secret = SigningSecret::new(lookup("JWT_SECRET").unwrap_or_default())?;

        let ttl_secs = parse_or(&lookup, "TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        if ttl_secs == 0 || ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                name: "TOKEN_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }

        let port = parse_or(&lookup, "SERVER_PORT", DEFAULT_PORT)?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                let var = |name: &str, default: &str| {
                    lookup(name).unwrap_or_else(|| default.to_string())
                };
                format!(
                    "postgres://{}:{}@{}/{}?sslmode=disable",
                    var("POSTGRES_USER", "postgres"),
                    var("POSTGRES_PASSWORD", "postgres"),
                    var("POSTGRES_ADDRESS", "localhost:5432"),
                    var("POSTGRES_DB", "postgres"),
                )
            });

        Ok(Self {
            signing_secret,
            token_lifetime: Duration::from_secs(ttl_secs),
            database_url,
            port,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

/// Open the connection pool and apply pending migrations
///
/// Unlike the rest of the configuration, this talks to the network, so it is
/// kept separate from `ServerConfig::from_env`.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
