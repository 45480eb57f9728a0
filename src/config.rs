use std::fmt;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

// Only used outside release mode.
const DEVELOPMENT_JWT_SECRET: &str = "development-secret-key";

const DEBUG_ORIGINS: &[&str] = &["http://localhost:3000"];
const RELEASE_ORIGINS: &[&str] = &[
    "https://homebuzz-backend.onrender.com",
    "https://homebuzz.netlify.app",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for environment variable {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Debug,
    Release,
}

impl RunMode {
    pub fn is_release(self) -> bool {
        self == RunMode::Release
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Debug => f.write_str("debug"),
            RunMode::Release => f.write_str("release"),
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = url::Url::parse(&self.url)
            .map(|mut url| {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.to_string()
            })
            .unwrap_or_else(|_| String::from("<unparsable url>"));

        f.debug_struct("DatabaseConfig")
            .field("url", &redacted)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"***")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: RunMode,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mode = match var("RUN_MODE").as_deref() {
            None | Some("debug") => RunMode::Debug,
            Some("release") => RunMode::Release,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "RUN_MODE",
                    value: other.to_string(),
                })
            }
        };

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;

        let url = match var("DATABASE_URL") {
            Some(url) => url,
            None => {
                let host = var("DATABASE_HOST").ok_or(ConfigError::Missing("DATABASE_HOST"))?;
                let port = parse_or("DATABASE_PORT", var("DATABASE_PORT"), DEFAULT_DATABASE_PORT)?;
                let user = var("DATABASE_USER").ok_or(ConfigError::Missing("DATABASE_USER"))?;
                let password =
                    var("DATABASE_PASSWORD").ok_or(ConfigError::Missing("DATABASE_PASSWORD"))?;
                let name = var("DATABASE_NAME").ok_or(ConfigError::Missing("DATABASE_NAME"))?;
                postgres_url(&host, port, &user, &password, &name, mode)?
            }
        };
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            var("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let jwt_secret = match (var("JWT_SECRET"), mode) {
            (Some(secret), _) => secret,
            (None, RunMode::Release) => return Err(ConfigError::Missing("JWT_SECRET")),
            (None, RunMode::Debug) => DEVELOPMENT_JWT_SECRET.to_string(),
        };
        let bcrypt_cost = parse_or("BCRYPT_COST", var("BCRYPT_COST"), bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let cors_origins = match var("CORS_ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => {
                let defaults = if mode.is_release() { RELEASE_ORIGINS } else { DEBUG_ORIGINS };
                defaults.iter().map(|origin| origin.to_string()).collect()
            }
        };

        Ok(AppConfig {
            mode,
            host,
            port,
            database: DatabaseConfig { url, max_connections },
            auth: AuthConfig { jwt_secret, bcrypt_cost },
            cors_origins,
        })
    }

    pub fn uses_development_secret(&self) -> bool {
        self.auth.jwt_secret == DEVELOPMENT_JWT_SECRET
    }
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn postgres_url(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
    name: &str,
    mode: RunMode,
) -> Result<String, ConfigError> {
    let invalid_host = || ConfigError::Invalid {
        key: "DATABASE_HOST",
        value: host.to_string(),
    };

    let mut url = url::Url::parse(&format!("postgres://{}", host)).map_err(|_| invalid_host())?;
    url.set_port(Some(port)).map_err(|_| invalid_host())?;
    url.set_username(user).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_USER",
        value: user.to_string(),
    })?;
    url.set_password(Some(password)).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_PASSWORD",
        value: String::from("***"),
    })?;
    url.set_path(&format!("/{}", name));

    let ssl_mode = if mode.is_release() { "require" } else { "disable" };
    url.query_pairs_mut().append_pair("sslmode", ssl_mode);

    Ok(url.to_string())
}
