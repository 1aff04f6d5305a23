/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In
/// production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// When `true`, drop and recreate all tables at launch instead of
    /// running additive migrations. Destroys all data; off by default.
    pub reset_schema_on_startup: bool,
    /// When `true`, connect to the database with TLS but without
    /// certificate verification (`sslmode=require`). Off by default;
    /// the URL's own `sslmode` governs otherwise.
    pub database_tls_insecure: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default   |
    /// |---------------------------|-----------|
    /// | `HOST`                    | `0.0.0.0` |
    /// | `PORT`                    | `5000`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`      |
    /// | `RESET_SCHEMA_ON_STARTUP` | `false`   |
    /// | `DATABASE_TLS_INSECURE`   | `false`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let reset_schema_on_startup = env_flag("RESET_SCHEMA_ON_STARTUP");
        let database_tls_insecure = env_flag("DATABASE_TLS_INSECURE");

        Self {
            host,
            port,
            request_timeout_secs,
            reset_schema_on_startup,
            database_tls_insecure,
        }
    }
}

/// Read a boolean env var: `1`, `true`, `yes` (case-insensitive) are true.
fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
