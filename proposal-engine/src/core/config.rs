/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | Max tracing level |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | LOG_JSON | false | Emit JSON log lines (always on in production) |
/// | ENVIRONMENT | development | development / production |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug proposal-engine recalculate proposal.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Max log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Log file directory; logs go to stderr when unset or missing
    pub log_dir: Option<String>,
    /// JSON formatted log lines
    pub log_json: bool,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|dir| !dir.is_empty()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Production always logs JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_json || self.is_production()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
            log_json: false,
            environment: "development".into(),
        }
    }
}
