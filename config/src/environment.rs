use crate::is_truthy;
use path_clean::PathClean;
use std::path::PathBuf;
use std::time::Duration;
use utility::{Error, Result};

pub const GATEWAY_URL_ENV: &str = "gateway_url";
pub const PROMETHEUS_HOST_ENV: &str = "prometheus_host";
pub const PROMETHEUS_PORT_ENV: &str = "prometheus_port";
pub const INACTIVITY_DURATION_ENV: &str = "inactivity_duration";
pub const RECONCILE_INTERVAL_ENV: &str = "reconcile_interval";
pub const HTTP_TIMEOUT_ENV: &str = "http_timeout";
pub const WRITE_DEBUG_ENV: &str = "write_debug";
pub const READ_ONLY_ENV: &str = "read_only";
pub const SECRET_MOUNT_PATH_ENV: &str = "secret_mount_path";

pub const DEFAULT_GATEWAY_URL: &str = "http://gateway:8080/";
pub const DEFAULT_PROMETHEUS_HOST: &str = "prometheus";
pub const DEFAULT_PROMETHEUS_PORT: u16 = 9090;
pub const DEFAULT_SECRET_MOUNT_PATH: &str = "/var/secrets/";
pub const DEFAULT_INACTIVITY_DURATION: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_RECONCILE_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(3);

/// Config of the idler process
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// base url of the OpenFaaS gateway
    pub gateway_url: String,
    pub prometheus_host: String,
    pub prometheus_port: u16,
    /// window a function must see no invocations in to be idle
    pub inactivity_duration: Duration,
    /// pause between two reconciliation passes
    pub reconcile_interval: Duration,
    /// timeout applied to every outgoing request
    pub http_timeout: Duration,
    pub write_debug: bool,
    pub read_only: bool,
    pub secret_mount_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            prometheus_host: DEFAULT_PROMETHEUS_HOST.to_string(),
            prometheus_port: DEFAULT_PROMETHEUS_PORT,
            inactivity_duration: DEFAULT_INACTIVITY_DURATION,
            reconcile_interval: DEFAULT_RECONCILE_INTERVAL,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            write_debug: false,
            read_only: false,
            secret_mount_path: PathBuf::from(DEFAULT_SECRET_MOUNT_PATH),
        }
    }
}

impl Config {
    /// reads the config from the process environment
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// reads the config through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup(GATEWAY_URL_ENV) {
            config.gateway_url = val.trim().to_string();
        }
        if let Some(val) = lookup(PROMETHEUS_HOST_ENV) {
            if !val.is_empty() {
                config.prometheus_host = val;
            }
        }
        if let Some(val) = lookup(PROMETHEUS_PORT_ENV) {
            config.prometheus_port = val.trim().parse::<u16>().map_err(|e| {
                Error::Custom(format!("invalid {} {:?}: {}", PROMETHEUS_PORT_ENV, val, e))
            })?;
        }
        if let Some(val) = lookup(INACTIVITY_DURATION_ENV) {
            config.inactivity_duration = parse_duration_value(INACTIVITY_DURATION_ENV, &val)?;
        }
        if let Some(val) = lookup(RECONCILE_INTERVAL_ENV) {
            config.reconcile_interval = parse_duration_value(RECONCILE_INTERVAL_ENV, &val)?;
        }
        if let Some(val) = lookup(HTTP_TIMEOUT_ENV) {
            config.http_timeout = parse_duration_value(HTTP_TIMEOUT_ENV, &val)?;
        }
        if let Some(val) = lookup(WRITE_DEBUG_ENV) {
            config.write_debug = is_truthy(val.as_str());
        }
        if let Some(val) = lookup(READ_ONLY_ENV) {
            config.read_only = is_truthy(val.as_str());
        }
        if let Some(val) = lookup(SECRET_MOUNT_PATH_ENV) {
            if !val.is_empty() {
                config.secret_mount_path = expand_path(val.as_str());
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// rejects values the control loop can't work with
    pub fn validate(&self) -> Result<()> {
        if self.inactivity_duration < Duration::from_secs(60) {
            return Err(Error::Custom(format!(
                "{} must be at least 1m, got {:?}",
                INACTIVITY_DURATION_ENV, self.inactivity_duration
            )));
        }
        if self.reconcile_interval.as_millis() == 0 {
            return Err(Error::Custom(format!(
                "{} must be greater than zero",
                RECONCILE_INTERVAL_ENV
            )));
        }
        if self.http_timeout.as_millis() == 0 {
            return Err(Error::Custom(format!(
                "{} must be greater than zero",
                HTTP_TIMEOUT_ENV
            )));
        }
        if !self.gateway_url.is_empty() {
            url::Url::parse(self.gateway_url.as_str()).map_err(|e| {
                Error::Custom(format!(
                    "invalid {} {:?}: {}",
                    GATEWAY_URL_ENV, self.gateway_url, e
                ))
            })?;
        }
        Ok(())
    }

    /// the inactivity window in whole minutes, as used in range queries
    pub fn inactivity_minutes(&self) -> u64 {
        self.inactivity_duration.as_secs() / 60
    }
}

fn parse_duration_value(key: &str, val: &str) -> Result<Duration> {
    parse_duration::parse(val.trim())
        .map_err(|e| Error::Custom(format!("invalid {} {:?}: {}", key, val, e)))
}

/// expands a leading `~` and normalises the path
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.into_owned()).clean()
}
