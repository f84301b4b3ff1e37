//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (e.g. `~/.config/pressroom/config.yaml`) and includes:
//! - Backend origin
//! - Default post author
//! - Page sizes for each resource
//! - Download directory, toast lifetime and request timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PressError, Result};
use crate::types::{
    DEFAULT_API_URL, DEFAULT_AUTHOR, DEFAULT_POSTS_PAGE_SIZE, DEFAULT_PUBLICATIONS_PAGE_SIZE,
    DEFAULT_TOAST_SECONDS, ResourceKind,
};

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "PRESSROOM_CONFIG";

/// Environment variable overriding `api.url`
pub const API_URL_ENV: &str = "PRESSROOM_API_URL";

/// Every key accepted by `config get` / `config set`
pub const VALID_KEYS: [&str; 7] = [
    "api.url",
    "author",
    "posts.page_size",
    "publications.page_size",
    "download.dir",
    "toast.seconds",
    "request.timeout",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "ApiConfig::is_default")]
    pub api: ApiConfig,

    /// Author stamped on new posts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default = "PageConfig::posts")]
    pub posts: PageConfig,

    #[serde(default = "PageConfig::publications")]
    pub publications: PageConfig,

    #[serde(default, skip_serializing_if = "DownloadConfig::is_default")]
    pub download: DownloadConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default, skip_serializing_if = "RequestConfig::is_default")]
    pub request: RequestConfig,
}

/// Backend connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ApiConfig {
    pub fn is_default(&self) -> bool {
        self.url.is_none()
    }
}

/// Per-resource list settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_size: usize,
}

impl PageConfig {
    fn posts() -> Self {
        Self {
            page_size: DEFAULT_POSTS_PAGE_SIZE,
        }
    }

    fn publications() -> Self {
        Self {
            page_size: DEFAULT_PUBLICATIONS_PAGE_SIZE,
        }
    }
}

/// Where downloaded documents are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl DownloadConfig {
    pub fn is_default(&self) -> bool {
        self.dir.is_none()
    }
}

/// Notification display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Seconds before a toast is dismissed (default: 5)
    #[serde(default = "default_toast_seconds")]
    pub seconds: u64,
}

fn default_toast_seconds() -> u64 {
    DEFAULT_TOAST_SECONDS
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            seconds: default_toast_seconds(),
        }
    }
}

/// HTTP request settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Timeout in seconds; requests wait indefinitely when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl RequestConfig {
    pub fn is_default(&self) -> bool {
        self.timeout.is_none()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            author: None,
            posts: PageConfig::posts(),
            publications: PageConfig::publications(),
            download: DownloadConfig::default(),
            toast: ToastConfig::default(),
            request: RequestConfig::default(),
        }
    }
}

impl Config {
    /// Create a config with built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        let dirs = directories::ProjectDirs::from("", "", "pressroom").ok_or_else(|| {
            PressError::Config("cannot determine the configuration directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            PressError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        if content.trim().is_empty() {
            return Ok(Config::new());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                PressError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            PressError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions).map_err(|e| {
                PressError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set permissions on config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        Ok(())
    }

    /// Backend origin from the environment, config file, or default
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            return url.trim().to_string();
        }

        self.api
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
    }

    /// Page size for a resource, never zero
    pub fn page_size(&self, kind: ResourceKind) -> usize {
        let size = match kind {
            ResourceKind::Posts => self.posts.page_size,
            ResourceKind::Publications => self.publications.page_size,
        };
        size.max(1)
    }

    /// Directory downloads are written to: configured, else the user's
    /// download folder, else the working directory
    pub fn download_dir(&self) -> PathBuf {
        if let Some(dir) = &self.download.dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast.seconds)
    }

    /// Request timeout, when one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request
            .timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Read a value by dot-notation key. Returns `None` for unset keys.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match validate_key(key)? {
            "api.url" => self.api.url.clone(),
            "author" => self.author.clone(),
            "posts.page_size" => Some(self.posts.page_size.to_string()),
            "publications.page_size" => Some(self.publications.page_size.to_string()),
            "download.dir" => self.download.dir.as_ref().map(|d| d.display().to_string()),
            "toast.seconds" => Some(self.toast.seconds.to_string()),
            "request.timeout" => self.request.timeout.map(|t| t.to_string()),
            _ => None,
        };
        Ok(value)
    }

    /// Set a value by dot-notation key, parsing it for the key's type
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match validate_key(key)? {
            "api.url" => {
                if value.is_empty() {
                    self.api.url = None;
                } else {
                    let parsed = url::Url::parse(value)?;
                    if parsed.cannot_be_a_base() {
                        return Err(PressError::Config(format!(
                            "invalid value '{value}' for api.url. Expected an http(s) URL"
                        )));
                    }
                    self.api.url = Some(value.to_string());
                }
            }
            "author" => {
                self.author = (!value.is_empty()).then(|| value.to_string());
            }
            "posts.page_size" => self.posts.page_size = parse_positive(key, value)?,
            "publications.page_size" => self.publications.page_size = parse_positive(key, value)?,
            "download.dir" => {
                self.download.dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "toast.seconds" => self.toast.seconds = parse_positive(key, value)? as u64,
            "request.timeout" => {
                self.request.timeout = if value.is_empty() || value == "0" {
                    None
                } else {
                    Some(parse_positive(key, value)? as u64)
                };
            }
            other => {
                return Err(PressError::Config(format!(
                    "config key '{other}' cannot be set"
                )));
            }
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PressError::Config(format!(
            "invalid value '{value}' for {key}. Expected a positive integer"
        ))),
    }
}

/// Check a config key, suggesting the dot-notation spelling for
/// underscore-separated keys
pub fn validate_key(key: &str) -> Result<&'static str> {
    if let Some(known) = VALID_KEYS.iter().copied().find(|k| *k == key) {
        return Ok(known);
    }

    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        if VALID_KEYS.contains(&dot_version.as_str()) {
            return Err(PressError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )));
        }
    }

    Err(PressError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    )))
}
