//! CLI configuration loading
//!
//! Single-source priority loading with flag overrides: an explicit
//! `--config` path wins, then the first existing file among
//! `./promptgrid.json`, `./.promptgrid/config.json`,
//! `<git root>/.promptgrid/config.json` and the XDG config directory,
//! and finally environment variables alone.

use anyhow::{anyhow, Context, Result};
use promptgrid_core::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Raw configuration file format (single-file JSON schema)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    /// API key, or "env:VAR_NAME" to read it from the environment
    pub api_key: String,
    /// Base URL (optional, defaults to the OpenAI endpoint)
    pub base_url: Option<String>,
    /// Model identifier (optional, defaults to gpt-3.5-turbo)
    pub model: Option<String>,
    /// Additional headers attached to every request (optional)
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl RawConfig {
    /// Build a config from environment variables alone
    fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            anyhow!(
                "No configuration found. Please create a promptgrid.json file or set OPENAI_API_KEY"
            )
        })?;

        Ok(Self {
            api_key,
            base_url: std::env::var("OPENAI_BASE_URL")
                .or_else(|_| std::env::var("PROMPTGRID_BASE_URL"))
                .ok(),
            model: std::env::var("OPENAI_MODEL")
                .or_else(|_| std::env::var("PROMPTGRID_MODEL"))
                .ok(),
            headers: HashMap::new(),
        })
    }
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Explicit config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides applied after loading
    api_key_override: Option<String>,
    base_url_override: Option<String>,
    model_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            api_key_override: None,
            base_url_override: None,
            model_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set API key override
    pub fn with_api_key_override(mut self, api_key: String) -> Self {
        self.api_key_override = Some(api_key);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set model override
    pub fn with_model_override(mut self, model: String) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Load, apply flag overrides, and resolve to a validated `ApiConfig`
    pub async fn load(&self) -> Result<ApiConfig> {
        let mut raw = match &self.config_override {
            Some(path) => load_from_path(path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    path.display()
                )
            })?,
            None => match candidate_paths().into_iter().find(|path| path.exists()) {
                Some(path) => load_file(&path).await?,
                None => RawConfig::from_env()?,
            },
        };

        if let Some(api_key) = &self.api_key_override {
            raw.api_key = api_key.clone();
        }
        if let Some(base_url) = &self.base_url_override {
            raw.base_url = Some(base_url.clone());
        }
        if let Some(model) = &self.model_override {
            raw.model = Some(model.clone());
        }

        resolve(raw)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Search locations in priority order: working directory, git repository
/// root, then the XDG config directory
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("promptgrid.json"));
        paths.push(cwd.join(".promptgrid").join("config.json"));
        if let Some(git_root) = find_git_root(&cwd) {
            paths.push(git_root.join(".promptgrid").join("config.json"));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("promptgrid").join("config.json"));
    }

    paths
}

/// Walk up from `start` to the first directory containing `.git`
fn find_git_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Load from an explicit file or directory path
async fn load_from_path(path: &Path) -> Result<RawConfig> {
    if path.is_file() {
        load_file(path).await
    } else if path.is_dir() {
        let config_file = path.join("config.json");
        if config_file.exists() {
            load_file(&config_file).await
        } else {
            Err(anyhow!(
                "No config.json found in directory: {}",
                path.display()
            ))
        }
    } else {
        Err(anyhow!("Config path does not exist: {}", path.display()))
    }
}

/// Read and parse one JSON config file
async fn load_file(path: &Path) -> Result<RawConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a raw config into a validated `ApiConfig`
fn resolve(raw: RawConfig) -> Result<ApiConfig> {
    let api_key = match raw.api_key.strip_prefix("env:") {
        Some(var_name) => std::env::var(var_name)
            .with_context(|| format!("Environment variable not found: {}", var_name))?,
        None => raw.api_key,
    };

    let config = ApiConfig::new(
        api_key,
        raw.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
    )
    .with_base_url(raw.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
    .with_headers(raw.headers);

    config
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_from_override_file() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "promptgrid.json",
            r#"{"api_key": "sk-file", "model": "gpt-4"}"#,
        );

        let config = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await
            .unwrap();

        assert_eq!(config.api_key, "sk-file");
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_load_from_override_directory() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "config.json", r#"{"api_key": "sk-dir"}"#);

        let config = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .load()
            .await
            .unwrap();

        assert_eq!(config.api_key, "sk-dir");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn test_flag_overrides_beat_file() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "promptgrid.json",
            r#"{"api_key": "sk-file", "model": "gpt-4", "base_url": "https://file.example.com/v1"}"#,
        );

        let config = CliConfigLoader::new()
            .with_config_override(path)
            .with_api_key_override("sk-flag".to_string())
            .with_base_url_override("https://flag.example.com/v1".to_string())
            .with_model_override("gpt-4o".to_string())
            .load()
            .await
            .unwrap();

        assert_eq!(config.api_key, "sk-flag");
        assert_eq!(config.base_url, "https://flag.example.com/v1");
        assert_eq!(config.model, "gpt-4o");
    }

    #[tokio::test]
    async fn test_api_key_env_indirection() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "promptgrid.json",
            r#"{"api_key": "env:PROMPTGRID_LOADER_TEST_KEY"}"#,
        );

        std::env::set_var("PROMPTGRID_LOADER_TEST_KEY", "sk-from-env");
        let config = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await
            .unwrap();
        std::env::remove_var("PROMPTGRID_LOADER_TEST_KEY");

        assert_eq!(config.api_key, "sk-from-env");
    }

    #[tokio::test]
    async fn test_missing_env_indirection_fails() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "promptgrid.json",
            r#"{"api_key": "env:PROMPTGRID_LOADER_UNSET_KEY"}"#,
        );

        let result = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await;

        let message = result.unwrap_err().to_string();
        assert!(message.contains("Environment variable not found"));
    }

    #[tokio::test]
    async fn test_missing_override_path_fails() {
        let dir = tempdir().unwrap();
        let result = CliConfigLoader::new()
            .with_config_override(dir.path().join("nope.json"))
            .load()
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_headers_carried_into_config() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "promptgrid.json",
            r#"{"api_key": "sk-file", "headers": {"x-org": "acme"}}"#,
        );

        let config = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await
            .unwrap();

        assert_eq!(config.headers.get("x-org"), Some(&"acme".to_string()));
    }

    #[tokio::test]
    async fn test_empty_api_key_fails_validation() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "promptgrid.json", r#"{"api_key": ""}"#);

        let result = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await;

        let message = result.unwrap_err().to_string();
        assert!(message.contains("validation failed"));
    }

    #[test]
    fn test_find_git_root_walks_up() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_git_root(&nested), Some(dir.path().to_path_buf()));
    }
}
