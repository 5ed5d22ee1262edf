use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Base name of the per-user configuration file (any supported extension)
pub const USER_CONFIG_NAME: &str = ".plex-tools";

/// Application configuration loaded from a config file, environment variables
/// and command-line overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub plex: PlexConfig,
    pub output: OutputConfig,
}

/// Plex account, server selection and HTTP client behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlexConfig {
    /// plex.tv account token
    pub token: String,
    /// Server name; prompts interactively when unset
    #[serde(default)]
    pub server: Option<String>,
    /// Library section key; prompts interactively when unset
    #[serde(default)]
    pub library: Option<String>,
    /// Direct server URL, bypassing plex.tv discovery
    #[serde(default)]
    pub base_url: Option<String>,
    pub plex_tv_url: String,
    pub client_identifier: String,
    pub product: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl PlexConfig {
    /// Treat blank server, library and base URL values as unset
    pub fn clear_blank_selections(&mut self) {
        self.server = non_blank(self.server.take());
        self.library = non_blank(self.library.take());
        self.base_url = non_blank(self.base_url.take());
    }
}

/// `None` for empty or whitespace-only values
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl Default for PlexConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            server: None,
            library: None,
            base_url: None,
            plex_tv_url: "https://plex.tv".to_string(),
            client_identifier: "plex-tools".to_string(),
            product: "plex-tools".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            initial_backoff_ms: 250,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 10,
        }
    }
}

/// Report rendering and session limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// ascii, html or json
    pub format: String,
    /// Upper bound for a whole probe session, prompts included
    pub session_timeout_seconds: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "ascii".to_string(),
            session_timeout_seconds: 3600,
        }
    }
}

impl AppConfig {
    /// Load configuration from a config file and environment variables
    ///
    /// With `path` set, that file must exist. Otherwise `~/.plex-tools.{yaml,toml,json}`
    /// is read when present. `PLEX_TOOLS_<SECTION>__<KEY>` variables override file
    /// values, and `PLEX_TOKEN`, `PLEX_SERVER`, `PLEX_LIBRARY` and `PLEX_BASE_URL`
    /// override those.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let plex = PlexConfig::default();
        let output = OutputConfig::default();

        let mut builder = Config::builder()
            .set_default("plex.token", plex.token)?
            .set_default("plex.plex_tv_url", plex.plex_tv_url)?
            .set_default("plex.client_identifier", plex.client_identifier)?
            .set_default("plex.product", plex.product)?
            .set_default("plex.timeout_seconds", plex.timeout_seconds)?
            .set_default("plex.max_retries", plex.max_retries as i64)?
            .set_default("plex.initial_backoff_ms", plex.initial_backoff_ms)?
            .set_default("plex.backoff_multiplier", plex.backoff_multiplier)?
            .set_default("plex.max_backoff_seconds", plex.max_backoff_seconds)?
            .set_default("output.format", output.format)?
            .set_default(
                "output.session_timeout_seconds",
                output.session_timeout_seconds,
            )?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => match default_config_path() {
                Some(default_path) => builder.add_source(
                    File::with_name(&default_path.to_string_lossy()).required(false),
                ),
                None => builder,
            },
        };

        let config = builder
            .add_source(Environment::with_prefix("PLEX_TOOLS").separator("__"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(token) = env::var("PLEX_TOKEN") {
            app_config.plex.token = token;
        }
        if let Ok(server) = env::var("PLEX_SERVER") {
            app_config.plex.server = Some(server);
        }
        if let Ok(library) = env::var("PLEX_LIBRARY") {
            app_config.plex.library = Some(library);
        }
        if let Ok(base_url) = env::var("PLEX_BASE_URL") {
            app_config.plex.base_url = Some(base_url);
        }
        app_config.plex.clear_blank_selections();

        Ok(app_config)
    }
}

/// `~/.plex-tools`, without extension
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_CONFIG_NAME))
}
