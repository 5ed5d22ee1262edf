pub mod probe;
pub mod statistics;

use crate::analysis::OutputFormat;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::plex::{execute_with_timeout, PlexClient};
use crate::probe::{self as walker, ProbeResult};
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info};

// ===== Shared Arguments =====

/// Connection and output options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Config file (default: ~/.plex-tools.{yaml,toml,json})
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Output format: ascii, html or json (overrides config)
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Library key or title; prompts when unset (overrides config)
    #[arg(short = 'l', long)]
    pub library: Option<String>,

    /// Server name; prompts when unset (overrides config)
    #[arg(short = 's', long)]
    pub server: Option<String>,

    /// plex.tv account token (overrides config)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Server URL, skipping plex.tv discovery (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl ConnectionArgs {
    /// Load configuration and apply command-line overrides
    pub fn resolve(&self) -> AppResult<(AppConfig, OutputFormat)> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        if let Some(token) = &self.token {
            config.plex.token = token.clone();
        }
        if let Some(server) = &self.server {
            config.plex.server = Some(server.clone());
        }
        if let Some(library) = &self.library {
            config.plex.library = Some(library.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.plex.base_url = Some(base_url.clone());
        }
        config.plex.clear_blank_selections();
        if let Some(format) = &self.format {
            config.output.format = format.clone();
        }

        let format = config.output.format.parse::<OutputFormat>()?;
        debug!("Output format: {}", format);

        Ok((config, format))
    }
}

// ===== Helper Functions =====

/// Print a report or write it to `path`
pub fn emit(output: &str, path: Option<&PathBuf>) -> AppResult<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, output)?;
            eprintln!("Report written to: {}", path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}

/// Connect, select server and library, and probe, all on the blocking pool
/// under the configured session timeout
pub async fn probe_session(config: AppConfig) -> AppResult<ProbeResult> {
    let timeout_seconds = config.output.session_timeout_seconds;

    match execute_with_timeout(timeout_seconds, move || run_session(config)).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(AppError::Task(join_error.to_string())),
        Err(_) => Err(AppError::Timeout {
            timeout_seconds,
            operation: "probe session".to_string(),
        }),
    }
}

/// Numeric library values are section keys; anything else is a title
fn is_section_key(library: &str) -> bool {
    !library.is_empty() && library.chars().all(|c| c.is_ascii_digit())
}

fn run_session(config: AppConfig) -> AppResult<ProbeResult> {
    let plex = config.plex;
    let wanted_server = plex.server.clone();
    let wanted_library = plex.library.clone();
    let direct = plex.base_url.is_some();

    let mut client = PlexClient::new(plex)?;

    if !direct {
        let server = match &wanted_server {
            Some(name) => client.server_by_name(name)?,
            None => super::prompt::select_server(client.servers()?)?,
        };
        client.use_server(server)?;
    }

    let library_key = match wanted_library {
        Some(library) if is_section_key(&library) => library,
        Some(title) => client.library_key_by_title(&title)?,
        None => {
            let libraries = client.libraries()?;
            super::prompt::select_library(&libraries)?.key.clone()
        }
    };

    info!("Probing library {}", library_key);
    let mut result = walker::probe(&client, &library_key)?;
    result.server = client
        .server_name()
        .map(str::to_string)
        .or(wanted_server);

    Ok(result)
}
