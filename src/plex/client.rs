use crate::config::PlexConfig;
use crate::errors::{PlexError, PlexResult};
use crate::plex::wire::{Envelope, Library, MetadataContainer, SectionContainer, Server};
use crate::plex::{calculate_next_backoff, is_retryable_status};
use crate::probe::CatalogService;
use crate::types::catalog::{CatalogNode, LibraryContent};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use std::thread::sleep;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Blocking Plex client covering plex.tv discovery and library listings
///
/// Every request is retried on transport failures and transient statuses
/// according to the configured backoff; the catalog walker never retries.
pub struct PlexClient {
    http: Client,
    config: PlexConfig,
    token: String,
    base_url: Option<String>,
    server: Option<Server>,
}

impl PlexClient {
    /// Create a client for the configured account
    ///
    /// A configured `base_url` is used directly; otherwise a server must be
    /// selected with [`PlexClient::use_server`] before listing libraries.
    pub fn new(config: PlexConfig) -> PlexResult<Self> {
        if config.token.trim().is_empty() {
            return Err(PlexError::MissingToken);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| PlexError::Http {
                endpoint: "client".to_string(),
                message: e.to_string(),
            })?;

        let base_url = config
            .base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string());

        Ok(Self {
            http,
            token: config.token.clone(),
            config,
            base_url,
            server: None,
        })
    }

    /// All media servers linked to the account
    pub fn servers(&self) -> PlexResult<Vec<Server>> {
        let url = format!(
            "{}/api/v2/resources?includeHttps=1",
            self.config.plex_tv_url.trim_end_matches('/')
        );
        let resources: Vec<Server> = self.get_json(&url, &self.config.token)?;

        let servers: Vec<Server> = resources
            .into_iter()
            .filter(Server::is_media_server)
            .collect();
        debug!("plex.tv lists {} media servers", servers.len());

        Ok(servers)
    }

    pub fn server_by_name(&self, name: &str) -> PlexResult<Server> {
        self.servers()?
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| PlexError::ServerNotFound {
                name: name.to_string(),
            })
    }

    /// Direct subsequent library requests at `server`
    pub fn use_server(&mut self, server: Server) -> PlexResult<()> {
        let connection = server
            .preferred_connection()
            .ok_or_else(|| PlexError::NoConnection {
                name: server.name.clone(),
            })?;

        self.base_url = Some(connection.uri.trim_end_matches('/').to_string());
        if let Some(token) = &server.access_token {
            self.token = token.clone();
        }

        info!("Using server \"{}\" at {}", server.name, connection.uri);
        self.server = Some(server);
        Ok(())
    }

    /// Name of the selected server, if one was chosen through discovery
    pub fn server_name(&self) -> Option<&str> {
        self.server.as_ref().map(|s| s.name.as_str())
    }

    pub fn libraries(&self) -> PlexResult<Vec<Library>> {
        let url = self.server_url("/library/sections")?;
        let envelope: Envelope<SectionContainer> = self.get_json(&url, &self.token)?;
        Ok(envelope.media_container.directory)
    }

    pub fn library_key_by_title(&self, title: &str) -> PlexResult<String> {
        self.libraries()?
            .into_iter()
            .find(|l| l.title == title)
            .map(|l| l.key)
            .ok_or_else(|| PlexError::LibraryNotFound {
                title: title.to_string(),
            })
    }

    fn server_url(&self, path: &str) -> PlexResult<String> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            PlexError::InvalidUrl("no server selected and no base_url configured".to_string())
        })?;
        Ok(format!("{}{}", base, path))
    }

    fn headers(&self, token: &str) -> PlexResult<HeaderMap> {
        let value = |s: &str| {
            HeaderValue::from_str(s).map_err(|e| PlexError::InvalidUrl(format!("header: {}", e)))
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("X-Plex-Token", value(token)?);
        headers.insert(
            "X-Plex-Client-Identifier",
            value(&self.config.client_identifier)?,
        );
        headers.insert("X-Plex-Product", value(&self.config.product)?);
        Ok(headers)
    }

    /// GET `url` and decode the JSON body, retrying transient failures
    fn get_json<T: DeserializeOwned>(&self, url: &str, token: &str) -> PlexResult<T> {
        let headers = self.headers(token)?;
        let max_attempts = self.config.max_retries.max(1);
        let mut attempts = 0;
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);

        loop {
            attempts += 1;

            let failure = match self.http.get(url).headers(headers.clone()).send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        if attempts > 1 {
                            debug!("GET {} succeeded after {} attempts", url, attempts);
                        }
                        return response.json::<T>().map_err(|e| PlexError::Decode {
                            endpoint: url.to_string(),
                            message: e.to_string(),
                        });
                    }

                    if !is_retryable_status(status.as_u16()) {
                        return Err(PlexError::Status {
                            endpoint: url.to_string(),
                            status: status.as_u16(),
                        });
                    }
                    format!("status {}", status.as_u16())
                }
                Err(e) => e.to_string(),
            };

            if attempts >= max_attempts {
                error!(
                    "GET {} failed after {} attempts: {}",
                    url, attempts, failure
                );
                return Err(PlexError::MaxRetriesExceeded {
                    endpoint: url.to_string(),
                    attempts,
                });
            }

            warn!(
                "GET {} attempt {} failed, retrying in {:?}: {}",
                url, attempts, backoff, failure
            );
            sleep(backoff);

            backoff = calculate_next_backoff(
                backoff,
                self.config.backoff_multiplier,
                self.config.max_backoff_seconds,
            );
        }
    }
}

impl CatalogService for PlexClient {
    fn list_library_content(&self, library_key: &str) -> PlexResult<LibraryContent> {
        let url = self.server_url(&format!("/library/sections/{}/all", library_key))?;
        let envelope: Envelope<MetadataContainer> = self.get_json(&url, &self.token)?;
        let container = envelope.media_container;

        Ok(LibraryContent {
            title: container.title().to_string(),
            nodes: container.into_nodes(),
        })
    }

    fn list_children(&self, item_key: &str) -> PlexResult<Vec<CatalogNode>> {
        let url = self.server_url(&format!("/library/metadata/{}/children", item_key))?;
        let envelope: Envelope<MetadataContainer> = self.get_json(&url, &self.token)?;
        Ok(envelope.media_container.into_nodes())
    }
}
