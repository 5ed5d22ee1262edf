//! Catalog traversal
//!
//! Walks a library listing depth-first, fetching season and show children on
//! demand from a [`CatalogService`], and flattens every playable item into
//! [`MediaRecord`]s in encounter order.
//!
//! ## Failure policy
//!
//! Any fetch failure or unsupported node aborts the traversal. [`walk`] hands
//! back the records gathered before the failing node together with the error
//! ([`PartialProbe`]); [`probe`] discards them and reports only the error.

pub mod normalise;

use crate::errors::{PlexResult, ProbeError};
use crate::types::catalog::{CatalogNode, LibraryContent};
use crate::types::media::MediaRecord;
use serde::Serialize;
use tracing::{debug, info};

/// Read-only catalog source consumed by the walker
///
/// Calls block until the listing is available; retries and timeouts belong
/// to the implementation.
pub trait CatalogService {
    /// List the top-level content of a library section
    fn list_library_content(&self, library_key: &str) -> PlexResult<LibraryContent>;

    /// List the children of a show (seasons) or season (episodes)
    fn list_children(&self, item_key: &str) -> PlexResult<Vec<CatalogNode>>;
}

impl<S: CatalogService + ?Sized> CatalogService for &S {
    fn list_library_content(&self, library_key: &str) -> PlexResult<LibraryContent> {
        (**self).list_library_content(library_key)
    }

    fn list_children(&self, item_key: &str) -> PlexResult<Vec<CatalogNode>> {
        (**self).list_children(item_key)
    }
}

/// Flat result of one library traversal
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProbeResult {
    pub library: String,
    pub server: Option<String>,
    pub records: Vec<MediaRecord>,
}

impl ProbeResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Records gathered before a traversal failed, and the failure
#[derive(Debug)]
pub struct PartialProbe {
    pub records: Vec<MediaRecord>,
    pub error: ProbeError,
}

impl PartialProbe {
    fn new(records: Vec<MediaRecord>, error: impl Into<ProbeError>) -> Self {
        Self {
            records,
            error: error.into(),
        }
    }
}

/// Probe a library section, discarding partial data on failure
pub fn probe<S: CatalogService>(service: &S, library_key: &str) -> Result<ProbeResult, ProbeError> {
    let content = service.list_library_content(library_key)?;
    debug!(
        "Library {} ({}) lists {} nodes",
        library_key,
        content.title,
        content.nodes.len()
    );

    let records = walk(service, &content.nodes).map_err(|partial| partial.error)?;

    info!(
        "Probed library \"{}\": {} media records",
        content.title,
        records.len()
    );

    Ok(ProbeResult {
        library: content.title,
        server: None,
        records,
    })
}

/// Flatten `nodes` depth-first, descending into seasons and shows
pub fn walk<S: CatalogService>(
    service: &S,
    nodes: &[CatalogNode],
) -> Result<Vec<MediaRecord>, PartialProbe> {
    let mut records = Vec::new();

    for node in nodes {
        match node {
            CatalogNode::Movie(item) | CatalogNode::Episode(item) => {
                records.extend(normalise::records_from_item(item));
            }
            CatalogNode::Season { key, title } | CatalogNode::Show { key, title } => {
                let children = match service.list_children(key) {
                    Ok(children) => children,
                    Err(e) => return Err(PartialProbe::new(records, e)),
                };
                debug!(
                    "{} \"{}\" ({}) has {} children",
                    node.kind(),
                    title,
                    key,
                    children.len()
                );

                match walk(service, &children) {
                    Ok(sub) => records.extend(sub),
                    Err(mut partial) => {
                        records.append(&mut partial.records);
                        return Err(PartialProbe::new(records, partial.error));
                    }
                }
            }
            CatalogNode::Unsupported { kind, key, .. } => {
                return Err(PartialProbe::new(
                    records,
                    ProbeError::UnsupportedKind {
                        kind: kind.clone(),
                        key: key.clone(),
                    },
                ));
            }
        }
    }

    Ok(records)
}
