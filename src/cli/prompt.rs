//! Interactive selection of servers and libraries
//!
//! Prompts draw on stderr so stdout carries only the report.

use crate::errors::{AppError, AppResult};
use crate::plex::{Library, Server};
use dialoguer::{console::Term, Select};
use tracing::info;

/// Pick one of `labels`, skipping the prompt when there is only one
fn choose(prompt: &str, what: &str, labels: &[String]) -> AppResult<usize> {
    match labels.len() {
        0 => Err(AppError::InvalidData(format!("no {} available", what))),
        1 => {
            info!("Only one {} available, using \"{}\"", what, labels[0]);
            Ok(0)
        }
        _ => Ok(Select::new()
            .with_prompt(prompt)
            .items(labels)
            .default(0)
            .interact_on(&Term::stderr())?),
    }
}

pub fn select_server(servers: Vec<Server>) -> AppResult<Server> {
    let labels: Vec<String> = servers
        .iter()
        .map(|s| {
            if s.product.is_empty() {
                s.name.clone()
            } else {
                format!("{} ({})", s.name, s.product)
            }
        })
        .collect();

    let index = choose("Select a server", "server", &labels)?;
    servers
        .into_iter()
        .nth(index)
        .ok_or_else(|| AppError::Prompt(format!("server selection {} out of range", index)))
}

pub fn select_library(libraries: &[Library]) -> AppResult<&Library> {
    let labels: Vec<String> = libraries
        .iter()
        .map(|l| format!("{} [{}]", l.title, l.kind))
        .collect();

    let index = choose("Select a library", "library", &labels)?;
    libraries
        .get(index)
        .ok_or_else(|| AppError::Prompt(format!("library selection {} out of range", index)))
}
