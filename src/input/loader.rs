// src/input/loader.rs — Participant and category lists from flags or files
//
// Inline lists are comma separated. Files hold one entry per line; blank
// lines and `#` comments are skipped. A participant entry is `Name`,
// `Name <address>`, or (files only) `Name,address`.

use std::path::Path;

use crate::core::types::{Category, Participant};
use crate::infra::errors::SantaError;

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parse `Name` or `Name <address>`.
pub fn parse_participant(entry: &str) -> Participant {
    let entry = entry.trim();
    if let Some(stripped) = entry.strip_suffix('>') {
        if let Some((name, address)) = stripped.rsplit_once('<') {
            let address = address.trim();
            let participant = Participant::new(name.trim());
            return if address.is_empty() {
                participant
            } else {
                participant.with_address(address)
            };
        }
    }
    Participant::new(entry)
}

pub fn participants_from_list(raw: &str) -> Vec<Participant> {
    split_list(raw).iter().map(|e| parse_participant(e)).collect()
}

pub fn categories_from_list(raw: &str) -> Vec<Category> {
    split_list(raw).into_iter().map(Category::Named).collect()
}

fn content_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

pub fn participants_from_lines(content: &str) -> Vec<Participant> {
    content_lines(content)
        .map(|line| match line.split_once(',') {
            Some((name, address)) if !address.trim().is_empty() => {
                Participant::new(name.trim()).with_address(address.trim())
            }
            Some((name, _)) => Participant::new(name.trim()),
            None => parse_participant(line),
        })
        .collect()
}

pub fn categories_from_lines(content: &str) -> Vec<Category> {
    content_lines(content)
        .map(|line| Category::named(line))
        .collect()
}

pub fn load_participants(path: &Path) -> Result<Vec<Participant>, SantaError> {
    let content = std::fs::read_to_string(path)?;
    let participants = participants_from_lines(&content);
    tracing::debug!(path = %path.display(), count = participants.len(), "Loaded participants");
    Ok(participants)
}

pub fn load_categories(path: &Path) -> Result<Vec<Category>, SantaError> {
    let content = std::fs::read_to_string(path)?;
    let categories = categories_from_lines(&content);
    tracing::debug!(path = %path.display(), count = categories.len(), "Loaded categories");
    Ok(categories)
}
