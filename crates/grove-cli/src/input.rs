//! Reading contacts, tags and the reference time.

use crate::error::{CliError, Result};
use chrono::{DateTime, Utc};
use grove_domain::{parse_timestamp, Contact, ContactId};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// The path names stdin.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a file, or stdin when the path is `-`.
fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fs::read_to_string(path)?)
}

/// Load a JSON array of contacts.
///
/// A `null` document or empty input is treated as no contacts.
pub fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    parse_contacts(&read_source(path)?)
}

/// Parse a JSON array of contacts.
pub fn parse_contacts(json: &str) -> Result<Vec<Contact>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let contacts: Option<Vec<Contact>> = serde_json::from_str(json)?;
    let contacts = contacts.unwrap_or_default();
    tracing::debug!("Loaded {} contacts", contacts.len());
    Ok(contacts)
}

/// Load a JSON object mapping contact id to its tags.
pub fn load_tags(path: &Path) -> Result<HashMap<ContactId, Vec<String>>> {
    let json = read_source(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Resolve the reference time, falling back to the current time.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(raw) => parse_timestamp(raw)
            .ok_or_else(|| CliError::InvalidInput(format!("Unrecognized time: {}", raw))),
        None => Ok(Utc::now()),
    }
}
