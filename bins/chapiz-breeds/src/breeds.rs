//! Breed list loading

use chapiz_core::{Error, ResultExt};
use chapiz_search::Candidate;
use std::collections::HashSet;
use std::path::Path;

/// Cat breeds offered by the pet profile form
const BUILTIN_CAT_BREEDS: &str = include_str!("../data/cat_breeds.json");

/// The built-in cat breed list
pub fn builtin() -> chapiz_core::Result<Vec<Candidate>> {
    parse(BUILTIN_CAT_BREEDS).context("Loading built-in cat breeds")
}

/// Load a breed list from a JSON file
pub fn load_file(path: &Path) -> chapiz_core::Result<Vec<Candidate>> {
    let context = format!("Loading breeds from {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::from(e),
        })
        .context(context.clone())?;
    parse(&content).context(context)
}

/// Parse a JSON array of candidates, rejecting duplicate IDs
fn parse(content: &str) -> chapiz_core::Result<Vec<Candidate>> {
    let breeds: Vec<Candidate> = serde_json::from_str(content)
        .map_err(|e| Error::invalid_candidates(format!("Invalid breed list: {e}")).with_source(e))?;

    let mut seen = HashSet::with_capacity(breeds.len());
    if let Some(dup) = breeds.iter().find(|b| !seen.insert(b.id.as_str())) {
        return Err(Error::invalid_candidates(format!("Duplicate breed ID: {}", dup.id)));
    }

    Ok(breeds)
}
