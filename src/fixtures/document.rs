use crate::error::{ FixtureError, Result };

pub const MAPPING_FILE: &str = "mapping.json";

const DOC_PREFIX: &str = "doc_";
const JSON_SUFFIX: &str = ".json";

/// True for files the loader should insert: anything ending in `.json` except the mapping.
pub fn is_document_file(file_name: &str) -> bool {
    file_name.ends_with(JSON_SUFFIX) && file_name != MAPPING_FILE
}

/// Derives the document id from a fixture filename, `doc_42.json` -> `42`.
///
/// The prefix and suffix are each stripped only when present. An empty result is rejected.
pub fn document_id(file_name: &str) -> Result<String> {
    let id = file_name.strip_prefix(DOC_PREFIX).unwrap_or(file_name);
    let id = id.strip_suffix(JSON_SUFFIX).unwrap_or(id);

    if id.is_empty() {
        return Err(
            FixtureError::invalid_input(format!("failed to get doc id from file {}", file_name))
        );
    }

    Ok(id.to_string())
}
