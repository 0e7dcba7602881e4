use std::fs;
use std::path::Path;
use log::{ debug, warn };

use super::document::{ document_id, is_document_file };
use crate::client::IndexClient;
use crate::error::{ FixtureError, Result };

/// Inserts every document file in `data_dir` (non-recursive) into `index`.
///
/// Files go in file-name order, one request each. The first failure aborts the
/// rest of the directory. Returns how many documents were inserted.
pub async fn load_documents(
    client: &dyn IndexClient,
    index: &str,
    data_dir: &Path
) -> Result<usize> {
    let mut entries = fs::read_dir(data_dir)
        .map_err(|e| FixtureError::io(data_dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| FixtureError::io(data_dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut inserted = 0;
    for entry in entries {
        let path = entry.path();
        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Skipping non UTF-8 file name {:?} in {}", raw, data_dir.display());
                continue;
            }
        };

        if !is_document_file(&file_name) {
            continue;
        }
        if path.is_dir() {
            debug!("Skipping directory {}", path.display());
            continue;
        }

        let id = document_id(&file_name)?;
        let body = fs::read(&path).map_err(|e| FixtureError::io(&path, e))?;

        client.insert_document(index, &id, body).await?;
        inserted += 1;
        println!("Indexed document {} successfully", file_name);
    }

    Ok(inserted)
}
