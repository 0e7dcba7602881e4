//! Fixture discovery and the drop / create / load cycle run per fixture directory.
//!
//! A fixture tree looks like:
//!
//! ```text
//! data/es_data_loader/
//!     products/
//!         mapping.json
//!         doc_1.json
//!         doc_2.json
//!     empty/            <- no mapping.json, skipped
//! ```

pub mod document;
pub mod loader;

pub use document::{ document_id, is_document_file, MAPPING_FILE };
pub use loader::load_documents;

use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };
use log::{ info, warn, error };
use walkdir::WalkDir;

use crate::client::IndexClient;
use crate::error::{ FixtureError, Result };

/// What a completed run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub indices_loaded: usize,
    pub directories_skipped: usize,
    pub documents_inserted: usize,
}

/// Every directory below `root`, at any depth, in file-name order. `root` itself is excluded.
pub fn discover_fixture_dirs(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| {
            match entry {
                Ok(e) if e.file_type().is_dir() => Some(Ok(e.into_path())),
                Ok(_) => None,
                Err(e) => Some(Err(FixtureError::from(e))),
            }
        })
}

/// Rebuilds one index per fixture directory under `root`.
///
/// Directories without a `mapping.json` are skipped. Any other failure stops the
/// whole run; indices already loaded are left as they are.
pub async fn process_fixtures(client: &dyn IndexClient, root: &Path) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();

    for dir in discover_fixture_dirs(root) {
        let dir = dir?;
        let index_name = match dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => {
                continue;
            }
        };

        let mapping_path = dir.join(MAPPING_FILE);
        let mapping = match fs::read(&mapping_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Skipping {}: mapping file {} not found",
                    index_name,
                    mapping_path.display()
                );
                summary.directories_skipped += 1;
                continue;
            }
            Err(e) => {
                return Err(FixtureError::io(&mapping_path, e));
            }
        };

        summary.documents_inserted += load_fixture(client, &index_name, &dir, mapping).await?;
        summary.indices_loaded += 1;
    }

    info!(
        "Loaded {} indices ({} documents), skipped {} directories",
        summary.indices_loaded,
        summary.documents_inserted,
        summary.directories_skipped
    );
    Ok(summary)
}

async fn load_fixture(
    client: &dyn IndexClient,
    index_name: &str,
    dir: &Path,
    mapping: Vec<u8>
) -> Result<usize> {
    println!("Processing index: {}", index_name);

    if let Err(e) = client.drop_index(index_name).await {
        error!("Failed to drop index {}: {}", index_name, e);
        return Err(e);
    }
    println!("Index {} dropped successfully", index_name);

    if let Err(e) = client.create_index(index_name, mapping).await {
        error!("Failed to setup mapping for index {}: {}", index_name, e);
        return Err(e);
    }
    println!("ES mapping for index {} set up successfully", index_name);

    let inserted = match load_documents(client, index_name, dir).await {
        Ok(n) => n,
        Err(e) => {
            error!("Failed to load data for index {}: {}", index_name, e);
            return Err(e);
        }
    };
    println!("Data for index {} imported successfully", index_name);

    Ok(inserted)
}
