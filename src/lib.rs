pub mod cleaner;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub use client::{ IndexClient, create_index_client };
pub use config::ClusterConfig;
pub use error::{ FixtureError, Result };
pub use fixtures::{ process_fixtures, LoadSummary };
