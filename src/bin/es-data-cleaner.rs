use std::process;
use log::error;

use es_fixtures::{ cleaner, create_index_client, ClusterConfig };

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ClusterConfig::from_env();

    println!("Cleaning all test data...");

    let result = match create_index_client(&config) {
        Ok(client) => cleaner::reset_cluster(client.as_ref()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("Failed to clean Elasticsearch data: {}", e);
        process::exit(1);
    }

    println!("All test data cleaned successfully");
}
