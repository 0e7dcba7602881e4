use std::path::Path;
use std::process;
use log::error;

use es_fixtures::config::DEFAULT_FIXTURE_ROOT;
use es_fixtures::{ create_index_client, process_fixtures, ClusterConfig };

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ClusterConfig::from_env();
    let root = Path::new(DEFAULT_FIXTURE_ROOT);

    let result = match create_index_client(&config) {
        Ok(client) => process_fixtures(client.as_ref(), root).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => println!("All indices processed successfully"),
        Err(e) => {
            error!("Error while processing data directories: {}", e);
            process::exit(1);
        }
    }
}
