use log::{ info, error };

use crate::client::IndexClient;
use crate::error::Result;

/// Deletes every index on the cluster. Anything but a 200 is an error.
pub async fn reset_cluster(client: &dyn IndexClient) -> Result<()> {
    info!("Deleting all indices");
    if let Err(e) = client.delete_all_indices().await {
        error!("Failed to delete all indices: {}", e);
        return Err(e);
    }
    info!("All indices deleted");
    Ok(())
}
