//! Media deletion command.

use console::style;

use crate::collection::{HttpCollection, MediaCollection};
use crate::config::Settings;

/// Delete one stored record by identifier.
pub async fn cmd_delete(settings: &Settings, id: &str) -> anyhow::Result<()> {
    let collection = HttpCollection::from_settings(settings)?;

    match collection.delete(id).await {
        Ok(()) => {
            println!("{} Deleted {}", style("✓").green(), id);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Failed to delete media: {}", style("✗").red(), e);
            Err(e.into())
        }
    }
}
